//! End-to-end document scenarios.

use bjson::codec::MAX_NESTING;
use bjson::{marshal_write, unmarshal_read, Element, Error};
use serde::{Deserialize, Serialize};
use serde_json::json;

fn doc(text: &str) -> Element {
    text.parse().unwrap()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Score {
    name: String,
    score: f64,
}

fn scores() -> Vec<Score> {
    [("t1", 0.95), ("t2", 0.52), ("t3", 0.22)]
        .into_iter()
        .map(|(name, score)| Score { name: name.into(), score })
        .collect()
}

#[test]
fn add_key_to_object() {
    let mut tree = doc(r#"{"v1":"str","v2":0,"v3":[],"v4":{}}"#);
    tree.add("test", &["z"]).unwrap();
    assert_eq!(tree.to_string(), r#"{"v1":"str","v2":0,"v3":[],"v4":{},"z":"test"}"#);
}

#[test]
fn add_appends_to_existing_array() {
    let mut tree = doc(r#"{"k":[1,2]}"#);
    tree.add(&3, &["k"]).unwrap();
    assert_eq!(tree.to_string(), r#"{"k":[1,2,3]}"#);

    let mut tree = doc(r#"{"k":"x"}"#);
    assert!(matches!(tree.add(&3, &["k"]), Err(Error::AlreadyExists(_))));
}

#[test]
fn remove_nested_key() {
    let mut tree = doc(r#"{"a":{"b":{"c":"value"}}}"#);
    tree.remove(&["a", "b", "c"]).unwrap();
    assert_eq!(tree.to_string(), r#"{"a":{"b":{}}}"#);
}

#[test]
fn remove_shifts_array() {
    let mut tree = doc(r#"{"d":["f",123,456]}"#);
    tree.remove(&["d", "1"]).unwrap();
    assert_eq!(tree.to_string(), r#"{"d":["f",456]}"#);
}

#[test]
fn remove_out_of_range_leaves_tree() {
    let mut tree = doc(r#"["str",0,[],{}]"#);
    assert!(matches!(tree.remove(&["4"]), Err(Error::InvalidIndex(_))));
    assert_eq!(tree.to_string(), r#"["str",0,[],{}]"#);
}

#[test]
fn failed_add_is_byte_identical() {
    let mut tree = doc(r#"{"v1":"str","v4":{"z":"test"}}"#);
    let before = tree.to_string();
    assert!(matches!(tree.add("x", &["v4", "z"]), Err(Error::AlreadyExists(_))));
    assert_eq!(tree.to_string(), before);
}

#[test]
fn escape_then_unescape() {
    let mut tree = doc(r#"{"a":{"b":"value"}}"#);
    tree.escape(&["a"]).unwrap();
    assert_eq!(tree.to_string(), r#"{"a":"{\"b\":\"value\"}"}"#);
    tree.unescape(&["a"]).unwrap();
    assert_eq!(tree.to_string(), r#"{"a":{"b":"value"}}"#);
}

#[test]
fn escape_cases() {
    let cases: &[(&str, &[&str], &str)] = &[
        (r#""test""#, &[], r#""\"test\"""#),
        (r#"{"arr":[1,2,3]}"#, &["arr"], r#"{"arr":"[1,2,3]"}"#),
        (r#"{"a":{"b":{"c":"value"}}}"#, &["a", "b"], r#"{"a":{"b":"{\"c\":\"value\"}"}}"#),
        (r#"{"arr":[[1,2,3],[4,5,6]]}"#, &["arr", "0"], r#"{"arr":["[1,2,3]",[4,5,6]]}"#),
        (
            r#"{"nested":{"obj":{"key":true},"arr":[1,2,3],"str":"value"}}"#,
            &["nested"],
            r#"{"nested":"{\"arr\":[1,2,3],\"obj\":{\"key\":true},\"str\":\"value\"}"}"#,
        ),
        (r#"{"bool":true}"#, &["bool"], r#"{"bool":"true"}"#),
        (r#""""#, &[], r#""""#),
    ];
    for (input, path, want) in cases {
        let mut tree = doc(input);
        tree.escape(path).unwrap();
        assert_eq!(tree.to_string(), *want, "escape {input} at {path:?}");
    }

    let mut tree = doc(r#"{"a":"value"}"#);
    assert!(matches!(tree.escape(&["b"]), Err(Error::NotFound(_))));
}

#[test]
fn unescape_cases() {
    let cases: &[(&str, &[&str], &str)] = &[
        (r#""{\"arr\":[1,2,3]}""#, &[], r#"{"arr":[1,2,3]}"#),
        (r#"{"arr":"[1,2,3]"}"#, &["arr"], r#"{"arr":[1,2,3]}"#),
        (r#"{"bool":"true"}"#, &["bool"], r#"{"bool":true}"#),
        (r#"{"s":"\"quoted\""}"#, &["s"], r#"{"s":"quoted"}"#),
        (r#""""#, &[], r#""""#),
    ];
    for (input, path, want) in cases {
        let mut tree = doc(input);
        tree.unescape(path).unwrap();
        assert_eq!(tree.to_string(), *want, "unescape {input} at {path:?}");
    }

    let mut tree = doc(r#""test""#);
    assert!(matches!(tree.unescape(&[]), Err(Error::SerializationFailure(_))));
    let mut tree = doc(r#"{"n":12}"#);
    assert!(matches!(tree.unescape(&["n"]), Err(Error::TypeMismatch { .. })));
}

#[test]
fn construct_from_typed_data() {
    let tree = Element::new(&scores()[0]).unwrap();
    assert_eq!(tree.to_string(), r#"{"name":"t1","score":0.95}"#);

    let tree = Element::new(&scores()).unwrap();
    assert_eq!(
        tree.to_string(),
        r#"[{"name":"t1","score":0.95},{"name":"t2","score":0.52},{"name":"t3","score":0.22}]"#
    );

    let keyed: std::collections::BTreeMap<&str, Score> = ["a", "b", "c"].into_iter().zip(scores()).collect();
    let tree = Element::new(&keyed).unwrap();
    assert_eq!(
        tree.to_string(),
        r#"{"a":{"name":"t1","score":0.95},"b":{"name":"t2","score":0.52},"c":{"name":"t3","score":0.22}}"#
    );
}

#[test]
fn construct_from_text() {
    let cases = [
        (r#"{"a":"str","b":123,"c":true,"d":[],"e":{}}"#, r#"{"a":"str","b":123,"c":true,"d":[],"e":{}}"#),
        (r#""""#, r#""""#),
        ("{}", "{}"),
        ("[]", "[]"),
        ("true", "true"),
        ("13.5", "13.5"),
        (r#""{\"arr\":[1,2,3]}""#, r#""{\"arr\":[1,2,3]}""#),
    ];
    for (input, want) in cases {
        assert_eq!(doc(input).to_string(), want);
        assert_eq!(Element::from_slice(input.as_bytes()).unwrap().to_string(), want);
    }
    assert!(matches!("{\"a\":".parse::<Element>(), Err(Error::SerializationFailure(_))));
}

#[test]
fn unmarshal_subtree() {
    let tree = Element::new(&json!({"list": scores()})).unwrap();
    let back: Vec<Score> = tree.unmarshal(&["list"]).unwrap();
    assert_eq!(back, scores());
    let one: Score = tree.unmarshal(&["list", "2"]).unwrap();
    assert_eq!(one.name, "t3");
}

#[test]
fn file_helpers_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("scores.json");

    marshal_write(&file, &scores(), true).unwrap();
    let text = std::fs::read_to_string(&file).unwrap();
    assert!(text.starts_with("[\n\t{\n\t\t\"name\": \"t1\","));

    let back: Vec<Score> = unmarshal_read(&file).unwrap();
    assert_eq!(back, scores());

    let mut tree = Element::from_file(&file).unwrap();
    tree.add(&Score { name: "t4".into(), score: 0.1 }, &[]).unwrap();
    tree.marshal_write(&file, false, &[]).unwrap();
    assert_eq!(unmarshal_read::<Vec<Score>>(&file).unwrap().len(), 4);
}

#[test]
fn copy_survives_mutation() {
    let mut tree = doc(r#"{"a":{"b":[1,2]},"c":"x"}"#);
    let copy = tree.copy().unwrap();

    tree.add(&3, &["a", "b"]).unwrap();
    tree.set(&json!({}), &["c"]).unwrap();
    tree.escape(&["a"]).unwrap();

    assert_eq!(copy.to_string(), r#"{"a":{"b":[1,2]},"c":"x"}"#);
}

#[test]
fn deep_chain_stays_within_nesting_limit() {
    let mut tree = doc("{}");
    let mut path: Vec<&str> = Vec::new();
    // Each add nests one more object; the chain stops at the decode limit.
    let mut accepted = 0;
    loop {
        path.push("k");
        match tree.add(&json!({}), &path) {
            Ok(()) => accepted += 1,
            Err(Error::InvalidOperation { .. }) => break,
            Err(other) => panic!("unexpected error: {other}"),
        }
        assert!(accepted < 200, "nesting was never limited");
    }
    assert_eq!(accepted + 1, MAX_NESTING);

    let text = tree.to_string();
    assert_eq!(tree.copy().unwrap(), tree);
    assert_eq!(tree.get(&[]).unwrap(), tree);
    assert_eq!(text.parse::<Element>().unwrap(), tree);

    tree.escape(&["k"]).unwrap();
    tree.unescape(&["k"]).unwrap();
    assert_eq!(tree.to_string(), text);

    path.pop();
    assert!(matches!(tree.set(&json!([[]]), &path), Err(Error::InvalidOperation { .. })));
    assert_eq!(tree.to_string(), text);
}
