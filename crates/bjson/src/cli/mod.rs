//! `bjson` command-line front end.
//!
//! The binary in `src/bin/bjson.rs` only parses arguments and reports
//! errors; reading, editing and writing documents happens here so it can be
//! tested without a process.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use bjson_path::parse_json_pointer_relaxed;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::codec;
use crate::element::Element;
use crate::error::Result;
use crate::fs;

#[derive(Debug, Parser)]
#[command(name = "bjson", about = "Edit schemaless JSON documents by path")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Read the document from this file instead of stdin.
    #[arg(long, short, global = true)]
    pub input: Option<PathBuf>,

    /// Write the result to this file instead of stdout.
    #[arg(long, short, global = true)]
    pub output: Option<PathBuf>,

    /// Indent output with tabs.
    #[arg(
        long,
        env = "BJSON_PRETTY",
        global = true,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub pretty: bool,
}

/// Paths are JSON Pointers; a missing leading `/` is tolerated and the
/// empty pointer is the root.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the value at a path.
    Get {
        #[arg(long, short, default_value = "")]
        path: String,
    },
    /// Insert a value under a missing key, or append it to an array.
    Add {
        #[arg(long, short, default_value = "")]
        path: String,
        /// JSON text of the value.
        value: String,
    },
    /// Overwrite an existing value.
    Set {
        #[arg(long, short, default_value = "")]
        path: String,
        /// JSON text of the value.
        value: String,
    },
    /// Delete a key or array element.
    Remove {
        #[arg(long, short)]
        path: String,
    },
    /// Replace a value with a string of its JSON text.
    Escape {
        #[arg(long, short, default_value = "")]
        path: String,
    },
    /// Parse a string holding JSON text in place.
    Unescape {
        #[arg(long, short, default_value = "")]
        path: String,
    },
    /// Reformat the document.
    Fmt,
}

/// Install a stderr log subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Run one parsed invocation against real files or stdio.
pub fn run(cli: Cli) -> Result<()> {
    let input = match &cli.input {
        Some(file) => fs::read_bytes(file)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    let doc = Element::from_slice(&input)?;
    let text = execute(&cli.command, doc, cli.pretty)?;

    match &cli.output {
        Some(file) => fs::write_text(file, &text)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Apply `command` to `doc` and render the output text.
///
/// `get` renders the selected value; every other command renders the whole
/// resulting document.
pub fn execute(command: &Command, mut doc: Element, pretty: bool) -> Result<String> {
    debug!(?command, "executing");
    match command {
        Command::Get { path } => return with_segments(path, |p| doc.marshal(pretty, p)),
        Command::Add { path, value } => {
            let value: Value = codec::decode_str(value)?;
            with_segments(path, |p| doc.add(&value, p))?;
        }
        Command::Set { path, value } => {
            let value: Value = codec::decode_str(value)?;
            with_segments(path, |p| doc.set(&value, p))?;
        }
        Command::Remove { path } => with_segments(path, |p| doc.remove(p))?,
        Command::Escape { path } => with_segments(path, |p| doc.escape(p))?,
        Command::Unescape { path } => with_segments(path, |p| doc.unescape(p))?,
        Command::Fmt => {}
    }
    doc.marshal(pretty, &[])
}

fn with_segments<R>(pointer: &str, f: impl FnOnce(&[&str]) -> R) -> R {
    let path = parse_json_pointer_relaxed(pointer);
    let segments: Vec<&str> = path.iter().map(String::as_str).collect();
    f(&segments)
}
