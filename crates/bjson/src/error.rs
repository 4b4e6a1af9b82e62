//! Error type shared by every bjson operation.

use bjson_path::{Location, PathError};
use thiserror::Error;

use crate::value::Kind;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures reported by tree operations.
///
/// A failed mutation leaves the tree exactly as it was before the call.
#[derive(Debug, Error)]
pub enum Error {
    #[error("element {0} is not found")]
    NotFound(Location),
    #[error("element {0} is not a valid index for a JSON array")]
    InvalidIndex(Location),
    #[error("key at {0} already exists")]
    AlreadyExists(Location),
    #[error("invalid operation at {location}: {reason}")]
    InvalidOperation {
        location: Location,
        reason: &'static str,
    },
    #[error("element {location} is {found}, expected {expected}")]
    TypeMismatch {
        location: Location,
        expected: &'static str,
        found: Kind,
    },
    #[error("serialization failure: {0}")]
    SerializationFailure(#[from] serde_json::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_operation(location: Location, reason: &'static str) -> Self {
        Error::InvalidOperation { location, reason }
    }

    pub(crate) fn type_mismatch(location: Location, expected: &'static str, found: Kind) -> Self {
        Error::TypeMismatch {
            location,
            expected,
            found,
        }
    }

    /// The path position the error refers to, for path-related errors.
    pub fn location(&self) -> Option<&Location> {
        match self {
            Error::NotFound(loc)
            | Error::InvalidIndex(loc)
            | Error::AlreadyExists(loc)
            | Error::InvalidOperation { location: loc, .. }
            | Error::TypeMismatch { location: loc, .. } => Some(loc),
            Error::SerializationFailure(_) | Error::Io(_) => None,
        }
    }
}

impl From<PathError> for Error {
    fn from(err: PathError) -> Self {
        match err {
            PathError::NotFound(loc) => Error::NotFound(loc),
            PathError::InvalidIndex(loc) => Error::InvalidIndex(loc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_error() {
        let loc = Location::new(&["a", "b"], 1);
        let err: Error = PathError::NotFound(loc.clone()).into();
        assert!(matches!(&err, Error::NotFound(l) if *l == loc));

        let err: Error = PathError::InvalidIndex(loc.clone()).into();
        assert!(matches!(&err, Error::InvalidIndex(l) if *l == loc));
    }

    #[test]
    fn test_messages() {
        let err = Error::AlreadyExists(Location::new(&["v4", "z"], 2));
        assert_eq!(err.to_string(), "key at '/v4/z' already exists");

        let err = Error::invalid_operation(Location::new::<&str>(&[], 0), "root is not an array");
        assert_eq!(err.to_string(), "invalid operation at '<root>': root is not an array");

        let err = Error::type_mismatch(Location::new(&["n"], 1), "string", Kind::Number);
        assert_eq!(err.to_string(), "element '/n' is number, expected string");
    }

    #[test]
    fn test_location_accessor() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, Error::SerializationFailure(_)));
        assert!(err.location().is_none());

        let err = Error::NotFound(Location::new(&["x"], 0));
        assert_eq!(err.location().and_then(|l| l.segment()), Some("x"));
    }
}
