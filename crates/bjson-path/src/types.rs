//! Type definitions for segment paths.

use std::fmt;

use crate::util::format_json_pointer;

/// A step in a path.
///
/// Whether a segment names an object key or an array index is decided by the
/// container it is applied to, never by the segment text itself.
pub type Segment = String;

/// An owned path.
pub type Path = Vec<Segment>;

/// Where a path lookup stopped.
///
/// Holds the full requested path together with the number of leading
/// segments that resolved successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    requested: Path,
    consumed: usize,
}

impl Location {
    /// Create a location for `requested` after `consumed` segments resolved.
    ///
    /// `consumed` is clamped to the path length.
    pub fn new<S: AsRef<str>>(requested: &[S], consumed: usize) -> Self {
        Self {
            requested: requested.iter().map(|s| s.as_ref().to_string()).collect(),
            consumed: consumed.min(requested.len()),
        }
    }

    /// The full path the caller asked for.
    pub fn requested(&self) -> &[Segment] {
        &self.requested
    }

    /// The prefix that resolved before the lookup stopped.
    pub fn passed(&self) -> &[Segment] {
        &self.requested[..self.consumed]
    }

    /// The segment the lookup stopped at, if any.
    ///
    /// `None` when the whole path resolved, e.g. for root-level failures.
    pub fn segment(&self) -> Option<&str> {
        self.requested.get(self.consumed).map(String::as_str)
    }

    /// Number of segments that resolved.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Whether the requested path is the root.
    pub fn is_root(&self) -> bool {
        self.requested.is_empty()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let requested = render(&self.requested);
        if self.consumed == self.requested.len() {
            return write!(f, "'{requested}'");
        }
        write!(f, "'{requested}' (resolved up to '{}')", render(self.passed()))
    }
}

fn render(path: &[Segment]) -> String {
    if path.is_empty() {
        return "<root>".to_string();
    }
    format_json_pointer(path)
}
