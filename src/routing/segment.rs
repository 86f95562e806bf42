//! Path tokenisation and segment classification.
//!
//! # Responsibilities
//! - Split templates and request paths on `/`
//! - Drop empty segments (leading, trailing, doubled delimiters)
//! - Recognise `{name}` wildcard segments
//!
//! # Design Decisions
//! - Templates and paths go through the same splitter, so `/a//b/` and `a/b` are equivalent
//! - Segments are trimmed of surrounding whitespace before use
//! - No percent-decoding or case folding; that belongs to the caller

/// Segment delimiter for templates and paths.
pub const DELIMITER: char = '/';

const WILDCARD_OPEN: char = '{';
const WILDCARD_CLOSE: char = '}';

/// Iterate over the non-empty, trimmed segments of a template or path.
pub fn segments(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(DELIMITER)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// A single template segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Matched by exact string equality.
    Static(&'a str),
    /// Matches any one segment and captures it under `name`.
    Wildcard {
        /// Text as registered, braces included. Used as the child key.
        raw: &'a str,
        /// Capture name between the braces.
        name: &'a str,
    },
}

impl<'a> Segment<'a> {
    /// Classify a single (already split) segment.
    pub fn parse(raw: &'a str) -> Self {
        match wildcard_name(raw) {
            Some(name) => Segment::Wildcard { raw, name },
            None => Segment::Static(raw),
        }
    }

    /// Key under which this segment is stored in its parent's children.
    pub fn key(&self) -> &'a str {
        match self {
            Segment::Static(raw) => raw,
            Segment::Wildcard { raw, .. } => raw,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard { .. })
    }
}

/// Return the capture name if `raw` has the form `{name}`.
///
/// The name may be empty (`{}`); config validation rejects that case.
pub fn wildcard_name(raw: &str) -> Option<&str> {
    if raw.len() < 2 {
        return None;
    }
    raw.strip_prefix(WILDCARD_OPEN)?.strip_suffix(WILDCARD_CLOSE)
}
