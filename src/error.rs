use std::fmt;

use crate::Regex;

/// The reason a builder call was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegexError {
    /// `digit_in_base`/`not_digit_in_base` with a base other than 2, 8, 10 or 16.
    UnsupportedBase(u32),
    /// A named backreference or condition refers to a capture that was never declared.
    UnknownCaptureName(String),
    /// `capture_named` with a name already given to an earlier capture.
    DuplicateCaptureName(String),
    /// A delimiter that would change the meaning of the escaped pattern:
    /// alphanumerics, backslash and whitespace.
    InvalidDelimiter(char),
}

impl fmt::Display for RegexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedBase(base) => {
                write!(f, "Unsupported numeric base {base} (expected 2, 8, 10 or 16)")
            }
            Self::UnknownCaptureName(name) => write!(f, "Unknown capture name: {name:?}"),
            Self::DuplicateCaptureName(name) => write!(f, "Duplicate capture name: {name:?}"),
            Self::InvalidDelimiter(delimiter) => write!(f, "Invalid delimiter: {delimiter:?}"),
        }
    }
}

impl std::error::Error for RegexError {}

/// A failed builder call. Carries the builder exactly as it was before the
/// call, so the chain can be resumed.
#[derive(Debug, Clone)]
pub struct Rejected {
    pub regex: Regex,
    pub error: RegexError,
}

impl Rejected {
    pub(crate) fn new(regex: Regex, error: RegexError) -> Self {
        Self { regex, error }
    }

    /// Recover the builder, discarding the error.
    pub fn into_regex(self) -> Regex {
        self.regex
    }
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl std::error::Error for Rejected {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<Rejected> for RegexError {
    fn from(rejected: Rejected) -> Self {
        rejected.error
    }
}
