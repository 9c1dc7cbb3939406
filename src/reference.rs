//! Source-location references, the payload of `#:` comment lines.

use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Defines errors that may occur when parsing a reference
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    /// Error when the input contains no file name
    #[error("reference has no file name")]
    MissingFile,
    /// Error when the line part cannot be stored as a line number
    #[error("invalid line number in reference '{reference}': {source}")]
    InvalidLine {
        /// The full reference text as given
        reference: String,
        /// The underlying integer parse failure
        source: std::num::ParseIntError,
    },
}

/// A source location where a message occurs.
///
/// Two references are the same location iff both the file and the line are
/// equal; an absent line is a distinct location from any numbered line in
/// the same file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    /// Path of the source file, as written in the catalog.
    pub file: String,
    /// Line number within the file, if known.
    pub line: Option<u32>,
}

impl Reference {
    /// Creates a reference to `file`, optionally at a specific line.
    #[must_use]
    pub fn new(file: impl Into<String>, line: Option<u32>) -> Self {
        Self { file: file.into(), line }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{line}", self.file),
            None => f.write_str(&self.file),
        }
    }
}

impl FromStr for Reference {
    type Err = ReferenceError;

    /// Parses the `file:line` rendering back into a reference.
    ///
    /// The line is taken from the last `:`-separated segment only when that
    /// segment is all digits, so Windows-style paths and files containing
    /// `:` survive as plain file names without a line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ReferenceError::MissingFile);
        }

        if let Some((file, digits)) = s.rsplit_once(':')
            && !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
        {
            if file.is_empty() {
                return Err(ReferenceError::MissingFile);
            }
            let line = digits.parse::<u32>().map_err(|source| ReferenceError::InvalidLine {
                reference: s.to_string(),
                source,
            })?;
            return Ok(Self::new(file, Some(line)));
        }

        Ok(Self::new(s, None))
    }
}
