//! Checksum lists
//!
//! Lines of `<104 hex chars>  <name>`, as printed by `h416 digest`. A `*`
//! before the name (binary-mode marker of the sha*sum tools) is accepted and
//! ignored. Blank lines and lines starting with `#` are skipped.
//!
//! A name wrapped in double quotes is a `--text` record and is checked by
//! hashing the quoted string; any other name is a file path.

use h416_core::{Digest, DIGEST_HEX_LEN};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CheckError {
    #[error("line {line}: expected '<digest>  <path>'")]
    Malformed { line: usize },

    #[error("line {line}: {source}")]
    BadDigest {
        line: usize,
        source: h416_core::Error,
    },

    #[error("no properly formatted digest lines found")]
    NoEntries,
}

/// What a listed digest was computed over
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckTarget {
    File(PathBuf),
    Text(String),
}

impl CheckTarget {
    fn from_name(name: &str) -> Self {
        match name.strip_prefix('"').and_then(|n| n.strip_suffix('"')) {
            Some(text) => CheckTarget::Text(text.to_string()),
            None => CheckTarget::File(PathBuf::from(name)),
        }
    }

    /// Name as printed in the list.
    pub fn display_name(&self) -> String {
        match self {
            CheckTarget::File(path) => path.display().to_string(),
            CheckTarget::Text(text) => format!("\"{}\"", text),
        }
    }
}

/// One expected digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckEntry {
    pub expected: Digest,
    pub target: CheckTarget,
}

/// Parse one line (`line_no` is 1-based, for error messages).
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<CheckEntry>, CheckError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (hex, rest) = match (line.get(..DIGEST_HEX_LEN), line.get(DIGEST_HEX_LEN..)) {
        (Some(hex), Some(rest)) => (hex, rest),
        _ => return Err(CheckError::Malformed { line: line_no }),
    };

    let name = rest
        .strip_prefix("  ")
        .or_else(|| rest.strip_prefix(" *"))
        .filter(|p| !p.is_empty())
        .ok_or(CheckError::Malformed { line: line_no })?;

    let expected = hex.parse().map_err(|source| CheckError::BadDigest {
        line: line_no,
        source,
    })?;

    Ok(Some(CheckEntry {
        expected,
        target: CheckTarget::from_name(name),
    }))
}

/// Parse a whole checksum list; a list with no entries is an error.
pub fn parse_list(content: &str) -> Result<Vec<CheckEntry>, CheckError> {
    let mut entries = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if let Some(entry) = parse_line(line, i + 1)? {
            entries.push(entry);
        }
    }
    if entries.is_empty() {
        return Err(CheckError::NoEntries);
    }
    Ok(entries)
}
