//! Reading the dump file into an ordered record sequence.

use std::{fs, path::Path};

use tracing::debug;

use crate::{error::CheckError, record::RawRecord};

/// Read the whole dump at `path` and parse it into records.
///
/// The file is read in one shot; there is no streaming path. A missing or
/// unreadable file surfaces as [`CheckError::Io`].
pub fn read_dump(path: &Path) -> Result<Vec<RawRecord>, CheckError> {
    let text = fs::read_to_string(path)?;
    let records = parse_lines(&text);
    debug!(records = records.len(), path = %path.display(), "parsed settings dump");
    Ok(records)
}

/// Split `text` into non-empty lines and parse each into a [`RawRecord`].
/// Trailing newlines (LF or CRLF) are stripped; nothing else is trimmed.
pub fn parse_lines(text: &str) -> Vec<RawRecord> {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(RawRecord::parse)
        .collect()
}
