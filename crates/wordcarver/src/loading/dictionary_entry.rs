//! # Dictionary Entries

use crate::errors::{WCResult, WordcarverError};

/// One ``(text, frequency, tag)`` dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DictionaryEntry {
    /// The word text.
    pub text: String,

    /// The occurrence weight.
    pub frequency: u64,

    /// A free-form tag; may be empty.
    pub tag: String,
}

impl DictionaryEntry {
    /// Create a new entry.
    pub fn new<T, G>(
        text: T,
        frequency: u64,
        tag: G,
    ) -> Self
    where
        T: Into<String>,
        G: Into<String>,
    {
        Self {
            text: text.into(),
            frequency,
            tag: tag.into(),
        }
    }
}

/// Parse one ``text frequency [tag]`` line.
///
/// Fields are whitespace separated; fields past the tag are ignored.
/// A non-positive frequency parses as `0`, which loaders always filter.
///
/// ## Returns
/// * `Ok(None)` for blank lines,
/// * `Ok(Some(entry))` for a valid entry,
/// * `Err(WordcarverError::MalformedEntry)` for a missing, non-integer,
///   or out of range frequency.
pub fn parse_entry_line(line: &str) -> WCResult<Option<DictionaryEntry>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let mut fields = trimmed.split_whitespace();
    let (Some(text), Some(freq)) = (fields.next(), fields.next()) else {
        return Err(WordcarverError::malformed(trimmed, "missing frequency"));
    };
    let frequency = match freq.parse::<i128>() {
        Ok(value) if value <= 0 => 0,
        Ok(value) => u64::try_from(value).map_err(|err| {
            WordcarverError::malformed(trimmed, format!("frequency {freq} out of range: {err}"))
        })?,
        Err(err) => {
            return Err(WordcarverError::malformed(
                trimmed,
                format!("bad frequency {freq:?}: {err}"),
            ));
        }
    };
    let tag = fields.next().unwrap_or_default();

    Ok(Some(DictionaryEntry::new(text, frequency, tag)))
}
