//! # Unit Splitter

use std::borrow::Cow;

use crate::units::{Granularity, SplitOptions, Unit, UnitKind};

/// Phrase-mode chunk delimiter.
pub const PHRASE_DELIMITER: char = '-';

/// Iterator over the [`Unit`]s of a text.
///
/// Finite and non-restartable; an empty text yields nothing.
#[derive(Debug, Clone)]
pub struct UnitSplitter<'a> {
    text: &'a str,
    pos: usize,
    prev: Option<char>,
    options: SplitOptions,
}

impl<'a> UnitSplitter<'a> {
    /// Create a new splitter over `text`.
    pub fn new(
        text: &'a str,
        options: SplitOptions,
    ) -> Self {
        Self {
            text,
            pos: 0,
            prev: None,
            options,
        }
    }

    /// The options this splitter uses.
    pub fn options(&self) -> SplitOptions {
        self.options
    }

    fn char_at(
        &self,
        pos: usize,
    ) -> Option<char> {
        self.text[pos..].chars().next()
    }

    fn next_phrase(&mut self) -> Option<Unit<'a>> {
        let rest = &self.text[self.pos..];
        let skipped = rest.len() - rest.trim_start_matches(PHRASE_DELIMITER).len();
        let start = self.pos + skipped;
        if start >= self.text.len() {
            self.pos = self.text.len();
            return None;
        }

        let end = self.text[start..]
            .find(PHRASE_DELIMITER)
            .map_or(self.text.len(), |off| start + off);
        self.pos = end;

        Some(Unit::new(&self.text[start..end]))
    }

    fn kind_at(
        &self,
        pos: usize,
        cur: char,
    ) -> UnitKind {
        let next = self.char_at(pos + cur.len_utf8());
        UnitKind::classify(self.prev, cur, next, self.options.granularity)
    }

    fn next_unit(&mut self) -> Option<Unit<'a>> {
        let start = self.pos;
        let cur = self.char_at(start)?;

        if !self.kind_at(start, cur).is_run() {
            self.pos += cur.len_utf8();
            self.prev = Some(cur);

            let span = &self.text[start..self.pos];
            return Some(match self.options.granularity {
                Granularity::Word => Unit::new(span),
                Granularity::Character => Unit::new(unicode_lowercase(span)),
            });
        }

        while let Some(cur) = self.char_at(self.pos) {
            if !self.kind_at(self.pos, cur).is_run() {
                break;
            }
            self.pos += cur.len_utf8();
            self.prev = Some(cur);
        }

        Some(Unit::new(ascii_lowercase(&self.text[start..self.pos])))
    }
}

impl<'a> Iterator for UnitSplitter<'a> {
    type Item = Unit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.options.phrase {
            self.next_phrase()
        } else {
            self.next_unit()
        }
    }
}

impl std::iter::FusedIterator for UnitSplitter<'_> {}

/// Lower-case ASCII letters, borrowing when there is nothing to change.
fn ascii_lowercase(span: &str) -> Cow<'_, str> {
    if span.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(span.to_ascii_lowercase())
    } else {
        Cow::Borrowed(span)
    }
}

/// Lower-case every codepoint, borrowing when there is nothing to change.
///
/// Dictionary keys and queries both pass through here, so they fold alike.
fn unicode_lowercase(span: &str) -> Cow<'_, str> {
    if span.chars().all(|c| c.to_lowercase().eq([c])) {
        Cow::Borrowed(span)
    } else {
        Cow::Owned(span.chars().flat_map(char::to_lowercase).collect())
    }
}

/// Split `text` into units.
///
/// ## Arguments
/// * `text` - the text to split.
/// * `options` - the split options.
///
/// ## Returns
/// The ordered units; empty for empty text.
pub fn split_units(
    text: &str,
    options: SplitOptions,
) -> Vec<Unit<'_>> {
    UnitSplitter::new(text, options).collect()
}

/// Split raw bytes into units.
///
/// Invalid UTF-8 sequences are replaced with `U+FFFD`.
pub fn split_bytes(
    bytes: &[u8],
    options: SplitOptions,
) -> Vec<Unit<'_>> {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => split_units(text, options),
        Cow::Owned(text) => split_units(&text, options)
            .into_iter()
            .map(Unit::into_owned)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(
        text: &str,
        options: SplitOptions,
    ) -> Vec<String> {
        split_units(text, options)
            .into_iter()
            .map(|u| u.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_empty() {
        assert!(split_units("", SplitOptions::word()).is_empty());
        assert!(split_units("", SplitOptions::character()).is_empty());
        assert!(split_units("", SplitOptions::word().with_phrase(true)).is_empty());
        assert!(split_units("---", SplitOptions::word().with_phrase(true)).is_empty());
    }

    #[test]
    fn test_word_mode() {
        let options = SplitOptions::word();
        assert_eq!(strs("中国人", options), vec!["中", "国", "人"]);
        assert_eq!(
            strs("Hello世界World2024", options),
            vec!["hello", "世", "界", "world2024"]
        );
        assert_eq!(strs("a b", options), vec!["a", " ", "b"]);
        assert_eq!(strs("，。", options), vec!["，", "。"]);
    }

    #[test]
    fn test_word_mode_joiners() {
        let options = SplitOptions::word();
        assert_eq!(strs("π是3.14", options), vec!["π", "是", "3.14"]);
        assert_eq!(strs("don't", options), vec!["don't"]);
        assert_eq!(strs("1/2杯", options), vec!["1/2", "杯"]);
        assert_eq!(strs("end.", options), vec!["end", "."]);
        assert_eq!(strs("a.b", options), vec!["a", ".", "b"]);
        assert_eq!(strs("'tis", options), vec!["'", "tis"]);
    }

    #[test]
    fn test_word_mode_lowercase_ascii_only() {
        let units = split_units("ÉCOLE", SplitOptions::word());
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].as_str(), "École");
    }

    #[test]
    fn test_character_mode() {
        let options = SplitOptions::character();
        assert_eq!(
            strs("iLove2024you", options),
            vec!["i", "l", "o", "v", "e", "2024", "y", "o", "u"]
        );
        assert_eq!(strs("3.14", options), vec!["3", ".", "14"]);
        assert_eq!(strs("中a", options), vec!["中", "a"]);
    }

    #[test]
    fn test_character_mode_unicode_lowercase() {
        let options = SplitOptions::character();
        assert_eq!(strs("ÉCOLE", options), vec!["é", "c", "o", "l", "e"]);
        assert_eq!(strs("ΣΑ", options), vec!["σ", "α"]);
        assert_eq!(strs("İ", options), vec!["i\u{307}"]);
    }

    #[test]
    fn test_phrase_mode() {
        let options = SplitOptions::word().with_phrase(true);
        assert_eq!(
            strs("new-york--Times-", options),
            vec!["new", "york", "Times"]
        );
        assert_eq!(strs("纽约-时报", options), vec!["纽约", "时报"]);

        let options = SplitOptions::character().with_phrase(true);
        assert_eq!(strs("-ab-cd", options), vec!["ab", "cd"]);
    }

    #[test]
    fn test_split_bytes() {
        let units = split_bytes("北京".as_bytes(), SplitOptions::word());
        assert_eq!(units.len(), 2);

        let units = split_bytes(b"ab\xffcd", SplitOptions::word());
        let texts: Vec<&str> = units.iter().map(|u| u.as_str()).collect();
        assert_eq!(texts, vec!["ab", "\u{fffd}", "cd"]);
    }

    #[test]
    fn test_splitter_is_fused() {
        let mut splitter = UnitSplitter::new("a", SplitOptions::word());
        assert_eq!(splitter.options(), SplitOptions::word());
        assert_eq!(splitter.next().map(|u| u.into_owned()), Some(Unit::from("a".to_string())));
        assert!(splitter.next().is_none());
        assert!(splitter.next().is_none());
    }
}
