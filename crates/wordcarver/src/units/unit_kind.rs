//! # Codepoint Classification

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::units::Granularity;

/// Codepoints longer than this (in UTF-8 bytes) never join a Latin run.
///
/// This keeps CJK (3-byte) codepoints as standalone units.
pub const MAX_RUN_CHAR_BYTES: usize = 2;

/// How a codepoint participates in unit splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// Part of an alphanumeric run.
    Alphanumeric,

    /// Punctuation held inside a run by its neighbors (`3.14`, `don't`).
    Joiner,

    /// Stands alone as its own unit.
    Other,
}

impl UnitKind {
    /// Does this kind extend (or start) a coalesced run?
    pub fn is_run(self) -> bool {
        !matches!(self, UnitKind::Other)
    }

    /// Classify `cur`, given its neighbors in the text.
    ///
    /// ## Arguments
    /// * `prev` - the codepoint immediately before `cur`, if any.
    /// * `cur` - the codepoint to classify.
    /// * `next` - the codepoint immediately after `cur`, if any.
    /// * `granularity` - the split granularity.
    pub fn classify(
        prev: Option<char>,
        cur: char,
        next: Option<char>,
        granularity: Granularity,
    ) -> Self {
        if cur.len_utf8() > MAX_RUN_CHAR_BYTES {
            return UnitKind::Other;
        }
        match granularity {
            Granularity::Word => {
                if is_letter(cur) || is_number(cur) {
                    UnitKind::Alphanumeric
                } else if is_joiner(prev, cur, next) {
                    UnitKind::Joiner
                } else {
                    UnitKind::Other
                }
            }
            Granularity::Character => {
                if is_number(cur) {
                    UnitKind::Alphanumeric
                } else {
                    UnitKind::Other
                }
            }
        }
    }
}

/// Is `c` a Unicode letter (general category `L*`)?
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Is `c` a Unicode number (general category `N*`)?
pub fn is_number(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::DecimalNumber | GeneralCategory::LetterNumber | GeneralCategory::OtherNumber
    )
}

/// `.` or `/` between two numbers, or `'` between two letters.
fn is_joiner(
    prev: Option<char>,
    cur: char,
    next: Option<char>,
) -> bool {
    let (Some(prev), Some(next)) = (prev, next) else {
        return false;
    };
    match cur {
        '.' | '/' => is_number(prev) && is_number(next),
        '\'' => is_letter(prev) && is_letter(next),
        _ => false,
    }
}
