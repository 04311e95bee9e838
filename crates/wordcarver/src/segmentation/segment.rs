//! # Segments

use crate::{
    dictionary::Token,
    segmentation::{FALLBACK_COST, FALLBACK_FREQUENCY, FALLBACK_TAG},
};

/// One token of a segmentation result.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<'d> {
    /// First covered unit position.
    pub start: usize,

    /// One past the last covered unit position.
    pub end: usize,

    text: String,
    token: Option<&'d Token>,
}

impl<'d> Segment<'d> {
    pub(crate) fn new(
        start: usize,
        end: usize,
        text: String,
        token: Option<&'d Token>,
    ) -> Self {
        Self {
            start,
            end,
            text,
            token,
        }
    }

    /// The number of units covered.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// The covered text, as concatenated units.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Render the segment, joining dictionary token units with `joiner`.
    ///
    /// Without a joiner (or for fallback segments) this is [`Self::text`].
    pub fn render(
        &self,
        joiner: Option<&str>,
    ) -> String {
        match (self.token, joiner) {
            (Some(token), Some(joiner)) => token.text_with_joiner(joiner),
            _ => self.text.clone(),
        }
    }

    /// The dictionary token, or `None` for a synthesized fallback.
    pub fn token(&self) -> Option<&'d Token> {
        self.token
    }

    /// Is this segment a dictionary word?
    pub fn is_known(&self) -> bool {
        self.token.is_some()
    }

    /// The token frequency.
    pub fn frequency(&self) -> u64 {
        self.token.map_or(FALLBACK_FREQUENCY, Token::frequency)
    }

    /// The token cost.
    pub fn cost(&self) -> f32 {
        self.token.map_or(FALLBACK_COST, Token::cost)
    }

    /// The token tag; [`FALLBACK_TAG`] for unknown segments.
    pub fn tag(&self) -> &'d str {
        self.token.map_or(FALLBACK_TAG, Token::tag)
    }
}
