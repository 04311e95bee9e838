//! # Dictionary Tokens

use crate::units::{concat_units, join_units};

/// Derive the cost of a token: ``log2(total) - log2(frequency)``.
///
/// Both logs are taken in `f64` and narrowed to `f32` before the
/// subtraction, so costs are reproducible across platforms.
pub fn token_cost(
    total_frequency: u64,
    frequency: u64,
) -> f32 {
    let log_total = (total_frequency as f64).log2() as f32;
    log_total - (frequency as f64).log2() as f32
}

/// A dictionary entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    units: Vec<String>,
    frequency: u64,
    tag: String,
    cost: f32,
}

impl Token {
    /// Create a token with an unset (zero) cost.
    pub(crate) fn new(
        units: Vec<String>,
        frequency: u64,
        tag: String,
    ) -> Self {
        Self {
            units,
            frequency,
            tag,
            cost: 0.0,
        }
    }

    /// The ordered units of the token.
    pub fn units(&self) -> &[String] {
        &self.units
    }

    /// The number of units in the token.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// The occurrence weight of the token.
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// The free-form tag; may be empty.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The path cost, ``-log2(p(token))``.
    ///
    /// Only meaningful once the owning dictionary is finalized.
    pub fn cost(&self) -> f32 {
        self.cost
    }

    /// The concatenated text of the token.
    pub fn text(&self) -> String {
        concat_units(&self.units)
    }

    /// The token text with `joiner` between units.
    pub fn text_with_joiner(
        &self,
        joiner: &str,
    ) -> String {
        join_units(&self.units, joiner)
    }

    /// Does the concatenated text equal `text`?
    ///
    /// Compares without allocating.
    pub fn text_eq(
        &self,
        text: &str,
    ) -> bool {
        let mut rest = text.as_bytes();
        for unit in &self.units {
            match rest.strip_prefix(unit.as_bytes()) {
                Some(tail) => rest = tail,
                None => return false,
            }
        }
        rest.is_empty()
    }

    pub(crate) fn raise_frequency(
        &mut self,
        frequency: u64,
    ) -> u64 {
        if frequency > self.frequency {
            let delta = frequency - self.frequency;
            self.frequency = frequency;
            delta
        } else {
            0
        }
    }

    pub(crate) fn set_cost(
        &mut self,
        cost: f32,
    ) {
        self.cost = cost;
    }
}
