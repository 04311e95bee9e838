//! # Dictionary Builder

use crate::{
    dictionary::{Dictionary, Token, encode_key, token_cost},
    units::{SplitOptions, split_units},
};

/// Accumulates weighted entries, then finalizes into a [`Dictionary`].
///
/// Costs depend on the final frequency total, so they are only derived
/// by [`DictionaryBuilder::finalize`], once per batch.
#[derive(Debug, Clone)]
pub struct DictionaryBuilder {
    dict: Dictionary,
}

impl Default for DictionaryBuilder {
    fn default() -> Self {
        Self::new(SplitOptions::default())
    }
}

impl DictionaryBuilder {
    /// Create an empty builder.
    ///
    /// ## Arguments
    /// * `split_options` - how dictionary text (and later, query text) is
    ///   split into units.
    pub fn new(split_options: SplitOptions) -> Self {
        Self {
            dict: Dictionary::empty(split_options),
        }
    }

    /// The split options of the dictionary under construction.
    pub fn split_options(&self) -> SplitOptions {
        self.dict.split_options
    }

    /// The number of tokens so far.
    pub fn len(&self) -> usize {
        self.dict.len()
    }

    /// Is the builder empty?
    pub fn is_empty(&self) -> bool {
        self.dict.is_empty()
    }

    /// The frequency total so far.
    pub fn total_frequency(&self) -> u64 {
        self.dict.total_frequency
    }

    /// The token for `text`, if present; costs are not yet valid.
    pub fn get(
        &self,
        text: &str,
    ) -> Option<&Token> {
        self.dict.get(text)
    }

    /// Split `text` with the builder's options, then insert it.
    ///
    /// See [`Self::insert_or_update`].
    pub fn insert_text(
        &mut self,
        text: &str,
        frequency: u64,
        tag: &str,
    ) -> Option<usize> {
        let units = split_units(text, self.dict.split_options);
        self.insert_or_update(&units, frequency, tag)
    }

    /// Insert a token, or raise the frequency of an existing one.
    ///
    /// A new key appends a token. An existing key keeps its slot and tag;
    /// its frequency becomes ``max(old, new)`` and the total grows by the
    /// positive delta only. The total saturates at `u64::MAX`.
    ///
    /// ## Arguments
    /// * `units` - the token units.
    /// * `frequency` - the occurrence weight.
    /// * `tag` - a free-form tag.
    ///
    /// ## Returns
    /// The token slot; `None` for an empty unit sequence, which is ignored.
    pub fn insert_or_update<U: AsRef<str>>(
        &mut self,
        units: &[U],
        frequency: u64,
        tag: &str,
    ) -> Option<usize> {
        if units.is_empty() {
            return None;
        }

        let dict = &mut self.dict;
        let key = encode_key(units, dict.split_options.phrase);

        if let Some(slot) = dict.index.get(&key) {
            let delta = dict.tokens[slot].raise_frequency(frequency);
            dict.total_frequency = dict.total_frequency.saturating_add(delta);
            return Some(slot);
        }

        let slot = dict.tokens.len();
        dict.index.insert(&key, slot);
        dict.tokens.push(Token::new(
            units.iter().map(|u| u.as_ref().to_string()).collect(),
            frequency,
            tag.to_string(),
        ));
        dict.total_frequency = dict.total_frequency.saturating_add(frequency);
        dict.max_token_length = dict.max_token_length.max(units.len());

        Some(slot)
    }

    /// Set every token's cost from the current frequency total.
    pub fn recompute_costs(&mut self) {
        let total = self.dict.total_frequency;
        for token in self.dict.tokens.iter_mut() {
            token.set_cost(token_cost(total, token.frequency()));
        }
    }

    /// Derive costs and freeze the dictionary.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn finalize(mut self) -> Dictionary {
        self.recompute_costs();

        log::debug!(
            "finalized dictionary: {} tokens, total frequency {}, max token length {}",
            self.dict.len(),
            self.dict.total_frequency,
            self.dict.max_token_length
        );

        self.dict
    }
}
