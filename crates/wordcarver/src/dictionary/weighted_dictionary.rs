//! # Finalized Dictionary

use crate::{
    dictionary::{NodeId, PrefixIndex, Token},
    units::{PHRASE_DELIMITER, SplitOptions, split_units},
};

/// A dictionary token matched as a prefix of a unit window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrefixMatch<'d> {
    /// The number of window units the match covers.
    pub len: usize,

    /// The matched token.
    pub token: &'d Token,
}

/// Encode a unit sequence as a prefix index key.
///
/// Phrase keys join units with the phrase delimiter, so that
/// ``["a", "b"]`` and ``["ab"]`` stay distinct.
pub fn encode_key<U: AsRef<str>>(
    units: &[U],
    phrase: bool,
) -> Vec<u8> {
    let mut key = Vec::new();
    for (idx, unit) in units.iter().enumerate() {
        if idx > 0 && phrase {
            key.push(PHRASE_DELIMITER as u8);
        }
        key.extend_from_slice(unit.as_ref().as_bytes());
    }
    key
}

/// An immutable, finalized weighted dictionary.
///
/// Build one with a [`crate::DictionaryBuilder`].
#[derive(Debug, Clone)]
pub struct Dictionary {
    pub(crate) index: PrefixIndex,
    pub(crate) tokens: Vec<Token>,
    pub(crate) max_token_length: usize,
    pub(crate) total_frequency: u64,
    pub(crate) split_options: SplitOptions,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::empty(SplitOptions::default())
    }
}

impl Dictionary {
    pub(crate) fn empty(split_options: SplitOptions) -> Self {
        Self {
            index: PrefixIndex::new(),
            tokens: Vec::new(),
            max_token_length: 0,
            total_frequency: 0,
            split_options,
        }
    }

    /// The split options the dictionary keys were built with.
    pub fn split_options(&self) -> SplitOptions {
        self.split_options
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is the dictionary empty?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The longest token, in units.
    pub fn max_token_length(&self) -> usize {
        self.max_token_length
    }

    /// The sum of all token frequencies.
    pub fn total_frequency(&self) -> u64 {
        self.total_frequency
    }

    /// All tokens, in insertion order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Look up the token for a unit sequence.
    pub fn get_units<U: AsRef<str>>(
        &self,
        units: &[U],
    ) -> Option<&Token> {
        let key = encode_key(units, self.split_options.phrase);
        self.index.get(&key).map(|slot| &self.tokens[slot])
    }

    /// Look up the token for `text`, split with the dictionary's options.
    pub fn get(
        &self,
        text: &str,
    ) -> Option<&Token> {
        self.get_units(&split_units(text, self.split_options))
    }

    /// Find every token which is a prefix of `window`.
    ///
    /// ## Arguments
    /// * `window` - the units starting at the lookup position.
    ///
    /// ## Returns
    /// The matches in increasing length order; at most
    /// [`Self::max_token_length`] of them.
    pub fn lookup_prefixes<U: AsRef<str>>(
        &self,
        window: &[U],
    ) -> Vec<PrefixMatch<'_>> {
        let mut matches = Vec::new();
        self.lookup_prefixes_into(window, None, &mut matches);
        matches
    }

    /// Find every token which is a prefix of `window`, except `excluded`.
    ///
    /// Tokens whose text equals `excluded` are skipped; longer matches
    /// past them are still returned.
    pub fn lookup_prefixes_except<U: AsRef<str>>(
        &self,
        window: &[U],
        excluded: &str,
    ) -> Vec<PrefixMatch<'_>> {
        let mut matches = Vec::new();
        self.lookup_prefixes_into(window, Some(excluded), &mut matches);
        matches
    }

    /// Append prefix matches of `window` to `matches`.
    ///
    /// The walk consumes one unit at a time and stops at the first unit
    /// with no continuation in the index.
    pub fn lookup_prefixes_into<'d, U: AsRef<str>>(
        &'d self,
        window: &[U],
        excluded: Option<&str>,
        matches: &mut Vec<PrefixMatch<'d>>,
    ) {
        let window = &window[..window.len().min(self.max_token_length)];
        let phrase = self.split_options.phrase;

        let mut node: NodeId = PrefixIndex::ROOT;
        for (idx, unit) in window.iter().enumerate() {
            if idx > 0 && phrase {
                match self.index.jump(node, &[PHRASE_DELIMITER as u8]) {
                    Some(next) => node = next,
                    None => break,
                }
            }
            match self.index.jump(node, unit.as_ref().as_bytes()) {
                Some(next) => node = next,
                None => break,
            }

            if let Some(slot) = self.index.value(node) {
                let token = &self.tokens[slot];
                if let Some(excluded) = excluded
                    && token.text_eq(excluded)
                {
                    continue;
                }
                matches.push(PrefixMatch {
                    len: idx + 1,
                    token,
                });
            }
        }
    }
}
