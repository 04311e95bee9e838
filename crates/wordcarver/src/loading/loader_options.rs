//! # Loader Options

use crate::units::{Granularity, SplitOptions};

/// Entries with a lower frequency are skipped by default.
pub const DEFAULT_MIN_FREQUENCY: u64 = 2;

/// Options for a [`crate::DictionaryLoader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Entries with a frequency below this are skipped.
    pub min_frequency: u64,

    /// How entry text is split into units.
    pub split: SplitOptions,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            min_frequency: DEFAULT_MIN_FREQUENCY,
            split: SplitOptions::default(),
        }
    }
}

impl LoaderOptions {
    /// Options for the Latin character-granularity pipeline.
    ///
    /// Entry text is split one letter per unit; letters are lower-cased
    /// by the splitter, exactly as query letters are.
    pub fn character_mode() -> Self {
        Self::default().with_split(SplitOptions::default().with_granularity(Granularity::Character))
    }

    /// Sets the minimum admissible frequency.
    pub fn with_min_frequency(
        mut self,
        min_frequency: u64,
    ) -> Self {
        self.min_frequency = min_frequency;
        self
    }

    /// Sets the split options.
    pub fn with_split(
        mut self,
        split: SplitOptions,
    ) -> Self {
        self.split = split;
        self
    }

    /// Sets phrase splitting.
    pub fn with_phrase(
        mut self,
        phrase: bool,
    ) -> Self {
        self.split.set_phrase(phrase);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = LoaderOptions::default();
        assert_eq!(options.min_frequency, 2);
        assert_eq!(options.split, SplitOptions::word());
    }

    #[test]
    fn test_character_mode() {
        let options = LoaderOptions::character_mode()
            .with_phrase(true)
            .with_min_frequency(1);
        assert_eq!(options.split.granularity, Granularity::Character);
        assert!(options.split.phrase);
        assert_eq!(options.min_frequency, 1);
    }
}
