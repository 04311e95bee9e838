//! # Split Options

/// How finely Latin text is split into units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Granularity {
    /// Letter/digit runs are coalesced into a single lower-cased unit.
    #[default]
    Word,

    /// Only digit runs are coalesced; every letter is its own unit.
    Character,
}

/// Options controlling the unit splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SplitOptions {
    /// Latin splitting granularity.
    pub granularity: Granularity,

    /// Treat the text as hyphen-delimited phrase chunks.
    ///
    /// When set, every maximal run of non-hyphen characters is one unit,
    /// regardless of `granularity`.
    pub phrase: bool,
}

impl SplitOptions {
    /// Word granularity, no phrase splitting.
    pub fn word() -> Self {
        Self::default()
    }

    /// Character granularity, no phrase splitting.
    pub fn character() -> Self {
        Self::default().with_granularity(Granularity::Character)
    }

    /// Sets the granularity.
    pub fn set_granularity(
        &mut self,
        granularity: Granularity,
    ) {
        self.granularity = granularity;
    }

    /// Sets the granularity.
    pub fn with_granularity(
        mut self,
        granularity: Granularity,
    ) -> Self {
        self.set_granularity(granularity);
        self
    }

    /// Sets phrase splitting.
    pub fn set_phrase(
        &mut self,
        phrase: bool,
    ) {
        self.phrase = phrase;
    }

    /// Sets phrase splitting.
    pub fn with_phrase(
        mut self,
        phrase: bool,
    ) -> Self {
        self.set_phrase(phrase);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let options = SplitOptions::default();
        assert_eq!(options.granularity, Granularity::Word);
        assert!(!options.phrase);

        let options = SplitOptions::character().with_phrase(true);
        assert_eq!(options.granularity, Granularity::Character);
        assert!(options.phrase);

        let mut options = options;
        options.set_granularity(Granularity::Word);
        options.set_phrase(false);
        assert_eq!(options, SplitOptions::word());
    }
}
