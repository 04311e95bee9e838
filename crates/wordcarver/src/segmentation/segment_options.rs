//! # Segmentation Options

/// Per-call options for a [`crate::Segmenter`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SegmentOptions {
    /// Inserted between a token's units when rendering; empty means none.
    pub joiner: Option<String>,

    /// A known word to ignore everywhere it would match.
    pub exclude: Option<String>,

    /// Suppress the single token covering the whole input.
    ///
    /// Single-unit inputs yield no segments in search mode.
    pub search_mode: bool,
}

impl SegmentOptions {
    /// The effective joiner; `None` when unset or empty.
    pub fn joiner(&self) -> Option<&str> {
        self.joiner.as_deref().filter(|j| !j.is_empty())
    }

    /// Sets the joiner.
    pub fn set_joiner<S: Into<String>>(
        &mut self,
        joiner: Option<S>,
    ) {
        self.joiner = joiner.map(Into::into);
    }

    /// Sets the joiner.
    pub fn with_joiner<S: Into<String>>(
        mut self,
        joiner: S,
    ) -> Self {
        self.set_joiner(Some(joiner));
        self
    }

    /// The effective excluded word; `None` when unset or empty.
    pub fn exclude(&self) -> Option<&str> {
        self.exclude.as_deref().filter(|e| !e.is_empty())
    }

    /// Sets the excluded word.
    pub fn set_exclude<S: Into<String>>(
        &mut self,
        exclude: Option<S>,
    ) {
        self.exclude = exclude.map(Into::into);
    }

    /// Sets the excluded word.
    pub fn with_exclude<S: Into<String>>(
        mut self,
        exclude: S,
    ) -> Self {
        self.set_exclude(Some(exclude));
        self
    }

    /// Sets search mode.
    pub fn set_search_mode(
        &mut self,
        search_mode: bool,
    ) {
        self.search_mode = search_mode;
    }

    /// Sets search mode.
    pub fn with_search_mode(
        mut self,
        search_mode: bool,
    ) -> Self {
        self.set_search_mode(search_mode);
        self
    }
}
