//! # Text Segmenter Trait

use crate::segmentation::{SegmentOptions, Segmenter};

/// Common interface for text segmenters and their wrappers.
pub trait TextSegmenter: Send + Sync {
    /// Segment `text` into rendered words.
    fn segment_words(
        &self,
        text: &str,
        options: &SegmentOptions,
    ) -> Vec<String>;

    /// Segment a batch of texts.
    ///
    /// The default implementation is sequential.
    fn segment_batch(
        &self,
        batch: &[String],
        options: &SegmentOptions,
    ) -> Vec<Vec<String>> {
        batch
            .iter()
            .map(|text| self.segment_words(text, options))
            .collect()
    }
}

impl TextSegmenter for Segmenter {
    fn segment_words(
        &self,
        text: &str,
        options: &SegmentOptions,
    ) -> Vec<String> {
        self.segment(text, options)
    }
}
