//! # Parallel Segmenter

use crate::segmentation::{SegmentOptions, TextSegmenter};

/// Batch-Level Parallel Segmenter Wrapper.
///
/// Enables ``rayon`` segmentation of batches; each text is segmented
/// independently against the shared, read-only dictionary.
#[derive(Debug, Clone)]
pub struct ParallelRayonSegmenter<D: TextSegmenter> {
    /// Inner segmenter.
    pub inner: D,
}

impl<D: TextSegmenter> ParallelRayonSegmenter<D> {
    /// Create a new parallel segmenter.
    ///
    /// ## Arguments
    /// * `inner` - The segmenter to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonSegmenter` instance.
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: TextSegmenter> TextSegmenter for ParallelRayonSegmenter<D> {
    fn segment_words(
        &self,
        text: &str,
        options: &SegmentOptions,
    ) -> Vec<String> {
        self.inner.segment_words(text, options)
    }

    fn segment_batch(
        &self,
        batch: &[String],
        options: &SegmentOptions,
    ) -> Vec<Vec<String>> {
        use ::rayon::prelude::*;

        batch
            .par_iter()
            .map(|text| self.inner.segment_words(text, options))
            .collect()
    }
}
