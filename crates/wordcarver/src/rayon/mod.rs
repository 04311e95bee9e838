//! # Rayon Utilities
//!
//! ``rayon`` powered wrappers for batch segmentation.

mod parallel_segmenter;

pub use parallel_segmenter::ParallelRayonSegmenter;
