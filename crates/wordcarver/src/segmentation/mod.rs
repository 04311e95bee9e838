//! # DAG Segmentation
//!
//! [`Segmenter`] turns a unit sequence into the minimum-cost sequence of
//! dictionary tokens.
//!
//! The graph is implicit: positions ``0..=n`` are nodes, and every token
//! matching at position `i` with `k` units is an edge ``i -> i + k``
//! weighted by the token cost. Positions with no single-unit match get a
//! fallback edge, so every input has a full-coverage path.
//!
//! [`SegmentOptions`] selects rendering (`joiner`), forced exclusion of one
//! known word (`exclude`), and search-mode re-segmentation.

mod jumper;
mod segment;
mod segment_options;
mod segmenter;
mod text_segmenter;

#[doc(inline)]
pub use jumper::{FALLBACK_COST, FALLBACK_FREQUENCY, FALLBACK_TAG};
#[doc(inline)]
pub use segment::*;
#[doc(inline)]
pub use segment_options::*;
#[doc(inline)]
pub use segmenter::*;
#[doc(inline)]
pub use text_segmenter::*;
