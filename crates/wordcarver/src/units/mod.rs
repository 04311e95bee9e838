//! # Unit Splitting
//!
//! Splits raw text into ordered atomic comparison [`Unit`]s.
//!
//! The same [`SplitOptions`] must be used to split dictionary words and
//! query text; a [`crate::Dictionary`] records the options it was built with.
//!
//! * [`Granularity::Word`] - runs of Latin letters/digits are one unit,
//!   every CJK codepoint is its own unit.
//! * [`Granularity::Character`] - only digit runs coalesce; each letter is
//!   its own unit, so the segmenter can recombine letters into words.
//! * `phrase` - hyphen-delimited chunks are units, for multi-word phrases.

mod split_options;
mod unit;
mod unit_kind;
mod unit_splitter;

#[doc(inline)]
pub use split_options::*;
#[doc(inline)]
pub use unit::*;
#[doc(inline)]
pub use unit_kind::*;
#[doc(inline)]
pub use unit_splitter::*;
