//! # `wordcarver` Word Segmentation
//!
//! Dictionary-driven word segmentation for unsegmented text;
//! principally CJK script, with a character-granularity mode for Latin
//! scripts.
//!
//! Rather than greedily taking the longest dictionary match, `wordcarver`
//! builds a weighted DAG over unit positions and picks the minimum-cost
//! path, where each word costs ``log2(total) - log2(frequency)``.
//!
//! See:
//! * [`units`] to split text into atomic units.
//! * [`dictionary`] to build and query a [`Dictionary`].
//! * [`loading`] to load dictionaries from files, readers, or maps.
//! * [`segmentation`] to segment text with a [`Segmenter`].
//!
//! ## Segmenting Text
//!
//! ```rust
//! use std::sync::Arc;
//! use wordcarver::{DictionaryBuilder, SegmentOptions, Segmenter, SplitOptions};
//!
//! let mut builder = DictionaryBuilder::new(SplitOptions::default());
//! builder.insert_text("北京", 100, "ns");
//! builder.insert_text("大学", 80, "n");
//! builder.insert_text("北京大学", 60, "nt");
//!
//! let segmenter = Segmenter::new(Arc::new(builder.finalize()));
//! let words = segmenter.segment("去北京大学", &SegmentOptions::default());
//! assert_eq!(words, vec!["去", "北京大学"]);
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod dictionary;
pub mod errors;
pub mod loading;
pub mod segmentation;
pub mod types;
pub mod units;

#[doc(inline)]
pub use dictionary::{Dictionary, DictionaryBuilder, PrefixMatch, Token};
#[doc(inline)]
pub use errors::{WCResult, WordcarverError};
#[doc(inline)]
pub use loading::{DictionaryEntry, DictionaryLoader, LoadReport, LoaderOptions};
#[doc(inline)]
pub use segmentation::{Segment, SegmentOptions, Segmenter, TextSegmenter};
#[doc(inline)]
pub use units::{Granularity, SplitOptions, Unit, UnitSplitter, split_units};
