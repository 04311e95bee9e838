//! # Weighted Dictionary
//!
//! A prefix-indexed store of weighted [`Token`]s.
//!
//! Dictionaries are built in two passes:
//! * a [`DictionaryBuilder`] accumulates ``(units, frequency, tag)`` entries,
//!   keeping the max frequency per key and the global frequency total;
//! * [`DictionaryBuilder::finalize`] derives every token's cost from the
//!   final total and yields an immutable [`Dictionary`].
//!
//! A finalized [`Dictionary`] is never mutated; share it with an `Arc`,
//! and publish a new one to reload.

mod dictionary_builder;
mod prefix_index;
mod token;
mod weighted_dictionary;

#[doc(inline)]
pub use dictionary_builder::*;
#[doc(inline)]
pub use prefix_index::*;
#[doc(inline)]
pub use token::*;
#[doc(inline)]
pub use weighted_dictionary::*;
