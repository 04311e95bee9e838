//! # Dictionary Loading
//!
//! Dictionary sources are line oriented, one entry per line:
//!
//! ```text
//! text frequency [tag]
//! ```
//!
//! [`DictionaryLoader`] feeds one or more sources into a
//! [`crate::DictionaryBuilder`], in order; malformed lines are logged and
//! skipped, and entries below [`LoaderOptions::min_frequency`] are filtered.

mod dictionary_entry;
mod dictionary_loader;
mod loader_options;

#[doc(inline)]
pub use dictionary_entry::*;
#[doc(inline)]
pub use dictionary_loader::*;
#[doc(inline)]
pub use loader_options::*;
