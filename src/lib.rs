//! chatwash is a profanity filter for chat messages.
//!
//! The [`MessageFilter`] engine owns a runtime-configurable block-list of
//! words, matches message tokens against it (directly and through common
//! character-substitution variants such as `d4mn`), and rewrites offending
//! tokens while preserving message structure. A thin actix-web layer in
//! [`server`] exposes the engine over HTTP.
//!
//! ```
//! use chatwash::{FilterLevel, MessageFilter};
//!
//! let mut filter = MessageFilter::new(FilterLevel::Moderate);
//! filter.add_word("damn").unwrap();
//!
//! assert_eq!(filter.filter_message("what the d4mn", true).unwrap(), "what the ****");
//! assert!(filter.is_clean("hello world"));
//! ```
//!
//! There is no built-in word list. An engine constructed from an unreadable
//! or empty source stays empty and filters nothing, rather than silently
//! falling back to a hidden default.

mod error;
mod filter;
mod level;
mod replacements;
mod report;
mod tokenize;
mod word_list;

pub mod server;

pub use error::{ExportError, LoadError, ValidationError};
pub use filter::MessageFilter;
pub use level::FilterLevel;
pub use report::{FilterReport, Statistics};

pub(crate) type Map<K, V> = rustc_hash::FxHashMap<K, V>;
pub(crate) type Set<T> = rustc_hash::FxHashSet<T>;
