//! Turns a directory of markdown posts with embedded front matter into an
//! in-memory [`catalog::Catalog`]: posts newest first, a `YYYY-MM-DD` lookup,
//! and the set of tags in use.
//!
//! Each document goes through [`split`], then [`front_matter`], then
//! [`markup`]; [`post`] puts the pieces together and [`library`] publishes the
//! finished catalog.

#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod chronological;
pub mod front_matter;
mod fs;
pub mod library;
pub mod markup;
pub mod post;
pub mod source;
pub mod split;
pub mod tags;
pub mod watch;

pub use catalog::{date_key, Catalog};
pub use library::{Library, LoadError, LoadReport};
pub use post::Post;
pub use source::{DirectorySource, MemorySource, Source};
