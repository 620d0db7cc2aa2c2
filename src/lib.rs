//! guitar-book: song lyrics with chord annotations rendered into browsable pages.
//!
//! Songs come from Markdown files with front matter or rich-text JSON entries.
//! Headings get unique anchor slugs, lyric lines are split into text and chord
//! segments, and the result is composed into pages that can be emitted as JSON,
//! HTML or a plain-text chord sheet.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod document;
pub mod entry;
pub mod error;
pub mod formats;
pub mod input;
pub mod links;
pub mod render;
pub mod seo;
pub mod site;
pub mod slug;
pub mod verse;
pub mod video;

pub use error::{Error, Result};
