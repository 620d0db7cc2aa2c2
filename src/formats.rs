//! Format trait and implementations for source document types.
//!
//! This module defines the `Format` trait which abstracts over the markup a
//! song can be written in by providing the tree-sitter grammar and queries
//! needed to pull its blocks out in document order.

pub mod markdown;

/// Tree-sitter grammar and queries for one markup language.
pub trait Format {
    /// Grammar used to parse the source.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing headings, paragraphs and rules as `@block`, in document order.
    fn block_query(&self) -> &str;
    /// Heading level for a heading marker node kind, if it is one.
    fn heading_level(&self, marker_kind: &str) -> Option<u8>;
}
