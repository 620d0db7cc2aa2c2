//! Markdown format implementation using tree-sitter-md.
//!
//! This module provides tree-sitter queries for parsing markdown song files
//! and extracting their block structure from ATX (`#`) and setext headings,
//! paragraphs and thematic breaks.

use crate::formats::Format;

/// Tree-sitter queries for markdown lyric files.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn block_query(&self) -> &'static str {
        "[(atx_heading) (setext_heading) (paragraph) (thematic_break)] @block"
    }

    fn heading_level(&self, marker_kind: &str) -> Option<u8> {
        match marker_kind {
            "atx_h1_marker" | "setext_h1_underline" => Some(1),
            "atx_h2_marker" | "setext_h2_underline" => Some(2),
            "atx_h3_marker" => Some(3),
            "atx_h4_marker" => Some(4),
            "atx_h5_marker" => Some(5),
            "atx_h6_marker" => Some(6),
            _ => None,
        }
    }
}
