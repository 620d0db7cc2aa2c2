//! Structured content documents.
//!
//! Both content sources end up as the same tree: Markdown files are converted
//! by [`crate::input`], and rich-text JSON from a headless CMS is decoded here.
//! Only the node kinds the renderer cares about get their own [`NodeKind`].

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Kind of a [`ContentNode`].
pub enum NodeKind {
    /// Root of a document.
    Document,
    /// Heading with its level (1-6).
    Heading(u8),
    /// Block of lyric or prose lines.
    Paragraph,
    /// A run of text; leaf node carrying a value.
    Text,
    /// Horizontal rule.
    Rule,
    /// Block quote wrapping other blocks.
    Quote,
    /// Any other container (lists, list items, embeds); only its children are rendered.
    Other,
}

impl NodeKind {
    #[must_use]
    /// Map a rich-text `nodeType` string to a kind.
    pub fn from_node_type(node_type: &str) -> Self {
        match node_type {
            "document" => Self::Document,
            "paragraph" => Self::Paragraph,
            "text" => Self::Text,
            "hr" => Self::Rule,
            "blockquote" => Self::Quote,
            other => other
                .strip_prefix("heading-")
                .and_then(|level| level.parse::<u8>().ok())
                .filter(|level| (1..=6).contains(level))
                .map_or(Self::Other, Self::Heading),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One node of a structured content document.
pub struct ContentNode {
    /// What this node is.
    pub kind: NodeKind,
    /// Text of a [`NodeKind::Text`] node.
    pub value: Option<String>,
    /// Child nodes in document order.
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    #[must_use]
    /// A leaf text run.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            value: Some(value.into()),
            children: Vec::new(),
        }
    }

    #[must_use]
    /// A node with children.
    pub fn with_children(kind: NodeKind, children: Vec<ContentNode>) -> Self {
        Self {
            kind,
            value: None,
            children,
        }
    }

    #[must_use]
    /// A heading of `level` holding a single text run.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::with_children(NodeKind::Heading(level), vec![Self::text(text)])
    }

    #[must_use]
    /// A paragraph holding a single text run.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::with_children(NodeKind::Paragraph, vec![Self::text(text)])
    }

    #[must_use]
    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(value) = &self.value {
            out.push_str(value);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Texts of every level 1 and level 2 heading, in document order.
    #[must_use]
    pub fn heading_texts(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_headings(&mut out);
        out
    }

    fn collect_headings(&self, out: &mut Vec<String>) {
        if let NodeKind::Heading(1 | 2) = self.kind {
            out.push(self.text_content());
            return;
        }
        for child in &self.children {
            child.collect_headings(out);
        }
    }
}

/// Rich-text node as exported by the CMS (`nodeType`, `value`, `content`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RichTextNode {
    node_type: String,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    content: Vec<RichTextNode>,
}

impl From<RichTextNode> for ContentNode {
    fn from(node: RichTextNode) -> Self {
        Self {
            kind: NodeKind::from_node_type(&node.node_type),
            value: node.value,
            children: node.content.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'de> Deserialize<'de> for ContentNode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RichTextNode::deserialize(deserializer).map(Into::into)
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
