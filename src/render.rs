//! Turning an [`Entry`] into display nodes.
//!
//! Each content node kind maps to one transform function ([`transform_for`]).
//! Transforms share a [`PageContext`] holding the per-page slugger and chord
//! accumulator; [`render_page`] creates a fresh context for every call so
//! pages rendered side by side never see each other's state.

pub mod html;
pub mod sheet;

use crate::config::Config;
use crate::document::{ContentNode, NodeKind};
use crate::entry::{Entry, EntryKind};
use crate::seo::SeoMeta;
use crate::site::author_path;
use crate::slug::Slugger;
use crate::verse::{parse_verse, ChordAccumulator, VerseLine};
use crate::video;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// A node ready for any rendering target.
pub enum DisplayNode {
    /// Heading, with an anchor id for levels 1 and 2.
    Heading {
        /// Heading level (1-6).
        level: u8,
        /// Anchor slug, the target of `#<slug>` links.
        anchor: Option<String>,
        /// Heading text as written.
        text: String,
    },
    /// Lines of lyrics with chords.
    Verse {
        /// Parsed lines in order.
        lines: Vec<VerseLine>,
    },
    /// Quoted blocks.
    Quote {
        /// Rendered content of the quote.
        children: Vec<DisplayNode>,
    },
    /// Horizontal rule.
    Rule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A jump link to an anchored heading.
pub struct TocEntry {
    /// Heading text with markup removed.
    pub text: String,
    /// Anchor slug of the heading.
    pub slug: String,
}

impl TocEntry {
    #[must_use]
    /// In-page href, `#<slug>`.
    pub fn href(&self) -> String {
        format!("#{}", self.slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Link from a song to its author's page.
pub struct AuthorLink {
    /// Author name.
    pub name: String,
    /// Site path of the author page.
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Title block shown at the top of a page.
pub struct PageHeader {
    /// Page title.
    pub title: String,
    /// Description line.
    pub description: Option<String>,
    /// Whether the song is marked as favourite.
    pub favourite: bool,
    /// Author link for songs that name an author.
    pub author: Option<AuthorLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A fully composed page.
pub struct RenderedPage {
    /// Template the page was rendered with.
    pub kind: EntryKind,
    /// Site path.
    pub path: String,
    /// Whether this is the home page.
    pub is_homepage: bool,
    /// Head metadata.
    pub seo: SeoMeta,
    /// Title block.
    pub header: PageHeader,
    /// Embeddable video URL.
    pub video: Option<String>,
    /// Anchored headings in document order.
    pub toc: Vec<TocEntry>,
    /// Page body.
    pub body: Vec<DisplayNode>,
    /// Every chord used on the page, in first-seen order.
    pub all_chords: Vec<String>,
}

/// Mutable state of a single page render.
#[derive(Debug, Default)]
pub struct PageContext {
    /// Issues the heading anchors of this page.
    pub slugger: Slugger,
    /// Chords seen so far on this page.
    pub chords: ChordAccumulator,
    /// Anchored headings seen so far.
    pub toc: Vec<TocEntry>,
}

impl PageContext {
    #[must_use]
    /// A context with no slugs, chords or headings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `node` with the transform registered for its kind.
    pub fn render_node(&mut self, node: &ContentNode, out: &mut Vec<DisplayNode>) {
        transform_for(node.kind)(self, node, out);
    }

    fn render_children(&mut self, node: &ContentNode, out: &mut Vec<DisplayNode>) {
        for child in &node.children {
            self.render_node(child, out);
        }
    }
}

/// A pure transform from one content node to zero or more display nodes.
pub type Transform = fn(&mut PageContext, &ContentNode, &mut Vec<DisplayNode>);

#[must_use]
/// The transform used for nodes of `kind`.
pub fn transform_for(kind: NodeKind) -> Transform {
    match kind {
        NodeKind::Document | NodeKind::Other => PageContext::render_children,
        NodeKind::Heading(1 | 2) => anchored_heading,
        NodeKind::Heading(_) => plain_heading,
        NodeKind::Paragraph | NodeKind::Text => verse,
        NodeKind::Quote => quote,
        NodeKind::Rule => rule,
    }
}

fn heading_level(node: &ContentNode) -> u8 {
    match node.kind {
        NodeKind::Heading(level) => level,
        _ => 1,
    }
}

fn anchored_heading(ctx: &mut PageContext, node: &ContentNode, out: &mut Vec<DisplayNode>) {
    let text = node.text_content();
    let slug = ctx.slugger.slug(&text);
    ctx.toc.push(TocEntry {
        text: crate::slug::strip_tags(&text).trim().to_string(),
        slug: slug.clone(),
    });
    out.push(DisplayNode::Heading {
        level: heading_level(node),
        anchor: Some(slug),
        text,
    });
}

fn plain_heading(_ctx: &mut PageContext, node: &ContentNode, out: &mut Vec<DisplayNode>) {
    out.push(DisplayNode::Heading {
        level: heading_level(node),
        anchor: None,
        text: node.text_content(),
    });
}

fn verse(ctx: &mut PageContext, node: &ContentNode, out: &mut Vec<DisplayNode>) {
    let lines = parse_verse(&node.text_content(), &mut ctx.chords);
    if !lines.is_empty() {
        out.push(DisplayNode::Verse { lines });
    }
}

fn quote(ctx: &mut PageContext, node: &ContentNode, out: &mut Vec<DisplayNode>) {
    let mut children = Vec::new();
    ctx.render_children(node, &mut children);
    out.push(DisplayNode::Quote { children });
}

fn rule(_ctx: &mut PageContext, _node: &ContentNode, out: &mut Vec<DisplayNode>) {
    out.push(DisplayNode::Rule);
}

#[must_use]
/// Compose the full page for `entry`.
///
/// A fresh [`PageContext`] is used, so slugs and chords are scoped to this
/// page only.
pub fn render_page(entry: &Entry, cfg: &Config) -> RenderedPage {
    let mut ctx = PageContext::new();
    let mut body = Vec::new();
    ctx.render_node(&entry.body, &mut body);

    let author = match entry.kind {
        EntryKind::Song => entry.author.as_ref().map(|name| AuthorLink {
            name: name.clone(),
            href: author_path(name),
        }),
        EntryKind::Page => None,
    };

    RenderedPage {
        kind: entry.kind,
        path: entry.path.clone(),
        is_homepage: entry.is_homepage,
        seo: SeoMeta::for_entry(entry, cfg),
        header: PageHeader {
            title: entry.title.clone(),
            description: entry.description.clone(),
            favourite: entry.favourite,
            author,
        },
        video: entry.video_link.as_deref().and_then(video::embed_url),
        toc: ctx.toc,
        body,
        all_chords: ctx.chords.into_chords(),
    }
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
