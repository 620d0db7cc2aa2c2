//! Songs and pages as loaded from a content source.

use crate::document::ContentNode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Which page template an entry is rendered with.
pub enum EntryKind {
    #[default]
    /// Lyrics with chords, author link and optional video.
    Song,
    /// Free-form page with anchored headings.
    Page,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A song or page ready to be rendered.
///
/// Every field apart from `title`, `path` and `body` is optional content;
/// an absent value just leaves that part of the page out.
pub struct Entry {
    /// Template to render with.
    pub kind: EntryKind,
    /// Site path of the rendered page, e.g. `/seaside` or `/` for the index.
    pub path: String,
    /// Page title.
    pub title: String,
    /// Short description shown under the title and in meta tags.
    pub description: Option<String>,
    /// Link to a performance video.
    pub video_link: Option<String>,
    /// Name of the song's author.
    pub author: Option<String>,
    /// Marked as favourite.
    pub favourite: bool,
    /// Whether this page is the site's home page.
    pub is_homepage: bool,
    /// Preview image URL.
    pub image: Option<String>,
    /// When the entry was first published, as an ISO 8601 date or timestamp.
    pub created: Option<String>,
    /// Lyrics or page body.
    pub body: ContentNode,
}

impl Entry {
    #[must_use]
    /// A song with only a title, path and body; optional fields start empty.
    pub fn song(title: impl Into<String>, path: impl Into<String>, body: ContentNode) -> Self {
        Self {
            kind: EntryKind::Song,
            path: path.into(),
            title: title.into(),
            description: None,
            video_link: None,
            author: None,
            favourite: false,
            is_homepage: false,
            image: None,
            created: None,
            body,
        }
    }

    #[must_use]
    /// Same as [`Entry::song`] but rendered with the page template.
    pub fn page(title: impl Into<String>, path: impl Into<String>, body: ContentNode) -> Self {
        Self {
            kind: EntryKind::Page,
            ..Self::song(title, path, body)
        }
    }
}
