//! Page metadata for search engines and link previews.

use crate::config::Config;
use crate::entry::{Entry, EntryKind};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Everything the `<head>` of a rendered page needs.
pub struct SeoMeta {
    /// Full document title, `"{title} - {site_name}"`.
    pub title: String,
    /// Page title alone, used for `og:title`.
    pub page_title: String,
    /// Page description, falling back to the site description.
    pub description: String,
    /// Site name.
    pub site_name: String,
    /// Canonical URL of the page.
    pub url: String,
    /// Preview image URL.
    pub image: Option<String>,
    /// Twitter handle for the card.
    pub twitter_handle: Option<String>,
    /// Level 1 and 2 heading texts, used as keywords.
    pub keywords: Vec<String>,
}

impl SeoMeta {
    #[must_use]
    /// Derive metadata for `entry` within the configured site.
    ///
    /// Songs describe themselves by their author when they have no description.
    pub fn for_entry(entry: &Entry, cfg: &Config) -> Self {
        let description = entry
            .description
            .clone()
            .or_else(|| match entry.kind {
                EntryKind::Song => entry.author.clone(),
                EntryKind::Page => None,
            })
            .unwrap_or_else(|| cfg.site_description.clone());

        Self {
            title: format!("{} - {}", entry.title, cfg.site_name),
            page_title: entry.title.clone(),
            description,
            site_name: cfg.site_name.clone(),
            url: canonical_url(cfg, &entry.path),
            image: entry.image.clone(),
            twitter_handle: cfg.twitter_handle.clone(),
            keywords: entry.body.heading_texts(),
        }
    }
}

/// Absolute URL of a site path: base URL, path prefix, then the path.
#[must_use]
pub fn canonical_url(cfg: &Config, path: &str) -> String {
    format!(
        "{}{}{}",
        cfg.base_url.trim_end_matches('/'),
        cfg.path_prefix.trim_end_matches('/'),
        path
    )
}

#[cfg(test)]
#[path = "tests/seo.rs"]
mod tests;
