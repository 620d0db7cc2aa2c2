//! Classifying link targets the way the page templates open them.

use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Where a link points relative to the site.
pub enum LinkTarget {
    /// Site-internal path with the configured path prefix removed.
    Internal(String),
    /// In-page jump to a heading anchor.
    Anchor(String),
    /// Absolute URL on this site.
    SameSite(String),
    /// Anything else; opened in a new tab.
    External(String),
}

impl LinkTarget {
    #[must_use]
    /// The href to emit.
    pub fn href(&self) -> &str {
        match self {
            Self::Internal(href) | Self::Anchor(href) | Self::SameSite(href) | Self::External(href) => {
                href
            }
        }
    }

    #[must_use]
    /// Extra attributes for an `<a>` tag.
    pub fn attributes(&self) -> &'static str {
        match self {
            Self::External(_) => r#" target="_blank" rel="noopener noreferrer""#,
            _ => "",
        }
    }
}

/// Classify `href` against the site's base URL and path prefix.
#[must_use]
pub fn classify(href: &str, cfg: &Config) -> LinkTarget {
    if href.starts_with('/') {
        let prefix = cfg.path_prefix.trim_end_matches('/');
        let path = match href.strip_prefix(prefix) {
            Some(rest) if !prefix.is_empty() && (rest.is_empty() || rest.starts_with('/')) => {
                if rest.is_empty() { "/" } else { rest }
            }
            _ => href,
        };
        LinkTarget::Internal(path.to_string())
    } else if href.starts_with('#') {
        LinkTarget::Anchor(href.to_string())
    } else if !cfg.base_url.is_empty() && href.starts_with(&cfg.base_url) {
        LinkTarget::SameSite(href.to_string())
    } else {
        LinkTarget::External(href.to_string())
    }
}

#[cfg(test)]
#[path = "tests/links.rs"]
mod tests;
