//! Configuration to acknowledge site preferences as well as set defaults.
//!
//! Specifically, we try to find a guitar-book.toml, and if present we load settings from there.
//! This provides the site identity used in meta tags, the sidebar layout, footer links and the
//! file extensions to scan for.

use crate::error::{Error, Result};
use facet::Facet;
use std::fs;
use std::path::Path;

/// Default config file looked up in the working directory.
pub const CONFIG_FILE: &str = "guitar-book.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// A titled group of pages in the sidebar.
pub struct SidebarCategory {
    /// Heading of the group; empty for an untitled group.
    #[facet(default)]
    pub title: String,
    /// Page paths (or file stems) in display order.
    #[facet(default)]
    pub pages: Vec<String>,
}

#[derive(Facet, Clone, Debug, PartialEq)]
/// A text link in the switcher menu footer.
pub struct FooterLink {
    /// Link text.
    pub text: String,
    /// Link target.
    pub href: String,
}

#[derive(Facet, Clone, Debug, PartialEq)]
/// Site preferences loaded from guitar-book.toml or falling back to defaults.
pub struct Config {
    #[facet(default = vec!["md".to_string(), "mdx".to_string(), "json".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = "Guitar Book".to_string())]
    /// Site name used in titles and the switcher menu.
    pub site_name: String,
    #[facet(default)]
    /// Description used when a page has none.
    pub site_description: String,
    #[facet(default)]
    /// Absolute site origin, e.g. `https://songs.example.com`.
    pub base_url: String,
    #[facet(default)]
    /// Path prefix the site is served under, e.g. `/english`.
    pub path_prefix: String,
    #[facet(default)]
    /// Twitter handle for card meta tags.
    pub twitter_handle: Option<String>,
    #[facet(default)]
    /// Sidebar groups in display order.
    pub sidebar: Vec<SidebarCategory>,
    #[facet(default)]
    /// Text links in the switcher menu footer.
    pub footer_nav: Vec<FooterLink>,
    #[facet(default)]
    /// Contact address shown as a mail link.
    pub contact_mail: Option<String>,
    #[facet(default)]
    /// Social profile link.
    pub twitter_url: Option<String>,
    #[facet(default)]
    /// Social profile link.
    pub youtube_url: Option<String>,
    #[facet(default)]
    /// Social profile link.
    pub instagram_url: Option<String>,
    #[facet(default)]
    /// Social profile link.
    pub soundcloud_url: Option<String>,
    #[facet(default)]
    /// Social profile link.
    pub spotify_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_extensions: vec!["md".to_string(), "mdx".to_string(), "json".to_string()],
            site_name: "Guitar Book".to_string(),
            site_description: String::new(),
            base_url: String::new(),
            path_prefix: String::new(),
            twitter_handle: None,
            sidebar: Vec::new(),
            footer_nav: Vec::new(),
            contact_mail: None,
            twitter_url: None,
            youtube_url: None,
            instagram_url: None,
            soundcloud_url: None,
            spotify_url: None,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from guitar-book.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults when it is
    /// missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            log::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        };
        Self::parse(&contents).unwrap_or_else(|e| {
            log::warn!("ignoring invalid {}: {e}", path.display());
            Self::default()
        })
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the TOML does not match.
    pub fn parse(contents: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::Config(format!("{e:?}")))
    }

    /// Social links that are set, as `(title, url)` pairs in menu order.
    #[must_use]
    pub fn social_links(&self) -> Vec<(&'static str, String)> {
        let mail = self
            .contact_mail
            .as_ref()
            .map(|mail| ("Contact mail", format!("mailto:{mail}")));
        let profiles = [
            ("Instagram", &self.instagram_url),
            ("Soundcloud", &self.soundcloud_url),
            ("Twitter", &self.twitter_url),
            ("YouTube", &self.youtube_url),
            ("Spotify", &self.spotify_url),
        ]
        .into_iter()
        .filter_map(|(title, url)| url.clone().map(|url| (title, url)));
        mail.into_iter().chain(profiles).collect()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
