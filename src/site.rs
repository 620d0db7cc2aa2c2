//! Site-wide navigation built from all loaded entries.
//!
//! Covers the sidebar, the author pages, the favourites, newest and
//! all-songs listings, and the switcher menu with its footer links.

use crate::config::Config;
use crate::entry::{Entry, EntryKind};
use crate::links::{classify, LinkTarget};
use crate::slug::slugify;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Path of the favourites listing.
pub const FAVOURITES_PATH: &str = "/favourites";
/// Path of the all-songs listing.
pub const SONGS_PATH: &str = "/songs";
/// Path of the all-authors listing.
pub const AUTHORS_PATH: &str = "/authors";
/// Path of the newest-songs listing.
pub const NEWEST_PATH: &str = "/newest";
/// Number of songs on the newest-songs listing.
pub const NEWEST_LIMIT: usize = 20;

/// Paths taken by the site's own listings.
pub const LISTING_PATHS: [&str; 4] = [FAVOURITES_PATH, NEWEST_PATH, SONGS_PATH, AUTHORS_PATH];

/// Keep the first entry for every site path, dropping later entries that
/// reuse a path or take one of the [`LISTING_PATHS`]. Dropped entries are
/// logged.
#[must_use]
pub fn unique_paths(entries: Vec<Entry>) -> Vec<Entry> {
    let mut taken: HashSet<String> = LISTING_PATHS.iter().map(ToString::to_string).collect();
    entries
        .into_iter()
        .filter(|entry| {
            let fresh = taken.insert(entry.path.clone());
            if !fresh {
                log::warn!("{:?} at {} clashes with another page, skipping", entry.title, entry.path);
            }
            fresh
        })
        .collect()
}

#[must_use]
/// Site path of an author's page, `/<slug of name>`.
pub fn author_path(name: &str) -> String {
    format!("/{}", slugify(name))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A titled link to a page.
pub struct NavLink {
    /// Link text.
    pub title: String,
    /// Site path.
    pub href: String,
    /// Secondary line under the title.
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One group of links in the sidebar.
pub struct SidebarGroup {
    /// Group heading; empty for the untitled group.
    pub title: String,
    /// Pages in configured order.
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// An author and their songs.
pub struct AuthorIndex {
    /// Author name as written on the songs.
    pub name: String,
    /// Site path of the author page.
    pub path: String,
    /// Songs by this author, sorted by title.
    pub songs: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Navigation shared by every page of the site.
pub struct Site {
    /// Sidebar groups.
    pub sidebar: Vec<SidebarGroup>,
    /// Every song, sorted by title.
    pub songs: Vec<NavLink>,
    /// Songs marked as favourite, sorted by title.
    pub favourites: Vec<NavLink>,
    /// Most recently created songs, newest first.
    pub newest: Vec<NavLink>,
    /// Authors sorted by name.
    pub authors: Vec<AuthorIndex>,
    /// Entries of the switcher menu.
    pub menu: Vec<NavLink>,
    /// Footer links of the switcher menu, text and resolved target.
    #[serde(skip)]
    pub footer: Vec<(String, LinkTarget)>,
}

fn nav_link(entry: &Entry) -> NavLink {
    NavLink {
        title: entry.title.clone(),
        href: entry.path.clone(),
        description: entry.author.clone().or_else(|| entry.description.clone()),
    }
}

/// Normalise a configured sidebar reference (`index`, `seaside`, `/seaside`) to a path.
fn sidebar_path(reference: &str) -> String {
    let name = reference.trim().trim_start_matches('/');
    if name.is_empty() || name.eq_ignore_ascii_case("index") {
        "/".to_string()
    } else {
        format!("/{}", slugify(name))
    }
}

fn sorted_by_title(mut links: Vec<NavLink>) -> Vec<NavLink> {
    links.sort_by_cached_key(|link| link.title.to_lowercase());
    links
}

impl Site {
    #[must_use]
    /// Build the navigation for `entries`.
    ///
    /// Without configured sidebar groups, the sidebar holds one untitled group
    /// with every entry sorted by title. Sidebar references that match no entry
    /// are skipped with a warning.
    pub fn build(entries: &[Entry], cfg: &Config) -> Self {
        let by_path: HashMap<&str, &Entry> =
            entries.iter().map(|e| (e.path.as_str(), e)).collect();

        let sidebar = if cfg.sidebar.is_empty() {
            vec![SidebarGroup {
                title: String::new(),
                links: sorted_by_title(entries.iter().map(nav_link).collect()),
            }]
        } else {
            cfg.sidebar
                .iter()
                .map(|category| SidebarGroup {
                    title: category.title.clone(),
                    links: category
                        .pages
                        .iter()
                        .filter_map(|reference| {
                            let path = sidebar_path(reference);
                            let found = by_path.get(path.as_str()).map(|e| nav_link(e));
                            if found.is_none() {
                                log::warn!("sidebar entry {reference:?} matches no page");
                            }
                            found
                        })
                        .collect(),
                })
                .collect()
        };

        let songs: Vec<&Entry> = entries
            .iter()
            .filter(|e| e.kind == EntryKind::Song)
            .collect();

        let mut by_author: BTreeMap<String, (String, Vec<NavLink>)> = BTreeMap::new();
        for song in &songs {
            if let Some(name) = &song.author {
                by_author
                    .entry(author_path(name))
                    .or_insert_with(|| (name.clone(), Vec::new()))
                    .1
                    .push(nav_link(song));
            }
        }
        let mut authors: Vec<AuthorIndex> = by_author
            .into_iter()
            .map(|(path, (name, songs))| AuthorIndex {
                name,
                path,
                songs: sorted_by_title(songs),
            })
            .collect();
        authors.sort_by_cached_key(|a| a.name.to_lowercase());

        Self {
            sidebar,
            favourites: sorted_by_title(
                songs.iter().filter(|e| e.favourite).map(|e| nav_link(e)).collect(),
            ),
            newest: newest(&songs),
            songs: sorted_by_title(songs.iter().map(|e| nav_link(e)).collect()),
            authors,
            menu: switcher_menu(),
            footer: cfg
                .footer_nav
                .iter()
                .map(|link| (link.text.clone(), classify(&link.href, cfg)))
                .collect(),
        }
    }

    #[must_use]
    /// Author index for a site path, if one exists.
    pub fn author(&self, path: &str) -> Option<&AuthorIndex> {
        self.authors.iter().find(|a| a.path == path)
    }

    #[must_use]
    /// Links to every author page.
    pub fn author_links(&self) -> Vec<NavLink> {
        self.authors
            .iter()
            .map(|a| NavLink {
                title: a.name.clone(),
                href: a.path.clone(),
                description: Some(format!("{} songs", a.songs.len())),
            })
            .collect()
    }
}

/// Songs with a creation date, newest first, ties broken by title.
fn newest(songs: &[&Entry]) -> Vec<NavLink> {
    let mut dated: Vec<(&str, NavLink)> = songs
        .iter()
        .filter_map(|song| song.created.as_deref().map(|created| (created, nav_link(song))))
        .collect();
    dated.sort_by(|(a, a_link), (b, b_link)| {
        b.cmp(a)
            .then_with(|| a_link.title.to_lowercase().cmp(&b_link.title.to_lowercase()))
    });
    dated
        .into_iter()
        .take(NEWEST_LIMIT)
        .map(|(_, link)| link)
        .collect()
}

fn switcher_menu() -> Vec<NavLink> {
    [
        (
            "Favourites",
            FAVOURITES_PATH,
            "Check all songs marked as favourites.",
        ),
        (
            "20 newest songs",
            NEWEST_PATH,
            "Check out the most recently added songs.",
        ),
        ("All songs", SONGS_PATH, "Navigate to the list of all songs."),
        (
            "All authors",
            AUTHORS_PATH,
            "Navigate to the list of all authors.",
        ),
    ]
    .into_iter()
    .map(|(title, href, description)| NavLink {
        title: title.to_string(),
        href: href.to_string(),
        description: Some(description.to_string()),
    })
    .collect()
}

#[cfg(test)]
#[path = "tests/site.rs"]
mod tests;
