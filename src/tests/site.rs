use super::{author_path, unique_paths, Site, AUTHORS_PATH, NEWEST_LIMIT, NEWEST_PATH, SONGS_PATH};
use crate::config::{Config, FooterLink, SidebarCategory};
use crate::document::ContentNode;
use crate::entry::Entry;
use crate::links::LinkTarget;

fn song(title: &str, path: &str, author: Option<&str>, favourite: bool) -> Entry {
    let mut entry = Entry::song(title, path, ContentNode::paragraph("la"));
    entry.author = author.map(str::to_string);
    entry.favourite = favourite;
    entry
}

fn entries() -> Vec<Entry> {
    vec![
        Entry::page("Home", "/", ContentNode::paragraph("hi")),
        song("Seaside", "/seaside", Some("The Kooks"), true),
        song("Naive", "/naive", Some("The Kooks"), false),
        song("Iris", "/iris", Some("Goo Goo Dolls"), true),
        song("Cringe", "/cringe", None, false),
    ]
}

#[test]
fn test_author_path_uses_slugify() {
    assert_eq!(author_path("Goo Goo Dolls"), "/goo-goo-dolls");
    assert_eq!(author_path("AC/DC"), "/acdc");
}

#[test]
fn test_default_sidebar_lists_everything_by_title() {
    let site = Site::build(&entries(), &Config::default());
    assert_eq!(site.sidebar.len(), 1);
    let titles: Vec<_> = site.sidebar[0].links.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, vec!["Cringe", "Home", "Iris", "Naive", "Seaside"]);
}

#[test]
fn test_configured_sidebar_keeps_order_and_skips_unknown() {
    let cfg = Config {
        sidebar: vec![SidebarCategory {
            title: "Songs".to_string(),
            pages: vec![
                "index".to_string(),
                "seaside".to_string(),
                "missing".to_string(),
                "/iris".to_string(),
            ],
        }],
        ..Config::default()
    };
    let site = Site::build(&entries(), &cfg);
    let hrefs: Vec<_> = site.sidebar[0].links.iter().map(|l| l.href.as_str()).collect();
    assert_eq!(hrefs, vec!["/", "/seaside", "/iris"]);
}

#[test]
fn test_author_index_and_favourites() {
    let site = Site::build(&entries(), &Config::default());

    let names: Vec<_> = site.authors.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Goo Goo Dolls", "The Kooks"]);

    let kooks = site.author("/the-kooks").unwrap();
    let songs: Vec<_> = kooks.songs.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(songs, vec!["Naive", "Seaside"]);

    let favourites: Vec<_> = site.favourites.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(favourites, vec!["Iris", "Seaside"]);
    assert_eq!(site.songs.len(), 4);
    assert_eq!(site.author_links()[1].description.as_deref(), Some("2 songs"));
}

#[test]
fn test_menu_and_footer() {
    let cfg = Config {
        footer_nav: vec![FooterLink {
            text: "Blog".to_string(),
            href: "https://blog.example.com".to_string(),
        }],
        ..Config::default()
    };
    let site = Site::build(&entries(), &cfg);
    assert!(site.menu.iter().any(|m| m.href == AUTHORS_PATH));
    assert!(site.menu.iter().any(|m| m.href == NEWEST_PATH));
    assert_eq!(
        site.footer,
        vec![(
            "Blog".to_string(),
            LinkTarget::External("https://blog.example.com".to_string())
        )]
    );
}

#[test]
fn test_newest_songs_by_creation_date() {
    let mut entries = entries();
    entries[1].created = Some("2021-01-01".to_string());
    entries[2].created = Some("2022-06-30T08:00:00Z".to_string());
    entries[3].created = Some("2021-01-01".to_string());
    entries[0].created = Some("2030-01-01".to_string());

    let site = Site::build(&entries, &Config::default());
    let titles: Vec<_> = site.newest.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Naive", "Iris", "Seaside"]);

    let many: Vec<Entry> = (0..30)
        .map(|i| {
            let mut entry = song(&format!("Song {i:02}"), &format!("/song-{i}"), None, false);
            entry.created = Some(format!("2020-01-{:02}", i + 1));
            entry
        })
        .collect();
    let site = Site::build(&many, &Config::default());
    assert_eq!(site.newest.len(), NEWEST_LIMIT);
    assert_eq!(site.newest[0].title, "Song 29");
}

#[test]
fn test_unique_paths_keeps_first_entry() {
    let kept = unique_paths(vec![
        song("Iris", "/iris", Some("Goo Goo Dolls"), false),
        song("Iris (live)", "/iris", None, false),
        song("Songs", SONGS_PATH, None, false),
        song("Seaside", "/seaside", None, false),
    ]);
    let titles: Vec<_> = kept.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Iris", "Seaside"]);
}
