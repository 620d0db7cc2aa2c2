use super::{canonical_url, SeoMeta};
use crate::config::Config;
use crate::document::{ContentNode, NodeKind};
use crate::entry::Entry;

fn config() -> Config {
    Config {
        site_name: "English Songs".to_string(),
        site_description: "Chords for everyone".to_string(),
        base_url: "https://songs.example.com/".to_string(),
        path_prefix: "/english".to_string(),
        ..Config::default()
    }
}

#[test]
fn test_song_description_falls_back_to_author_then_site() {
    let cfg = config();
    let body = ContentNode::with_children(NodeKind::Document, vec![ContentNode::heading(2, "Chorus")]);
    let mut song = Entry::song("Iris", "/iris", body);
    song.author = Some("Goo Goo Dolls".to_string());

    let meta = SeoMeta::for_entry(&song, &cfg);
    assert_eq!(meta.title, "Iris - English Songs");
    assert_eq!(meta.description, "Goo Goo Dolls");
    assert_eq!(meta.url, "https://songs.example.com/english/iris");
    assert_eq!(meta.keywords, vec!["Chorus"]);

    song.author = None;
    assert_eq!(SeoMeta::for_entry(&song, &cfg).description, "Chords for everyone");
}

#[test]
fn test_canonical_url_without_prefix() {
    let cfg = Config {
        base_url: "https://x.org".to_string(),
        ..Config::default()
    };
    assert_eq!(canonical_url(&cfg, "/"), "https://x.org/");
}
