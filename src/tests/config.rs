use super::Config;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let cfg = Config::load_from(&dir.path().join("guitar-book.toml"));
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.file_extensions, vec!["md", "mdx", "json"]);
}

#[test]
fn test_load_site_settings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("guitar-book.toml");
    fs::write(
        &path,
        r#"
site_name = "English Songs"
base_url = "https://songs.example.com"
path_prefix = "/english"
youtube_url = "https://youtube.com/@songs"

[[sidebar]]
title = ""
pages = ["index", "seaside", "iris"]

[[footer_nav]]
text = "About"
href = "/about"
"#,
    )
    .unwrap();

    let cfg = Config::load_from(&path);
    assert_eq!(cfg.site_name, "English Songs");
    assert_eq!(cfg.path_prefix, "/english");
    assert_eq!(cfg.sidebar.len(), 1);
    assert_eq!(cfg.sidebar[0].pages, vec!["index", "seaside", "iris"]);
    assert_eq!(cfg.footer_nav[0].href, "/about");
    assert_eq!(cfg.file_extensions, vec!["md", "mdx", "json"]);
    assert_eq!(
        cfg.social_links(),
        vec![("YouTube", "https://youtube.com/@songs".to_string())]
    );
}

#[test]
fn test_contact_mail_comes_first() {
    let cfg = Config {
        contact_mail: Some("band@example.com".to_string()),
        spotify_url: Some("https://open.spotify.com/x".to_string()),
        ..Config::default()
    };
    let titles: Vec<_> = cfg.social_links().into_iter().map(|(t, _)| t).collect();
    assert_eq!(titles, vec!["Contact mail", "Spotify"]);
}

#[test]
fn test_parse_reports_config_error() {
    let err = Config::parse("site_name = [1, 2]").unwrap_err();
    assert!(matches!(err, crate::Error::Config(_)));
    assert!(err.to_string().starts_with("invalid config"));
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("guitar-book.toml");
    fs::write(&path, "site_name = [1, 2]\n").unwrap();
    assert_eq!(Config::load_from(&path), Config::default());
}
