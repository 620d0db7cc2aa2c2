use super::{render_page, transform_for, DisplayNode, PageContext, TocEntry};
use crate::config::Config;
use crate::document::{ContentNode, NodeKind};
use crate::entry::{Entry, EntryKind};
use crate::verse::VerseSegment;

fn song_body() -> ContentNode {
    ContentNode::with_children(
        NodeKind::Document,
        vec![
            ContentNode::heading(1, "<em>Intro</em> Part"),
            ContentNode::paragraph("[Am]Hello"),
            ContentNode::heading(2, "Chorus"),
            ContentNode::paragraph("[C]World [Am]again"),
            ContentNode::heading(2, "Chorus"),
            ContentNode::heading(3, "Chorus"),
            ContentNode::with_children(NodeKind::Rule, Vec::new()),
        ],
    )
}

#[test]
fn test_anchors_only_for_top_level_headings() {
    let page = render_page(&Entry::song("Seaside", "/seaside", song_body()), &Config::default());

    let anchors: Vec<_> = page
        .body
        .iter()
        .filter_map(|node| match node {
            DisplayNode::Heading { level, anchor, .. } => Some((*level, anchor.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(
        anchors,
        vec![
            (1, Some("intro-part".to_string())),
            (2, Some("chorus".to_string())),
            (2, Some("chorus-1".to_string())),
            (3, None),
        ]
    );
}

#[test]
fn test_toc_matches_heading_anchors() {
    let page = render_page(&Entry::song("Seaside", "/seaside", song_body()), &Config::default());
    assert_eq!(
        page.toc,
        vec![
            TocEntry {
                text: "Intro Part".to_string(),
                slug: "intro-part".to_string(),
            },
            TocEntry {
                text: "Chorus".to_string(),
                slug: "chorus".to_string(),
            },
            TocEntry {
                text: "Chorus".to_string(),
                slug: "chorus-1".to_string(),
            },
        ]
    );
    assert_eq!(page.toc[2].href(), "#chorus-1");
}

#[test]
fn test_all_chords_collected_across_verses() {
    let page = render_page(&Entry::song("Seaside", "/seaside", song_body()), &Config::default());
    assert_eq!(page.all_chords, vec!["Am", "C"]);
    assert_eq!(page.body.len(), 7);
    assert_eq!(page.body[6], DisplayNode::Rule);
}

#[test]
fn test_each_render_starts_fresh() {
    let entry = Entry::song("Seaside", "/seaside", song_body());
    let cfg = Config::default();
    assert_eq!(render_page(&entry, &cfg), render_page(&entry, &cfg));
}

#[test]
fn test_concurrent_renders_do_not_share_state() {
    let cfg = Config::default();
    let first = Entry::song(
        "One",
        "/one",
        ContentNode::with_children(
            NodeKind::Document,
            vec![ContentNode::heading(2, "Verse"), ContentNode::paragraph("[D]one")],
        ),
    );
    let second = Entry::song(
        "Two",
        "/two",
        ContentNode::with_children(
            NodeKind::Document,
            vec![ContentNode::heading(2, "Verse"), ContentNode::paragraph("[E]two")],
        ),
    );

    let (a, b) = std::thread::scope(|s| {
        let a = s.spawn(|| render_page(&first, &cfg));
        let b = s.spawn(|| render_page(&second, &cfg));
        (a.join().unwrap(), b.join().unwrap())
    });
    assert_eq!(a.all_chords, vec!["D"]);
    assert_eq!(b.all_chords, vec!["E"]);
    assert_eq!(a.toc[0].slug, "verse");
    assert_eq!(b.toc[0].slug, "verse");
}

#[test]
fn test_unknown_containers_render_their_children() {
    let json = r#"{"nodeType": "document", "content": [
        {"nodeType": "unordered-list", "content": [
            {"nodeType": "list-item", "content": [
                {"nodeType": "paragraph", "content": [{"nodeType": "text", "value": "[Am]Hello"}]}
            ]}
        ]},
        {"nodeType": "embedded-asset-block", "content": []}
    ]}"#;
    let body: ContentNode = serde_json::from_str(json).unwrap();
    let page = render_page(&Entry::song("List", "/list", body), &Config::default());

    assert_eq!(page.all_chords, vec!["Am"]);
    let [DisplayNode::Verse { lines }] = page.body.as_slice() else {
        panic!("expected a single verse, got {:?}", page.body);
    };
    assert_eq!(lines[0].visible_text(), "Hello");
}

#[test]
fn test_quote_renders_children() {
    let mut ctx = PageContext::new();
    let mut out = Vec::new();
    let node = ContentNode::with_children(NodeKind::Quote, vec![ContentNode::paragraph("[F]quoted")]);
    transform_for(node.kind)(&mut ctx, &node, &mut out);

    let DisplayNode::Quote { children } = &out[0] else {
        panic!("expected a quote, got {out:?}");
    };
    let DisplayNode::Verse { lines } = &children[0] else {
        panic!("expected a verse, got {children:?}");
    };
    assert_eq!(
        lines[0].segments[0],
        VerseSegment::Chord {
            symbol: "F".to_string()
        }
    );
    assert_eq!(ctx.chords.chords(), ["F"]);
}

#[test]
fn test_song_header_and_optional_parts() {
    let mut entry = Entry::song("Iris", "/iris", ContentNode::paragraph("plain"));
    let page = render_page(&entry, &Config::default());
    assert_eq!(page.header.author, None);
    assert_eq!(page.video, None);
    assert!(page.all_chords.is_empty());

    entry.author = Some("Goo Goo Dolls".to_string());
    entry.video_link = Some("https://youtu.be/abc".to_string());
    entry.favourite = true;
    let page = render_page(&entry, &Config::default());
    let author = page.header.author.unwrap();
    assert_eq!(author.href, "/goo-goo-dolls");
    assert_eq!(page.video.as_deref(), Some("https://www.youtube.com/embed/abc"));
    assert!(page.header.favourite);
}

#[test]
fn test_pages_have_no_author_link() {
    let mut entry = Entry::page("About", "/about", ContentNode::paragraph("hi"));
    entry.author = Some("Someone".to_string());
    let page = render_page(&entry, &Config::default());
    assert_eq!(page.kind, EntryKind::Page);
    assert_eq!(page.header.author, None);
}

#[test]
fn test_json_output_shape() {
    let page = render_page(&Entry::song("S", "/s", ContentNode::paragraph("[Am]la")), &Config::default());
    let json = serde_json::to_value(&page.body).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "type": "verse",
            "lines": [[
                {"type": "chord", "symbol": "Am"},
                {"type": "text", "content": "la"}
            ]]
        }])
    );
}
