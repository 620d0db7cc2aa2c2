//! Finding song files on disk and turning them into [`Entry`] values.
//!
//! Markdown files may start with a YAML front matter block delimited by `---`
//! lines; the rest is parsed with tree-sitter into a [`ContentNode`] tree.
//! JSON files hold a rich-text entry as exported from the CMS.

use crate::document::{ContentNode, NodeKind};
use crate::entry::{Entry, EntryKind};
use crate::error::{Error, Result};
use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use crate::slug::slugify;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor};
use walkdir::WalkDir;

/// Collect files under `paths` whose extension is one of `extensions`.
///
/// Directories are walked recursively without following symlinked
/// directories; explicitly named files are kept even when their extension
/// does not match. With no paths the current directory is searched. The
/// result is sorted and free of duplicates.
///
/// # Errors
///
/// Returns an error if a directory cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let paths = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths
    };

    let mut found = Vec::new();
    for path in paths {
        if !path.is_dir() {
            found.push(path);
            continue;
        }
        for entry in WalkDir::new(&path) {
            let entry = entry?;
            if !entry.file_type().is_dir() && has_extension(entry.path(), extensions) {
                found.push(entry.into_path());
            }
        }
    }
    found.sort();
    found.dedup();
    Ok(found)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Load one song or page file, choosing the decoder by extension.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn load_entry(path: &Path) -> Result<Entry> {
    let source = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        parse_json_entry(&source, path)
    } else {
        parse_markdown_entry(&source, path, &MarkdownFormat)
    }
}

/// Site path for a source file: `/` for `index`, otherwise `/<slug of stem>`.
#[must_use]
pub fn path_for_file(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    if stem.eq_ignore_ascii_case("index") {
        "/".to_string()
    } else {
        format!("/{}", slugify(stem))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct FrontMatter {
    title: Option<String>,
    description: Option<String>,
    #[serde(alias = "ytLink")]
    video_link: Option<String>,
    author: Option<String>,
    favourite: Option<bool>,
    #[serde(rename = "type")]
    kind: Option<EntryKind>,
    is_homepage: Option<bool>,
    image: Option<String>,
    date: Option<String>,
}

/// Split a leading `---` delimited front matter block from the body.
fn split_front_matter(source: &str) -> (Option<&str>, &str) {
    let Some(rest) = source
        .strip_prefix("---")
        .and_then(|r| r.strip_prefix('\n').or_else(|| r.strip_prefix("\r\n")))
    else {
        return (None, source);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, source)
}

/// Decode a Markdown song file with optional front matter.
///
/// The title falls back to the file stem when the front matter has none.
///
/// # Errors
///
/// Returns an error if the front matter is not valid YAML or tree-sitter
/// cannot parse the body.
pub fn parse_markdown_entry(source: &str, path: &Path, format: &dyn Format) -> Result<Entry> {
    let (front, body) = split_front_matter(source);
    let meta: FrontMatter = match front {
        Some(yaml) if !yaml.trim().is_empty() => {
            serde_yaml::from_str(yaml).map_err(|source| Error::FrontMatter {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => FrontMatter::default(),
    };

    let title = meta.title.unwrap_or_else(|| {
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string()
    });

    Ok(Entry {
        kind: meta.kind.unwrap_or_default(),
        path: path_for_file(path),
        title,
        description: meta.description,
        video_link: meta.video_link,
        author: meta.author,
        favourite: meta.favourite.unwrap_or(false),
        is_homepage: meta.is_homepage.unwrap_or(false),
        image: meta.image,
        created: meta.date,
        body: parse_markdown(body, path, format)?,
    })
}

/// Parse Markdown into a document node holding its blocks in order.
///
/// # Errors
///
/// Returns an error if the grammar or query is rejected or no tree is produced.
pub fn parse_markdown(source: &str, path: &Path, format: &dyn Format) -> Result<ContentNode> {
    let language = format.language();
    let mut parser = Parser::new();
    parser.set_language(&language)?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| Error::Parse(path.to_path_buf()))?;

    let query = Query::new(&language, format.block_query())?;
    let mut cursor = QueryCursor::new();
    let bytes = source.as_bytes();

    let mut blocks = Vec::new();
    let mut matches = cursor.matches(&query, tree.root_node(), bytes);
    while let Some(m) = matches.next() {
        for capture in m.captures {
            if let Some(block) = block_node(capture.node, bytes, format) {
                blocks.push(block);
            }
        }
    }
    log::debug!("{}: {} blocks", path.display(), blocks.len());
    Ok(ContentNode::with_children(NodeKind::Document, blocks))
}

fn block_node(node: Node, source: &[u8], format: &dyn Format) -> Option<ContentNode> {
    match node.kind() {
        "atx_heading" | "setext_heading" => {
            let mut walker = node.walk();
            let level = node
                .children(&mut walker)
                .find_map(|child| format.heading_level(child.kind()))?;
            let text = heading_content(node)
                .and_then(|content| content.utf8_text(source).ok())
                .map_or("", str::trim);
            Some(ContentNode::heading(level, text))
        }
        "paragraph" => {
            if node.parent().is_some_and(|p| p.kind() == "setext_heading") {
                return None;
            }
            let raw = node.utf8_text(source).ok()?.trim_end();
            if has_ancestor(node, "block_quote") {
                let text = raw
                    .lines()
                    .map(|line| line.trim_start().trim_start_matches('>').trim_start().trim_end())
                    .collect::<Vec<_>>()
                    .join("\n");
                Some(ContentNode::with_children(
                    NodeKind::Quote,
                    vec![ContentNode::paragraph(text)],
                ))
            } else {
                let text = raw.lines().map(str::trim_end).collect::<Vec<_>>().join("\n");
                Some(ContentNode::paragraph(text))
            }
        }
        "thematic_break" => Some(ContentNode::with_children(NodeKind::Rule, Vec::new())),
        _ => None,
    }
}

fn heading_content(node: Node) -> Option<Node> {
    node.child_by_field_name("heading_content").or_else(|| {
        let mut walker = node.walk();
        let found = node
            .children(&mut walker)
            .find(|child| matches!(child.kind(), "inline" | "paragraph"));
        found
    })
}

fn has_ancestor(node: Node, kind: &str) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.kind() == kind {
            return true;
        }
        current = parent.parent();
    }
    false
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CmsEntry {
    title: String,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    video_link: Option<String>,
    #[serde(default)]
    author: Option<CmsAuthor>,
    #[serde(default)]
    favourite: Option<bool>,
    #[serde(default)]
    is_homepage: Option<bool>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    lyrics: Option<RichText>,
    #[serde(default)]
    body: Option<RichText>,
    #[serde(default)]
    sys: Option<CmsSys>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CmsSys {
    #[serde(default, alias = "firstPublishedAt")]
    created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CmsAuthor {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RichText {
    json: ContentNode,
}

/// Decode a CMS entry. Entries with `lyrics` are songs, entries with `body` pages.
///
/// # Errors
///
/// Returns an error if the JSON does not match the entry shape.
pub fn parse_json_entry(source: &str, path: &Path) -> Result<Entry> {
    let cms: CmsEntry = serde_json::from_str(source)?;

    let (kind, body) = match (cms.lyrics, cms.body) {
        (Some(lyrics), _) => (EntryKind::Song, lyrics.json),
        (None, Some(body)) => (EntryKind::Page, body.json),
        (None, None) => {
            log::warn!("{}: entry has neither lyrics nor body", path.display());
            (
                EntryKind::Page,
                ContentNode::with_children(NodeKind::Document, Vec::new()),
            )
        }
    };

    let path = match cms.slug.as_deref().map(slug_path) {
        Some(path) if path != "/" => path,
        _ if cms.is_homepage.unwrap_or(false) => "/".to_string(),
        _ => format!("/{}", slugify(&cms.title)),
    };

    Ok(Entry {
        kind,
        path,
        title: cms.title,
        description: cms.description,
        video_link: cms.video_link,
        author: cms.author.and_then(|a| a.name),
        favourite: cms.favourite.unwrap_or(false),
        is_homepage: cms.is_homepage.unwrap_or(false),
        image: cms.image,
        created: cms.sys.and_then(|sys| sys.created_at),
        body,
    })
}

/// Site path for a CMS slug, slugifying each `/` separated segment.
///
/// Segments that slugify to nothing (`..`, `.`, empty) are dropped, so the
/// path never leaves the site root.
#[must_use]
pub fn slug_path(slug: &str) -> String {
    let segments: Vec<String> = slug
        .split('/')
        .map(slugify)
        .filter(|segment| !segment.is_empty())
        .collect();
    format!("/{}", segments.join("/"))
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
