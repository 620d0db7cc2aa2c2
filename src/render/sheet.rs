//! Plain-text chord sheets: chord names on a row above the lyric they start.

use crate::render::{DisplayNode, RenderedPage};
use crate::slug::strip_tags;
use crate::verse::VerseLine;
use std::fmt::Write;

/// Chord row and lyric row for one line; lines without chords give only the lyric.
#[must_use]
pub fn sheet_line(line: &VerseLine) -> String {
    let lyric = line.visible_text();
    if !line.has_chords() {
        return lyric;
    }

    let mut chords = String::new();
    let mut width = 0;
    for token in line.chord_tokens() {
        let column = if width == 0 {
            token.position
        } else {
            token.position.max(width + 1)
        };
        chords.extend(std::iter::repeat_n(' ', column - width));
        chords.push_str(&token.symbol);
        width = column + token.symbol.chars().count();
    }

    if lyric.trim().is_empty() {
        chords
    } else {
        format!("{chords}\n{}", lyric.trim_end())
    }
}

fn write_nodes(out: &mut String, nodes: &[DisplayNode], indent: &str) {
    for node in nodes {
        match node {
            DisplayNode::Heading { text, .. } => {
                let _ = writeln!(out, "{indent}[{}]", strip_tags(text).trim());
            }
            DisplayNode::Verse { lines } => {
                for line in lines {
                    for row in sheet_line(line).lines() {
                        let _ = writeln!(out, "{indent}{row}");
                    }
                }
                out.push('\n');
            }
            DisplayNode::Quote { children } => write_nodes(out, children, &format!("{indent}> ")),
            DisplayNode::Rule => {
                let _ = writeln!(out, "{indent}----\n");
            }
        }
    }
}

/// Render a page as a chord sheet with a title block and a chord summary.
#[must_use]
pub fn render_sheet(page: &RenderedPage) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", page.header.title);
    if let Some(author) = &page.header.author {
        let _ = writeln!(out, "{}", author.name);
    }
    out.push('\n');
    write_nodes(&mut out, &page.body, "");
    if !page.all_chords.is_empty() {
        let _ = writeln!(out, "Chords: {}", page.all_chords.join(" "));
    }
    out
}

#[cfg(test)]
#[path = "../tests/sheet.rs"]
mod tests;
