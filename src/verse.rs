//! Chord-annotated lyric lines.
//!
//! Lyrics carry chords inline as bracketed markers, e.g. `[Am]Hello [C]world`.
//! A line is split into [`VerseSegment`]s in reading order: each marker becomes
//! a chord segment placed right where it occurred, and the lyric text between
//! markers is merged into text segments. Every chord seen on a page is also
//! collected into a [`ChordAccumulator`] for the end-of-page summary.

use serde::Serialize;
use std::collections::HashSet;

const MARKER_OPEN: char = '[';
const MARKER_CLOSE: char = ']';

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// One renderable unit of a parsed lyric line.
pub enum VerseSegment {
    /// Plain lyric text.
    Text {
        /// Text exactly as written, without any marker syntax.
        content: String,
    },
    /// A chord annotation applying to the text that follows it.
    Chord {
        /// Chord name, e.g. `Am7`.
        symbol: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A chord and the character offset in the visible line where it applies.
pub struct ChordToken {
    /// Chord name.
    pub symbol: String,
    /// Offset in chars into [`VerseLine::visible_text`].
    pub position: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
/// Parsed segments of one raw lyric line.
pub struct VerseLine {
    /// Segments in left-to-right order; never two text segments in a row.
    pub segments: Vec<VerseSegment>,
}

impl VerseLine {
    #[must_use]
    /// The lyric text with all chord markers removed.
    pub fn visible_text(&self) -> String {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                VerseSegment::Text { content } => Some(content.as_str()),
                VerseSegment::Chord { .. } => None,
            })
            .collect()
    }

    #[must_use]
    /// Chords of this line with their offsets into [`Self::visible_text`].
    pub fn chord_tokens(&self) -> Vec<ChordToken> {
        let mut position = 0;
        let mut tokens = Vec::new();
        for segment in &self.segments {
            match segment {
                VerseSegment::Text { content } => position += content.chars().count(),
                VerseSegment::Chord { symbol } => tokens.push(ChordToken {
                    symbol: symbol.clone(),
                    position,
                }),
            }
        }
        tokens
    }

    #[must_use]
    /// Whether the line carries at least one chord.
    pub fn has_chords(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, VerseSegment::Chord { .. }))
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(VerseSegment::Text { content }) = self.segments.last_mut() {
            content.push_str(text);
        } else {
            self.segments.push(VerseSegment::Text {
                content: text.to_string(),
            });
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Distinct chord symbols in the order they were first seen.
///
/// Create one per rendered song and pass it to every parse call for that song.
pub struct ChordAccumulator {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl ChordAccumulator {
    #[must_use]
    /// Start with no chords.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `symbol` unless it was already seen. Returns whether it was new.
    pub fn insert(&mut self, symbol: &str) -> bool {
        if self.seen.contains(symbol) {
            return false;
        }
        self.seen.insert(symbol.to_string());
        self.order.push(symbol.to_string());
        true
    }

    #[must_use]
    /// Chords in first-seen order.
    pub fn chords(&self) -> &[String] {
        &self.order
    }

    #[must_use]
    /// Number of distinct chords.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    /// True when no chord has been recorded.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    /// Consume the accumulator, returning the chords in first-seen order.
    pub fn into_chords(self) -> Vec<String> {
        self.order
    }
}

/// Split one raw lyric line into text and chord segments.
///
/// Chords are added to `chords`. An empty marker (`[]`) is dropped, and an
/// unterminated `[` or a `[` followed by another `[` before the `]` is kept
/// as text. All of these are logged.
pub fn parse_verse_line(raw: &str, chords: &mut ChordAccumulator) -> VerseLine {
    let mut line = VerseLine::default();
    let mut rest = raw;

    while let Some(open) = rest.find(MARKER_OPEN) {
        line.push_text(&rest[..open]);
        let after_open = &rest[open + MARKER_OPEN.len_utf8()..];

        let Some(close) = after_open.find(MARKER_CLOSE) else {
            log::warn!("unterminated chord marker in line {raw:?}");
            line.push_text(&rest[open..]);
            return line;
        };

        if let Some(inner) = after_open[..close].rfind(MARKER_OPEN) {
            log::warn!("stray {MARKER_OPEN:?} in line {raw:?}");
            let restart = open + MARKER_OPEN.len_utf8() + inner;
            line.push_text(&rest[open..restart]);
            rest = &rest[restart..];
            continue;
        }

        let symbol = after_open[..close].trim();
        if symbol.is_empty() {
            log::warn!("dropping empty chord marker in line {raw:?}");
        } else {
            chords.insert(symbol);
            line.segments.push(VerseSegment::Chord {
                symbol: symbol.to_string(),
            });
        }
        rest = &after_open[close + MARKER_CLOSE.len_utf8()..];
    }

    line.push_text(rest);
    line
}

/// Parse every line of a multi-line lyric block.
pub fn parse_verse(text: &str, chords: &mut ChordAccumulator) -> Vec<VerseLine> {
    text.lines()
        .map(|line| parse_verse_line(line.trim_end(), chords))
        .collect()
}

#[cfg(test)]
#[path = "tests/verse.rs"]
mod tests;
