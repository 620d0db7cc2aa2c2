//! Anchor slugs for headings.
//!
//! Slugs follow the GitHub heading-id rules so that in-page jump links built
//! elsewhere from the same text resolve to the heading. A [`Slugger`] remembers
//! every slug it issued and disambiguates repeats with a numeric suffix, so one
//! slugger must be created per rendered page.

use std::collections::HashSet;

/// Slug used when a heading has no sluggable characters at all.
pub const FALLBACK_SLUG: &str = "section";

/// Remove every `<...>` tag from `text`, keeping the text between tags.
///
/// An unterminated `<` is kept as literal text.
#[must_use]
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Convert plain text into a URL-fragment-safe token.
///
/// Lowercases, keeps alphanumerics, `-` and `_`, turns each whitespace
/// character into `-` and drops everything else. Hyphens are not collapsed.
#[must_use]
pub fn slugify(text: &str) -> String {
    text.trim()
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                Some(c)
            } else if c.is_whitespace() {
                Some('-')
            } else {
                None
            }
        })
        .flat_map(char::to_lowercase)
        .collect()
}

/// Issues unique slugs for the headings of a single page.
#[derive(Debug, Default, Clone)]
pub struct Slugger {
    issued: HashSet<String>,
}

impl Slugger {
    #[must_use]
    /// Start a fresh slugger with no issued slugs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the anchor slug for a raw heading, which may contain markup.
    ///
    /// Repeated headings get `-1`, `-2`, ... appended, skipping any suffixed
    /// form that was already issued.
    pub fn slug(&mut self, raw: &str) -> String {
        let mut base = slugify(&strip_tags(raw));
        if base.is_empty() {
            base = FALLBACK_SLUG.to_string();
        }

        let mut candidate = base.clone();
        let mut n = 0usize;
        while self.issued.contains(&candidate) {
            n += 1;
            candidate = format!("{base}-{n}");
        }
        self.issued.insert(candidate.clone());
        candidate
    }

    /// Forget every slug issued so far.
    pub fn reset(&mut self) {
        self.issued.clear();
    }
}

#[cfg(test)]
#[path = "tests/slug.rs"]
mod tests;
