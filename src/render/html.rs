//! Standalone HTML for rendered pages and site listings.

use crate::config::Config;
use crate::render::{DisplayNode, RenderedPage};
use crate::seo::{canonical_url, SeoMeta};
use crate::site::{AuthorIndex, NavLink, Site};
use crate::slug::strip_tags;
use crate::verse::{VerseLine, VerseSegment};
use std::fmt::Write;

/// Escape text for use in HTML content and attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// One lyric line: chords as `<sup>` directly before the text they precede.
#[must_use]
pub fn verse_line_html(line: &VerseLine) -> String {
    let mut out = String::new();
    for segment in &line.segments {
        match segment {
            VerseSegment::Text { content } => out.push_str(&escape(content)),
            VerseSegment::Chord { symbol } => {
                let _ = write!(out, r#"<sup class="chord">{}</sup>"#, escape(symbol));
            }
        }
    }
    out
}

fn write_nodes(out: &mut String, nodes: &[DisplayNode]) {
    for node in nodes {
        match node {
            DisplayNode::Heading {
                level,
                anchor: Some(anchor),
                text,
            } => {
                let _ = writeln!(
                    out,
                    r##"<h{level} id="{id}"><a class="heading-link" href="#{id}">{text}</a></h{level}>"##,
                    id = escape(anchor),
                    text = escape(&strip_tags(text)),
                );
            }
            DisplayNode::Heading {
                level,
                anchor: None,
                text,
            } => {
                let _ = writeln!(out, "<h{level}>{}</h{level}>", escape(&strip_tags(text)));
            }
            DisplayNode::Verse { lines } => {
                let body: Vec<String> = lines.iter().map(verse_line_html).collect();
                let _ = writeln!(out, r#"<p class="verse">{}</p>"#, body.join("<br/>\n"));
            }
            DisplayNode::Quote { children } => {
                out.push_str("<blockquote>\n");
                write_nodes(out, children);
                out.push_str("</blockquote>\n");
            }
            DisplayNode::Rule => out.push_str("<hr/>\n"),
        }
    }
}

fn write_head(out: &mut String, seo: &SeoMeta) {
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\"/>\n");
    let _ = writeln!(out, "<title>{}</title>", escape(&seo.title));
    let mut meta = |attr: &str, key: &str, value: &str| {
        let _ = writeln!(
            out,
            r#"<meta {attr}="{key}" content="{}"/>"#,
            escape(value)
        );
    };
    meta("name", "description", &seo.description);
    meta("property", "og:title", &seo.page_title);
    meta("property", "og:site_name", &seo.site_name);
    meta("property", "og:description", &seo.description);
    meta("property", "og:url", &seo.url);
    if let Some(image) = &seo.image {
        meta("property", "og:image", image);
        meta("name", "twitter:card", "summary_large_image");
    } else {
        meta("name", "twitter:card", "summary");
    }
    if let Some(handle) = &seo.twitter_handle {
        meta("name", "twitter:site", handle);
    }
    if !seo.keywords.is_empty() {
        meta("name", "keywords", &seo.keywords.join(", "));
    }
    out.push_str("</head>\n<body>\n");
}

fn write_links(out: &mut String, class: &str, links: &[NavLink]) {
    let _ = writeln!(out, r#"<ul class="{class}">"#);
    for link in links {
        let _ = write!(
            out,
            r#"<li><a href="{}">{}</a>"#,
            escape(&link.href),
            escape(&link.title)
        );
        if let Some(description) = &link.description {
            let _ = write!(out, "<p>{}</p>", escape(description));
        }
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n");
}

fn write_navigation(out: &mut String, site: &Site, cfg: &Config) {
    out.push_str("<nav class=\"switcher\">\n");
    let _ = writeln!(out, "<h6>{}</h6>", escape(&cfg.site_name));
    write_links(out, "menu", &site.menu);
    if !site.footer.is_empty() || !cfg.social_links().is_empty() {
        out.push_str("<footer>\n");
        for (text, target) in &site.footer {
            let _ = writeln!(
                out,
                r#"<a href="{}"{}>{}</a>"#,
                escape(target.href()),
                target.attributes(),
                escape(text)
            );
        }
        for (title, url) in cfg.social_links() {
            let _ = writeln!(
                out,
                r#"<a class="social" href="{}" title="{title}" target="_blank">{title}</a>"#,
                escape(&url)
            );
        }
        out.push_str("</footer>\n");
    }
    out.push_str("</nav>\n<aside class=\"sidebar\">\n");
    for group in &site.sidebar {
        if !group.title.is_empty() {
            let _ = writeln!(out, "<h4>{}</h4>", escape(&group.title));
        }
        write_links(out, "pages", &group.links);
    }
    out.push_str("</aside>\n");
}

/// Full HTML document for a rendered song or page.
#[must_use]
pub fn render_html(page: &RenderedPage, cfg: &Config, site: &Site) -> String {
    let mut out = String::new();
    write_head(&mut out, &page.seo);
    write_navigation(&mut out, site, cfg);

    out.push_str("<main>\n<header>\n");
    let star = if page.header.favourite {
        r#" <span role="img" aria-label="favourite">⭐</span>"#
    } else {
        ""
    };
    let _ = writeln!(out, "<h1>{}{star}</h1>", escape(&page.header.title));
    if let Some(author) = &page.header.author {
        let _ = writeln!(
            out,
            r#"<a class="author" href="{}" title="Show author">{}</a>"#,
            escape(&author.href),
            escape(&author.name)
        );
    }
    if let Some(description) = &page.header.description {
        let _ = writeln!(out, r#"<p class="description">{}</p>"#, escape(description));
    }
    out.push_str("</header>\n");

    if let Some(video) = &page.video {
        let _ = writeln!(
            out,
            r#"<div class="video"><iframe src="{}" frameborder="0" allowfullscreen></iframe></div>"#,
            escape(video)
        );
    }

    if !page.toc.is_empty() {
        out.push_str("<nav class=\"toc\">\n<ul>\n");
        for entry in &page.toc {
            let _ = writeln!(
                out,
                r#"<li><a href="{}">{}</a></li>"#,
                escape(&entry.href()),
                escape(&entry.text)
            );
        }
        out.push_str("</ul>\n</nav>\n");
    }

    out.push_str("<article>\n");
    write_nodes(&mut out, &page.body);
    out.push_str("</article>\n");

    if !page.all_chords.is_empty() {
        out.push_str("<section class=\"all-chords\">\n<h3>Chords used in this song</h3>\n<ul>\n");
        for chord in &page.all_chords {
            let _ = writeln!(out, "<li>{}</li>", escape(chord));
        }
        out.push_str("</ul>\n</section>\n");
    }

    out.push_str("</main>\n</body>\n</html>\n");
    out
}

/// HTML document listing `links` under `title`, e.g. all songs or favourites.
#[must_use]
pub fn render_listing_html(
    title: &str,
    path: &str,
    links: &[NavLink],
    cfg: &Config,
    site: &Site,
) -> String {
    let seo = SeoMeta {
        title: format!("{title} - {}", cfg.site_name),
        page_title: title.to_string(),
        description: cfg.site_description.clone(),
        site_name: cfg.site_name.clone(),
        url: canonical_url(cfg, path),
        image: None,
        twitter_handle: cfg.twitter_handle.clone(),
        keywords: Vec::new(),
    };
    let mut out = String::new();
    write_head(&mut out, &seo);
    write_navigation(&mut out, site, cfg);
    let _ = writeln!(out, "<main>\n<h1>{}</h1>", escape(title));
    write_links(&mut out, "listing", links);
    out.push_str("</main>\n</body>\n</html>\n");
    out
}

/// HTML page for one author with links to their songs.
#[must_use]
pub fn render_author_html(author: &AuthorIndex, cfg: &Config, site: &Site) -> String {
    render_listing_html(&author.name, &author.path, &author.songs, cfg, site)
}

#[cfg(test)]
#[path = "../tests/html.rs"]
mod tests;
