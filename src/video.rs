//! Embeddable URLs for performance videos.

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Turn a video link into a URL suitable for an `<iframe>`.
///
/// YouTube watch, short-link, shorts and embed URLs become
/// `https://www.youtube.com/embed/<id>`. Other http(s) links are passed
/// through unchanged; anything else yields `None`.
#[must_use]
pub fn embed_url(link: &str) -> Option<String> {
    let link = link.trim();
    let Some(rest) = link
        .strip_prefix("https://")
        .or_else(|| link.strip_prefix("http://"))
    else {
        log::warn!("ignoring video link without http(s) scheme: {link:?}");
        return None;
    };

    let (host, path) = rest.split_once('/').unwrap_or((rest, ""));
    let host = host.trim_start_matches("www.").trim_start_matches("m.");

    let id = match host {
        "youtu.be" => Some(path),
        "youtube.com" | "youtube-nocookie.com" => youtube_id(path),
        _ => None,
    };

    match id.map(|id| id.split(['?', '&', '#', '/']).next().unwrap_or_default()) {
        Some(id) if !id.is_empty() => Some(format!("{EMBED_BASE}{id}")),
        Some(_) => {
            log::warn!("video link has no video id: {link:?}");
            None
        }
        None => Some(link.to_string()),
    }
}

fn youtube_id(path: &str) -> Option<&str> {
    if let Some(query) = path.strip_prefix("watch?") {
        return query
            .split('&')
            .find_map(|pair| pair.strip_prefix("v="))
            .or(Some(""));
    }
    path.strip_prefix("embed/")
        .or_else(|| path.strip_prefix("shorts/"))
        .or_else(|| path.strip_prefix("v/"))
}

#[cfg(test)]
#[path = "tests/video.rs"]
mod tests;
