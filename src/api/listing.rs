//! Scraping of plain HTML directory listings (the kind `python -m http.server`,
//! nginx `autoindex` or Apache produce).

use reqwest::Url;

use crate::api::models::{Album, Track};
use crate::utils::decode_name;

const TRACK_SUFFIX: &str = ".mp3";

/// Every `href` attribute value in document order.
pub fn extract_links(html: &str) -> Vec<String> {
    let lower = html.to_ascii_lowercase();
    let bytes = html.as_bytes();
    let mut links = Vec::new();
    let mut cursor = 0;

    while let Some(found) = lower[cursor..].find("href") {
        let mut pos = cursor + found + "href".len();
        pos = skip_whitespace(bytes, pos);
        if pos >= bytes.len() || bytes[pos] != b'=' {
            cursor = pos;
            continue;
        }
        pos = skip_whitespace(bytes, pos + 1);
        if pos >= bytes.len() {
            break;
        }

        let (start, end) = match bytes[pos] {
            quote @ (b'"' | b'\'') => {
                let start = pos + 1;
                match html[start..].find(quote as char) {
                    Some(offset) => (start, start + offset),
                    None => break,
                }
            }
            _ => {
                let end = html[pos..]
                    .find(|c: char| c.is_ascii_whitespace() || c == '>')
                    .map(|offset| pos + offset)
                    .unwrap_or(html.len());
                (pos, end)
            }
        };

        links.push(html[start..end].replace("&amp;", "&"));
        cursor = end.max(pos + 1).min(html.len());
    }

    links
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

fn push_unique(out: &mut Vec<String>, name: String) {
    if !out.contains(&name) {
        out.push(name);
    }
}

fn directory_of(path: &str) -> &str {
    match path.rfind('/') {
        Some(end) => &path[..=end],
        None => path,
    }
}

/// A link that names a direct child of the listed directory.
struct ChildEntry {
    name: String,
    is_dir: bool,
}

/// Resolve `href` against the listing URL and keep it only when it stays on
/// the same origin and sits directly inside the listed directory. Parent,
/// sibling, nested and off-site links yield `None`.
fn child_entry(listing: &Url, href: &str) -> Option<ChildEntry> {
    let target = listing.join(href).ok()?;
    if target.origin() != listing.origin() {
        return None;
    }

    let path = target.path();
    let is_dir = path.ends_with('/');
    let (parent, name) = path.trim_end_matches('/').rsplit_once('/')?;
    if decode_name(format!("{parent}/")) != decode_name(directory_of(listing.path())) {
        return None;
    }

    let name = decode_name(name);
    if name.is_empty() || name == "." || name == ".." {
        return None;
    }
    Some(ChildEntry { name, is_dir })
}

/// Album folders: sub-directories of the listed directory.
pub fn album_folders(listing: &Url, html: &str) -> Vec<String> {
    let mut folders = Vec::new();
    for href in extract_links(html) {
        match child_entry(listing, &href) {
            Some(entry) if entry.is_dir => push_unique(&mut folders, entry.name),
            _ => {}
        }
    }
    folders
}

/// Track file names: `.mp3` files of the listed directory, decoded.
pub fn track_names(listing: &Url, html: &str) -> Vec<String> {
    let mut names = Vec::new();
    for href in extract_links(html) {
        let Some(entry) = child_entry(listing, &href) else {
            continue;
        };
        if !entry.is_dir && entry.name.to_ascii_lowercase().ends_with(TRACK_SUFFIX) {
            push_unique(&mut names, entry.name);
        }
    }
    names
}

pub fn parse_albums(songs_root: &str, listing: &Url, html: &str) -> Vec<Album> {
    album_folders(listing, html)
        .into_iter()
        .map(|folder| Album::new(songs_root, folder, None, None))
        .collect()
}

pub fn parse_tracks(songs_root: &str, folder: &str, listing: &Url, html: &str) -> Vec<Track> {
    track_names(listing, html)
        .into_iter()
        .map(|name| Track::new(songs_root, folder, name))
        .collect()
}
