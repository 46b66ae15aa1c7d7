/// Utility helpers for albumdeck

/// Human title for an album folder: `-` and `_` become spaces.
pub fn title_from_folder<S: AsRef<str>>(folder: S) -> String {
    folder
        .as_ref()
        .chars()
        .map(|ch| if ch == '-' || ch == '_' { ' ' } else { ch })
        .collect()
}

/// Percent-decode a file name, keeping it verbatim when it is not valid
/// percent-encoded UTF-8.
pub fn decode_name<S: AsRef<str>>(raw: S) -> String {
    let raw = raw.as_ref();
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

/// Percent-encode one path segment so `#`, `?` and `/` inside a name cannot
/// end or split the path.
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Join path segments with single slashes, ignoring empty segments.
pub fn join_path(segments: &[&str]) -> String {
    let mut out = String::new();
    for segment in segments {
        let trimmed = segment.trim_matches('/');
        if trimmed.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('/');
        }
        out.push_str(trimmed);
    }
    out
}
