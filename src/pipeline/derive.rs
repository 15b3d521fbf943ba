// Derived columns: image filename and extension from a submission URL, and
// the bare submission id from a comment's link_id.

/// Image extensions the dataset accepts. Matching is case-sensitive.
pub const USABLE_EXTENSIONS: &[&str] = &["jpg", "png"];

/// Schemes whose last path segment may carry `;params`.
const PARAM_SCHEMES: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtsps", "rtspu",
    "sip", "sips", "mms", "sftp", "tel",
];

/// The path component of a submission URL, taken from the raw text.
///
/// Nothing is normalized or percent-encoded, so `my pic.jpg` and `café.png`
/// keep the names they were saved under. The pieces removed are the
/// `scheme:` prefix, a `//netloc`, the query, the fragment, and `;params` on
/// the last segment. Scheme-less values such as `i.imgur.com/abc.jpg` are
/// all path.
pub fn url_path(url: &str) -> String {
    let cleaned: String = url
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    let mut scheme = String::new();
    let mut rest = cleaned.as_str();
    if let Some(colon) = rest.find(':') {
        let candidate = &rest[..colon];
        if is_scheme(candidate) {
            scheme = candidate.to_ascii_lowercase();
            rest = &rest[colon + 1..];
        }
    }

    if let Some(after) = rest.strip_prefix("//") {
        let netloc_end = after.find(['/', '?', '#']).unwrap_or(after.len());
        rest = &after[netloc_end..];
    }

    let path_end = rest.find(['?', '#']).unwrap_or(rest.len());
    let mut path = &rest[..path_end];

    if PARAM_SCHEMES.contains(&scheme.as_str()) {
        let last_segment = path.rfind('/').map_or(0, |slash| slash + 1);
        if let Some(semi) = path[last_segment..].find(';') {
            path = &path[..last_segment + semi];
        }
    }

    path.to_string()
}

/// A scheme starts with an ASCII letter and continues with letters, digits,
/// `+`, `-` or `.`.
fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// Last `/`-delimited segment of the URL path, e.g. `abc.jpg`.
pub fn derived_filename(url: &str) -> String {
    let path = url_path(url);
    path.rsplit('/').next().unwrap_or("").to_string()
}

/// Everything after the final `.` of the URL path.
///
/// A path with no dot yields the whole path, which is never usable.
pub fn url_extension(url: &str) -> String {
    let path = url_path(url);
    path.rsplit('.').next().unwrap_or("").to_string()
}

pub fn has_usable_extension(url: &str) -> bool {
    let ext = url_extension(url);
    USABLE_EXTENSIONS.contains(&ext.as_str())
}

/// Strip the type prefix from a Reddit fullname: `t3_abc` → `abc`.
///
/// Everything up to and including the first `_` is removed; an id with no
/// `_` is returned unchanged.
pub fn stripped_link_id(link_id: &str) -> &str {
    match link_id.find('_') {
        Some(pos) => &link_id[pos + 1..],
        None => link_id,
    }
}
