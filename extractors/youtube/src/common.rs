use once_cell::sync::Lazy;

/// Hosts where the video id is passed as the `v` query parameter.
pub static YOUTUBE_HOSTS_QUERY: Lazy<Vec<&str>> = Lazy::new(|| {
    vec![
        "youtube.com",
        "www.youtube.com",
        "m.youtube.com",
        "music.youtube.com",
        "gaming.youtube.com",
    ]
});

/// Text between the first `left` and the next `right` after it.
/// Empty if either marker is missing.
pub fn between<'a>(haystack: &'a str, left: &str, right: &str) -> &'a str {
    let Some(start) = haystack.find(left) else {
        return "";
    };
    let rest = &haystack[start + left.len()..];
    match rest.find(right) {
        Some(end) => &rest[..end],
        None => "",
    }
}
