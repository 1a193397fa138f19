//! Common functions for handling tag lists.
use log::debug;

/// How many items [`format_truncated_list`] renders at most.
const TRUNCATE_AT: usize = 10;
/// Lists longer than this get an ellipsis, even if nothing was cut off.
const ELLIPSIS_AFTER: usize = 7;

/// Whitespace as the boards' web clients see it: Unicode `White_Space` plus the byte order mark,
/// minus U+0085 (next line).
fn is_query_whitespace(c: char) -> bool {
    match c {
        '\u{feff}' => true,
        '\u{85}' => false,
        c => c.is_whitespace(),
    }
}

/// Splits a raw, comma separated query into normalized tags.
///
/// Each piece is trimmed, lowercased and has its inner whitespace collapsed into a single space.
/// Empty pieces are dropped.
///
/// ```rust
/// use booru_philomena::imageboards::common::tokenize;
///
/// assert_eq!(tokenize("Twilight  Sparkle, safe,,"), ["twilight sparkle", "safe"]);
/// ```
pub fn tokenize(query: &str) -> Vec<String> {
    let tags: Vec<String> = query
        .split(',')
        .map(|s| s.trim_matches(is_query_whitespace))
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.to_lowercase()
                .split(is_query_whitespace)
                .filter(|w| !w.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    debug!("Tokenized query into {tags:?}");
    tags
}

/// Joins the first 10 items with `", "`, appending `" ..."` when the list has more than 7 items.
///
/// The two thresholds differ on purpose: lists of 8 to 10 items are shown whole but still get
/// the ellipsis.
pub fn format_truncated_list<S: AsRef<str>>(list: &[S]) -> String {
    let mut out = list
        .iter()
        .take(TRUNCATE_AT)
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(", ");

    if list.len() > ELLIPSIS_AFTER {
        out.push_str(" ...");
    }
    out
}

/// Collects the names credited through `artist:`, `editor:` or `photographer:` tags.
///
/// Names are sorted by their UTF-16 code units, the order the boards' web clients list them in.
pub fn extract_authors<S: AsRef<str>>(tags: &[S]) -> Vec<&str> {
    const AUTHOR_NAMESPACES: [&str; 3] = ["artist:", "editor:", "photographer:"];

    let mut authors: Vec<&str> = tags
        .iter()
        .filter_map(|tag| {
            let tag = tag.as_ref();
            AUTHOR_NAMESPACES
                .iter()
                .find_map(|ns| tag.strip_prefix(*ns))
        })
        .filter(|name| !name.is_empty())
        .collect();

    authors.sort_unstable_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()));
    authors
}
