/// Root slugs that sit too high in the tree to title a page by. When one of
/// these would end the root URL, the root is taken one segment deeper, e.g.
/// `Web` becomes `Web/HTML`.
pub const BAD_ROOTS: &[&str] = &["Web"];

// "/{locale}/docs/{slug}" split on '/' starts with an empty segment.
const ROOT_SEGMENTS: usize = 4;

pub fn is_bad_root(segment: &str) -> bool {
    BAD_ROOTS.contains(&segment)
}

/// Returns the URL of the page a document is grouped under.
///
/// `/en-US/docs/Learn/CSS/Grid` maps to `/en-US/docs/Learn`, while
/// `/en-US/docs/Web/CSS/Grid` maps to `/en-US/docs/Web/CSS`. The extension
/// applies once only. Short URLs come back with whatever segments they have.
pub fn root_url(url: &str) -> String {
    let segments: Vec<&str> = url.split('/').collect();
    let mut cutoff = ROOT_SEGMENTS;
    if segments
        .get(cutoff - 1)
        .is_some_and(|segment| is_bad_root(segment))
    {
        cutoff += 1;
    }
    segments
        .iter()
        .take(cutoff)
        .copied()
        .collect::<Vec<_>>()
        .join("/")
}

pub fn is_root_url(url: &str) -> bool {
    root_url(url) == url
}
