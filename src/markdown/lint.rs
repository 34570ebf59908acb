//! Naked-URL detection.
//!
//! A naked URL is an `http:`/`https:` address sitting in running text
//! instead of a tag, attribute or autolink. The site generator warns about
//! these in `.md` inputs only; so does the rewriter, using the same pattern.

use crate::patterns::NAKED_URL_RE;

/// Iterate over the naked URLs in one line of text.
///
/// # Examples
///
/// ```
/// use manuscribe::markdown::naked_urls;
///
/// let found: Vec<_> = naked_urls("see https://example.com today").collect();
/// assert_eq!(found, ["https://example.com"]);
///
/// assert_eq!(naked_urls("<https://example.com>").count(), 0);
/// ```
pub fn naked_urls(line: &str) -> impl Iterator<Item = &str> {
    NAKED_URL_RE
        .captures_iter(line)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}
