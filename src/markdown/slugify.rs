//! Pure slug generation for heading anchors and cross-references.
//!
//! The same slug is used for the `{#slug}` anchor injected above a heading
//! and for the `#slug` target of every cross-reference to it, so both sides
//! of a link always agree.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters deleted outright from a slug.
const STRIPPED: &[char] = &['(', ')', ':', '.', ',', '&', '\'', '`'];

/// Everything `encodeURIComponent` escapes.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Generate an anchor slug from a heading or reference title.
///
/// Lower-cases the title, deletes `( ) : . , & '` and backticks, and joins
/// the remaining words with single hyphens. Other punctuation is kept.
/// Distinct titles may produce the same slug.
///
/// # Examples
///
/// ```
/// use manuscribe::markdown::slugify;
///
/// assert_eq!(slugify("Getting Started"), "getting-started");
/// assert_eq!(slugify("Errors & Flow Control"), "errors-flow-control");
/// assert_eq!(slugify("The DOM: Document Object Model"), "the-dom-document-object-model");
/// ```
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// The fragment the site generator links to for `title`.
///
/// The site hyphenates whitespace runs before deleting punctuation, so a
/// title like `Errors & Flow Control` keeps both hyphens around the `&`
/// here while [`slugify`] collapses them. The result is percent-encoded as
/// a URI component, which is what the site emits in its `href`s.
///
/// # Examples
///
/// ```
/// use manuscribe::markdown::site_fragment;
///
/// assert_eq!(site_fragment("Getting Started"), "getting-started");
/// assert_eq!(site_fragment("Errors & Flow Control"), "errors--flow-control");
/// assert_eq!(site_fragment("What is <canvas>?"), "what-is-%3Ccanvas%3E%3F");
/// ```
pub fn site_fragment(title: &str) -> String {
    let slug: String = title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .collect();
    utf8_percent_encode(&slug, URI_COMPONENT).to_string()
}
