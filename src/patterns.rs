//! Cached regex patterns for manuscript rewriting.
//!
//! Uses LazyLock to compile patterns once on first use; every manuscript
//! line runs through them.

use regex_lite::Regex;
use std::sync::LazyLock;

// === Rewrite patterns ===

/// Matches `{% ref "page", "Title" %}` shortcodes.
///
/// Group 1 is the page, group 2 the title.
pub static REF_SHORTCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\{% ref "(.*?)", "(.*?)" %\}"#).unwrap());

/// Matches an ATX heading line, terminator included.
///
/// Group 1 is the heading text, group 2 the line terminator (absent on a
/// final line without one, a lone `\r` on a final line ending in one).
pub static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#+[ \t]+([^\r\n]+)(\r?\n|\r)?$").unwrap());

// === Lint patterns ===

/// Matches a bare http(s) URL that is not inside a tag or attribute.
///
/// Group 1 is the URL.
pub static NAKED_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:[^<>";]|^)(https?:(?:[^<\s]+))"#).unwrap());
