//! The Leanpub rule set.
//!
//! Order matters: the heading rule runs after the cross-reference rule so a
//! heading's text is already expanded, and the ellipsis rule runs last so
//! slugs are computed from the source spelling (`...` is stripped by the
//! slugifier, `…` would not be).

use regex_lite::Captures;

use super::{MissingGroup, Rule, RuleSet, group};
use crate::markdown::slugify;
use crate::patterns::{HEADING_RE, REF_SHORTCODE_RE};

/// Build the default rule set for converting site markup to Leanpub markup.
pub fn leanpub_rules() -> RuleSet {
    RuleSet::new()
        // Code fences
        .with(Rule::literal("dom-tree-fence", "```dom-tree", "```"))
        .with(Rule::literal(
            "console-fence",
            "```js-console",
            "{line-numbers: false}\n```js",
        ))
        // Assets are copied next to the manuscript by the build
        .with(Rule::literal("asset-path", "/_assets/img/", "images/"))
        .with(Rule::callback(
            "cross-reference",
            REF_SHORTCODE_RE.clone(),
            expand_reference,
        ))
        .with(Rule::callback(
            "heading-anchor",
            HEADING_RE.clone(),
            inject_heading_anchor,
        ))
        // The site renders "..." the same way
        .with(Rule::literal("ellipsis", "...", "\u{2026}"))
}

/// `{% ref "page", "Title" %}` → `[Title](#title)`
fn expand_reference(caps: &Captures<'_>) -> Result<String, MissingGroup> {
    let title = group(caps, 2)?;
    Ok(format!("[{title}](#{})", slugify(title)))
}

/// `## Title` → `{#title}` on its own line, then the heading unchanged.
fn inject_heading_anchor(caps: &Captures<'_>) -> Result<String, MissingGroup> {
    let heading = group(caps, 0)?;
    let slug = slugify(group(caps, 1)?);
    if slug.is_empty() {
        return Ok(heading.to_string());
    }
    let eol = match caps.get(2).map(|m| m.as_str()) {
        Some(eol) if eol.ends_with('\n') => eol,
        _ => "\n",
    };
    Ok(format!("{{#{slug}}}{eol}{heading}"))
}
