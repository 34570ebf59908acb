//! Pure markdown text utilities.
//!
//! - [`slugify`]: anchor slugs shared by headings and cross-references
//! - [`lint`]: naked-URL detection
//!
//! Nothing here touches the filesystem; the rewriter ([`crate::rewrite`])
//! calls these per line.

mod lint;
mod slugify;

pub use lint::naked_urls;
pub use slugify::{site_fragment, slugify};
