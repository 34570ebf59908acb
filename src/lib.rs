//! # manuscribe
//!
//! Rewrites a book manuscript written for a static-site generator into
//! Leanpub markup, in place.
//!
//! ## Features
//!
//! - Relabels site-specific code fences
//! - Rewrites image paths to the Leanpub asset layout
//! - Expands `{% ref %}` shortcodes into Markdown links
//! - Injects `{#slug}` anchors above headings
//! - Substitutes typographic ellipses
//! - Warns about naked URLs
//!
//! ## Quick Start
//!
//! ```no_run
//! use manuscribe::{RewriteConfig, run};
//!
//! // Rewrites every file listed in manuscript/Book.txt
//! let report = run(&RewriteConfig::default()).unwrap();
//! println!("{} lines changed", report.changed_lines());
//! ```
//!
//! ## Rules
//!
//! Rewriting is a fold of an ordered [`RuleSet`] over each line. Rule sets
//! can be assembled by hand:
//!
//! ```
//! use manuscribe::{Rule, RuleSet};
//!
//! let rules = RuleSet::new()
//!     .with(Rule::literal("fence", "```dom-tree", "```"))
//!     .with(Rule::literal("ellipsis", "...", "\u{2026}"));
//!
//! assert_eq!(rules.rewrite("```dom-tree\n").unwrap(), "```\n");
//! ```

pub mod error;
pub mod manifest;
pub mod markdown;
pub(crate) mod patterns;
pub mod report;
pub mod rewrite;
pub mod rules;

pub use error::{Error, Result};
pub use manifest::Manifest;
pub use report::{FileReport, NakedUrl, RunReport};
pub use rewrite::{RewriteConfig, Rewriter, run};
pub use rules::{Rule, RuleSet, leanpub_rules};
