//! In-place manuscript rewriting.
//!
//! [`Rewriter`] reads a file, runs every line through its [`RuleSet`], and
//! writes the result back over the original. There is no temporary file:
//! a run interrupted mid-write can leave a file partially rewritten.
//!
//! # Example
//!
//! ```no_run
//! use manuscribe::{Manifest, Rewriter};
//!
//! let manifest = Manifest::open("manuscript/Book.txt", "manuscript")?;
//! let report = Rewriter::leanpub().process_manifest(&manifest)?;
//! println!("{} files changed", report.changed_files());
//! # Ok::<(), manuscribe::Error>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use bstr::ByteSlice;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::markdown::naked_urls;
use crate::report::{FileReport, NakedUrl, RunReport};
use crate::rules::{RuleFailure, RuleSet, leanpub_rules};

/// Where the manuscript lives and how to run over it.
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    /// Directory manifest entries are relative to.
    pub manuscript_dir: PathBuf,
    /// Manifest file, relative to `manuscript_dir` unless absolute.
    pub manifest: PathBuf,
    /// Rewrite in memory only.
    pub dry_run: bool,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            manuscript_dir: PathBuf::from("manuscript"),
            manifest: PathBuf::from("Book.txt"),
            dry_run: false,
        }
    }
}

impl RewriteConfig {
    pub fn manifest_path(&self) -> PathBuf {
        self.manuscript_dir.join(&self.manifest)
    }
}

/// Applies a rule set to manuscript files.
#[derive(Debug, Clone)]
pub struct Rewriter {
    rules: RuleSet,
    dry_run: bool,
}

impl Default for Rewriter {
    fn default() -> Self {
        Self::leanpub()
    }
}

impl Rewriter {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            dry_run: false,
        }
    }

    /// A rewriter using [`leanpub_rules`].
    pub fn leanpub() -> Self {
        Self::new(leanpub_rules())
    }

    /// When set, files are read and rewritten but never written back.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Rewrite file content without touching the filesystem.
    ///
    /// `path` is used for diagnostics and to decide whether to look for
    /// naked URLs, which only `.md` files are checked for. Line terminators
    /// are kept exactly as found, including a missing final newline.
    pub fn rewrite(&self, path: &Path, raw: &[u8]) -> Result<(String, FileReport)> {
        let mut output = String::with_capacity(raw.len() + raw.len() / 16);
        let mut report = FileReport::new(path);
        let lint = path.extension().is_some_and(|ext| ext == "md");

        for (index, raw_line) in raw.lines_with_terminator().enumerate() {
            let number = index + 1;
            let line = raw_line.to_str().map_err(|_| Error::Encoding {
                path: path.to_path_buf(),
                line: number,
            })?;

            if lint {
                for url in naked_urls(line) {
                    warn!("{}:{}: naked URL {}", path.display(), number, url);
                    report.naked_urls.push(NakedUrl {
                        line: number,
                        url: url.to_string(),
                    });
                }
            }

            let rewritten = self
                .rules
                .rewrite(line)
                .map_err(|RuleFailure { rule, group }| Error::MalformedMatch {
                    path: path.to_path_buf(),
                    line: number,
                    rule,
                    group,
                })?;

            if rewritten != line {
                report.changed_lines += 1;
                debug!(
                    "{}:{}: {:?} -> {:?}",
                    path.display(),
                    number,
                    line,
                    rewritten
                );
            }

            output.push_str(&rewritten);
            report.lines += 1;
        }

        Ok((output, report))
    }

    /// Rewrite one file in place.
    pub fn process(&self, path: impl AsRef<Path>) -> Result<FileReport> {
        let path = path.as_ref();
        let raw = fs::read(path).map_err(|e| Error::io(path, e))?;
        let (content, report) = self.rewrite(path, &raw)?;

        if self.dry_run {
            info!(
                "{}: {} of {} lines would change",
                path.display(),
                report.changed_lines,
                report.lines
            );
        } else {
            fs::write(path, content).map_err(|e| Error::io(path, e))?;
            info!(
                "{}: {} of {} lines changed",
                path.display(),
                report.changed_lines,
                report.lines
            );
        }

        Ok(report)
    }

    /// Rewrite every manifest entry, in order, stopping at the first error.
    pub fn process_manifest(&self, manifest: &Manifest) -> Result<RunReport> {
        let mut run = RunReport {
            dry_run: self.dry_run,
            files: Vec::with_capacity(manifest.len()),
        };

        for path in manifest.paths() {
            run.files.push(self.process(&path)?);
        }

        info!(
            "{} files, {} changed ({} lines)",
            run.files.len(),
            run.changed_files(),
            run.changed_lines()
        );
        Ok(run)
    }
}

/// Load the configured manifest and rewrite it with the Leanpub rules.
pub fn run(config: &RewriteConfig) -> Result<RunReport> {
    let manifest = Manifest::open(config.manifest_path(), &config.manuscript_dir)?;
    debug!(
        "manifest {} lists {} files",
        config.manifest_path().display(),
        manifest.len()
    );
    Rewriter::leanpub()
        .dry_run(config.dry_run)
        .process_manifest(&manifest)
}
