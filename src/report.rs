//! Per-file and per-run rewrite reports.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// A naked URL found while rewriting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NakedUrl {
    /// 1-based line number in the original file.
    pub line: usize,
    pub url: String,
}

/// What happened to one manuscript file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    /// Lines read from the original file.
    pub lines: usize,
    /// Original lines whose rewritten text differs.
    pub changed_lines: usize,
    pub naked_urls: Vec<NakedUrl>,
}

impl FileReport {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn is_changed(&self) -> bool {
        self.changed_lines > 0
    }
}

/// What happened to every file in a manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// True when nothing was written.
    pub dry_run: bool,
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn changed_files(&self) -> usize {
        self.files.iter().filter(|f| f.is_changed()).count()
    }

    pub fn changed_lines(&self) -> usize {
        self.files.iter().map(|f| f.changed_lines).sum()
    }

    pub fn naked_urls(&self) -> usize {
        self.files.iter().map(|f| f.naked_urls.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let report = RunReport {
            dry_run: false,
            files: vec![
                FileReport {
                    path: "a.md".into(),
                    lines: 10,
                    changed_lines: 3,
                    naked_urls: vec![NakedUrl {
                        line: 2,
                        url: "http://x.test".into(),
                    }],
                },
                FileReport::new("b.md"),
            ],
        };
        assert_eq!(report.changed_files(), 1);
        assert_eq!(report.changed_lines(), 3);
        assert_eq!(report.naked_urls(), 1);
    }

    #[test]
    fn test_serializes_to_json() {
        let mut file = FileReport::new("ch1.md");
        file.lines = 4;
        file.changed_lines = 1;
        let report = RunReport {
            dry_run: true,
            files: vec![file],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["dry_run"], true);
        assert_eq!(json["files"][0]["path"], "ch1.md");
        assert_eq!(json["files"][0]["changed_lines"], 1);
        assert_eq!(json["files"][0]["naked_urls"].as_array().unwrap().len(), 0);
    }
}
