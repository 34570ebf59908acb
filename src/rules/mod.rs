//! Ordered find-and-replace rules applied to single manuscript lines.
//!
//! A [`Rule`] pairs a pattern with a replacement:
//!
//! - literal needle, literal replacement
//! - regex, literal replacement (`$1` / `${name}` expansion honored)
//! - regex, callback computing the replacement from the captures
//!
//! A [`RuleSet`] folds its rules over a line left-to-right, so each rule
//! sees the output of the rules before it and never the original line.
//! Rules may embed newlines in their output; the text they insert is only
//! seen by the rules that come after them.

mod leanpub;

use std::borrow::Cow;

use memchr::memmem::Finder;
use regex_lite::{Captures, Regex};

use crate::error::{Error, Result};

pub use leanpub::leanpub_rules;

/// A callback asked for a capture group that did not participate in the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingGroup(pub usize);

/// Computes the replacement text for one regex match.
pub type Callback = fn(&Captures<'_>) -> std::result::Result<String, MissingGroup>;

/// Fetch capture group `index` as text, failing if it did not match.
pub fn group<'h>(caps: &Captures<'h>, index: usize) -> std::result::Result<&'h str, MissingGroup> {
    caps.get(index)
        .map(|m| m.as_str())
        .ok_or(MissingGroup(index))
}

/// Compile a rule pattern, naming the rule on failure.
pub fn compile(rule: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::Pattern { rule, source })
}

#[derive(Debug, Clone)]
enum Kind {
    Literal {
        finder: Finder<'static>,
        replacement: String,
    },
    Regex {
        regex: Regex,
        replacement: String,
    },
    Callback {
        regex: Regex,
        callback: Callback,
    },
}

/// One named (pattern, replacement) pair.
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    kind: Kind,
}

impl Rule {
    /// Replace every non-overlapping occurrence of `needle`.
    ///
    /// An empty needle never matches.
    pub fn literal(name: &'static str, needle: &str, replacement: impl Into<String>) -> Self {
        Self {
            name,
            kind: Kind::Literal {
                finder: Finder::new(needle).into_owned(),
                replacement: replacement.into(),
            },
        }
    }

    /// Replace every match of `regex`, expanding `$n` references in `replacement`.
    pub fn regex(name: &'static str, regex: Regex, replacement: impl Into<String>) -> Self {
        Self {
            name,
            kind: Kind::Regex {
                regex,
                replacement: replacement.into(),
            },
        }
    }

    /// Replace every match of `regex` with whatever `callback` returns for it.
    pub fn callback(name: &'static str, regex: Regex, callback: Callback) -> Self {
        Self {
            name,
            kind: Kind::Callback { regex, callback },
        }
    }

    /// Apply this rule to one line. Returns the line borrowed when nothing matched.
    pub fn apply<'h>(&self, line: &'h str) -> std::result::Result<Cow<'h, str>, MissingGroup> {
        match &self.kind {
            Kind::Literal {
                finder,
                replacement,
            } => Ok(replace_literal(line, finder, replacement)),
            Kind::Regex { regex, replacement } => {
                Ok(regex.replace_all(line, replacement.as_str()))
            }
            Kind::Callback { regex, callback } => replace_with(line, regex, *callback),
        }
    }
}

fn replace_literal<'h>(line: &'h str, finder: &Finder<'_>, replacement: &str) -> Cow<'h, str> {
    let needle_len = finder.needle().len();
    if needle_len == 0 {
        return Cow::Borrowed(line);
    }

    let mut matches = finder.find_iter(line.as_bytes()).peekable();
    if matches.peek().is_none() {
        return Cow::Borrowed(line);
    }

    let mut output = String::with_capacity(line.len() + replacement.len());
    let mut pos = 0;
    for start in matches {
        output.push_str(&line[pos..start]);
        output.push_str(replacement);
        pos = start + needle_len;
    }
    output.push_str(&line[pos..]);
    Cow::Owned(output)
}

fn replace_with<'h>(
    line: &'h str,
    regex: &Regex,
    callback: Callback,
) -> std::result::Result<Cow<'h, str>, MissingGroup> {
    let mut output = String::new();
    let mut pos = 0;
    let mut matched = false;

    for caps in regex.captures_iter(line) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        output.push_str(&line[pos..whole.start()]);
        output.push_str(&callback(&caps)?);
        pos = whole.end();
        matched = true;
    }

    if !matched {
        return Ok(Cow::Borrowed(line));
    }
    output.push_str(&line[pos..]);
    Ok(Cow::Owned(output))
}

/// A rule failed on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleFailure {
    pub rule: &'static str,
    pub group: usize,
}

/// An ordered list of rules.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule; it runs after every rule already in the set.
    pub fn with(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Fold every rule over `line`, in order.
    pub fn rewrite<'h>(&self, line: &'h str) -> std::result::Result<Cow<'h, str>, RuleFailure> {
        let mut current = Cow::Borrowed(line);
        for rule in &self.rules {
            let changed = match rule.apply(&current) {
                Ok(Cow::Owned(text)) => Some(text),
                Ok(Cow::Borrowed(_)) => None,
                Err(MissingGroup(group)) => {
                    return Err(RuleFailure {
                        rule: rule.name,
                        group,
                    });
                }
            };
            if let Some(text) = changed {
                current = Cow::Owned(text);
            }
        }
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shout(caps: &Captures<'_>) -> std::result::Result<String, MissingGroup> {
        Ok(group(caps, 1)?.to_uppercase())
    }

    fn second_word(caps: &Captures<'_>) -> std::result::Result<String, MissingGroup> {
        Ok(group(caps, 2)?.to_string())
    }

    #[test]
    fn test_literal_replaces_every_occurrence() {
        let rule = Rule::literal("dots", "..", "!");
        assert_eq!(rule.apply("a..b..c").unwrap(), "a!b!c");
    }

    #[test]
    fn test_literal_is_non_overlapping() {
        let rule = Rule::literal("aa", "aa", "b");
        assert_eq!(rule.apply("aaa").unwrap(), "ba");
    }

    #[test]
    fn test_literal_no_match_borrows() {
        let rule = Rule::literal("x", "x", "y");
        assert!(matches!(rule.apply("abc").unwrap(), Cow::Borrowed("abc")));
    }

    #[test]
    fn test_empty_literal_never_matches() {
        let rule = Rule::literal("empty", "", "y");
        assert_eq!(rule.apply("abc").unwrap(), "abc");
    }

    #[test]
    fn test_regex_expands_groups() {
        let rule = Rule::regex("swap", compile("swap", r"(\w+)=(\w+)").unwrap(), "$2=$1");
        assert_eq!(rule.apply("a=b, c=d\n").unwrap(), "b=a, d=c\n");
    }

    #[test]
    fn test_callback_sees_captures() {
        let rule = Rule::callback("shout", compile("shout", r"<(\w+)>").unwrap(), shout);
        assert_eq!(rule.apply("x <ab> y <c>").unwrap(), "x AB y C");
    }

    #[test]
    fn test_callback_missing_group() {
        let rule = Rule::callback(
            "second",
            compile("second", r"(\w+)(?: (\w+))?").unwrap(),
            second_word,
        );
        assert_eq!(rule.apply("one two").unwrap(), "two");
        assert_eq!(rule.apply("one"), Err(MissingGroup(2)));
    }

    #[test]
    fn test_compile_names_rule() {
        let err = compile("broken", "(").unwrap_err();
        assert!(err.to_string().contains("`broken`"));
    }

    #[test]
    fn test_rules_apply_in_order() {
        let rules = RuleSet::new()
            .with(Rule::literal("a-to-b", "a", "b"))
            .with(Rule::literal("b-to-c", "b", "c"));
        assert_eq!(rules.rewrite("ab").unwrap(), "cc");

        let reversed = RuleSet::new()
            .with(Rule::literal("b-to-c", "b", "c"))
            .with(Rule::literal("a-to-b", "a", "b"));
        assert_eq!(reversed.rewrite("ab").unwrap(), "bc");
    }

    #[test]
    fn test_rewrite_reports_failing_rule() {
        let rules = RuleSet::new()
            .with(Rule::literal("noop", "zzz", ""))
            .with(Rule::callback(
                "second",
                compile("second", r"(\w+)(?: (\w+))?").unwrap(),
                second_word,
            ));
        assert_eq!(
            rules.rewrite("word"),
            Err(RuleFailure {
                rule: "second",
                group: 2
            })
        );
    }

    #[test]
    fn test_empty_set_is_identity() {
        let rules = RuleSet::new();
        assert!(rules.is_empty());
        assert!(matches!(rules.rewrite("line\n").unwrap(), Cow::Borrowed("line\n")));
    }
}
