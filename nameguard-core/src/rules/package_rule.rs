//! Regular-expression backed package rule.

use std::hash::{Hash, Hasher};

use regex::Regex;

use crate::errors::RuleError;
use crate::traits::Rule;

use super::compile_anchored;
use super::file_rule::FileRule;

/// A compiled rule matched against dotted package names, carrying the
/// file rules that govern a matching package's contents.
///
/// The file rules are an ordered sequence, unique by pattern text. They
/// are never taken into account for equality or hashing; rule identity is
/// the package pattern text alone.
#[derive(Debug, Clone)]
pub struct PackageRule {
    pattern: String,
    regex: Regex,
    file_rules: Vec<FileRule>,
}

impl PackageRule {
    /// Compile a package rule from pattern source text and its file rules.
    ///
    /// Duplicate file rules (by pattern text) are dropped, keeping the
    /// first occurrence. An empty file-rule collection is rejected: such a
    /// rule would fail every check, and the grammar cannot produce one.
    pub fn new(
        pattern: impl Into<String>,
        file_rules: impl IntoIterator<Item = FileRule>,
    ) -> Result<Self, RuleError> {
        let pattern = pattern.into();
        let regex = compile_anchored(&pattern)?;

        let mut unique: Vec<FileRule> = Vec::new();
        for rule in file_rules {
            if !unique.contains(&rule) {
                unique.push(rule);
            }
        }
        if unique.is_empty() {
            return Err(RuleError::EmptyFileRuleSet { pattern });
        }

        Ok(Self {
            pattern,
            regex,
            file_rules: unique,
        })
    }

    /// The file rules, in insertion order.
    pub fn file_rules(&self) -> &[FileRule] {
        &self.file_rules
    }

    /// Whether any of this rule's file rules matches the input file name.
    /// The scan stops at the first satisfying rule.
    pub fn allows_file(&self, file_name: &str) -> bool {
        self.file_rules.iter().any(|rule| rule.matches(file_name))
    }
}

impl Rule for PackageRule {
    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// Merge with an equal-pattern rule: the result keeps this rule's file
    /// rules in order, followed by any of `other`'s file rules not already
    /// present by pattern text.
    fn merge(self, other: Self) -> Result<Self, RuleError> {
        if self != other {
            return Err(RuleError::MergeConflict {
                left: self.pattern,
                right: other.pattern,
            });
        }

        let mut file_rules = self.file_rules;
        for rule in other.file_rules {
            if !file_rules.contains(&rule) {
                file_rules.push(rule);
            }
        }

        Ok(Self {
            pattern: self.pattern,
            regex: self.regex,
            file_rules,
        })
    }
}

impl PartialEq for PackageRule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for PackageRule {}

impl Hash for PackageRule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_rule(pattern: &str) -> FileRule {
        FileRule::new(pattern).unwrap()
    }

    fn package_rule(pattern: &str, file_patterns: &[&str]) -> PackageRule {
        PackageRule::new(pattern, file_patterns.iter().map(|p| file_rule(p))).unwrap()
    }

    #[test]
    fn empty_file_rule_collection_is_rejected() {
        assert!(matches!(
            PackageRule::new("org", Vec::new()),
            Err(RuleError::EmptyFileRuleSet { .. })
        ));
    }

    #[test]
    fn constructor_deduplicates_file_rules_by_pattern() {
        let rule = PackageRule::new(
            "org",
            vec![file_rule("A"), file_rule("B"), file_rule("A")],
        )
        .unwrap();
        let patterns: Vec<&str> = rule.file_rules().iter().map(|r| r.pattern()).collect();
        assert_eq!(patterns, vec!["A", "B"]);
    }

    #[test]
    fn equality_ignores_file_rules() {
        let first = package_rule("org", &["A"]);
        let second = package_rule("org", &["B", "C"]);
        assert_eq!(first, second);
    }

    #[test]
    fn hash_ignores_file_rules() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(package_rule("org", &["A"]));
        assert!(!set.insert(package_rule("org", &["B"])));
    }

    #[test]
    fn allows_file_uses_or_semantics() {
        let rule = package_rule("org", &["A\\.java", "B\\.java"]);
        assert!(rule.allows_file("A.java"));
        assert!(rule.allows_file("B.java"));
        assert!(!rule.allows_file("C.java"));
    }

    #[test]
    fn merge_appends_only_new_file_rules_in_order() {
        let first = package_rule("org", &["A", "B"]);
        let second = package_rule("org", &["B", "C", "A", "D"]);

        let merged = first.merge(second).unwrap();
        let patterns: Vec<&str> = merged.file_rules().iter().map(|r| r.pattern()).collect();
        assert_eq!(patterns, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn merge_of_unequal_patterns_is_a_conflict() {
        let first = package_rule("org", &["A"]);
        let second = package_rule("com", &["A"]);
        assert!(matches!(
            first.merge(second),
            Err(RuleError::MergeConflict { .. })
        ));
    }

    #[test]
    fn matches_dotted_package_names_in_full() {
        let rule = package_rule("org\\.example(?:\\.[a-z]+)*", &["A"]);
        assert!(rule.matches("org.example"));
        assert!(rule.matches("org.example.util.io"));
        assert!(!rule.matches("com.org.example"));
        assert!(!rule.matches("org.example.Util"));
    }
}
