//! First-match compliance evaluation.
//!
//! Package-rule resolution is a linear scan in declaration order with an
//! early exit on the first match, so more specific rules must be declared
//! before more general ones. A file is compliant if any of the resolved
//! rule's file rules matches it.

use std::collections::BTreeSet;
use std::path::Path;

use nameguard_core::{ComplianceReport, DefinitionSet, DiscoveredTree};

/// Evaluate every discovered package against the rule set.
///
/// A package whose name matches no rule is reported with an empty file
/// set regardless of its contents. A package that matches a rule is
/// reported only if it contains files violating all of the rule's file
/// rules; in particular, an empty package that matches some rule is
/// compliant by default and does not appear at all.
pub fn evaluate(rules: &DefinitionSet, tree: &DiscoveredTree) -> ComplianceReport {
    let mut report = ComplianceReport::new();

    for (path, files) in tree {
        let package = package_name(path);
        match rules.resolve(&package) {
            None => {
                report.insert(package, BTreeSet::new());
            }
            Some(rule) => {
                let violations: BTreeSet<String> = files
                    .iter()
                    .filter(|name| !rule.allows_file(name))
                    .cloned()
                    .collect();
                if !violations.is_empty() {
                    report.insert(package, violations);
                }
            }
        }
    }

    report
}

/// Convert a package-relative path into its dotted package name.
/// The root directory maps to the empty package name.
pub fn package_name(path: &Path) -> String {
    let mut name = String::new();
    for component in path.components() {
        if !name.is_empty() {
            name.push('.');
        }
        name.push_str(&component.as_os_str().to_string_lossy());
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use nameguard_core::{FileRule, PackageRule};
    use std::path::PathBuf;

    fn rules(entries: &[(&str, &[&str])]) -> DefinitionSet {
        DefinitionSet::from_rules(entries.iter().map(|(pattern, files)| {
            PackageRule::new(
                *pattern,
                files.iter().map(|f| FileRule::new(*f).unwrap()),
            )
            .unwrap()
        }))
        .unwrap()
    }

    fn tree(entries: &[(&str, &[&str])]) -> DiscoveredTree {
        entries
            .iter()
            .map(|(path, files)| {
                (
                    PathBuf::from(path),
                    files.iter().map(|f| f.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn dotted_names_join_path_segments() {
        assert_eq!(package_name(Path::new("org/example/util")), "org.example.util");
        assert_eq!(package_name(Path::new("a")), "a");
        assert_eq!(package_name(Path::new("")), "");
    }

    #[test]
    fn violating_files_are_reported() {
        let set = rules(&[("a", &["X\\.java"])]);
        let discovered = tree(&[("a", &["X.java", "Y.java"])]);

        let report = evaluate(&set, &discovered);
        assert_eq!(report.len(), 1);
        let violations = report.get("a").unwrap();
        assert_eq!(violations.iter().collect::<Vec<_>>(), vec!["Y.java"]);
    }

    #[test]
    fn unmatched_packages_get_an_empty_entry() {
        let set = rules(&[("a", &["X"])]);
        let discovered = tree(&[("b", &["Whatever.txt"])]);

        let report = evaluate(&set, &discovered);
        assert_eq!(report.get("b"), Some(&BTreeSet::new()));
    }

    #[test]
    fn compliant_packages_are_absent() {
        let set = rules(&[("a", &["X\\.java", "Y\\.java"])]);
        let discovered = tree(&[("a", &["X.java", "Y.java"])]);

        let report = evaluate(&set, &discovered);
        assert!(report.is_empty());
    }

    #[test]
    fn empty_matching_package_is_unreported() {
        let set = rules(&[("a", &["X"])]);
        let discovered = tree(&[("a", &[])]);

        let report = evaluate(&set, &discovered);
        assert!(report.is_empty());
    }

    #[test]
    fn first_declared_rule_governs() {
        // Both rules match "a"; only the first one's file rules apply.
        let set = rules(&[("a", &["First\\.java"]), (".*", &["Second\\.java"])]);
        let discovered = tree(&[("a", &["Second.java"])]);

        let report = evaluate(&set, &discovered);
        let violations = report.get("a").unwrap();
        assert_eq!(violations.iter().collect::<Vec<_>>(), vec!["Second.java"]);
    }

    #[test]
    fn file_rules_use_or_semantics() {
        let set = rules(&[("a", &["X\\.java", "Y\\.java"])]);
        let discovered = tree(&[("a", &["X.java", "Y.java", "Z.java"])]);

        let report = evaluate(&set, &discovered);
        let violations = report.get("a").unwrap();
        assert_eq!(violations.iter().collect::<Vec<_>>(), vec!["Z.java"]);
    }
}
