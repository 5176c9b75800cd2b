//! End-to-end compliance checks over real directory trees.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use nameguard_analysis::{CheckError, ConventionChecker, DefinitionError};
use nameguard_core::FxHashMap;

fn write_file(path: &Path, text: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, text).unwrap();
}

fn definition(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    write_file(&path, text);
    path
}

fn violations(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

// ---- Scenario A: matching package with a violating file ----

#[test]
fn violating_file_names_are_reported_per_package() {
    let dir = tempfile::tempdir().unwrap();
    let def = definition(dir.path(), "naming.def", "package \"a\" { file \"X.java\" }");

    let root = dir.path().join("src");
    write_file(&root.join("a/X.java"), "");
    write_file(&root.join("a/Y.java"), "");

    let report = ConventionChecker::new(def).check(&root).unwrap();

    assert_eq!(report.len(), 1);
    assert_eq!(report.get("a"), Some(&violations(&["Y.java"])));
}

// ---- Scenario B: package matching no rule ----

#[test]
fn unmatched_package_is_reported_with_an_empty_set() {
    let dir = tempfile::tempdir().unwrap();
    let def = definition(dir.path(), "naming.def", "package \"a\" { file \"X.java\" }");

    let root = dir.path().join("src");
    write_file(&root.join("b/Anything.txt"), "");
    write_file(&root.join("b/Other.md"), "");

    let report = ConventionChecker::new(def).check(&root).unwrap();

    assert_eq!(report.get("b"), Some(&BTreeSet::new()));
}

// ---- Scenario C: merged rules across two sources ----

#[test]
fn equal_package_rules_from_two_sources_merge_their_file_rules() {
    let dir = tempfile::tempdir().unwrap();
    let first = definition(dir.path(), "first.def", "package \"a\" { file \"X.java\" }");
    let second = definition(dir.path(), "second.def", "package \"a\" { file \"Y.java\" }");

    let root = dir.path().join("src");
    write_file(&root.join("a/Z.java"), "");

    let checker =
        ConventionChecker::with_placeholders(vec![first, second], FxHashMap::default()).unwrap();
    let report = checker.check(&root).unwrap();
    assert_eq!(report.get("a"), Some(&violations(&["Z.java"])));

    // Both file rules are honored after the merge.
    let compliant_root = dir.path().join("src2");
    write_file(&compliant_root.join("a/X.java"), "");
    write_file(&compliant_root.join("a/Y.java"), "");
    let report = checker.check(&compliant_root).unwrap();
    assert!(report.is_empty());
}

// ---- Scenario D: missing placeholder fails before any traversal ----

#[test]
fn missing_placeholder_fails_the_check_without_a_report() {
    let dir = tempfile::tempdir().unwrap();
    let def = definition(
        dir.path(),
        "naming.def",
        "package \"org.%PROJECT%\" { file \"X.java\" }",
    );

    let root = dir.path().join("src");
    write_file(&root.join("a/X.java"), "");

    let checker = ConventionChecker::new(def);
    let error = checker.check(&root).unwrap_err();

    match error {
        CheckError::Definition(DefinitionError::Rejected(rejected)) => {
            assert_eq!(rejected.diagnostic_count(), 1);
            let text = rejected.to_string();
            assert!(text.contains("naming.def"), "missing source name: {text}");
            assert!(
                text.contains("line 1:13 missing value for placeholder PROJECT"),
                "missing position or name: {text}"
            );
        }
        other => panic!("expected a rejected definition, got {other:?}"),
    }

    // A later check with the same checker retries and fails the same way.
    assert!(checker.check(&root).is_err());
}

// ---- Scenario E: empty matching package is compliant ----

#[test]
fn empty_matching_package_produces_no_report_entry() {
    let dir = tempfile::tempdir().unwrap();
    let def = definition(dir.path(), "naming.def", "package \"a\" { file \"X.java\" }");

    let root = dir.path().join("src");
    fs::create_dir_all(root.join("a")).unwrap();

    let report = ConventionChecker::new(def).check(&root).unwrap();
    assert!(report.is_empty());
}

// ---- Hidden entries ----

#[test]
fn hidden_files_and_directories_are_never_checked() {
    let dir = tempfile::tempdir().unwrap();
    let def = definition(dir.path(), "naming.def", "package \"a\" { file \"X.java\" }");

    let root = dir.path().join("src");
    write_file(&root.join("a/X.java"), "");
    write_file(&root.join("a/.hidden-violation"), "");
    write_file(&root.join("a/.git/config"), "");
    write_file(&root.join(".idea/workspace.xml"), "");

    let report = ConventionChecker::new(def).check(&root).unwrap();
    assert!(report.is_empty(), "unexpected report: {report:?}");
}

// ---- Dotted package names from nested directories ----

#[test]
fn nested_directories_check_under_their_dotted_names() {
    let dir = tempfile::tempdir().unwrap();
    let def = definition(
        dir.path(),
        "naming.def",
        "package \"org\".\"example\" { file \"X.java\" }",
    );

    let root = dir.path().join("src");
    write_file(&root.join("org.example/Bad.txt"), "");

    let report = ConventionChecker::new(def).check(&root).unwrap();
    assert_eq!(report.get("org.example"), Some(&violations(&["Bad.txt"])));
}

#[test]
fn directory_separators_become_dots() {
    let dir = tempfile::tempdir().unwrap();
    // `[a-z]+(.[a-z]+)*` over the dotted name: the wildcard eats the dot.
    let def = definition(
        dir.path(),
        "naming.def",
        "package [a-z]+(.[a-z]+)* { file [A-Z][a-z]*\".java\" }",
    );

    let root = dir.path().join("src");
    write_file(&root.join("org/example/util/Strings.java"), "");
    write_file(&root.join("org/example/util/bad_name.java"), "");

    let report = ConventionChecker::new(def).check(&root).unwrap();
    assert_eq!(
        report.get("org.example.util"),
        Some(&violations(&["bad_name.java"]))
    );
    // Intermediate directories hold no files and are not packages.
    assert!(report.get("org").is_none());
    assert!(report.get("org.example").is_none());
}

// ---- Declaration-order precedence end to end ----

#[test]
fn first_matching_rule_in_declaration_order_governs() {
    let dir = tempfile::tempdir().unwrap();
    let def = definition(
        dir.path(),
        "naming.def",
        "package \"special\" { file \"Exact.java\" }\npackage [a-z]+ { file \"Generic.java\" }",
    );

    let root = dir.path().join("src");
    write_file(&root.join("special/Generic.java"), "");
    write_file(&root.join("other/Generic.java"), "");

    let report = ConventionChecker::new(def).check(&root).unwrap();
    // `special` resolved to the first rule, so Generic.java violates it.
    assert_eq!(report.get("special"), Some(&violations(&["Generic.java"])));
    assert!(report.get("other").is_none());
}

// ---- Root handling ----

#[test]
fn files_in_the_root_belong_to_the_default_package() {
    let dir = tempfile::tempdir().unwrap();
    let def = definition(dir.path(), "naming.def", "package \"a\" { file \"X.java\" }");

    let root = dir.path().join("src");
    write_file(&root.join("Stray.java"), "");
    write_file(&root.join("a/X.java"), "");

    let report = ConventionChecker::new(def).check(&root).unwrap();
    // The default package name is empty and matches no rule.
    assert_eq!(report.get(""), Some(&BTreeSet::new()));
    assert_eq!(report.len(), 1);
}

#[test]
fn an_invalid_source_root_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let def = definition(dir.path(), "naming.def", "package \"a\" { file \"X\" }");

    let checker = ConventionChecker::new(def);
    let missing = dir.path().join("no-such-dir");
    assert!(matches!(
        checker.check(&missing),
        Err(CheckError::SourceRootInvalid { .. })
    ));

    let file_root = dir.path().join("naming.def");
    assert!(matches!(
        checker.check(&file_root),
        Err(CheckError::SourceRootInvalid { .. })
    ));
}

// ---- Rule-set caching ----

#[test]
fn repeated_checks_reuse_the_compiled_rule_set() {
    let dir = tempfile::tempdir().unwrap();
    let def = definition(dir.path(), "naming.def", "package \"a\" { file \"X.java\" }");

    let root = dir.path().join("src");
    write_file(&root.join("a/X.java"), "");

    let checker = ConventionChecker::new(def.clone());
    assert!(checker.check(&root).unwrap().is_empty());

    // Deleting the definition file after the first check does not matter;
    // the compiled rule set is cached on the checker.
    fs::remove_file(&def).unwrap();
    assert!(checker.check(&root).unwrap().is_empty());
}
