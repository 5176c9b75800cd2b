//! Result types produced by discovery and compliance checking.
//!
//! Both are sorted maps so report output is stable and reproducible.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Mapping from dotted package name to its non-compliant file names.
///
/// An empty set means the package name itself matched no rule. Packages
/// without violations are absent entirely.
pub type ComplianceReport = BTreeMap<String, BTreeSet<String>>;

/// Mapping from package-relative directory path to the set of its
/// immediate non-hidden file names.
///
/// A directory with no visible files and no visible subdirectories is
/// still present, mapped to the empty set. The root directory itself maps
/// to the empty relative path.
pub type DiscoveredTree = BTreeMap<PathBuf, BTreeSet<String>>;
