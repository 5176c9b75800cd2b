//! Sequential directory walker using the `ignore` crate.
//!
//! All ignore-file handling is switched off; only the hidden-entry filter
//! applies, so entries whose names start with `.` are invisible and never
//! make a parent directory count as non-empty. A package is a directory
//! that either contains at least one visible file or has no visible
//! children at all; a directory whose only visible children are
//! subdirectories is not itself a package.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use nameguard_core::{CheckError, DiscoveredTree};

/// Walk the source tree and map every package-relative directory path to
/// its immediate non-hidden file names.
///
/// Any walk error aborts with no partial tree, since a correct
/// compliance report requires full-subtree coverage.
pub fn discover_packages(root: &Path, follow_links: bool) -> Result<DiscoveredTree, CheckError> {
    let mut tree = DiscoveredTree::new();
    let mut childless: BTreeSet<PathBuf> = BTreeSet::new();

    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(true)
        .follow_links(follow_links);

    for entry in builder.build() {
        let entry = entry.map_err(|error| CheckError::Walk {
            path: root.to_path_buf(),
            message: error.to_string(),
        })?;

        let relative = match entry.path().strip_prefix(root) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => continue,
        };
        let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);

        if is_dir {
            if entry.depth() > 0 {
                if let Some(parent) = relative.parent() {
                    childless.remove(parent);
                }
            }
            childless.insert(relative);
        } else if let Some(parent) = relative.parent() {
            childless.remove(parent);
            let name = entry.file_name().to_string_lossy().into_owned();
            tree.entry(parent.to_path_buf()).or_default().insert(name);
        }
    }

    // Whatever is left saw neither a visible file nor a visible
    // subdirectory: an empty package.
    for package in childless {
        tree.entry(package).or_default();
    }

    tracing::debug!(packages = tree.len(), "source tree discovered");
    Ok(tree)
}
