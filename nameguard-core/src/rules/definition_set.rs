//! Ordered, merged collection of package rules.

use crate::errors::RuleError;
use crate::traits::Rule;
use crate::types::collections::FxHashMap;

use super::package_rule::PackageRule;

/// The aggregated result of compiling one or more definition sources.
///
/// Rules keep strict declaration order across all sources: the first
/// occurrence of a pattern establishes its position, and later
/// equal-pattern rules are merged into that position. Declaration order is
/// the resolution precedence, so more specific rules must be declared
/// before more general ones.
#[derive(Debug, Clone, Default)]
pub struct DefinitionSet {
    rules: Vec<PackageRule>,
}

impl DefinitionSet {
    /// Fold rules into an ordered, duplicate-free set, merging
    /// equal-pattern rules into the position of their first occurrence.
    pub fn from_rules(rules: impl IntoIterator<Item = PackageRule>) -> Result<Self, RuleError> {
        let mut ordered: Vec<PackageRule> = Vec::new();
        let mut positions: FxHashMap<String, usize> = FxHashMap::default();

        for rule in rules {
            match positions.get(rule.pattern()) {
                Some(&at) => {
                    let merged = ordered[at].clone().merge(rule)?;
                    ordered[at] = merged;
                }
                None => {
                    positions.insert(rule.pattern().to_string(), ordered.len());
                    ordered.push(rule);
                }
            }
        }

        tracing::debug!(rules = ordered.len(), "package rules folded");
        Ok(Self { rules: ordered })
    }

    /// The first rule whose pattern matches the package name, scanning in
    /// declaration order with an early exit.
    pub fn resolve(&self, package_name: &str) -> Option<&PackageRule> {
        self.rules.iter().find(|rule| rule.matches(package_name))
    }

    /// All rules, in declaration order.
    pub fn rules(&self) -> &[PackageRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
