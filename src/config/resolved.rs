//! Resolved registry: validated kinds indexed by route for runtime lookup.

use crate::config::{validate, ResourceKind, CATALOGUE, FAMILY_ALIASES};
use crate::error::ConfigError;
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct Registry {
    kinds: Vec<&'static ResourceKind>,
    by_name: HashMap<String, &'static ResourceKind>,
    aliases: HashMap<&'static str, &'static str>,
}

impl Registry {
    /// Registry over the built-in catalogue.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_kinds(CATALOGUE)
    }

    pub fn from_kinds(kinds: &'static [ResourceKind]) -> Result<Self, ConfigError> {
        validate(kinds)?;
        let by_name = kinds.iter().map(|k| (k.name(), k)).collect();
        Ok(Registry {
            kinds: kinds.iter().collect(),
            by_name,
            aliases: FAMILY_ALIASES.iter().copied().collect(),
        })
    }

    fn canonical_family<'a>(&self, family: &'a str) -> &'a str {
        self.aliases.get(family).copied().unwrap_or(family)
    }

    /// Look up a kind by its route segments. Family aliases resolve to the canonical family.
    pub fn resolve(&self, family: &str, resource: Option<&str>) -> Option<&'static ResourceKind> {
        let family = self.canonical_family(family);
        let key = match resource {
            Some(resource) => format!("{}/{}", family, resource),
            None => family.to_string(),
        };
        self.by_name.get(&key).copied()
    }

    /// True when `family` is addressed without a resource segment.
    pub fn is_single_kind_family(&self, family: &str) -> bool {
        self.resolve(family, None).is_some()
    }

    pub fn kinds(&self) -> impl Iterator<Item = &'static ResourceKind> + '_ {
        self.kinds.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
