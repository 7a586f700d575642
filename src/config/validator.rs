//! Registry validation: unique routes and tables, well-formed identifiers, no reserved fields.

use crate::config::ResourceKind;
use crate::error::ConfigError;
use std::collections::HashSet;

/// Column assigned by the store; never declared by a kind.
pub const ID_COLUMN: &str = "id";

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_path_segment(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

pub fn validate(kinds: &[ResourceKind]) -> Result<(), ConfigError> {
    let mut names = HashSet::new();
    let mut tables = HashSet::new();
    let mut single_families = HashSet::new();
    let mut multi_families = HashSet::new();

    for kind in kinds {
        let name = kind.name();
        if !is_path_segment(kind.family) || !kind.resource.map_or(true, is_path_segment) {
            return Err(ConfigError::InvalidIdentifier(name));
        }
        if !names.insert(name.clone()) {
            return Err(ConfigError::DuplicateKind(name));
        }
        if !is_identifier(kind.table) {
            return Err(ConfigError::InvalidIdentifier(kind.table.to_string()));
        }
        if !tables.insert(kind.table) {
            return Err(ConfigError::DuplicateTable(kind.table.to_string()));
        }
        match kind.resource {
            Some(_) => multi_families.insert(kind.family),
            None => single_families.insert(kind.family),
        };
        if kind.fields.is_empty() {
            return Err(ConfigError::EmptyKind(name));
        }

        let mut fields = HashSet::new();
        for spec in kind.fields {
            if !is_identifier(spec.name) {
                return Err(ConfigError::InvalidIdentifier(spec.name.to_string()));
            }
            if spec.name.eq_ignore_ascii_case(ID_COLUMN) {
                return Err(ConfigError::ReservedField { kind: name, field: ID_COLUMN });
            }
            if !fields.insert(spec.name) {
                return Err(ConfigError::DuplicateField {
                    kind: name,
                    field: spec.name.to_string(),
                });
            }
        }
    }

    if let Some(family) = single_families.intersection(&multi_families).next() {
        return Err(ConfigError::AmbiguousFamily(family.to_string()));
    }

    Ok(())
}
