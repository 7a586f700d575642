//! Builds parameterized INSERT and SELECT statements and table DDL from a resource kind.

use crate::config::{ResourceKind, ID_COLUMN};

/// Quote identifier for PostgreSQL (safe: only from the registry). Preserves case, e.g. "X0".
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// `"id", "field1", ...` in declaration order.
fn returning_list(kind: &ResourceKind) -> String {
    std::iter::once(ID_COLUMN)
        .chain(kind.fields.iter().map(|f| f.name))
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// INSERT of every declared field, one `$n` per field, returning the full row.
pub fn insert_returning(kind: &ResourceKind) -> String {
    let cols: Vec<String> = kind.fields.iter().map(|f| quoted(f.name)).collect();
    let placeholders: Vec<String> = (1..=kind.fields.len()).map(|n| format!("${}", n)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(kind.table),
        cols.join(", "),
        placeholders.join(", "),
        returning_list(kind)
    )
}

/// SELECT by primary key. Caller binds the id as `$1`.
pub fn select_by_id(kind: &ResourceKind) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        returning_list(kind),
        quoted(kind.table),
        quoted(ID_COLUMN)
    )
}

/// CREATE TABLE IF NOT EXISTS with a store-assigned id and one NOT NULL column per field.
pub fn create_table(kind: &ResourceKind) -> String {
    let mut col_defs = vec![format!("{} BIGSERIAL PRIMARY KEY", quoted(ID_COLUMN))];
    for f in kind.fields {
        col_defs.push(format!("{} {} NOT NULL", quoted(f.name), f.ty.pg_type()));
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n  {}\n)",
        quoted(kind.table),
        col_defs.join(",\n  ")
    )
}
