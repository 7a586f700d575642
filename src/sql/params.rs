//! Bind field values to sqlx queries and read them back from rows.

use crate::config::{FieldType, FieldValue, Record, ResourceKind, ID_COLUMN};
use crate::error::StoreError;
use sqlx::postgres::{PgArguments, PgRow, Postgres};
use sqlx::query::Query;
use sqlx::types::Json;
use sqlx::Row;

/// Bind one value with its native column type; arrays go in as JSONB.
pub fn bind_field<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: &FieldValue,
) -> Query<'q, Postgres, PgArguments> {
    match value {
        FieldValue::Float(v) => query.bind(*v),
        FieldValue::Integer(v) => query.bind(*v),
        FieldValue::Text(v) => query.bind(v.clone()),
        FieldValue::FloatArray(v) => query.bind(Json(v.clone())),
        FieldValue::FloatMatrix(v) => query.bind(Json(v.clone())),
    }
}

/// Decode a `RETURNING`/`SELECT` row into a record of `kind`.
pub fn record_from_row(kind: &'static ResourceKind, row: &PgRow) -> Result<Record, StoreError> {
    let corrupt = |e: sqlx::Error| StoreError::Corrupt {
        kind: kind.name(),
        detail: e.to_string(),
    };
    let id: i64 = row.try_get(ID_COLUMN).map_err(corrupt)?;
    let mut values = Vec::with_capacity(kind.fields.len());
    for spec in kind.fields {
        let name = spec.name;
        let value = match spec.ty {
            FieldType::Float => FieldValue::Float(row.try_get(name).map_err(corrupt)?),
            FieldType::Integer => FieldValue::Integer(row.try_get(name).map_err(corrupt)?),
            FieldType::Text => FieldValue::Text(row.try_get(name).map_err(corrupt)?),
            FieldType::FloatArray => {
                let Json(v): Json<Vec<f64>> = row.try_get(name).map_err(corrupt)?;
                FieldValue::FloatArray(v)
            }
            FieldType::FloatMatrix => {
                let Json(v): Json<Vec<Vec<f64>>> = row.try_get(name).map_err(corrupt)?;
                FieldValue::FloatMatrix(v)
            }
        };
        values.push(value);
    }
    Ok(Record::new(id, kind, values))
}
