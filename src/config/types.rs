//! Resource kind descriptors: field types, field specs, and the values a field can hold.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Semantic type of one declared field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// JSON number, stored as f64.
    Float,
    /// JSON integer, stored as i64.
    Integer,
    /// UTF-8 string. Delimited-string arrays are declared as `Text` and kept opaque.
    Text,
    /// JSON array of numbers.
    FloatArray,
    /// JSON array of arrays of numbers. Rows may be ragged.
    FloatMatrix,
}

impl FieldType {
    /// Human-readable expectation used in decode errors.
    pub fn describe(&self) -> &'static str {
        match self {
            FieldType::Float => "a number",
            FieldType::Integer => "an integer",
            FieldType::Text => "a string",
            FieldType::FloatArray => "an array of numbers",
            FieldType::FloatMatrix => "an array of arrays of numbers",
        }
    }

    /// PostgreSQL column type.
    pub fn pg_type(&self) -> &'static str {
        match self {
            FieldType::Float => "DOUBLE PRECISION",
            FieldType::Integer => "BIGINT",
            FieldType::Text => "TEXT",
            FieldType::FloatArray | FieldType::FloatMatrix => "JSONB",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    /// JSON key and column name (case preserved).
    pub name: &'static str,
    pub ty: FieldType,
}

pub const fn field(name: &'static str, ty: FieldType) -> FieldSpec {
    FieldSpec { name, ty }
}

/// One fixed record category: where it is routed, where it is stored, and what it carries.
#[derive(Debug)]
pub struct ResourceKind {
    pub family: &'static str,
    /// `None` for a family that holds a single kind (addressed by the family path alone).
    pub resource: Option<&'static str>,
    pub table: &'static str,
    /// Display name used in response messages, e.g. "Bisection".
    pub label: &'static str,
    pub fields: &'static [FieldSpec],
}

impl ResourceKind {
    /// Registry key: `family/resource`, or `family` for single-kind families.
    pub fn name(&self) -> String {
        match self.resource {
            Some(resource) => format!("{}/{}", self.family, resource),
            None => self.family.to_string(),
        }
    }

    /// Route path relative to the API prefix.
    pub fn path(&self) -> String {
        format!("/{}", self.name())
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl PartialEq for ResourceKind {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family && self.resource == other.resource
    }
}

/// A decoded field value. Serializes as the plain JSON value.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Float(f64),
    Integer(i64),
    Text(String),
    FloatArray(Vec<f64>),
    FloatMatrix(Vec<Vec<f64>>),
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Float(v) => serializer.serialize_f64(*v),
            FieldValue::Integer(v) => serializer.serialize_i64(*v),
            FieldValue::Text(v) => serializer.serialize_str(v),
            FieldValue::FloatArray(v) => v.serialize(serializer),
            FieldValue::FloatMatrix(v) => v.serialize(serializer),
        }
    }
}

/// Validated request payload: exactly the declared fields of one kind, in declaration order.
/// Only the request validator builds these, so a store never sees an unchecked body.
#[derive(Clone, Debug, PartialEq)]
pub struct Payload {
    kind: &'static ResourceKind,
    values: Vec<FieldValue>,
}

impl Payload {
    pub(crate) fn new(kind: &'static ResourceKind, values: Vec<FieldValue>) -> Self {
        debug_assert_eq!(kind.fields.len(), values.len());
        Payload { kind, values }
    }

    pub fn kind(&self) -> &'static ResourceKind {
        self.kind
    }

    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        field_value(self.kind, &self.values, name)
    }
}

/// A persisted instance of a kind. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    id: i64,
    kind: &'static ResourceKind,
    values: Vec<FieldValue>,
}

impl Record {
    /// Build a record from a store row. `values` must follow `kind.fields` order.
    pub fn new(id: i64, kind: &'static ResourceKind, values: Vec<FieldValue>) -> Self {
        debug_assert_eq!(kind.fields.len(), values.len());
        Record { id, kind, values }
    }

    pub fn from_payload(id: i64, payload: Payload) -> Self {
        Record {
            id,
            kind: payload.kind,
            values: payload.values,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn kind(&self) -> &'static ResourceKind {
        self.kind
    }

    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        field_value(self.kind, &self.values, name)
    }

    /// True when every client-supplied field equals the payload's.
    pub fn matches(&self, payload: &Payload) -> bool {
        self.kind == payload.kind && self.values == payload.values
    }
}

fn field_value<'a>(kind: &ResourceKind, values: &'a [FieldValue], name: &str) -> Option<&'a FieldValue> {
    kind.fields
        .iter()
        .position(|f| f.name == name)
        .and_then(|i| values.get(i))
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        map.serialize_entry("id", &self.id)?;
        for (spec, value) in self.kind.fields.iter().zip(&self.values) {
            map.serialize_entry(spec.name, value)?;
        }
        map.end()
    }
}
