//! Request decoding against a kind's declared fields. Shape checks only: no range or sanity checks.

use crate::config::{FieldSpec, FieldType, FieldValue, Payload, ResourceKind};
use crate::error::DecodeError;
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// Decode a raw body into the payload of `kind`. Every declared field is required;
    /// undeclared keys are ignored. Pure and side-effect free.
    pub fn decode(kind: &'static ResourceKind, body: &[u8]) -> Result<Payload, DecodeError> {
        let value: Value = serde_json::from_slice(body)?;
        Self::decode_value(kind, value)
    }

    pub fn decode_value(kind: &'static ResourceKind, value: Value) -> Result<Payload, DecodeError> {
        let Value::Object(mut body) = value else {
            return Err(DecodeError::NotAnObject);
        };
        let mut values = Vec::with_capacity(kind.fields.len());
        for spec in kind.fields {
            let raw = body.remove(spec.name).ok_or(DecodeError::MissingField(spec.name))?;
            values.push(decode_field(spec, raw)?);
        }
        Ok(Payload::new(kind, values))
    }
}

fn decode_field(spec: &FieldSpec, raw: Value) -> Result<FieldValue, DecodeError> {
    let wrong_type = || DecodeError::WrongType {
        field: spec.name,
        expected: spec.ty.describe(),
    };
    match spec.ty {
        FieldType::Float => raw.as_f64().map(FieldValue::Float).ok_or_else(wrong_type),
        FieldType::Integer => raw.as_i64().map(FieldValue::Integer).ok_or_else(wrong_type),
        FieldType::Text => match raw {
            Value::String(s) => Ok(FieldValue::Text(s)),
            _ => Err(wrong_type()),
        },
        FieldType::FloatArray => float_row(&raw).map(FieldValue::FloatArray).ok_or_else(wrong_type),
        FieldType::FloatMatrix => raw
            .as_array()
            .and_then(|rows| rows.iter().map(float_row).collect::<Option<Vec<_>>>())
            .map(FieldValue::FloatMatrix)
            .ok_or_else(wrong_type),
    }
}

fn float_row(value: &Value) -> Option<Vec<f64>> {
    value.as_array()?.iter().map(Value::as_f64).collect()
}
