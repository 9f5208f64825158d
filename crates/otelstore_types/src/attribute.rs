use base64::prelude::*;
use opentelemetry_proto::tonic::common::v1::{any_value::Value as AnyValueVariant, AnyValue, KeyValue};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Flattened attribute mapping as persisted in the `attributes` JSONB columns.
pub type Attributes = BTreeMap<String, AttributeValue>;

/// Decoded form of the OTLP `AnyValue` tagged union.
///
/// `Absent` covers both a missing `AnyValue` and one whose oneof is unset, and
/// is stored as JSON `null`.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    String(String),
    Int(i64),
    Double(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    Array(Vec<AttributeValue>),
    Map(Attributes),
    Absent,
}

impl AttributeValue {
    /// The single dispatch point over the `AnyValue` variants.
    pub fn from_any_value(value: Option<&AnyValue>) -> Self {
        let Some(variant) = value.and_then(|v| v.value.as_ref()) else {
            return AttributeValue::Absent;
        };

        match variant {
            AnyValueVariant::StringValue(s) => AttributeValue::String(s.clone()),
            AnyValueVariant::IntValue(i) => AttributeValue::Int(*i),
            AnyValueVariant::DoubleValue(d) => AttributeValue::Double(*d),
            AnyValueVariant::BoolValue(b) => AttributeValue::Bool(*b),
            AnyValueVariant::BytesValue(bytes) => AttributeValue::Bytes(bytes.clone()),
            AnyValueVariant::ArrayValue(array) => AttributeValue::Array(
                array
                    .values
                    .iter()
                    .map(|v| AttributeValue::from_any_value(Some(v)))
                    .collect(),
            ),
            AnyValueVariant::KvlistValue(kvlist) => {
                AttributeValue::Map(normalize_attributes(&kvlist.values))
            }
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, AttributeValue::Absent)
    }

    /// Text rendering used for log bodies. Scalars render as-is, nested values
    /// as compact JSON.
    pub fn to_text(&self) -> Option<String> {
        match self {
            AttributeValue::Absent => None,
            AttributeValue::String(s) => Some(s.clone()),
            AttributeValue::Int(i) => Some(i.to_string()),
            AttributeValue::Double(d) => Some(d.to_string()),
            AttributeValue::Bool(b) => Some(b.to_string()),
            AttributeValue::Bytes(bytes) => Some(BASE64_STANDARD.encode(bytes)),
            AttributeValue::Array(_) | AttributeValue::Map(_) => serde_json::to_string(self)
                .inspect_err(|e| tracing::warn!(error = %e, "Failed to render value as JSON"))
                .ok(),
        }
    }
}

impl From<&AnyValue> for AttributeValue {
    fn from(value: &AnyValue) -> Self {
        AttributeValue::from_any_value(Some(value))
    }
}

impl Serialize for AttributeValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AttributeValue::String(s) => serializer.serialize_str(s),
            AttributeValue::Int(i) => serializer.serialize_i64(*i),
            // JSON has no representation for NaN or infinity
            AttributeValue::Double(d) if !d.is_finite() => serializer.serialize_none(),
            AttributeValue::Double(d) => serializer.serialize_f64(*d),
            AttributeValue::Bool(b) => serializer.serialize_bool(*b),
            AttributeValue::Bytes(bytes) => serializer.serialize_str(&BASE64_STANDARD.encode(bytes)),
            AttributeValue::Array(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
            AttributeValue::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
            AttributeValue::Absent => serializer.serialize_none(),
        }
    }
}

/// Convert an OTLP key/value list into a mapping. Later occurrences of a
/// repeated key overwrite earlier ones.
pub fn normalize_attributes(attributes: &[KeyValue]) -> Attributes {
    let mut normalized = Attributes::new();
    for kv in attributes {
        normalized.insert(kv.key.clone(), AttributeValue::from_any_value(kv.value.as_ref()));
    }
    normalized
}

/// Merge the three attribute scopes of a record. Insertion order is
/// resource, scope, record so the most specific scope wins on collisions.
pub fn merge_attributes(resource: &Attributes, scope: &Attributes, record: Attributes) -> Attributes {
    let mut merged = Attributes::new();
    merged.extend(resource.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged.extend(scope.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged.extend(record);
    merged
}
