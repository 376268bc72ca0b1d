//! Validated records.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use voltdesk_field::FieldValue;

use crate::entity::EntityKind;

/// A record that passed validation.
///
/// Holds every declared field of its kind, in declaration order, with
/// defaults filled in. There is no way to mutate a field or build one
/// outside of validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRecord {
    kind: EntityKind,
    fields: Vec<(&'static str, FieldValue)>,
}

impl ValidatedRecord {
    pub(crate) fn new(kind: EntityKind, fields: Vec<(&'static str, FieldValue)>) -> Self {
        Self { kind, fields }
    }

    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Collection this record is to be stored in.
    #[must_use]
    pub fn collection(&self) -> &'static str {
        self.kind.collection()
    }

    /// Value of a declared field; `None` only if `name` is not declared.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.fields.iter().map(|(field, value)| (*field, value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// JSON object with every declared field; unset fields are `null`.
    ///
    /// Validating this object again yields an equal record.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(self.to_map())
    }

    #[must_use]
    pub fn into_json(self) -> Value {
        Value::Object(
            self.fields
                .into_iter()
                .map(|(field, value)| (field.to_owned(), value.to_json()))
                .collect(),
        )
    }

    fn to_map(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|(field, value)| ((*field).to_owned(), value.to_json()))
            .collect()
    }
}

impl Serialize for ValidatedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (field, value) in &self.fields {
            map.serialize_entry(field, &value.to_json())?;
        }
        map.end()
    }
}
