//! JSON Schema export for entity kinds.
//!
//! Schemas are generated with `schemars` from the typed models and carry an
//! `x-collection` extension naming the storage collection, so a consumer can
//! route documents without knowing the naming convention.

use serde_json::Value;

use crate::entity::EntityKind;
use crate::models::{Entity, Inquiry, Product, User};

/// Extension keyword holding the storage collection name.
pub const COLLECTION_KEYWORD: &str = "x-collection";

/// JSON Schema (draft 2020-12) for `kind`.
#[must_use]
pub fn json_schema(kind: EntityKind) -> Value {
    match kind {
        EntityKind::User => User::json_schema(),
        EntityKind::Product => Product::json_schema(),
        EntityKind::Inquiry => Inquiry::json_schema(),
    }
}

pub(crate) fn schema_for_entity<E: Entity>() -> Value {
    let mut schema = schemars::schema_for!(E).to_value();
    if let Some(root) = schema.as_object_mut() {
        root.insert(
            COLLECTION_KEYWORD.to_owned(),
            Value::from(E::collection()),
        );
    }
    schema
}
