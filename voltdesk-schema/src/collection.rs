//! Entity kind to storage collection mapping.
//!
//! The table is derived once from the type names on first use and is
//! read-only afterwards.

use std::sync::LazyLock;

use voltdesk_field::collection_name;

use crate::entity::EntityKind;

static COLLECTIONS: LazyLock<[(EntityKind, String); 3]> = LazyLock::new(|| {
    EntityKind::ALL.map(|kind| (kind, collection_name(kind.type_name())))
});

/// Collection name for `kind`, e.g. `inquiry` for [`EntityKind::Inquiry`].
#[must_use]
pub fn collection_for(kind: EntityKind) -> &'static str {
    &COLLECTIONS[kind.index()].1
}

/// Reverse lookup: the entity kind stored in collection `name`.
#[must_use]
pub fn kind_for_collection(name: &str) -> Option<EntityKind> {
    COLLECTIONS
        .iter()
        .find(|(_, collection)| collection == name)
        .map(|(kind, _)| *kind)
}

/// All `(kind, collection)` pairs in registry order.
pub fn collections() -> impl Iterator<Item = (EntityKind, &'static str)> {
    COLLECTIONS
        .iter()
        .map(|(kind, collection)| (*kind, collection.as_str()))
}
