//! Entity kinds and their rule tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use voltdesk_field::FieldRule;

use crate::collection;
use crate::rules::{INQUIRY_RULES, PRODUCT_RULES, USER_RULES};

/// Which schema a raw record is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    User,
    Product,
    Inquiry,
}

impl EntityKind {
    /// Every entity kind, in registry order.
    pub const ALL: [Self; 3] = [Self::User, Self::Product, Self::Inquiry];

    /// The entity's type name, e.g. `Inquiry`.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Product => "Product",
            Self::Inquiry => "Inquiry",
        }
    }

    /// Name of the storage collection validated records of this kind go to.
    #[must_use]
    pub fn collection(self) -> &'static str {
        collection::collection_for(self)
    }

    /// The ordered field rules of this kind's schema.
    #[must_use]
    pub const fn rules(self) -> &'static [FieldRule] {
        match self {
            Self::User => USER_RULES,
            Self::Product => PRODUCT_RULES,
            Self::Inquiry => INQUIRY_RULES,
        }
    }

    /// Look up a declared field rule by name.
    #[must_use]
    pub fn rule(self, field: &str) -> Option<&'static FieldRule> {
        self.rules().iter().find(|rule| rule.name == field)
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::User => 0,
            Self::Product => 1,
            Self::Inquiry => 2,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Returned when a string names no known entity kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown entity kind '{0}' (expected one of: User, Product, Inquiry)")]
pub struct UnknownEntityKind(pub String);

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    /// Accepts the type name (`Inquiry`) or the collection name (`inquiry`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.type_name() == s)
            .or_else(|| collection::kind_for_collection(s))
            .ok_or_else(|| UnknownEntityKind(s.to_owned()))
    }
}
