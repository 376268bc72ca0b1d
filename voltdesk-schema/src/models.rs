//! Typed entity models.
//!
//! Each model is the strongly-typed view of a validated record of its kind.
//! Construction always goes through the rule tables: [`Entity::parse`]
//! validates first and only then deserializes, and [`Entity::to_record`]
//! re-validates a value built in code before it is handed to storage.

use std::fmt;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use voltdesk_field::ValidationError;

use crate::entity::EntityKind;
use crate::json_schema::schema_for_entity;
use crate::record::ValidatedRecord;
use crate::validate::validate;

/// Errors from building or exporting a typed model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EntityError {
    /// The raw record was rejected by the schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A record of one kind was offered to another kind's model.
    #[error("cannot build a {expected} from a {found} record")]
    KindMismatch {
        expected: EntityKind,
        found: EntityKind,
    },

    /// A validated record could not be mapped onto its model.
    #[error("{kind} record does not match its model: {source}")]
    Shape {
        kind: EntityKind,
        source: serde_json::Error,
    },
}

/// A typed model backed by one entity schema.
pub trait Entity: Serialize + DeserializeOwned + JsonSchema {
    /// The schema this model is validated against.
    const KIND: EntityKind;

    /// Storage collection for this model.
    #[must_use]
    fn collection() -> &'static str {
        Self::KIND.collection()
    }

    /// Validate `raw` and build the model from the result.
    ///
    /// # Errors
    /// Returns [`EntityError::Validation`] when `raw` fails validation.
    fn parse(raw: &Value) -> Result<Self, EntityError> {
        Self::from_record(validate(Self::KIND, raw)?)
    }

    /// Build the model from an already validated record.
    ///
    /// # Errors
    /// Returns [`EntityError::KindMismatch`] when `record` belongs to another
    /// kind, [`EntityError::Shape`] when it cannot be mapped onto the model.
    fn from_record(record: ValidatedRecord) -> Result<Self, EntityError> {
        if record.kind() != Self::KIND {
            return Err(EntityError::KindMismatch {
                expected: Self::KIND,
                found: record.kind(),
            });
        }
        serde_json::from_value(record.into_json()).map_err(|source| EntityError::Shape {
            kind: Self::KIND,
            source,
        })
    }

    /// Validate this value against its schema, producing the storable record.
    ///
    /// # Errors
    /// Returns [`EntityError::Validation`] when a field built in code breaks
    /// a constraint (e.g. an age of 130 or a malformed email).
    fn to_record(&self) -> Result<ValidatedRecord, EntityError> {
        let raw = serde_json::to_value(self).map_err(|source| EntityError::Shape {
            kind: Self::KIND,
            source,
        })?;
        Ok(validate(Self::KIND, &raw)?)
    }

    /// JSON Schema describing this model.
    #[must_use]
    fn json_schema() -> Value {
        schema_for_entity::<Self>()
    }
}

fn default_true() -> bool {
    true
}

/// Users collection schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct User {
    /// Full name
    #[schemars(length(min = 1))]
    pub name: String,
    /// Email address
    pub email: String,
    /// Address
    pub address: String,
    /// Age in years
    #[schemars(range(min = 0, max = 120))]
    pub age: Option<i64>,
    /// Whether user is active
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;
}

/// Products collection schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Product {
    /// Product title
    pub title: String,
    /// Product description
    pub description: Option<String>,
    /// Price in dollars
    #[schemars(range(min = 0))]
    pub price: f64,
    /// Product category
    pub category: String,
    /// Whether product is in stock
    #[serde(default = "default_true")]
    pub in_stock: bool,
}

impl Entity for Product {
    const KIND: EntityKind = EntityKind::Product;
}

/// Customer inquiries and quote requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Inquiry {
    /// Customer full name
    pub name: String,
    /// Customer email address
    #[schemars(email)]
    pub email: Option<String>,
    /// Customer phone number
    pub phone: Option<String>,
    /// Requested service type
    pub service: ServiceType,
    /// Additional details from customer
    pub message: Option<String>,
    /// Lead source, e.g., website form
    pub source: Option<String>,
    /// Inquiry status
    #[serde(default)]
    pub status: InquiryStatus,
}

impl Inquiry {
    /// A fresh inquiry with only the required fields set.
    #[must_use]
    pub fn new(name: impl Into<String>, service: ServiceType) -> Self {
        Self {
            name: name.into(),
            email: None,
            phone: None,
            service,
            message: None,
            source: None,
            status: InquiryStatus::default(),
        }
    }
}

impl Entity for Inquiry {
    const KIND: EntityKind = EntityKind::Inquiry;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ServiceType {
    #[serde(rename = "General Maintenance")]
    GeneralMaintenance,
    Rewires,
    #[serde(rename = "Smoke Alarms")]
    SmokeAlarms,
    #[serde(rename = "Security & CCTV")]
    SecurityCctv,
    #[serde(rename = "EV Chargers")]
    EvChargers,
    Lighting,
    Other,
}

impl ServiceType {
    pub const ALL: [Self; 7] = [
        Self::GeneralMaintenance,
        Self::Rewires,
        Self::SmokeAlarms,
        Self::SecurityCctv,
        Self::EvChargers,
        Self::Lighting,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GeneralMaintenance => "General Maintenance",
            Self::Rewires => "Rewires",
            Self::SmokeAlarms => "Smoke Alarms",
            Self::SecurityCctv => "Security & CCTV",
            Self::EvChargers => "EV Chargers",
            Self::Lighting => "Lighting",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[default]
    New,
    Contacted,
    Scheduled,
    Completed,
    Archived,
}

impl InquiryStatus {
    pub const ALL: [Self; 5] = [
        Self::New,
        Self::Contacted,
        Self::Scheduled,
        Self::Completed,
        Self::Archived,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
