//! # voltdesk-schema
//!
//! Schemas for the records the Voltdesk backend stores: users, products and
//! customer inquiries. Each entity kind is an ordered rule table consumed by
//! one generic validator; a record is either fully valid, with defaults
//! filled in, or rejected with the first error found.
//!
//! ```rust
//! use serde_json::json;
//! use voltdesk_schema::{EntityKind, FieldValue, validate};
//!
//! let record = validate(
//!     EntityKind::Inquiry,
//!     &json!({"name": "Jane Doe", "service": "Rewires"}),
//! )
//! .unwrap();
//!
//! assert_eq!(record.collection(), "inquiry");
//! assert_eq!(record.get("status"), Some(&FieldValue::Text("new".to_owned())));
//! assert_eq!(record.get("email"), Some(&FieldValue::Unset));
//! ```

pub mod collection;
pub mod entity;
pub mod json_schema;
pub mod models;
pub mod record;
pub mod rules;
pub mod validate;



pub use collection::{collection_for, collections, kind_for_collection};
pub use entity::{EntityKind, UnknownEntityKind};
pub use json_schema::{COLLECTION_KEYWORD, json_schema};
pub use models::{Entity, EntityError, Inquiry, InquiryStatus, Product, ServiceType, User};
pub use record::ValidatedRecord;
pub use validate::{validate, validate_map};

pub use voltdesk_field::{Bound, FieldRule, FieldType, FieldValue, Limit, ValidationError};
