//! Declarative rule tables, one per entity kind.
//!
//! Field order is declaration order: validation visits fields in this order
//! and validated records keep it.

use voltdesk_field::{Constraint, FieldDefault, FieldRule, FieldType};

/// Service types a customer can request in an inquiry.
pub const SERVICE_TYPES: &[&str] = &[
    "General Maintenance",
    "Rewires",
    "Smoke Alarms",
    "Security & CCTV",
    "EV Chargers",
    "Lighting",
    "Other",
];

/// Lifecycle statuses of an inquiry.
pub const INQUIRY_STATUSES: &[&str] = &["new", "contacted", "scheduled", "completed", "archived"];

/// Status given to an inquiry that arrives without one.
pub const DEFAULT_INQUIRY_STATUS: &str = "new";

pub const USER_RULES: &[FieldRule] = &[
    FieldRule::required("name", FieldType::Text, "Full name").constrained(Constraint::NonEmpty),
    FieldRule::required("email", FieldType::Text, "Email address"),
    FieldRule::required("address", FieldType::Text, "Address"),
    FieldRule::optional("age", FieldType::Integer, "Age in years").constrained(
        Constraint::IntRange {
            min: Some(0),
            max: Some(120),
        },
    ),
    FieldRule::optional("is_active", FieldType::Boolean, "Whether user is active")
        .with_default(FieldDefault::Boolean(true)),
];

pub const PRODUCT_RULES: &[FieldRule] = &[
    FieldRule::required("title", FieldType::Text, "Product title"),
    FieldRule::optional("description", FieldType::Text, "Product description"),
    FieldRule::required("price", FieldType::Decimal, "Price in dollars").constrained(
        Constraint::DecimalRange {
            min: Some(0.0),
            max: None,
        },
    ),
    FieldRule::required("category", FieldType::Text, "Product category"),
    FieldRule::optional("in_stock", FieldType::Boolean, "Whether product is in stock")
        .with_default(FieldDefault::Boolean(true)),
];

pub const INQUIRY_RULES: &[FieldRule] = &[
    FieldRule::required("name", FieldType::Text, "Customer full name"),
    FieldRule::optional("email", FieldType::Email, "Customer email address"),
    FieldRule::optional("phone", FieldType::Text, "Customer phone number"),
    FieldRule::required(
        "service",
        FieldType::Choice(SERVICE_TYPES),
        "Requested service type",
    ),
    FieldRule::optional("message", FieldType::Text, "Additional details from customer"),
    FieldRule::optional("source", FieldType::Text, "Lead source, e.g., website form"),
    FieldRule::optional("status", FieldType::Choice(INQUIRY_STATUSES), "Inquiry status")
        .with_default(FieldDefault::Text(DEFAULT_INQUIRY_STATUS)),
];
