//! Validation from many threads at once, through the public API only.

use std::thread;

use serde_json::json;
use voltdesk_schema::{
    EntityKind, FieldValue, ValidatedRecord, ValidationError, collection_for, validate,
};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_public_types_are_send_and_sync() {
    assert_send_sync::<EntityKind>();
    assert_send_sync::<ValidatedRecord>();
    assert_send_sync::<ValidationError>();
}

#[test]
fn test_parallel_validation_is_independent() {
    let handles: Vec<_> = (0..8_i64)
        .map(|i| {
            thread::spawn(move || {
                let ok = validate(
                    EntityKind::User,
                    &json!({
                        "name": format!("Worker {i}"),
                        "email": "worker@example.com",
                        "address": "1 Circuit Road",
                        "age": i * 15
                    }),
                );
                let rejected = validate(
                    EntityKind::Inquiry,
                    &json!({"name": "Jane Doe", "service": "Unlisted"}),
                );
                (i, ok, rejected, collection_for(EntityKind::Product))
            })
        })
        .collect();

    for handle in handles {
        let (i, ok, rejected, collection) = handle.join().unwrap();
        let record = ok.unwrap();
        assert_eq!(record.get("age"), Some(&FieldValue::Integer(i * 15)));
        assert_eq!(rejected.unwrap_err().code(), "invalid_enum_value");
        assert_eq!(collection, "product");
    }
}
