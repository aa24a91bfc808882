//! End-to-end scenarios against the canonical `User` record.

use pretty_assertions::assert_eq;
use struct_rules::prelude::*;

use crate::common::{User, valid_user};

#[test]
fn valid_record_passes() {
    assert_eq!(Validator::new().validate(&valid_user()), Ok(()));
}

#[test]
fn absent_name_is_required() {
    let user = User {
        name: None,
        ..valid_user()
    };

    let error = Validator::new().validate(&user).unwrap_err();
    assert_eq!(error.field, "Name");
    assert_eq!(error.message, "field is required");
    assert_eq!(
        error.to_string(),
        "Field 'Name' validation failed: field is required"
    );
}

#[test]
fn absent_name_uses_required_override() {
    let validator = Validator::new()
        .with_custom_errors(CustomErrors::from([("Name", "required", "Name is required")]));
    let user = User {
        name: None,
        ..valid_user()
    };

    let error = validator.validate(&user).unwrap_err();
    assert_eq!(error.field, "Name");
    assert_eq!(error.message, "Name is required");
}

#[test]
fn short_name_violates_min_length() {
    let user = User {
        name: Some("A".to_string()),
        ..valid_user()
    };

    let error = Validator::new().validate(&user).unwrap_err();
    assert_eq!(error.field, "Name");
    assert_eq!(error.message, "length is below minimum of 3");
}

#[test]
fn long_name_violates_max_length() {
    let user = User {
        name: Some("x".repeat(51)),
        ..valid_user()
    };

    let error = Validator::new().validate(&user).unwrap_err();
    assert_eq!(error.message, "length exceeds maximum of 50");
}

#[test]
fn present_but_empty_name_is_required() {
    let user = User {
        name: Some(String::new()),
        ..valid_user()
    };

    let error = Validator::new().validate(&user).unwrap_err();
    assert_eq!(error.violation, Violation::Required);
}

#[test]
fn malformed_email() {
    let user = User {
        email: "invalidemailcom".to_string(),
        ..valid_user()
    };

    let error = Validator::new().validate(&user).unwrap_err();
    assert_eq!(error.field, "Email");
    assert_eq!(error.message, "invalid email format");
}

#[test]
fn empty_email_is_required_before_format() {
    let user = User {
        email: String::new(),
        ..valid_user()
    };

    let error = Validator::new().validate(&user).unwrap_err();
    assert_eq!(error.field, "Email");
    assert_eq!(error.message, "field is required");
}

#[test]
fn underage() {
    let user = User {
        age: 17,
        ..valid_user()
    };

    let error = Validator::new().validate(&user).unwrap_err();
    assert_eq!(error.field, "Age");
    assert_eq!(error.message, "value is below minimum of 18");
}

#[test]
fn overage_uses_max_override() {
    let validator = Validator::new()
        .with_custom_errors(CustomErrors::from([("Age", "max", "Age cannot exceed 100")]));
    let user = User {
        age: 101,
        ..valid_user()
    };

    let error = validator.validate(&user).unwrap_err();
    assert_eq!(error.field, "Age");
    assert_eq!(error.message, "Age cannot exceed 100");
    assert_eq!(error.violation, Violation::AboveMaximum { max: 100 });

    let fixed = User {
        age: 99,
        ..valid_user()
    };
    assert_eq!(validator.validate(&fixed), Ok(()));
}

#[test]
fn short_address() {
    let user = User {
        address: "Short".to_string(),
        ..valid_user()
    };

    let error = Validator::new().validate(&user).unwrap_err();
    assert_eq!(error.field, "Address");
    assert_eq!(error.message, "length must be exactly 10");
}

#[test]
fn validates_through_references_and_boxes() {
    let user = User {
        age: 17,
        ..valid_user()
    };
    let validator = Validator::new();

    let by_ref = validator.validate(&&user).unwrap_err();
    let boxed = validator.validate(&Box::new(user.clone())).unwrap_err();
    assert_eq!(by_ref, boxed);
}

#[test]
fn same_validator_is_reusable() {
    let validator = Validator::new();
    let mut user = User {
        name: Some("John".to_string()),
        email: "invalidemailcom".to_string(),
        age: 17,
        address: "Short".to_string(),
    };

    assert!(validator.validate(&user).is_err());

    user.name = Some("John Doe".to_string());
    user.email = "john.doe@example.com".to_string();
    user.age = 25;
    user.address = "1234567890".to_string();

    assert_eq!(validator.validate(&user), Ok(()));
}
