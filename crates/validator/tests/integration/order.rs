//! First-failure-wins ordering, skipped fields and inert rules.

use pretty_assertions::assert_eq;
use struct_rules::prelude::*;

use crate::common::{User, valid_user};

#[test]
fn first_failing_field_wins() {
    let user = User {
        email: "invalidemailcom".to_string(),
        age: 17,
        address: "Short".to_string(),
        ..valid_user()
    };

    let error = Validator::new().validate(&user).unwrap_err();
    assert_eq!(error.field, "Email");
}

#[test]
fn first_failing_rule_wins() {
    struct Code {
        value: String,
    }

    struct_rules::record! {
        Code {
            "Code" => value: "len=4,max=2,email",
        }
    }

    let error = Validator::new()
        .validate(&Code {
            value: "abcdef".to_string(),
        })
        .unwrap_err();
    assert_eq!(error.violation, Violation::LengthMismatch { len: 4 });
}

#[test]
fn untagged_and_private_fields_are_skipped() {
    struct Session {
        token: String,
        note: String,
        user: String,
    }

    struct_rules::record! {
        Session {
            private "token" => token: "required",
            "Note" => note,
            "User" => user: "required",
        }
    }

    let session = Session {
        token: String::new(),
        note: String::new(),
        user: "alice".to_string(),
    };
    assert_eq!(Validator::new().validate(&session), Ok(()));
}

#[test]
fn absent_optional_fails_even_without_required() {
    struct Profile {
        bio: Option<String>,
    }

    struct_rules::record! {
        Profile {
            "Bio" => bio: "min=10",
        }
    }

    let validator = Validator::new();
    let error = validator.validate(&Profile { bio: None }).unwrap_err();
    assert_eq!(error.field, "Bio");
    assert_eq!(error.message, "field is required");

    let error = validator
        .validate(&Profile {
            bio: Some("short".to_string()),
        })
        .unwrap_err();
    assert_eq!(error.message, "length is below minimum of 10");
}

#[test]
fn malformed_rules_are_inert() {
    struct Loose {
        count: i64,
        label: String,
    }

    struct_rules::record! {
        Loose {
            "Count" => count: "max=abc,min=,unique",
            "Label" => label: "len=ten,max=-1,required ",
        }
    }

    let loose = Loose {
        count: 1_000_000,
        label: String::new(),
    };
    assert_eq!(Validator::new().validate(&loose), Ok(()));
}

#[test]
fn rules_for_other_kinds_are_inert() {
    struct Flags {
        enabled: bool,
        ratio: f64,
        items: Vec<u8>,
    }

    struct_rules::record! {
        Flags {
            "Enabled" => enabled: "required,min=1,email",
            "Ratio" => ratio: "max=0,len=3",
            "Items" => items: "min=5,max=0,len=2,email",
        }
    }

    let flags = Flags {
        enabled: false,
        ratio: 7.5,
        items: vec![1],
    };
    assert_eq!(Validator::new().validate(&flags), Ok(()));
}

#[test]
fn required_on_empty_sequence_and_zero_float() {
    struct Cart {
        items: Vec<u8>,
        total: f64,
    }

    struct_rules::record! {
        Cart {
            "Items" => items: "required",
            "Total" => total: "required",
        }
    }

    let validator = Validator::new();
    let error = validator
        .validate(&Cart {
            items: Vec::new(),
            total: 1.0,
        })
        .unwrap_err();
    assert_eq!(error.field, "Items");

    let error = validator
        .validate(&Cart {
            items: vec![1],
            total: 0.0,
        })
        .unwrap_err();
    assert_eq!(error.field, "Total");
}
