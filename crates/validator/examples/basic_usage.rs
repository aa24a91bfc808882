//! Basic usage example for struct-rules
//!
//! Installs a `tracing` subscriber at `DEBUG`, so each failing field is also
//! logged with its rule and whether a custom message replaced the default.

use struct_rules::prelude::*;

struct User {
    name: Option<String>,
    email: String,
    age: u32,
    address: String,
}

struct_rules::record! {
    User {
        "Name" => name: "required,min=3,max=50",
        "Email" => email: "required,email",
        "Age" => age: "min=18,max=100",
        "Address" => address: "len=10",
    }
}

fn report(label: &str, result: Result<(), ValidationError>) {
    match result {
        Ok(()) => println!("✓ {label}: valid"),
        Err(e) => println!("✗ {label}: {e}"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let validator = Validator::new().with_custom_errors(CustomErrors::from([
        ("Name", "required", "Name is required"),
        ("Age", "max", "Age cannot exceed 100"),
    ]));

    let mut user = User {
        name: None,
        email: "john.doe@example.com".to_string(),
        age: 25,
        address: "1234567890".to_string(),
    };
    report("missing name", validator.validate(&user));

    user.name = Some("John Doe".to_string());
    user.age = 101;
    report("too old", validator.validate(&user));

    user.age = 17;
    report("too young", validator.validate(&user));

    user.age = 25;
    report("fixed", validator.validate(&user));
}
