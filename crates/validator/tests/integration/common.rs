//! Shared fixtures.

/// The canonical record: an optional name plus three plain fields.
#[derive(Debug, Clone)]
pub struct User {
    pub name: Option<String>,
    pub email: String,
    pub age: i32,
    pub address: String,
}

struct_rules::record! {
    User {
        "Name" => name: "required,min=3,max=50",
        "Email" => email: "required,email",
        "Age" => age: "min=18,max=100",
        "Address" => address: "len=10",
    }
}

/// A user that passes every rule.
pub fn valid_user() -> User {
    User {
        name: Some("John Doe".to_string()),
        email: "john.doe@example.com".to_string(),
        age: 25,
        address: "1234567890".to_string(),
    }
}
