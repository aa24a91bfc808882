//! Building validators from configuration documents.

use pretty_assertions::assert_eq;
use struct_rules::prelude::*;

use crate::common::{User, valid_user};

#[test]
fn config_round_trip_builds_equivalent_validator() {
    let config = ValidatorConfig {
        overlay: OverlayPolicy::Uniform,
        custom_errors: CustomErrors::from([("Address", "len", "Ten characters, please")]),
    };

    let json = serde_json::to_string(&config).unwrap();
    let parsed = ValidatorConfig::from_json_str(&json).unwrap();
    assert_eq!(parsed, config);

    let user = User {
        address: "Short".to_string(),
        ..valid_user()
    };
    let error = parsed.build().validate(&user).unwrap_err();
    assert_eq!(error.message, "Ten characters, please");
}

#[test]
fn config_merges_with_later_registrations() {
    let validator = Validator::from_config(
        ValidatorConfig::from_json_str(r#"{"custom_errors": {"Age": {"max": "from config"}}}"#)
            .unwrap(),
    )
    .with_custom_errors(CustomErrors::from([("Age", "min", "from code")]));

    assert_eq!(validator.overlay_policy(), OverlayPolicy::Legacy);
    assert_eq!(validator.custom_errors().get("Age", "max"), Some("from config"));
    assert_eq!(validator.custom_errors().get("Age", "min"), Some("from code"));

    let old = User {
        age: 200,
        ..valid_user()
    };
    assert_eq!(validator.validate(&old).unwrap_err().message, "from config");
}
