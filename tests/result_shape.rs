//! Serialized shape of the check result record

use pfx_check::check::{aggregate, BundleOutcome};
use pfx_check::{CheckError, CheckOptions};
use serde_json::Value;

#[test]
fn test_default_options_produce_null_error_and_no_certificate_field() {
    let result = aggregate(
        BundleOutcome::Valid { certs: Vec::new() },
        CheckOptions::default(),
    );
    let json = serde_json::to_value(&result).unwrap();
    let obj = json.as_object().expect("result serializes to an object");

    assert_eq!(obj["isPfxOutdated"], Value::Bool(false));
    assert_eq!(obj["isPasswordOrPfxInvalid"], Value::Bool(false));
    assert_eq!(obj["willWork"], Value::Bool(true));
    assert!(obj.contains_key("error"));
    assert_eq!(obj["error"], Value::Null);
    assert!(!obj.contains_key("validCerts"));
}

#[test]
fn test_include_certificates_adds_the_field() {
    let options = CheckOptions {
        include_certificates: true,
        ..Default::default()
    };
    let result = aggregate(BundleOutcome::Valid { certs: Vec::new() }, options);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["validCerts"], serde_json::json!([]));
}

#[test]
fn test_suppressed_error_field_is_absent_entirely() {
    let options = CheckOptions {
        include_error: false,
        ..Default::default()
    };
    let outcome = BundleOutcome::Invalid {
        error: CheckError::Decryption {
            message: "bad mac".to_string(),
        },
    };
    let result = aggregate(outcome, options);
    let json = serde_json::to_value(&result).unwrap();
    let obj = json.as_object().expect("result serializes to an object");

    assert!(!obj.contains_key("error"));
    assert_eq!(obj["willWork"], Value::Bool(false));
    assert_eq!(obj["isPasswordOrPfxInvalid"], Value::Bool(true));
}

#[test]
fn test_captured_error_serializes_kind_and_message() {
    let outcome = BundleOutcome::Outdated {
        certs: Vec::new(),
        expired: 2,
    };
    let result = aggregate(outcome, CheckOptions::default());
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["error"]["kind"], "expired");
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .contains("2 expired"));
    assert_eq!(json["isPfxOutdated"], Value::Bool(true));
    assert_eq!(json["willWork"], Value::Bool(false));
}
