//! Unit tests for error handling.

use crate::errors::errors::Error;

#[test]
fn test_unrecognised_mode_error() {
    let error = Error::UnrecognisedMode {
        mode: "klingon".to_string(),
    };

    assert_eq!(error.get_error_name(), "UnrecognisedMode");
}

#[test]
fn test_error_display() {
    let error = Error::UnrecognisedMode {
        mode: "klingon".to_string(),
    };

    assert_eq!(error.to_string(), "unrecognised mode: \"klingon\"");
}
