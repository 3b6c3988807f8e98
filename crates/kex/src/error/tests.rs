use super::*;
use ecpdh_api::error::ErrorKind;

#[test]
fn test_error_conversion() {
    let core_err = CoreError::from(Error::Agreement {
        curve: "P-256",
        details: "product is the point at infinity",
    });
    assert_eq!(core_err, CoreError::ArithmeticFailure { context: "P-256" });

    let core_err = CoreError::from(Error::GroupConstruction {
        curve: "brainpoolP256r1",
        details: "generator is not on the curve",
    });
    assert_eq!(core_err.kind(), ErrorKind::ArithmeticFailure);

    // Primitive errors keep their own classification
    let core_err = CoreError::from(Error::from(PrimitiveError::InvalidPoint { context: "peer" }));
    assert_eq!(core_err, CoreError::InvalidPoint { context: "peer" });

    let core_err = CoreError::from(Error::from(PrimitiveError::ScalarRange { context: "P-384" }));
    assert_eq!(core_err.kind(), ErrorKind::MalformedInput);
}

#[test]
fn test_validation_functions() {
    assert!(validate::key_generation(true, "P-256", "unused").is_ok());
    assert_eq!(
        validate::key_generation(false, "P-256", "public value is the identity"),
        Err(Error::KeyGeneration {
            curve: "P-256",
            details: "public value is the identity",
        })
    );

    assert!(validate::agreement(true, "P-521", "unused").is_ok());
    assert!(matches!(
        validate::agreement(false, "P-521", "failed"),
        Err(Error::Agreement { curve: "P-521", .. })
    ));

    assert_eq!(
        validate::length("public value", 63, 64).unwrap_err().kind(),
        ErrorKind::MalformedInput
    );
}

#[test]
fn test_display() {
    let err = Error::GroupConstruction {
        curve: "brainpoolP384r1",
        details: "invalid field prime",
    };
    assert_eq!(err.to_string(), "Cannot construct brainpoolP384r1: invalid field prime");
}
