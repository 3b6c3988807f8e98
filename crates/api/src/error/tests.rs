use super::*;

#[test]
fn test_length_validation() {
    assert!(validate::length("test", 64, 64).is_ok());

    let err = validate::length("test", 63, 64).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
}

#[test]
fn test_display_never_empty() {
    let errors = [
        Error::UnsupportedGroup { group: 31 },
        Error::AllocationFailure { context: "curve" },
        Error::MalformedInput { context: "public value", reason: "unexpected length" },
        Error::InvalidPoint { context: "public value" },
        Error::ArithmeticFailure { context: "multiplication" },
        Error::NotComputed,
        Error::RandomGeneration { context: "scalar" },
    ];
    for err in errors.iter() {
        assert!(!err.to_string().is_empty());
    }
    assert_eq!(
        Error::UnsupportedGroup { group: 31 }.to_string(),
        "Unsupported Diffie-Hellman group: 31"
    );
}
