use super::*;

#[test]
fn error_code_serializes_screaming_snake() {
    let json = serde_json::to_string(&ErrorCode::InvalidPosition).unwrap();
    assert_eq!(json, "\"INVALID_POSITION\"");
    assert_eq!(ErrorCode::InvalidPosition.as_str(), "INVALID_POSITION");
}

#[test]
fn error_code_display_matches_wire_form() {
    let cases = [
        (ErrorCode::MissingId, "MISSING_ID"),
        (ErrorCode::InvalidSize, "INVALID_SIZE"),
        (ErrorCode::InvalidFontSize, "INVALID_FONT_SIZE"),
        (ErrorCode::InvalidStyle, "INVALID_STYLE"),
        (ErrorCode::DuplicateId, "DUPLICATE_ID"),
    ];
    for (code, expected) in cases {
        assert_eq!(code.to_string(), expected);
        assert_eq!(serde_json::to_string(&code).unwrap(), format!("\"{expected}\""));
    }
}

#[test]
fn prefixed_reroots_field() {
    let e = ValidationError::new("width", "must be positive", ErrorCode::InvalidSize).prefixed("elements[2]");
    assert_eq!(e.field, "elements[2].width");
}

#[test]
fn validation_from_empty_is_valid() {
    let v = Validation::from_errors(Vec::new());
    assert!(v.is_valid());
    assert!(v.into_result().is_ok());
}

#[test]
fn validation_with_errors_is_invalid() {
    let v = Validation::from_errors(vec![ValidationError::new("id", "missing", ErrorCode::MissingId)]);
    assert!(!v.is_valid());
    assert!(v.has_code(ErrorCode::MissingId));
    assert!(!v.has_code(ErrorCode::InvalidSize));
    assert_eq!(v.into_result().unwrap_err().len(), 1);
}

#[test]
fn validation_serializes_camel_case() {
    let v = Validation::from_errors(Vec::new());
    let json = serde_json::to_value(&v).unwrap();
    assert_eq!(json, serde_json::json!({ "isValid": true, "errors": [] }));
}

#[test]
fn engine_error_codes() {
    assert_eq!(EngineError::PageNotFound(3).error_code(), "E_PAGE_NOT_FOUND");
    assert_eq!(
        EngineError::ElementNotFound { page: 0, id: "x".into() }.error_code(),
        "E_ELEMENT_NOT_FOUND"
    );
    assert_eq!(EngineError::UnknownHandle("q".into()).error_code(), "E_UNKNOWN_HANDLE");
    assert_eq!(
        EngineError::Document(DocumentError::NotFound("k".into())).error_code(),
        "E_NOT_FOUND"
    );
}

#[test]
fn engine_error_exposes_validation_errors() {
    let errors = vec![
        ValidationError::new("x", "negative", ErrorCode::InvalidPosition),
        ValidationError::new("width", "zero", ErrorCode::InvalidSize),
    ];
    let err = EngineError::Invalid(errors.clone());
    assert_eq!(err.validation_errors(), errors.as_slice());
    assert!(err.to_string().contains("INVALID_POSITION"));
    assert!(err.to_string().contains("INVALID_SIZE"));
    assert!(EngineError::PageNotFound(0).validation_errors().is_empty());
}
