use super::*;

#[test]
fn api_error_displays_message_verbatim() {
    let err = ApiError::new("not found");
    assert_eq!(err.to_string(), "not found");
    assert_eq!(err.message(), "not found");
}

#[test]
fn from_status_joins_code_and_reason() {
    assert_eq!(ApiError::from_status(500, "Internal Server Error").message(), "500 Internal Server Error");
}

#[test]
fn from_status_keeps_trailing_space_for_empty_reason() {
    assert_eq!(ApiError::from_status(502, "").message(), "502 ");
}

#[test]
fn json_errors_convert_into_api_error() {
    let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let expected = err.to_string();
    assert_eq!(ApiError::from(err).message(), expected);
}

#[test]
fn config_error_messages_name_the_problem() {
    assert_eq!(ConfigError::EmptyApiBase.to_string(), "API base address is empty");
    assert_eq!(
        ConfigError::UnsupportedScheme("ftp://x".into()).to_string(),
        "unsupported API base address 'ftp://x' (expected http:// or https://)"
    );
    assert_eq!(ConfigError::EmptyValue("token key").to_string(), "token key must not be empty");
}
