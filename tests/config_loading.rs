mod common;

use vary_cors::constants::header;
use vary_cors::{CallingConvention, Cors, CorsConfig, ValidationError};
use common::asserts::{assert_preflight, assert_simple};
use common::builders::{preflight_request, simple_request};
use common::headers::header_value;

fn load(json: &str) -> Result<Cors, ValidationError> {
    let config: CorsConfig = serde_json::from_str(json).expect("valid config JSON");
    Cors::from_config(config)
}

#[test]
fn should_apply_every_documented_option_when_loaded_from_json() {
    let cors = load(
        r#"{
            "origins": "*",
            "allowMethods": ["GET", "POST"],
            "allowHeaders": ["X-Api-Key"],
            "exposeHeaders": "X-Trace",
            "credentials": true,
            "maxAge": 3600,
            "expressify": false
        }"#,
    )
    .expect("valid CORS configuration");

    let (preflight, status) = assert_preflight(
        preflight_request()
            .origin("https://client.example")
            .check(&cors),
    );
    let simple = assert_simple(simple_request().origin("https://client.example").check(&cors));

    assert_eq!(status, 204);
    assert_eq!(
        header_value(&preflight, header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some("*"),
    );
    assert_eq!(
        header_value(&preflight, header::ACCESS_CONTROL_ALLOW_METHODS),
        Some("GET,POST"),
    );
    assert_eq!(
        header_value(&preflight, header::ACCESS_CONTROL_ALLOW_HEADERS),
        Some("X-Api-Key"),
    );
    assert_eq!(
        header_value(&preflight, header::ACCESS_CONTROL_MAX_AGE),
        Some("3600"),
    );
    assert_eq!(
        header_value(&simple, header::ACCESS_CONTROL_EXPOSE_HEADERS),
        Some("X-Trace"),
    );
    assert_eq!(
        header_value(&simple, header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
        Some("true"),
    );
    assert_eq!(
        cors.options().calling_convention,
        CallingConvention::Context
    );
}

#[test]
fn should_fail_fast_when_max_age_negative() {
    let result = load(r#"{ "maxAge": -30 }"#);

    assert!(matches!(result, Err(ValidationError::NegativeMaxAge(-30))));
}

#[test]
fn should_fail_fast_when_method_is_malformed() {
    let result = load(r#"{ "allowMethods": ["GET", "P O S T"] }"#);

    assert!(matches!(result, Err(ValidationError::InvalidMethod(_))));
}
