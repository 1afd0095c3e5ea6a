//! Browser tests, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_invalid_config_is_rejected() {
    let err = starfolio_web::start_with_config("{ not json").unwrap_err();
    assert!(err.as_string().unwrap().contains("invalid config JSON"));
}

#[wasm_bindgen_test]
fn test_rejected_config_does_not_consume_start() {
    assert!(starfolio_web::start_with_config(r#"{ "starfield": { "star_count": 0 } }"#).is_err());
    // Elements are missing in the test page; each feature logs and is skipped
    assert!(starfolio_web::start_with_config(r#"{ "starfield": { "star_count": 50 } }"#).is_ok());
    assert!(starfolio_web::start().is_err());
}
