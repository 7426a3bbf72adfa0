use super::*;

#[test]
fn predict_failed_message_formats_status() {
    assert_eq!(predict_failed_message(502), "predict request failed: 502");
}

#[test]
fn resolve_base_url_uses_configured_value() {
    assert_eq!(resolve_base_url(Some("https://cvepred.example.test")), "https://cvepred.example.test");
    assert_eq!(resolve_base_url(Some("  https://x.test  ")), "https://x.test");
}

#[test]
fn resolve_base_url_falls_back_to_default() {
    assert_eq!(resolve_base_url(None), DEFAULT_PREDICT_BASE_URL);
    assert_eq!(resolve_base_url(Some("   ")), DEFAULT_PREDICT_BASE_URL);
}

#[test]
fn predict_base_url_is_never_empty() {
    assert!(!predict_base_url().is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn predict_is_unavailable_without_browser() {
    let outcome = futures::executor::block_on(predict(&[CveModel::default()]));
    assert_eq!(outcome, Err("not available on server".to_owned()));
}
