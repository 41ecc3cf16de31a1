use super::*;

#[test]
fn default_base_is_local_backend() {
    assert_eq!(DEFAULT_API_BASE, "http://localhost:5000");
}

#[test]
fn api_base_is_never_empty() {
    assert!(!api_base().is_empty());
}
