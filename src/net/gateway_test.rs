use super::*;

#[test]
fn resolve_url_prefixes_relative_paths() {
    assert_eq!(
        resolve_url("http://localhost:5000", "/work-sheets"),
        "http://localhost:5000/work-sheets"
    );
}

#[test]
fn resolve_url_inserts_missing_leading_slash() {
    assert_eq!(
        resolve_url("http://localhost:5000", "work-sheets"),
        "http://localhost:5000/work-sheets"
    );
}

#[test]
fn resolve_url_collapses_trailing_base_slash() {
    assert_eq!(
        resolve_url("http://localhost:5000/", "/payments"),
        "http://localhost:5000/payments"
    );
}

#[test]
fn resolve_url_passes_absolute_urls_through() {
    assert_eq!(
        resolve_url("http://localhost:5000", "https://api.example.com/login"),
        "https://api.example.com/login"
    );
    assert_eq!(
        resolve_url("http://localhost:5000", "http://other:9000/x"),
        "http://other:9000/x"
    );
}

#[test]
fn bearer_value_formats_token() {
    assert_eq!(bearer_value("abc"), "Bearer abc");
}
