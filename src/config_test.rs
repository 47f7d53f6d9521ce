use super::*;

#[test]
fn default_points_at_local_api() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.api_base, "http://localhost:8000");
    assert_eq!(cfg.landing_page, "index.html");
    assert_eq!(cfg.token_key, "auth_token");
}

#[test]
fn new_accepts_http_and_https() {
    assert_eq!(ClientConfig::new("http://127.0.0.1:9000").unwrap().api_base, "http://127.0.0.1:9000");
    assert_eq!(ClientConfig::new(" https://shop.example ").unwrap().api_base, "https://shop.example");
}

#[test]
fn new_keeps_trailing_slash_verbatim() {
    let cfg = ClientConfig::new("http://shop.example/api/").unwrap();
    assert_eq!(cfg.api_base, "http://shop.example/api/");
}

#[test]
fn new_rejects_empty_base() {
    assert_eq!(ClientConfig::new("  "), Err(ConfigError::EmptyApiBase));
}

#[test]
fn new_rejects_non_http_scheme() {
    assert_eq!(
        ClientConfig::new("ws://shop.example"),
        Err(ConfigError::UnsupportedScheme("ws://shop.example".to_owned()))
    );
}

#[test]
fn builders_override_defaults() {
    let cfg = ClientConfig::default()
        .with_landing_page("home.html")
        .unwrap()
        .with_token_key("shop_token")
        .unwrap();
    assert_eq!(cfg.landing_page, "home.html");
    assert_eq!(cfg.token_key, "shop_token");
}

#[test]
fn builders_reject_empty_values() {
    assert_eq!(ClientConfig::default().with_landing_page(""), Err(ConfigError::EmptyValue("landing page")));
    assert_eq!(ClientConfig::default().with_token_key(""), Err(ConfigError::EmptyValue("token key")));
}
