use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |name| map.get(name).cloned()
}

#[test]
fn empty_lookup_gives_defaults() {
    let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.base_path, "");
    assert_eq!(cfg.session_timeout_ms, DEFAULT_SESSION_TIMEOUT_MS);
}

#[test]
fn overrides_are_parsed() {
    let cfg = AppConfig::from_lookup(lookup(&[
        ("LCBAD_BASE_PATH", "/LCBAD/"),
        ("LCBAD_SESSION_CHECK_DELAY_MS", "0"),
        ("LCBAD_SESSION_TIMEOUT_MS", " 2500 "),
        ("LCBAD_ASSISTANT_REPLY_DELAY_MS", "10"),
        ("LCBAD_CHAT_CONNECT_DELAY_MS", "20"),
    ]))
    .unwrap();

    assert_eq!(cfg.base_path, "/LCBAD");
    assert_eq!(cfg.session_check_delay_ms, 0);
    assert_eq!(cfg.session_timeout_ms, 2500);
    assert_eq!(cfg.assistant_reply_delay_ms, 10);
    assert_eq!(cfg.chat_connect_delay_ms, 20);
}

#[test]
fn root_base_path_is_empty() {
    let cfg = AppConfig::from_lookup(lookup(&[("LCBAD_BASE_PATH", "/")])).unwrap();
    assert_eq!(cfg.base_path, "");
}

#[test]
fn relative_base_path_is_rejected() {
    let err = AppConfig::from_lookup(lookup(&[("LCBAD_BASE_PATH", "LCBAD")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPath { .. }));
}

#[test]
fn non_numeric_delay_is_rejected() {
    let err = AppConfig::from_lookup(lookup(&[("LCBAD_SESSION_TIMEOUT_MS", "soon")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidMillis { var: "LCBAD_SESSION_TIMEOUT_MS".to_owned(), value: "soon".to_owned() }
    );
}

#[test]
fn build_env_never_fails() {
    let _ = AppConfig::from_build_env();
}
