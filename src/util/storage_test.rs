#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn read_misses_outside_browser() {
    assert_eq!(read(SESSION_KEY), None);
}

#[test]
fn write_reports_unavailable_storage() {
    assert!(!write(SESSION_KEY, "{}"));
}

#[test]
fn remove_is_noop_but_callable() {
    remove(SESSION_KEY);
}
