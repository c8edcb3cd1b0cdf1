use super::*;

// =============================================================
// Form validation
// =============================================================

#[test]
fn sign_in_trims_and_lowercases_email() {
    let creds = validate_sign_in("  The.Kid@Example.com ", "dreamer").unwrap();
    assert_eq!(creds.email, "the.kid@example.com");
    assert_eq!(creds.display_name, "The Kid");
}

#[test]
fn sign_in_requires_email() {
    assert_eq!(validate_sign_in("   ", "dreamer"), Err(AuthError::MissingEmail));
}

#[test]
fn sign_in_rejects_malformed_email() {
    for bad in ["kid", "@example.com", "kid@example", "kid@.com", "kid@example."] {
        assert!(matches!(validate_sign_in(bad, "dreamer"), Err(AuthError::InvalidEmail(_))), "{bad}");
    }
}

#[test]
fn sign_in_rejects_short_password() {
    assert_eq!(
        validate_sign_in("kid@example.com", "short"),
        Err(AuthError::PasswordTooShort { min: MIN_PASSWORD_LEN })
    );
}

#[test]
fn sign_up_requires_name_first() {
    assert_eq!(validate_sign_up("  ", "", ""), Err(AuthError::MissingName));
}

#[test]
fn sign_up_keeps_chosen_name() {
    let creds = validate_sign_up(" Atom ", "atom@lab.org", "compress").unwrap();
    assert_eq!(creds.display_name, "Atom");
    assert_eq!(creds.email, "atom@lab.org");
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(AuthError::PasswordTooShort { min: 6 }.to_string(), "Password must be at least 6 characters.");
}

#[test]
fn name_from_email_splits_separators() {
    assert_eq!(name_from_email("jashan_bansal+site@example.com"), "Jashan Bansal Site");
    assert_eq!(name_from_email("atom@lab.org"), "Atom");
}

// =============================================================
// Storage-backed session (non-browser fallbacks)
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn no_stored_user_outside_browser() {
    assert_eq!(load_stored_user(), Ok(None));
}
