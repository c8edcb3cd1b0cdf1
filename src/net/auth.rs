//! Demo auth provider.
//!
//! Client-side (csr): delays via `gloo-timers`, persistence via `localStorage`.
//! Elsewhere: no delay and nothing persisted.
//!
//! ERROR HANDLING
//! ==============
//! Form validation returns [`AuthError`] for display on the auth page. Storage
//! failures never fail a sign in; the session simply won't survive a reload.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use gate::{SessionError, User};

use crate::util::storage;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Enter your email address.")]
    MissingEmail,
    #[error("'{0}' doesn't look like an email address.")]
    InvalidEmail(String),
    #[error("Password must be at least {min} characters.")]
    PasswordTooShort { min: usize },
    #[error("Choose a display name.")]
    MissingName,
}

/// Validated form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

/// Validate the sign-in form. The display name is derived from the email.
///
/// # Errors
///
/// Returns the first [`AuthError`] found, email before password.
pub fn validate_sign_in(email: &str, password: &str) -> Result<Credentials, AuthError> {
    let email = validate_email(email)?;
    validate_password(password)?;
    let display_name = name_from_email(&email);
    Ok(Credentials { email, password: password.to_owned(), display_name })
}

/// Validate the sign-up form.
///
/// # Errors
///
/// Returns the first [`AuthError`] found, name before email before password.
pub fn validate_sign_up(name: &str, email: &str, password: &str) -> Result<Credentials, AuthError> {
    let display_name = name.trim();
    if display_name.is_empty() {
        return Err(AuthError::MissingName);
    }
    let email = validate_email(email)?;
    validate_password(password)?;
    Ok(Credentials { email, password: password.to_owned(), display_name: display_name.to_owned() })
}

fn validate_email(raw: &str) -> Result<String, AuthError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(AuthError::MissingEmail);
    }
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'));
    if !valid {
        return Err(AuthError::InvalidEmail(email.to_owned()));
    }
    Ok(email.to_ascii_lowercase())
}

fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::PasswordTooShort { min: MIN_PASSWORD_LEN });
    }
    Ok(())
}

/// `jashan.bansal@example.com` becomes `Jashan Bansal`.
pub fn name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    local
        .split(['.', '_', '-', '+'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect::<String>())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Read back the persisted user, if any.
///
/// # Errors
///
/// Returns [`SessionError::Corrupted`] when the stored value cannot be decoded.
pub fn load_stored_user() -> Result<Option<User>, SessionError> {
    match storage::read(storage::SESSION_KEY) {
        None => Ok(None),
        Some(raw) => User::from_json(&raw).map(Some),
    }
}

/// Simulated "who am I" round trip.
pub async fn check_session(delay_ms: u64) -> Result<Option<User>, SessionError> {
    simulate_latency(delay_ms).await;
    load_stored_user()
}

/// Simulated sign in. Any validated credentials are accepted.
pub async fn sign_in(credentials: Credentials, delay_ms: u64) -> User {
    simulate_latency(delay_ms).await;
    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        name: credentials.display_name,
        email: credentials.email,
    };
    if !storage::write(storage::SESSION_KEY, &user.to_json()) {
        log::warn!("auth: could not persist session; it will not survive a reload");
    }
    user
}

/// Forget the persisted session.
pub fn sign_out() {
    storage::remove(storage::SESSION_KEY);
}

async fn simulate_latency(delay_ms: u64) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::sleep(std::time::Duration::from_millis(delay_ms)).await;
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = delay_ms;
    }
}
