//! `localStorage` access for the demo session.
//!
//! Requires a browser environment; outside `csr` builds every read misses and
//! every write is a no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Key holding the signed-in user as JSON.
pub const SESSION_KEY: &str = "lcbad_session_user";

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read a stored value.
pub fn read(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Store a value. Returns `false` if storage is unavailable or full.
pub fn write(key: &str, value: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        local_storage().is_some_and(|s| s.set_item(key, value).is_ok())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
        false
    }
}

/// Remove a stored value.
pub fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}
