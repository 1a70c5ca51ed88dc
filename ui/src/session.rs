//! The bearer token, persisted in `localStorage` across reloads.
//!
//! Written at login and removed at logout or when the backend rejects it.
//! The token only leaves this module wrapped in a [`SecretString`], and only
//! [`crate::get_api_client`] attaches it to requests.

use secrecy::SecretString;
use web_sys::Storage;

const TOKEN_KEY: &str = "token";

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_token() -> Option<SecretString> {
    let token = storage()?.get_item(TOKEN_KEY).ok().flatten()?;
    (!token.is_empty()).then(|| SecretString::from(token))
}

pub fn store_token(token: &str) {
    match storage() {
        Some(storage) => {
            if storage.set_item(TOKEN_KEY, token).is_err() {
                tracing::warn!("could not persist session token");
            }
        }
        None => tracing::warn!("localStorage unavailable, session will not persist"),
    }
}

pub fn clear_token() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
