//! Access-token persistence.
//!
//! The token is a single opaque string kept in `localStorage` so it
//! survives page reloads. Storage access goes through the [`TokenVault`]
//! port so the store logic is testable without a browser; native builds
//! see an absent token.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

#[cfg(feature = "hydrate")]
use crate::config;

/// Key-value persistence port for the access token.
pub trait TokenVault {
    fn read(&self) -> Option<String>;
    fn write(&self, token: &str);
    fn clear(&self);
}

/// Token store over a vault. `set` overwrites, `remove` clears, and
/// authentication is defined purely by presence.
pub struct TokenStore<V> {
    vault: V,
}

impl<V: TokenVault> TokenStore<V> {
    pub fn new(vault: V) -> Self {
        Self { vault }
    }

    pub fn set(&self, token: &str) {
        self.vault.write(token);
    }

    pub fn get(&self) -> Option<String> {
        self.vault.read()
    }

    pub fn remove(&self) {
        self.vault.clear();
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

/// In-memory vault for tests and non-browser builds.
#[derive(Default)]
pub struct MemoryVault(std::cell::RefCell<Option<String>>);

impl TokenVault for MemoryVault {
    fn read(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn write(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}

/// Vault backed by `window.localStorage`.
#[cfg(feature = "hydrate")]
pub struct BrowserVault;

#[cfg(feature = "hydrate")]
impl TokenVault for BrowserVault {
    fn read(&self) -> Option<String> {
        let window = web_sys::window()?;
        window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(config::TOKEN_STORAGE_KEY).ok().flatten())
    }

    fn write(&self, token: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(config::TOKEN_STORAGE_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(config::TOKEN_STORAGE_KEY);
        }
    }
}

/// Read the persisted access token, if any.
pub fn access_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        TokenStore::new(BrowserVault).get()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a new access token, replacing any existing one.
pub fn store_access_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        TokenStore::new(BrowserVault).set(token);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Delete the persisted access token.
pub fn clear_access_token() {
    #[cfg(feature = "hydrate")]
    {
        TokenStore::new(BrowserVault).remove();
    }
}

/// Whether a token is currently persisted. No expiry check; an expired
/// token counts until an authenticated call fails.
pub fn is_authenticated() -> bool {
    access_token().is_some()
}
