use tienda_auth::{Claims, Role, SessionStore};
use tienda_types::Usuario;

/// Storage key for the cached profile shown in the header. Display
/// data only; the guard never reads it.
pub const USER_KEY: &str = "user";

/// localStorage-backed [`SessionStore`]. Outside the browser every
/// read is an absent credential and writes are no-ops, which keeps the
/// server-rendered shell deterministic.
pub struct BrowserStore;

impl SessionStore for BrowserStore {
    fn load(&self) -> Option<String> {
        browser::get(tienda_auth::store::TOKEN_KEY)
    }

    fn save(&self, credential: &str) {
        browser::set(tienda_auth::store::TOKEN_KEY, credential);
    }

    fn clear(&self) {
        browser::remove(tienda_auth::store::TOKEN_KEY);
    }
}

/// Persist the credential and profile returned by a successful login.
pub fn start_session(token: &str, user: &Usuario) {
    BrowserStore.save(token);
    if let Ok(json) = serde_json::to_string(user) {
        browser::set(USER_KEY, &json);
    }
}

/// Logout: both keys go, wholesale.
pub fn end_session() {
    BrowserStore.clear();
    browser::remove(USER_KEY);
}

pub fn current_user() -> Option<Usuario> {
    let raw = browser::get(USER_KEY)?;
    serde_json::from_str(&raw).ok()
}

pub fn current_user_id() -> Option<i64> {
    current_user().map(|u| u.usuario_id)
}

/// Role claim of the stored credential, if any.
pub fn current_role() -> Option<Role> {
    let token = BrowserStore.load()?;
    Claims::decode(&token).ok()?.role()
}

pub fn now_secs() -> i64 {
    browser::now_secs()
}

#[cfg(feature = "hydrate")]
mod browser {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn get(key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    pub fn set(key: &str, value: &str) {
        if let Some(storage) = storage() {
            let _ = storage.set_item(key, value);
        }
    }

    pub fn remove(key: &str) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }

    pub fn now_secs() -> i64 {
        (js_sys::Date::now() / 1000.0) as i64
    }
}

#[cfg(not(feature = "hydrate"))]
mod browser {
    pub fn get(_key: &str) -> Option<String> {
        None
    }

    pub fn set(_key: &str, _value: &str) {}

    pub fn remove(_key: &str) {}

    pub fn now_secs() -> i64 {
        0
    }
}
