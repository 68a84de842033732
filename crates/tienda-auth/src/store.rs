use std::cell::RefCell;

/// Storage key the credential lives under in the browser.
pub const TOKEN_KEY: &str = "token";

/// Durable slot for the session credential. Implementations accept any
/// string without validation; the guard is the only interpreter.
pub trait SessionStore {
    /// The persisted credential, if any. Never fails: storage errors
    /// read as an absent credential.
    fn load(&self) -> Option<String>;
    fn save(&self, credential: &str);
    /// Idempotent; clearing an absent credential is a no-op.
    fn clear(&self);
}

/// In-process store. The UI swaps in a localStorage-backed
/// implementation; this one serves tests and server-side rendering,
/// where no session exists.
#[derive(Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credential(credential: &str) -> Self {
        let store = Self::new();
        store.save(credential);
        store
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, credential: &str) {
        *self.slot.borrow_mut() = Some(credential.to_string());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_returns_same_string() {
        let store = MemoryStore::new();
        store.save("a.b.c");
        assert_eq!(store.load().as_deref(), Some("a.b.c"));
    }

    #[test]
    fn clear_then_load_returns_none() {
        let store = MemoryStore::with_credential("a.b.c");
        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let store = MemoryStore::new();
        store.clear();
        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn save_overwrites_wholesale() {
        let store = MemoryStore::with_credential("viejo");
        store.save("nuevo");
        assert_eq!(store.load().as_deref(), Some("nuevo"));
    }
}
