//! In-memory credential store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Username to password-hash map shared across request handlers.
///
/// Constructed once in `main` before the listener binds; there is no lazy
/// first-request initialization path. Cloning shares the underlying map.
#[derive(Clone, Default)]
pub struct CredentialStore {
    users: Arc<RwLock<HashMap<String, String>>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new username. Returns false when the name is already
    /// taken, leaving the stored hash untouched.
    pub async fn register(&self, username: &str, password_hash: String) -> bool {
        let mut users = self.users.write().await;
        if users.contains_key(username) {
            return false;
        }
        users.insert(username.to_string(), password_hash);
        true
    }

    /// Look up the stored password hash for a username.
    pub async fn password_hash(&self, username: &str) -> Option<String> {
        self.users.read().await.get(username).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn register_and_look_up() {
        let store = CredentialStore::new();
        assert!(store.register("alice", "hash-a".to_string()).await);
        assert_eq!(store.password_hash("alice").await.as_deref(), Some("hash-a"));
        assert_eq!(store.password_hash("bob").await, None);
    }

    #[tokio::test]
    async fn duplicate_registration_keeps_original_hash() {
        let store = CredentialStore::new();
        assert!(store.register("alice", "hash-a".to_string()).await);
        assert!(!store.register("alice", "hash-b".to_string()).await);
        assert_eq!(store.password_hash("alice").await.as_deref(), Some("hash-a"));
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = CredentialStore::new();
        let clone = store.clone();
        assert!(store.register("alice", "hash-a".to_string()).await);
        assert!(clone.password_hash("alice").await.is_some());
    }
}
