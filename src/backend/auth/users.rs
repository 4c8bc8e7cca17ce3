/**
 * User Records and the Credential Store
 *
 * Users live in process memory only. The store is an owned handle that is
 * cloned into application state; clones share the same underlying list.
 */

use std::sync::Arc;
use tokio::sync::RwLock;

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Username as given at registration (not guaranteed unique)
    pub username: String,
    /// bcrypt hash of the password, never the plaintext
    pub password_hash: String,
}

/// In-memory credential store
///
/// Records are kept in insertion order and never updated or removed.
/// Lookups scan linearly and return the first record with a matching
/// username, so when a username was registered twice the older record wins.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    users: Arc<RwLock<Vec<UserRecord>>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user record
    ///
    /// Returns `true` if a record with the same username was already present.
    /// The new record is stored either way.
    pub async fn append(&self, record: UserRecord) -> bool {
        let mut users = self.users.write().await;
        let duplicate = users.iter().any(|u| u.username == record.username);
        users.push(record);
        duplicate
    }

    /// Find the first record whose username matches exactly
    pub async fn find_by_username(&self, username: &str) -> Option<UserRecord> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }

    /// Number of stored records, duplicates included
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(username: &str, hash: &str) -> UserRecord {
        UserRecord {
            username: username.to_string(),
            password_hash: hash.to_string(),
        }
    }

    #[tokio::test]
    async fn test_append_and_find() {
        let store = CredentialStore::new();
        assert!(store.is_empty().await);

        let duplicate = store.append(record("alice", "hash-a")).await;
        assert!(!duplicate);

        let found = store.find_by_username("alice").await;
        assert_eq!(found, Some(record("alice", "hash-a")));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_find_unknown_user() {
        let store = CredentialStore::new();
        store.append(record("alice", "hash-a")).await;

        assert!(store.find_by_username("bob").await.is_none());
        // exact match only
        assert!(store.find_by_username("Alice").await.is_none());
        assert!(store.find_by_username("alice ").await.is_none());
    }

    #[tokio::test]
    async fn test_duplicates_coexist_first_wins() {
        let store = CredentialStore::new();
        assert!(!store.append(record("alice", "first")).await);
        assert!(store.append(record("alice", "second")).await);

        assert_eq!(store.len().await, 2);
        let found = store.find_by_username("alice").await.unwrap();
        assert_eq!(found.password_hash, "first");
    }

    #[tokio::test]
    async fn test_clones_share_records() {
        let store = CredentialStore::new();
        let handle = store.clone();

        handle.append(record("carol", "hash-c")).await;
        assert!(store.find_by_username("carol").await.is_some());
    }

    #[tokio::test]
    async fn test_concurrent_appends_all_land() {
        let store = CredentialStore::new();
        let mut tasks = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                store.append(record(&format!("user{}", i), "h")).await;
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(store.len().await, 32);
    }
}
