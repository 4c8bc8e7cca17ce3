/**
 * Credential Service
 *
 * Registration hashes the plaintext password with bcrypt and appends a
 * record to the credential store. Login looks the user up, verifies the
 * password against the stored hash and asks the token gate for a token.
 *
 * bcrypt is CPU-bound, so both hashing and verification run on tokio's
 * blocking pool; a slow hash stalls only the request that is waiting on it.
 */

use crate::backend::auth::sessions::TokenGate;
use crate::backend::auth::users::{CredentialStore, UserRecord};
use crate::backend::error::BackendError;
use crate::backend::server::config::Config;

#[derive(Debug, Clone)]
pub struct CredentialService {
    store: CredentialStore,
    tokens: TokenGate,
    bcrypt_cost: u32,
}

impl CredentialService {
    pub fn new(store: CredentialStore, tokens: TokenGate, config: &Config) -> Self {
        Self {
            store,
            tokens,
            bcrypt_cost: config.bcrypt_cost,
        }
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    /// Register a user
    ///
    /// No uniqueness or strength checks are made. Registering an existing
    /// username stores a second record; login keeps resolving to the first.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), BackendError> {
        let password_hash = hash_password(password.to_string(), self.bcrypt_cost).await?;

        let duplicate = self
            .store
            .append(UserRecord {
                username: username.to_string(),
                password_hash,
            })
            .await;

        if duplicate {
            tracing::warn!(
                "Username {:?} registered more than once; login resolves to the first record",
                username
            );
        }
        tracing::info!("User registered: {}", username);

        Ok(())
    }

    /// Verify credentials and issue an access token
    ///
    /// # Errors
    ///
    /// * `UserNotFound` - no record has this username
    /// * `InvalidCredentials` - the password does not match
    pub async fn login(&self, username: &str, password: &str) -> Result<String, BackendError> {
        let user = self.store.find_by_username(username).await.ok_or_else(|| {
            tracing::warn!("User not found: {}", username);
            BackendError::UserNotFound
        })?;

        let valid = verify_password(password.to_string(), user.password_hash).await?;
        if !valid {
            tracing::warn!("Invalid password for user: {}", username);
            return Err(BackendError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.username)?;
        tracing::info!("User logged in successfully: {}", user.username);

        Ok(token)
    }
}

async fn hash_password(password: String, cost: u32) -> Result<String, BackendError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await?
        .map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            BackendError::internal(format!("Failed to hash password: {}", e))
        })
}

async fn verify_password(password: String, hash: String) -> Result<bool, BackendError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await?
        .map_err(|e| {
            tracing::error!("Password verification error: {:?}", e);
            BackendError::internal(format!("Password verification failed: {}", e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::time::Duration;

    fn service() -> CredentialService {
        let config = Config::from_lookup(|key| match key {
            "JWT_SECRET" => Some("service-secret".to_string()),
            "BCRYPT_COST" => Some("4".to_string()),
            _ => None,
        })
        .unwrap();
        let tokens = TokenGate::new(&config);
        CredentialService::new(CredentialStore::new(), tokens, &config)
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_plaintext() {
        let service = service();
        service.register("alice", "hunter2").await.unwrap();

        let record = service.store().find_by_username("alice").await.unwrap();
        assert_ne!(record.password_hash, "hunter2");
        assert!(record.password_hash.starts_with("$2"));
        assert!(bcrypt::verify("hunter2", &record.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let service = service();
        service.register("alice", "hunter2").await.unwrap();

        let token = service.login("alice", "hunter2").await.unwrap();
        let gate = TokenGate::with_secret(b"service-secret", Duration::from_secs(60));
        assert_eq!(gate.validate(&token).unwrap().username, "alice");
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let service = service();
        assert_matches!(
            service.login("nobody", "whatever").await,
            Err(BackendError::UserNotFound)
        );
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let service = service();
        service.register("alice", "hunter2").await.unwrap();

        assert_matches!(
            service.login("alice", "wrong").await,
            Err(BackendError::InvalidCredentials)
        );
    }

    #[tokio::test]
    async fn test_empty_credentials_accepted() {
        let service = service();
        service.register("", "").await.unwrap();

        assert!(service.login("", "").await.is_ok());
    }

    #[tokio::test]
    async fn test_duplicate_username_first_record_wins() {
        let service = service();
        service.register("alice", "first-pass").await.unwrap();
        service.register("alice", "second-pass").await.unwrap();

        assert_eq!(service.store().len().await, 2);
        assert!(service.login("alice", "first-pass").await.is_ok());
        assert_matches!(
            service.login("alice", "second-pass").await,
            Err(BackendError::InvalidCredentials)
        );
    }
}
