/**
 * Token Gate: JWT Issuance and Validation
 *
 * Access tokens are HS256 JWTs carrying the username. Nothing is stored
 * server-side; a token is valid exactly when its signature checks out
 * against the configured secret and its `exp` has not passed.
 */

use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::{
    decode, encode, errors::ErrorKind, get_current_timestamp, Algorithm, DecodingKey, EncodingKey,
    Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::server::config::Config;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Authenticated username
    pub username: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Issues and validates access tokens
///
/// Cheap to clone; the keys are shared.
#[derive(Clone)]
pub struct TokenGate {
    keys: Arc<Keys>,
    expiry: Duration,
    validation: Validation,
}

impl std::fmt::Debug for TokenGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenGate")
            .field("expiry", &self.expiry)
            .finish_non_exhaustive()
    }
}

impl TokenGate {
    pub fn new(config: &Config) -> Self {
        Self::with_secret(config.jwt_secret.as_bytes(), config.token_expiry)
    }

    pub fn with_secret(secret: &[u8], expiry: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
            }),
            expiry,
            validation,
        }
    }

    /// Token lifetime applied by `issue`
    pub fn expiry(&self) -> Duration {
        self.expiry
    }

    /// Sign a token for `username` that expires after the configured window
    pub fn issue(&self, username: &str) -> Result<String, BackendError> {
        let now = get_current_timestamp();
        let claims = Claims {
            username: username.to_string(),
            iat: now,
            exp: now.saturating_add(self.expiry.as_secs()),
        };

        self.sign(&claims)
    }

    /// Sign arbitrary claims with this gate's secret
    pub fn sign(&self, claims: &Claims) -> Result<String, BackendError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.keys.encoding).map_err(|e| {
            tracing::error!("Failed to sign token: {:?}", e);
            BackendError::internal(format!("Failed to sign token: {}", e))
        })
    }

    /// Verify signature and expiry, returning the embedded claims
    ///
    /// # Errors
    ///
    /// * `Forbidden` - bad signature, malformed token or expired token
    pub fn validate(&self, token: &str) -> Result<Claims, BackendError> {
        decode::<Claims>(token, &self.keys.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => tracing::warn!("Rejected expired token"),
                    ErrorKind::InvalidSignature => tracing::warn!("Rejected token with bad signature"),
                    other => tracing::warn!("Rejected malformed token: {:?}", other),
                }
                BackendError::Forbidden
            })
    }
}
