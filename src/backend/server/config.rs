/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables
 * into an explicit `Config` struct. The struct is built once at startup
 * and handed to the token gate and credential service constructors.
 *
 * # Variables
 *
 * | Variable          | Default    | Notes                               |
 * |-------------------|------------|-------------------------------------|
 * | `JWT_SECRET`      | (required) | HS256 signing secret                |
 * | `JWT_EXPIRES_IN`  | `1h`       | seconds, or `<n>s/m/h/d/w`          |
 * | `PORT`            | `3000`     | listen port                         |
 * | `STATIC_DIR`      | `public`   | directory holding `login.html`      |
 * | `BCRYPT_COST`     | `10`       | 4..=31                              |
 * | `DEMO_USERNAME`   | `nasyira`  | account preloaded at startup        |
 * | `DEMO_PASSWORD`   | `12345678` |                                     |
 */

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_EXPIRES_IN: &str = "1h";
pub const DEFAULT_STATIC_DIR: &str = "public";
pub const DEFAULT_BCRYPT_COST: u32 = 10;
pub const DEFAULT_DEMO_USERNAME: &str = "nasyira";
pub const DEFAULT_DEMO_PASSWORD: &str = "12345678";

/// Configuration errors, raised only at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("invalid token expiry {0:?}: expected seconds or <n>s/m/h/d/w greater than zero")]
    InvalidExpiry(String),

    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },

    #[error("BCRYPT_COST must be between {min} and {max}, got {cost}")]
    InvalidCost { cost: u32, min: u32, max: u32 },
}

/// Process-wide configuration, read-only after startup
#[derive(Clone)]
pub struct Config {
    /// Symmetric secret used to sign and verify access tokens
    pub jwt_secret: String,
    /// Lifetime of an issued token
    pub token_expiry: Duration,
    pub port: u16,
    /// Directory served as static assets; must contain `login.html`
    pub static_dir: PathBuf,
    pub bcrypt_cost: u32,
    /// Account registered before the server starts accepting requests
    pub demo_username: String,
    pub demo_password: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("jwt_secret", &"<redacted>")
            .field("token_expiry", &self.token_expiry)
            .field("port", &self.port)
            .field("static_dir", &self.static_dir)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("demo_username", &self.demo_username)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Example
    ///
    /// ```rust
    /// use credgate::backend::server::config::Config;
    /// use std::collections::HashMap;
    ///
    /// let vars = HashMap::from([("JWT_SECRET", "s3cret"), ("JWT_EXPIRES_IN", "15m")]);
    /// let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
    /// assert_eq!(config.token_expiry.as_secs(), 900);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        if jwt_secret.is_empty() {
            return Err(ConfigError::Empty("JWT_SECRET"));
        }

        let token_expiry = match lookup("JWT_EXPIRES_IN") {
            Some(raw) => parse_expiry(&raw)?,
            None => parse_expiry(DEFAULT_EXPIRES_IN)?,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: raw,
            })?,
            None => DEFAULT_BCRYPT_COST,
        };
        // bcrypt's accepted range; anything else fails on the first hash
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidCost {
                cost: bcrypt_cost,
                min: 4,
                max: 31,
            });
        }

        Ok(Self {
            jwt_secret,
            token_expiry,
            port,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            bcrypt_cost,
            demo_username: lookup("DEMO_USERNAME")
                .unwrap_or_else(|| DEFAULT_DEMO_USERNAME.to_string()),
            demo_password: lookup("DEMO_PASSWORD")
                .unwrap_or_else(|| DEFAULT_DEMO_PASSWORD.to_string()),
        })
    }

    /// Path of the login page served at `/`
    pub fn login_page(&self) -> PathBuf {
        self.static_dir.join("login.html")
    }
}

/// Parse a token lifetime such as `3600`, `90s`, `15m`, `1h`, `7d` or `2w`
///
/// A bare number is a count of seconds. Zero is rejected since every token
/// would be born expired.
pub fn parse_expiry(raw: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidExpiry(raw.to_string());

    let trimmed = raw.trim();
    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split);

    let amount: u64 = number.parse().map_err(|_| invalid())?;
    let multiplier = match unit.trim() {
        "" | "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 24 * 60 * 60,
        "w" => 7 * 24 * 60 * 60,
        _ => return Err(invalid()),
    };

    let seconds = amount.checked_mul(multiplier).ok_or_else(invalid)?;
    if seconds == 0 {
        return Err(invalid());
    }

    Ok(Duration::from_secs(seconds))
}
