//! JWT service for session token generation and validation
//!
//! Tokens are HS256-signed with a shared secret and carry the admin's id,
//! email and name. Validity depends only on the signature and the expiry;
//! nothing is persisted, so a token stays usable until it expires even after
//! the client discards it.

use anyhow::Result;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::AdminAccount;

/// Session lifetime used when none is configured
pub const DEFAULT_TOKEN_EXPIRY_SECS: u64 = 24 * 60 * 60;

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret shared by the issuer and the auth guard
    pub secret: String,
    /// Token lifetime in seconds (default: 24 hours)
    pub expiry_seconds: u64,
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Admin ID
    pub id: u64,
    pub email: String,
    pub name: String,
    /// Issued at time
    pub iat: u64,
    /// Expiration time
    pub exp: u64,
}

/// JWT service
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry_seconds: u64,
}

impl JwtService {
    /// Initialize a new JWT service
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        JwtService {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            expiry_seconds: config.expiry_seconds,
        }
    }

    /// Generate a session token for an admin, issued now
    pub fn generate_token(&self, admin: &AdminAccount) -> Result<String> {
        self.generate_token_at(admin, now_secs()?)
    }

    /// Generate a session token as if issued at `issued_at` (seconds since epoch)
    pub fn generate_token_at(&self, admin: &AdminAccount, issued_at: u64) -> Result<String> {
        let claims = Claims {
            id: admin.id,
            email: admin.email.clone(),
            name: admin.name.clone(),
            iat: issued_at,
            exp: issued_at.saturating_add(self.expiry_seconds),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Validate a token and return the claims
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }

    /// Get the token expiry time
    pub fn expiry_seconds(&self) -> u64 {
        self.expiry_seconds
    }
}

fn now_secs() -> Result<u64> {
    Ok(SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| anyhow::anyhow!("Failed to get current time: {}", e))?
        .as_secs())
}
