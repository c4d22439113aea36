//! Admin session issuing and bearer token checks

use std::sync::Arc;

use axum::http::HeaderMap;
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::jwt::JwtService;
use crate::models::AdminSummary;
use crate::password;
use crate::repositories::AdminStore;

/// Authentication failures
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Email and password are required")]
    MissingCredentials,

    /// Same outcome for an unknown email and a wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Access denied. No token provided.")]
    MissingToken,

    /// Malformed, tampered and expired tokens alike
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Identity of the admin behind a verified token, valid for one request
#[derive(Debug, Clone, PartialEq)]
pub struct AuthAdmin {
    pub id: u64,
    pub email: String,
    pub name: String,
}

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub admin: AdminSummary,
}

/// Verifies admin credentials and issues session tokens
#[derive(Clone)]
pub struct AuthService {
    admins: Arc<dyn AdminStore>,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(admins: Arc<dyn AdminStore>, jwt_service: JwtService) -> Self {
        Self {
            admins,
            jwt_service,
        }
    }

    /// Exchange email and password for a signed session token
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let Some(admin) = self.admins.find_by_email(email).await? else {
            password::verify_against_dummy(password);
            warn!("Login failed: unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !password::verify_password(password, &admin.password_hash) {
            warn!(admin_id = admin.id, "Login failed: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.jwt_service.generate_token(&admin)?;
        info!(admin_id = admin.id, "Admin logged in");

        Ok(Session {
            token,
            admin: AdminSummary::from(&admin),
        })
    }

    /// Resolve the admin identity from an `Authorization: Bearer` header
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<AuthAdmin, AuthError> {
        let header = headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or(AuthError::MissingToken)?;

        let claims = self
            .jwt_service
            .validate_token(header.token())
            .map_err(|e| {
                debug!("Rejected token: {}", e);
                AuthError::InvalidToken
            })?;

        Ok(AuthAdmin {
            id: claims.id,
            email: claims.email,
            name: claims.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::{DEFAULT_TOKEN_EXPIRY_SECS, JwtConfig};
    use crate::models::NewAdmin;
    use crate::repositories::memory::MemoryStore;
    use axum::http::{HeaderValue, header::AUTHORIZATION};

    async fn service_with_admin() -> (AuthService, u64) {
        let store = Arc::new(MemoryStore::new());
        let id = AdminStore::create(
            store.as_ref(),
            &NewAdmin {
                email: "owner@example.com".to_string(),
                password_hash: password::hash_password("hunter22").unwrap(),
                name: "Owner".to_string(),
                title: Some("Engineer".to_string()),
            },
        )
        .await
        .unwrap();

        let jwt = JwtService::new(&JwtConfig {
            secret: "test-secret".to_string(),
            expiry_seconds: DEFAULT_TOKEN_EXPIRY_SECS,
        });

        (AuthService::new(store, jwt), id)
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );
        headers
    }

    #[tokio::test]
    async fn login_issues_token_for_matching_admin() {
        let (auth, id) = service_with_admin().await;

        let session = auth.login("owner@example.com", "hunter22").await.unwrap();
        assert_eq!(session.admin.id, id);
        assert_eq!(session.admin.title.as_deref(), Some("Engineer"));

        let identity = auth.authenticate(&bearer(&session.token)).unwrap();
        assert_eq!(identity.id, id);
        assert_eq!(identity.email, "owner@example.com");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_the_same() {
        let (auth, _) = service_with_admin().await;

        let wrong_password = auth
            .login("owner@example.com", "nope")
            .await
            .unwrap_err()
            .to_string();
        let unknown_email = auth
            .login("stranger@example.com", "hunter22")
            .await
            .unwrap_err()
            .to_string();

        assert_eq!(wrong_password, unknown_email);
        assert_eq!(wrong_password, "Invalid email or password");
    }

    #[tokio::test]
    async fn email_lookup_is_case_sensitive() {
        let (auth, _) = service_with_admin().await;
        assert!(matches!(
            auth.login("Owner@Example.com", "hunter22").await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn missing_fields_are_a_validation_failure() {
        let (auth, _) = service_with_admin().await;
        assert!(matches!(
            auth.login("", "hunter22").await,
            Err(AuthError::MissingCredentials)
        ));
        assert!(matches!(
            auth.login("owner@example.com", "").await,
            Err(AuthError::MissingCredentials)
        ));
    }

    #[tokio::test]
    async fn authenticate_rejects_missing_and_bad_tokens() {
        let (auth, _) = service_with_admin().await;

        assert!(matches!(
            auth.authenticate(&HeaderMap::new()),
            Err(AuthError::MissingToken)
        ));

        let mut basic = HeaderMap::new();
        basic.insert(AUTHORIZATION, HeaderValue::from_static("Basic b3duZXI6eA=="));
        assert!(matches!(
            auth.authenticate(&basic),
            Err(AuthError::MissingToken)
        ));

        assert!(matches!(
            auth.authenticate(&bearer("abc.def.ghi")),
            Err(AuthError::InvalidToken)
        ));
    }
}
