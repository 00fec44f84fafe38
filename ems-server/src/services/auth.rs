//! Auth Service
//!
//! Login and signup flows over the user table, plus bearer token
//! verification for incoming requests.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::{CurrentUser, JwtService};
use crate::db::models::UserCreate;
use crate::db::repository::UserRepository;
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    jwt: JwtService,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(db: Surreal<Db>, jwt: JwtService) -> Self {
        Self {
            users: UserRepository::new(db),
            jwt,
        }
    }

    /// Authenticate a username/password pair and issue a bearer token
    ///
    /// An unknown username and a wrong password fail differently: the
    /// former is a not-found error, the latter an invalid-credentials
    /// error. Callers rely on that distinction.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<String> {
        let user = self.users.find_by_username(username).await?.ok_or_else(|| {
            tracing::warn!(username = %username, "Login failed - user not found");
            AppError::not_found("User")
        })?;

        let password_valid = user
            .verify_password(password)
            .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

        if !password_valid {
            tracing::warn!(username = %username, "Login failed - invalid credentials");
            return Err(AppError::invalid_credentials());
        }

        let token = self
            .jwt
            .generate_token(&user.username)
            .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

        tracing::info!(username = %user.username, "User logged in successfully");

        Ok(token)
    }

    /// Register a new user and return a confirmation message
    ///
    /// Duplicate usernames are rejected by the store's unique index, not
    /// by a pre-check, so concurrent signups cannot race past each other.
    pub async fn signup(&self, data: UserCreate) -> AppResult<String> {
        let user = self.users.create(data).await?;

        tracing::info!(username = %user.username, "User registered");

        Ok("User registered successfully".to_string())
    }

    /// Validate a bearer token and resolve the current user
    pub fn verify_token(&self, token: &str) -> AppResult<CurrentUser> {
        let claims = self.jwt.validate_token(token)?;
        Ok(CurrentUser::from(claims))
    }
}
