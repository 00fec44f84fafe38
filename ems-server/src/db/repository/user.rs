//! User Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{User, UserCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find user by username
    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let username_owned = username.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE username = $username LIMIT 1")
            .bind(("username", username_owned))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Create a new user from a signup payload
    ///
    /// There is no uniqueness pre-check: the store's unique username index
    /// enforces the invariant, and a violation surfaces as
    /// [`RepoError::Duplicate`] even under concurrent signups.
    pub async fn create(&self, data: UserCreate) -> RepoResult<User> {
        // Hash password
        let password_hash = User::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?;

        let username = data.username.clone();
        let result = self
            .base
            .db()
            .query(
                r#"CREATE user SET
                    username = $username,
                    email = $email,
                    password_hash = $password_hash
                RETURN AFTER"#,
            )
            .bind(("username", data.username))
            .bind(("email", data.email))
            .bind(("password_hash", password_hash))
            .await;

        let mut result = match result {
            Ok(result) => result,
            Err(e) => return Err(duplicate_or_database(e, &username)),
        };

        let created: Option<User> = result
            .take(0)
            .map_err(|e| duplicate_or_database(e, &username))?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }
}

/// Map a unique index violation to [`RepoError::Duplicate`]
///
/// SurrealDB reports violations as "Database index ... already contains ...";
/// anything else stays a database error.
fn duplicate_or_database(err: surrealdb::Error, username: &str) -> RepoError {
    let msg = err.to_string();
    if msg.contains("already contains") {
        RepoError::Duplicate(format!("Username '{}' already exists", username))
    } else {
        RepoError::Database(msg)
    }
}
