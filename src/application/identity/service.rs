//! User management service — application-layer orchestration
//!
//! All user-related business logic lives here.
//! HTTP handlers should be thin wrappers that delegate to this service.

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainResult, NewUser, RepositoryProvider, User, UserRole};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::shared::errors::DomainError;

/// Authentication result returned after a successful login
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}

/// User service — orchestrates all identity / user-management use-cases.
pub struct UserService {
    repos: Arc<dyn RepositoryProvider>,
    jwt_config: JwtConfig,
}

impl UserService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, jwt_config: JwtConfig) -> Self {
        Self { repos, jwt_config }
    }

    // ── Registration ────────────────────────────────────────────

    /// Register a new user. Username uniqueness is enforced by the
    /// store on insert; a duplicate surfaces as `UniqueViolation`.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        role: UserRole,
    ) -> DomainResult<User> {
        let password_hash = hash_password(password)
            .map_err(|e| DomainError::Validation(format!("Failed to hash password: {}", e)))?;

        let user = self
            .repos
            .users()
            .insert(NewUser {
                username: username.to_string(),
                password_hash,
                role,
            })
            .await?;

        info!(user_id = user.id, username = %user.username, "New user registered");
        Ok(user)
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn find_by_id(&self, id: i64) -> DomainResult<User> {
        self.repos
            .users()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", "id", id.to_string()))
    }

    pub async fn find_by_username(&self, username: &str) -> DomainResult<User> {
        self.repos
            .users()
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::not_found("User", "username", username))
    }

    /// Full user list in store order. An empty store yields an empty Vec.
    pub async fn find_all(&self) -> DomainResult<Vec<User>> {
        self.repos.users().find_all().await
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Change a user's password.
    ///
    /// Fails with `PasswordInvalid` when the new/confirm pair does not
    /// match or the current password is wrong; the stored hash is
    /// untouched in both cases.
    pub async fn update_password(
        &self,
        id: i64,
        current_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> DomainResult<User> {
        if new_password != confirm_password {
            return Err(DomainError::PasswordInvalid(
                "new password and confirmation do not match".into(),
            ));
        }

        let user = self.find_by_id(id).await?;

        let valid = verify_password(current_password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(DomainError::PasswordInvalid(
                "wrong current password".into(),
            ));
        }

        let new_hash = hash_password(new_password)
            .map_err(|e| DomainError::Validation(format!("Failed to hash password: {}", e)))?;

        let updated = self.repos.users().update_password_hash(id, &new_hash).await?;

        info!(user_id = id, "Password changed");
        Ok(updated)
    }

    // ── Authentication ──────────────────────────────────────────

    /// Authenticate by username + password and return a JWT.
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<AuthResult> {
        let Some(user) = self.repos.users().find_by_username(username).await? else {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        };

        let valid = verify_password(password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        }

        let token = create_token(user.id, &user.username, user.role.as_str(), &self.jwt_config)
            .map_err(|e| DomainError::Validation(format!("Failed to create token: {}", e)))?;

        Ok(AuthResult {
            token,
            token_type: "Bearer".into(),
            expires_in: self.jwt_config.expiration_hours * 3600,
            user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryRepositories;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryRepositories::new()), JwtConfig::default())
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected_by_store() {
        let svc = service();

        let first = svc.register("alice", "p1", UserRole::Client).await.unwrap();
        let err = svc.register("alice", "p2", UserRole::Client).await.unwrap_err();

        assert!(matches!(
            err,
            DomainError::UniqueViolation { field: "username", .. }
        ));

        // the first record is the only one left standing
        let found = svc.find_by_username("alice").await.unwrap();
        assert_eq!(found.id, first.id);
        assert_eq!(svc.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn lookups_on_missing_keys_fail_with_not_found() {
        let svc = service();

        assert!(matches!(
            svc.find_by_id(999).await.unwrap_err(),
            DomainError::NotFound { field: "id", .. }
        ));
        assert!(matches!(
            svc.find_by_username("ghost").await.unwrap_err(),
            DomainError::NotFound { field: "username", .. }
        ));
    }

    #[tokio::test]
    async fn find_all_on_empty_store_is_empty() {
        let svc = service();
        assert!(svc.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn password_update_rejects_mismatched_confirmation() {
        let svc = service();
        let user = svc.register("bob", "old-pass", UserRole::Client).await.unwrap();

        let err = svc
            .update_password(user.id, "old-pass", "new1", "new2")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PasswordInvalid(_)));

        // stored password unchanged
        let stored = svc.find_by_id(user.id).await.unwrap();
        assert!(verify_password("old-pass", &stored.password_hash).unwrap());
    }

    #[tokio::test]
    async fn password_update_rejects_wrong_current_password() {
        let svc = service();
        let user = svc.register("bob", "old-pass", UserRole::Client).await.unwrap();

        let err = svc
            .update_password(user.id, "wrong", "new-pass", "new-pass")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PasswordInvalid(_)));

        let stored = svc.find_by_id(user.id).await.unwrap();
        assert!(verify_password("old-pass", &stored.password_hash).unwrap());
    }

    #[tokio::test]
    async fn password_update_succeeds_with_correct_current_password() {
        let svc = service();
        let user = svc.register("bob", "old-pass", UserRole::Client).await.unwrap();

        svc.update_password(user.id, "old-pass", "new-pass", "new-pass")
            .await
            .unwrap();

        let stored = svc.find_by_id(user.id).await.unwrap();
        assert!(verify_password("new-pass", &stored.password_hash).unwrap());
        assert!(!verify_password("old-pass", &stored.password_hash).unwrap());
    }

    #[tokio::test]
    async fn missing_user_in_password_update_fails_with_not_found() {
        let svc = service();
        let err = svc
            .update_password(42, "a", "b", "b")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn login_issues_token_for_valid_credentials() {
        let svc = service();
        svc.register("carol", "secret-pw", UserRole::Admin).await.unwrap();

        let auth = svc.login("carol", "secret-pw").await.unwrap();
        assert_eq!(auth.token_type, "Bearer");
        assert!(!auth.token.is_empty());
        assert_eq!(auth.user.username, "carol");
    }

    #[tokio::test]
    async fn login_rejects_bad_credentials() {
        let svc = service();
        svc.register("carol", "secret-pw", UserRole::Client).await.unwrap();

        assert!(matches!(
            svc.login("carol", "nope").await.unwrap_err(),
            DomainError::Unauthorized(_)
        ));
        assert!(matches!(
            svc.login("nobody", "secret-pw").await.unwrap_err(),
            DomainError::Unauthorized(_)
        ));
    }
}
