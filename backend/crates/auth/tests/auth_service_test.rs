//! Auth use-case tests backed by an in-memory repository.

use std::sync::{Arc, Mutex};

use auth::application::{
    AuthConfig, ChangePasswordInput, ChangePasswordUseCase, ForgotPasswordInput,
    ForgotPasswordUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
    RESET_INSTRUCTIONS_MESSAGE,
};
use auth::domain::entity::{PasswordResetRequest, User};
use auth::domain::repository::{PasswordResetRepository, UserRepository};
use auth::domain::value_object::{Email, Role, Username};
use auth::error::{AuthError, AuthResult};
use kernel::tenant::{TenantContext, TenantId};
use platform::password::ClearTextPassword;
use platform::token::decode_access_token;
use uuid::Uuid;

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
struct InMemoryAuthRepository {
    users: Arc<Mutex<Vec<User>>>,
    resets: Arc<Mutex<Vec<PasswordResetRequest>>>,
}

impl UserRepository for InMemoryAuthRepository {
    async fn find_by_username(
        &self,
        tenant: &TenantId,
        username: &str,
    ) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.tenant_id == *tenant && u.username.as_str() == username)
            .cloned())
    }

    async fn find_by_email_any_tenant(&self, email: &str) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email.as_str().eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn exists_by_username(&self, tenant: &TenantId, username: &str) -> AuthResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.tenant_id == *tenant && u.username.as_str() == username))
    }

    async fn create(&self, tenant: &TenantId, user: &User) -> AuthResult<User> {
        let mut stored = user.clone();
        stored.tenant_id = tenant.clone();
        self.users.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        let existing = users
            .iter_mut()
            .find(|u| u.tenant_id == user.tenant_id && u.id == user.id)
            .ok_or(AuthError::UserNotFound)?;
        *existing = user.clone();
        Ok(())
    }
}

impl PasswordResetRepository for InMemoryAuthRepository {
    async fn create(&self, request: &PasswordResetRequest) -> AuthResult<()> {
        self.resets.lock().unwrap().push(request.clone());
        Ok(())
    }

    async fn delete_expired(&self) -> AuthResult<u64> {
        let mut resets = self.resets.lock().unwrap();
        let before = resets.len();
        resets.retain(|r| !r.used && !r.is_expired());
        Ok((before - resets.len()) as u64)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn test_config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig::development())
}

async fn seed_user(
    repo: &InMemoryAuthRepository,
    tenant: &str,
    username: &str,
    email: &str,
    password: &str,
) -> User {
    let hash = ClearTextPassword::new(password.to_string())
        .unwrap()
        .hash(None)
        .unwrap();
    let user = User::new(
        Username::new(username).unwrap(),
        Email::new(email).unwrap(),
        hash,
        Role::User,
        TenantId::new(tenant),
    );
    UserRepository::create(repo, &TenantId::new(tenant), &user)
        .await
        .unwrap()
}

fn ctx_for(user: &User) -> TenantContext {
    TenantContext::authenticated(
        user.tenant_id.clone(),
        user.id,
        user.username.as_str(),
        user.role.code(),
    )
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_login_success_issues_token_with_tenant_claim() {
    let repo = InMemoryAuthRepository::default();
    let config = test_config();
    seed_user(&repo, "tenant-a", "alice", "alice@tenant-a.com", "secret123").await;

    let use_case = LoginUseCase::new(Arc::new(repo), config.clone());
    let output = use_case
        .execute(LoginInput {
            username: "alice".to_string(),
            password: "secret123".to_string(),
            tenant_id: "tenant-a".to_string(),
        })
        .await
        .unwrap();

    let claims = decode_access_token(&output.token, &config.token).unwrap();
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.tenant_id, "tenant-a");
    assert_eq!(claims.role, "User");
}

#[tokio::test]
async fn test_login_wrong_password_is_invalid_credentials() {
    let repo = InMemoryAuthRepository::default();
    seed_user(&repo, "tenant-a", "alice", "alice@tenant-a.com", "secret123").await;

    let use_case = LoginUseCase::new(Arc::new(repo), test_config());
    let err = use_case
        .execute(LoginInput {
            username: "alice".to_string(),
            password: "wrong-password".to_string(),
            tenant_id: "tenant-a".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_is_tenant_scoped() {
    // Same username exists in tenant-a only; tenant-b login must fail
    // with the same error as a bad password.
    let repo = InMemoryAuthRepository::default();
    seed_user(&repo, "tenant-a", "alice", "alice@tenant-a.com", "secret123").await;

    let use_case = LoginUseCase::new(Arc::new(repo), test_config());
    let err = use_case
        .execute(LoginInput {
            username: "alice".to_string(),
            password: "secret123".to_string(),
            tenant_id: "tenant-b".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_same_username_in_two_tenants_are_distinct_accounts() {
    let repo = InMemoryAuthRepository::default();
    seed_user(&repo, "tenant-a", "alice", "alice@tenant-a.com", "password-a").await;
    seed_user(&repo, "tenant-b", "alice", "alice@tenant-b.com", "password-b").await;

    let use_case = LoginUseCase::new(Arc::new(repo), test_config());
    let output = use_case
        .execute(LoginInput {
            username: "alice".to_string(),
            password: "password-b".to_string(),
            tenant_id: "tenant-b".to_string(),
        })
        .await
        .unwrap();

    let claims = decode_access_token(&output.token, &test_config().token).unwrap();
    assert_eq!(claims.tenant_id, "tenant-b");
}

#[tokio::test]
async fn test_login_missing_tenant_resolves_to_default() {
    let repo = InMemoryAuthRepository::default();
    seed_user(&repo, "default", "alice", "alice@example.com", "secret123").await;

    let use_case = LoginUseCase::new(Arc::new(repo), test_config());
    let output = use_case
        .execute(LoginInput {
            username: "alice".to_string(),
            password: "secret123".to_string(),
            tenant_id: String::new(),
        })
        .await
        .unwrap();

    let claims = decode_access_token(&output.token, &test_config().token).unwrap();
    assert_eq!(claims.tenant_id, "default");
}

#[tokio::test]
async fn test_login_disabled_account_is_rejected() {
    let repo = InMemoryAuthRepository::default();
    let mut user =
        seed_user(&repo, "tenant-a", "alice", "alice@tenant-a.com", "secret123").await;
    user.is_active = false;
    repo.update(&user).await.unwrap();

    let use_case = LoginUseCase::new(Arc::new(repo), test_config());
    let err = use_case
        .execute(LoginInput {
            username: "alice".to_string(),
            password: "secret123".to_string(),
            tenant_id: "tenant-a".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::AccountDisabled));
}

// ============================================================================
// Change password
// ============================================================================

#[tokio::test]
async fn test_change_password_happy_path() {
    let repo = InMemoryAuthRepository::default();
    let config = test_config();
    let user = seed_user(&repo, "tenant-a", "alice", "alice@tenant-a.com", "secret123").await;
    let repo = Arc::new(repo);

    let use_case = ChangePasswordUseCase::new(repo.clone(), config.clone());
    use_case
        .execute(
            &ctx_for(&user),
            ChangePasswordInput {
                username: "alice".to_string(),
                current_password: "secret123".to_string(),
                new_password: "brand-new-pass".to_string(),
            },
        )
        .await
        .unwrap();

    // Old password no longer works, new one does.
    let login = LoginUseCase::new(repo, config);
    let old = login
        .execute(LoginInput {
            username: "alice".to_string(),
            password: "secret123".to_string(),
            tenant_id: "tenant-a".to_string(),
        })
        .await;
    assert!(old.is_err());

    let new = login
        .execute(LoginInput {
            username: "alice".to_string(),
            password: "brand-new-pass".to_string(),
            tenant_id: "tenant-a".to_string(),
        })
        .await;
    assert!(new.is_ok());
}

#[tokio::test]
async fn test_change_password_wrong_current_password() {
    let repo = InMemoryAuthRepository::default();
    let user = seed_user(&repo, "tenant-a", "alice", "alice@tenant-a.com", "secret123").await;

    let use_case = ChangePasswordUseCase::new(Arc::new(repo), test_config());
    let err = use_case
        .execute(
            &ctx_for(&user),
            ChangePasswordInput {
                username: "alice".to_string(),
                current_password: "not-the-password".to_string(),
                new_password: "brand-new-pass".to_string(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::CurrentPasswordMismatch));
}

#[tokio::test]
async fn test_change_password_too_short_new_password() {
    let repo = InMemoryAuthRepository::default();
    let user = seed_user(&repo, "tenant-a", "alice", "alice@tenant-a.com", "secret123").await;

    let use_case = ChangePasswordUseCase::new(Arc::new(repo), test_config());
    let err = use_case
        .execute(
            &ctx_for(&user),
            ChangePasswordInput {
                username: "alice".to_string(),
                current_password: "secret123".to_string(),
                new_password: "short".to_string(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::PasswordTooShort));
}

#[tokio::test]
async fn test_change_password_uses_token_tenant_not_body() {
    // A caller authenticated under tenant-b cannot touch the tenant-a
    // account with the same username.
    let repo = InMemoryAuthRepository::default();
    let user = seed_user(&repo, "tenant-a", "alice", "alice@tenant-a.com", "secret123").await;

    let forged_ctx = TenantContext::authenticated(
        TenantId::new("tenant-b"),
        user.id,
        user.username.as_str(),
        user.role.code(),
    );

    let use_case = ChangePasswordUseCase::new(Arc::new(repo), test_config());
    let err = use_case
        .execute(
            &forged_ctx,
            ChangePasswordInput {
                username: "alice".to_string(),
                current_password: "secret123".to_string(),
                new_password: "brand-new-pass".to_string(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::UserNotFound));
}

// ============================================================================
// Forgot password
// ============================================================================

#[tokio::test]
async fn test_forgot_password_known_email_records_request() {
    let repo = InMemoryAuthRepository::default();
    seed_user(&repo, "tenant-a", "alice", "alice@tenant-a.com", "secret123").await;
    let repo = Arc::new(repo);

    let use_case = ForgotPasswordUseCase::new(repo.clone(), repo.clone(), test_config());
    let message = use_case
        .execute(ForgotPasswordInput {
            username_or_email: "Alice@Tenant-A.com".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(message, RESET_INSTRUCTIONS_MESSAGE);
    let resets = repo.resets.lock().unwrap();
    assert_eq!(resets.len(), 1);
    assert_eq!(resets[0].username, "alice");
    assert!(!resets[0].reset_token.is_empty());
    assert!(!resets[0].is_expired());
}

#[tokio::test]
async fn test_forgot_password_unknown_email_gives_same_response() {
    let repo = Arc::new(InMemoryAuthRepository::default());

    let use_case = ForgotPasswordUseCase::new(repo.clone(), repo.clone(), test_config());
    let message = use_case
        .execute(ForgotPasswordInput {
            username_or_email: "nobody@nowhere.com".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(message, RESET_INSTRUCTIONS_MESSAGE);
    assert!(repo.resets.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_expired_sweeps_used_and_stale_requests() {
    let repo = InMemoryAuthRepository::default();
    let fresh = PasswordResetRequest::new("a", "a@x.com", "t1", chrono::Duration::hours(1));
    let stale = PasswordResetRequest::new("b", "b@x.com", "t2", chrono::Duration::hours(-1));
    let mut spent = PasswordResetRequest::new("c", "c@x.com", "t3", chrono::Duration::hours(1));
    spent.used = true;
    PasswordResetRepository::create(&repo, &fresh).await.unwrap();
    PasswordResetRepository::create(&repo, &stale).await.unwrap();
    PasswordResetRepository::create(&repo, &spent).await.unwrap();

    let deleted = repo.delete_expired().await.unwrap();

    assert_eq!(deleted, 2);
    let resets = repo.resets.lock().unwrap();
    assert_eq!(resets.len(), 1);
    assert_eq!(resets[0].username, "a");
}

// ============================================================================
// Register
// ============================================================================

#[tokio::test]
async fn test_register_creates_active_user_in_tenant() {
    let repo = Arc::new(InMemoryAuthRepository::default());

    let use_case = RegisterUseCase::new(repo.clone(), test_config());
    let user = use_case
        .execute(RegisterInput {
            username: "bob".to_string(),
            email: "bob@tenant-a.com".to_string(),
            password: "secret123".to_string(),
            role: None,
            tenant_id: "tenant-a".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.tenant_id.as_str(), "tenant-a");
    assert_eq!(user.role, Role::User);
    assert!(user.is_active);
    assert_ne!(user.id, Uuid::nil());
}

#[tokio::test]
async fn test_register_duplicate_username_same_tenant_fails() {
    let repo = Arc::new(InMemoryAuthRepository::default());
    seed_user(&repo, "tenant-a", "bob", "bob@tenant-a.com", "secret123").await;

    let use_case = RegisterUseCase::new(repo.clone(), test_config());
    let err = use_case
        .execute(RegisterInput {
            username: "bob".to_string(),
            email: "other@tenant-a.com".to_string(),
            password: "secret123".to_string(),
            role: None,
            tenant_id: "tenant-a".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::UsernameTaken));
}

#[tokio::test]
async fn test_register_duplicate_username_other_tenant_succeeds() {
    let repo = Arc::new(InMemoryAuthRepository::default());
    seed_user(&repo, "tenant-a", "bob", "bob@tenant-a.com", "secret123").await;

    let use_case = RegisterUseCase::new(repo.clone(), test_config());
    let user = use_case
        .execute(RegisterInput {
            username: "bob".to_string(),
            email: "bob@tenant-b.com".to_string(),
            password: "secret123".to_string(),
            role: None,
            tenant_id: "tenant-b".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.tenant_id.as_str(), "tenant-b");
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let repo = Arc::new(InMemoryAuthRepository::default());

    let use_case = RegisterUseCase::new(repo, test_config());
    let err = use_case
        .execute(RegisterInput {
            username: "bob".to_string(),
            email: "bob@tenant-a.com".to_string(),
            password: "12345".to_string(),
            role: None,
            tenant_id: "tenant-a".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Validation(_)));
}

#[tokio::test]
async fn test_register_rejects_unknown_role() {
    let repo = Arc::new(InMemoryAuthRepository::default());

    let use_case = RegisterUseCase::new(repo, test_config());
    let err = use_case
        .execute(RegisterInput {
            username: "bob".to_string(),
            email: "bob@tenant-a.com".to_string(),
            password: "secret123".to_string(),
            role: Some("superadmin".to_string()),
            tenant_id: "tenant-a".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Validation(_)));
}

#[tokio::test]
async fn test_register_admin_role_is_accepted() {
    let repo = Arc::new(InMemoryAuthRepository::default());

    let use_case = RegisterUseCase::new(repo, test_config());
    let user = use_case
        .execute(RegisterInput {
            username: "root".to_string(),
            email: "root@tenant-a.com".to_string(),
            password: "secret123".to_string(),
            role: Some("admin".to_string()),
            tenant_id: "tenant-a".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.role, Role::Admin);
}
