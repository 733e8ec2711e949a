//! Password Reset Request Entity

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Audit record for a password-reset flow.
///
/// The token is opaque and single-use; rows past `expires_at` are swept
/// by the startup cleanup job.
#[derive(Debug, Clone)]
pub struct PasswordResetRequest {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub reset_token: String,
    pub requested_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
}

impl PasswordResetRequest {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        reset_token: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            reset_token: reset_token.into(),
            requested_at: now,
            expires_at: now + ttl,
            used: false,
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request_is_unused_and_unexpired() {
        let req =
            PasswordResetRequest::new("alice", "alice@tenant-a.com", "tok", Duration::hours(1));
        assert!(!req.used);
        assert!(!req.is_expired());
        assert!(req.expires_at > req.requested_at);
    }

    #[test]
    fn test_negative_ttl_is_expired() {
        let req =
            PasswordResetRequest::new("alice", "alice@tenant-a.com", "tok", Duration::hours(-1));
        assert!(req.is_expired());
    }
}
