//! JWT access token issuance/verification and opaque reset token
//! generation.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Token lifetime has elapsed
    #[error("Token expired")]
    Expired,

    /// Signature, issuer, audience or structure check failed
    #[error("Invalid token: {0}")]
    Invalid(String),

    /// Key material / encoding failure
    #[error("Token crypto error: {0}")]
    Crypto(String),
}

/// JWT signing/validation parameters.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// HMAC-SHA256 signing secret.
    pub secret: String,
    /// Expected `iss` claim.
    pub issuer: String,
    /// Expected `aud` claim.
    pub audience: String,
    /// Access token lifetime in seconds.
    pub lifetime_secs: u64,
}

impl TokenConfig {
    /// Development-only configuration with a well-known secret.
    pub fn development() -> Self {
        Self {
            secret: "SuperSecretKey12345678901234567890!".to_string(),
            issuer: "MultiTenantApi".to_string(),
            audience: "MultiTenantApiClients".to_string(),
            lifetime_secs: 3600,
        }
    }
}

/// JWT claims embedded in every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Subject: user ID (UUID string).
    pub sub: String,
    /// Username of the authenticated user.
    pub username: String,
    /// Role of the authenticated user.
    pub role: String,
    /// Tenant the token is scoped to.
    #[serde(rename = "tenantId")]
    pub tenant_id: String,
    /// Issuer.
    pub iss: String,
    /// Audience.
    pub aud: String,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
    /// Unique token ID (UUID string).
    pub jti: String,
}

/// Issue a signed HS256 JWT access token carrying the tenant claim.
pub fn issue_access_token(
    user_id: Uuid,
    username: &str,
    role: &str,
    tenant_id: &str,
    config: &TokenConfig,
) -> Result<String, TokenError> {
    let now = Utc::now().timestamp();
    let claims = AccessTokenClaims {
        sub: user_id.to_string(),
        username: username.to_string(),
        role: role.to_string(),
        tenant_id: tenant_id.to_string(),
        iss: config.issuer.clone(),
        aud: config.audience.clone(),
        iat: now,
        exp: now + config.lifetime_secs as i64,
        jti: Uuid::new_v4().to_string(),
    };

    let key = EncodingKey::from_secret(config.secret.as_bytes());

    jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &key)
        .map_err(|e| TokenError::Crypto(format!("JWT encode: {e}")))
}

/// Decode and verify an HS256 JWT access token (signature, expiry,
/// issuer, audience).
pub fn decode_access_token(
    token: &str,
    config: &TokenConfig,
) -> Result<AccessTokenClaims, TokenError> {
    let key = DecodingKey::from_secret(config.secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&config.issuer]);
    validation.set_audience(&[&config.audience]);
    validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);

    jsonwebtoken::decode::<AccessTokenClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid(e.to_string()),
        })
}

/// Generate a cryptographically random opaque reset token
/// (32 bytes → base64url-encoded, no padding).
pub fn generate_reset_token() -> String {
    use rand::RngCore;
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
