//! Data Transfer Objects
//!
//! Request/response bodies use camelCase field names for compatibility
//! with existing API clients.

use serde::{Deserialize, Serialize};

/// POST /api/Auth/Login request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub tenant_id: String,
}

/// POST /api/Auth/Login response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub message: String,
}

/// Generic success/message envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

/// POST /api/Auth/CambioDeClave request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub username: String,
    pub current_password: String,
    pub new_password: String,
}

/// POST /api/Auth/OlvideMiClave request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    pub username_or_email: String,
}

/// POST /api/Auth/Register request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub tenant_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_accepts_camel_case() {
        let req: LoginRequest = serde_json::from_str(
            r#"{"username":"alice","password":"secret123","tenantId":"tenant-a"}"#,
        )
        .unwrap();
        assert_eq!(req.username, "alice");
        assert_eq!(req.tenant_id, "tenant-a");
    }

    #[test]
    fn test_login_request_tenant_defaults_empty() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"username":"alice","password":"secret123"}"#).unwrap();
        assert!(req.tenant_id.is_empty());
    }

    #[test]
    fn test_login_response_serializes_camel_case() {
        let json = serde_json::to_value(LoginResponse {
            success: true,
            token: "abc".to_string(),
            message: "Login exitoso.".to_string(),
        })
        .unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["token"], "abc");
        assert_eq!(json["message"], "Login exitoso.");
    }
}
