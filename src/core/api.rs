//! Client contract of the clinic backend
//!
//! Endpoints consumed:
//! - GET  /api/auth/status - session probe
//! - POST /api/auth/ - login, returns the user record
//! - POST /api/auth/logout - end the session
//! - POST /api/auth/verify-email - check an emailed verification code
//! - POST /api/auth/resend-verification - send a new code
//! - GET  /api/notifications - notifications for the current user
//! - PUT  /api/owner - replace the owner profile

use serde::Serialize;

use super::error::ApiError;
use super::http;
use super::models::{AuthStatus, Credentials, Notification, Owner, User};

pub const AUTH_STATUS_PATH: &str = "/api/auth/status";
pub const LOGIN_PATH: &str = "/api/auth/";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const VERIFY_EMAIL_PATH: &str = "/api/auth/verify-email";
pub const RESEND_VERIFICATION_PATH: &str = "/api/auth/resend-verification";
pub const NOTIFICATIONS_PATH: &str = "/api/notifications";
pub const OWNER_PATH: &str = "/api/owner";

/// Session operations of the auth service
#[allow(async_fn_in_trait)]
pub trait AuthClient {
    async fn status(&self) -> Result<AuthStatus, ApiError>;

    async fn login(&self, credentials: &Credentials) -> Result<User, ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;
}

/// Email verification operations of the auth service
#[allow(async_fn_in_trait)]
pub trait VerificationClient {
    async fn verify_code(&self, email: &str, code: &str) -> Result<(), ApiError>;

    async fn resend_code(&self, email: &str) -> Result<(), ApiError>;
}

#[derive(Debug, Serialize)]
struct VerifyRequest<'a> {
    email: &'a str,
    code: &'a str,
}

#[derive(Debug, Serialize)]
struct ResendRequest<'a> {
    email: &'a str,
}

/// HTTP implementation talking to `/api/*`
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpClinicApi;

impl AuthClient for HttpClinicApi {
    async fn status(&self) -> Result<AuthStatus, ApiError> {
        http::get_json(AUTH_STATUS_PATH).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        http::post_json(LOGIN_PATH, credentials).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        http::post_ok::<()>(LOGOUT_PATH, None).await
    }
}

impl VerificationClient for HttpClinicApi {
    async fn verify_code(&self, email: &str, code: &str) -> Result<(), ApiError> {
        http::post_ok(VERIFY_EMAIL_PATH, Some(&VerifyRequest { email, code })).await
    }

    async fn resend_code(&self, email: &str) -> Result<(), ApiError> {
        http::post_ok(RESEND_VERIFICATION_PATH, Some(&ResendRequest { email })).await
    }
}

impl HttpClinicApi {
    pub async fn notifications(&self) -> Result<Vec<Notification>, ApiError> {
        http::get_json(NOTIFICATIONS_PATH).await
    }

    pub async fn update_owner(&self, owner: &Owner) -> Result<(), ApiError> {
        http::put_ok(OWNER_PATH, owner).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_request_shape() {
        let body = serde_json::to_value(VerifyRequest {
            email: "kim@example.com",
            code: "123456",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"email": "kim@example.com", "code": "123456"})
        );
    }

    #[test]
    fn test_paths_are_under_api() {
        for path in [
            AUTH_STATUS_PATH,
            LOGIN_PATH,
            LOGOUT_PATH,
            VERIFY_EMAIL_PATH,
            RESEND_VERIFICATION_PATH,
            NOTIFICATIONS_PATH,
            OWNER_PATH,
        ] {
            assert!(path.starts_with("/api/"), "{path}");
        }
    }

    #[tokio::test]
    async fn test_http_client_is_inert_during_ssr() {
        let result = HttpClinicApi.status().await;
        assert!(matches!(result, Err(ApiError::Network(_))));
    }
}
