use contracts::auth::{AuthResponse, LoginRequest, RegisterRequest, UserInfo};

use crate::shared::api::{self, ApiError};

/// Login with email and password.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    api::post_json("/api/auth/login", request).await
}

/// Register a new account.
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    api::post_json("/api/auth/register", request).await
}

/// Validate the stored token and fetch the current user.
pub async fn me() -> Result<UserInfo, ApiError> {
    api::get_json("/api/auth/me").await
}
