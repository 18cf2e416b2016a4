//! Typed auth endpoints

use super::{error::ClientError, typed::DingClient};
use crate::types::{
    AckResponse, AuthResponse, LoginRequest, RegisterRequest, UserInfo, VerifyTokenResponse,
};

/// Session and account endpoints
impl DingClient {
    /// Check whether the session cookie is still valid
    pub async fn verify_token(&self) -> Result<VerifyTokenResponse, ClientError> {
        let req = self.request(reqwest::Method::GET, "/auth/verify-token");
        self.execute(req).await
    }

    /// Fetch the identity profile for the current session
    pub async fn me(&self) -> Result<UserInfo, ClientError> {
        let req = self.request(reqwest::Method::GET, "/auth/me");
        self.execute(req).await
    }

    /// Partner login with phone number and password
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/auth/restaurant-login")
            .json(&request);
        self.execute(req).await
    }

    /// Create a partner account; the response carries the new identity
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/auth/restaurant-register")
            .json(&request);
        self.execute(req).await
    }

    /// Invalidate the server-side session
    pub async fn logout(&self) -> Result<AckResponse, ClientError> {
        let req = self.request(reqwest::Method::POST, "/auth/logout");
        self.execute(req).await
    }
}
