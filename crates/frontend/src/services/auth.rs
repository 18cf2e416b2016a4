//! Authentication API service

use crate::api;
use crate::client::create_client;
use ding_http::types::{AuthResponse, LoginRequest, RegisterRequest, UserInfo};
use ding_http::ClientError;

/// Authentication API service
#[derive(Clone)]
pub struct AuthApiService;

impl AuthApiService {
    /// Create a new auth API service
    pub fn new() -> Self {
        Self
    }
}

impl Default for AuthApiService {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthApiService {
    /// Submit partner credentials
    pub async fn login(
        &self,
        phone_number: String,
        password: String,
    ) -> Result<AuthResponse, ClientError> {
        let client = create_client()?;
        api::call(client.login(LoginRequest {
            phone_number,
            password,
        }))
        .await
    }

    /// Create a partner account
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, ClientError> {
        let client = create_client()?;
        api::call(client.register(request)).await
    }

    /// Fetch the identity profile for the current session
    pub async fn me(&self) -> Result<UserInfo, ClientError> {
        let client = create_client()?;
        api::call(client.me()).await
    }
}
