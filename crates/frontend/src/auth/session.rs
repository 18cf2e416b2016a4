//! Session operations: login, register, logout, refresh, local patch
//!
//! Exposed as a hook handle so page components can await an explicit
//! outcome value after the suspension point instead of wiring callbacks.
//! None of these operations let an error escape past their boundary.

use super::context::{use_auth, AuthAction, AuthContext, UserPatch};
use crate::api;
use crate::client::create_client;
use crate::notify;
use crate::services::AuthApiService;
use ding_http::types::{RegisterRequest, UserInfo};
use yew::prelude::*;

/// Result of a login or register attempt
#[derive(Clone, Debug, PartialEq)]
pub struct AuthOutcome {
    pub success: bool,
    pub message: Option<String>,
}

impl AuthOutcome {
    fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// Session hook handle
#[derive(Clone)]
pub struct SessionHandle {
    auth_api: AuthApiService,
    ctx: AuthContext,
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ctx == other.ctx
    }
}

impl SessionHandle {
    /// Current identity, if any
    pub fn user(&self) -> Option<UserInfo> {
        self.ctx.user.clone()
    }

    /// Whether the startup probe is still pending
    pub fn is_loading(&self) -> bool {
        self.ctx.is_loading
    }

    /// Submit phone number and password
    pub async fn login(&self, phone_number: String, password: String) -> AuthOutcome {
        match self.auth_api.login(phone_number, password).await {
            Ok(response) if response.success => {
                if let Some(user) = response.user {
                    self.ctx.dispatch(AuthAction::SetUser(user));
                }
                notify::success("Login successful!");
                AuthOutcome::ok()
            }
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| "Login failed".to_string());
                notify::error(&message);
                AuthOutcome::failed(message)
            }
            Err(error) => {
                gloo::console::error!("login failed:", error.to_string());
                notify::error("Login failed");
                AuthOutcome::failed("Login failed")
            }
        }
    }

    /// Create a partner account; on success the returned identity is stored
    /// directly, no follow-up fetch needed
    pub async fn register(&self, request: RegisterRequest) -> AuthOutcome {
        match self.auth_api.register(request).await {
            Ok(response) if response.success => {
                if let Some(user) = response.user {
                    self.ctx.dispatch(AuthAction::SetUser(user));
                }
                notify::success("Registration successful!");
                AuthOutcome::ok()
            }
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| "Registration failed".to_string());
                notify::error(&message);
                AuthOutcome::failed(message)
            }
            Err(error) => {
                gloo::console::error!("registration failed:", error.to_string());
                notify::error("Registration failed");
                AuthOutcome::failed("Registration failed")
            }
        }
    }

    /// Best-effort server logout; local identity is cleared and the page is
    /// sent home no matter what the server says
    pub async fn logout(&self) {
        if let Ok(client) = create_client() {
            if let Err(error) = api::call(client.logout()).await {
                gloo::console::warn!("server logout failed:", error.to_string());
            }
        }
        self.ctx.dispatch(AuthAction::ClearUser);
        notify::success("Logged out successfully");
        api::hard_redirect("/");
    }

    /// Re-fetch the identity profile, overwriting the local copy. Returns
    /// the fresh identity so callers can act on it without waiting for a
    /// re-render; failures are logged and swallowed.
    pub async fn refresh(&self) -> Option<UserInfo> {
        match self.auth_api.me().await {
            Ok(user) => {
                self.ctx.dispatch(AuthAction::SetUser(user.clone()));
                Some(user)
            }
            Err(error) => {
                gloo::console::warn!("identity refresh failed:", error.to_string());
                None
            }
        }
    }

    /// Shallow-merge fields into the local identity, no network involved
    pub fn patch_local(&self, patch: UserPatch) {
        self.ctx.dispatch(AuthAction::Patch(patch));
    }
}

/// Hook giving access to session operations and the current identity
#[hook]
pub fn use_session() -> SessionHandle {
    SessionHandle {
        auth_api: AuthApiService::new(),
        ctx: use_auth(),
    }
}
