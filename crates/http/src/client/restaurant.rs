//! Typed restaurant and onboarding endpoints

use super::{error::ClientError, typed::DingClient};
use crate::types::{
    AckResponse, MenuPreviewResponse, OnboardRestaurantRequest, OnboardingStateResponse,
    PosIntegrationRequest,
};

/// Onboarding and restaurant endpoints
impl DingClient {
    /// Fetch the server-declared onboarding snapshot for the current session
    pub async fn onboarding_state(&self) -> Result<OnboardingStateResponse, ClientError> {
        let req = self.request(reqwest::Method::GET, "/restaurants/onboarding/state");
        self.execute(req).await
    }

    /// Create the restaurant record (RESTAURANT_INFO step submission)
    pub async fn onboard_restaurant(
        &self,
        request: &OnboardRestaurantRequest,
    ) -> Result<AckResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/restaurants/onboard")
            .json(request);
        self.execute(req).await
    }

    /// Update an existing restaurant (RESTAURANT_INFO edit submission)
    pub async fn update_restaurant(
        &self,
        restaurant_id: &str,
        request: &OnboardRestaurantRequest,
    ) -> Result<AckResponse, ClientError> {
        let req = self
            .request(
                reqwest::Method::PUT,
                &format!("/restaurants/{restaurant_id}"),
            )
            .json(request);
        self.execute(req).await
    }

    /// Connect the restaurant's POS account
    pub async fn create_pos_integration(
        &self,
        restaurant_id: &str,
        request: &PosIntegrationRequest,
    ) -> Result<AckResponse, ClientError> {
        let req = self
            .request(
                reqwest::Method::POST,
                &format!("/restaurants/{restaurant_id}/pos-integration"),
            )
            .json(request);
        self.execute(req).await
    }

    /// Replace the POS credentials (POS_INTEGRATION edit submission)
    pub async fn update_pos_integration(
        &self,
        restaurant_id: &str,
        request: &PosIntegrationRequest,
    ) -> Result<AckResponse, ClientError> {
        let req = self
            .request(
                reqwest::Method::PUT,
                &format!("/restaurants/{restaurant_id}/pos-integration"),
            )
            .json(request);
        self.execute(req).await
    }

    /// Pull the menu from the connected POS for review
    pub async fn menu_preview(
        &self,
        restaurant_id: &str,
    ) -> Result<MenuPreviewResponse, ClientError> {
        let req = self.request(
            reqwest::Method::GET,
            &format!("/restaurants/{restaurant_id}/menu-preview"),
        );
        self.execute(req).await
    }

    /// Persist the previewed menu on the backend
    pub async fn save_menu(&self, restaurant_id: &str) -> Result<AckResponse, ClientError> {
        let req = self.request(
            reqwest::Method::POST,
            &format!("/restaurants/{restaurant_id}/save-menu"),
        );
        self.execute(req).await
    }
}
