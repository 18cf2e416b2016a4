//! Restaurant and onboarding API service
//!
//! Converts transport errors and logical `success: false` payloads into a
//! single `Err(String)` the step forms can show directly.

use crate::api;
use crate::client::create_client;
use ding_http::types::{
    AckResponse, OnboardRestaurantRequest, PosIntegrationRequest, PosMenu,
};

/// Restaurant API service
#[derive(Clone, Default)]
pub struct RestaurantApiService;

impl RestaurantApiService {
    /// Create a new restaurant API service
    pub fn new() -> Self {
        Self
    }

    /// Create the restaurant record
    pub async fn create_restaurant(
        &self,
        request: &OnboardRestaurantRequest,
    ) -> Result<(), String> {
        let client = create_client().map_err(|e| format!("Failed to get client: {e}"))?;
        let response = api::call(client.onboard_restaurant(request))
            .await
            .map_err(|e| e.to_string())?;
        ack_to_result(response, "Failed to create restaurant")
    }

    /// Update an existing restaurant
    pub async fn update_restaurant(
        &self,
        restaurant_id: &str,
        request: &OnboardRestaurantRequest,
    ) -> Result<(), String> {
        let client = create_client().map_err(|e| format!("Failed to get client: {e}"))?;
        let response = api::call(client.update_restaurant(restaurant_id, request))
            .await
            .map_err(|e| e.to_string())?;
        ack_to_result(response, "Failed to update restaurant")
    }

    /// Connect the POS account
    pub async fn create_pos_integration(
        &self,
        restaurant_id: &str,
        request: &PosIntegrationRequest,
    ) -> Result<(), String> {
        let client = create_client().map_err(|e| format!("Failed to get client: {e}"))?;
        let response = api::call(client.create_pos_integration(restaurant_id, request))
            .await
            .map_err(|e| e.to_string())?;
        ack_to_result(response, "Failed to configure POS integration")
    }

    /// Replace the POS credentials
    pub async fn update_pos_integration(
        &self,
        restaurant_id: &str,
        request: &PosIntegrationRequest,
    ) -> Result<(), String> {
        let client = create_client().map_err(|e| format!("Failed to get client: {e}"))?;
        let response = api::call(client.update_pos_integration(restaurant_id, request))
            .await
            .map_err(|e| e.to_string())?;
        ack_to_result(response, "Failed to update POS integration")
    }

    /// Pull the POS menu for review
    pub async fn menu_preview(&self, restaurant_id: &str) -> Result<PosMenu, String> {
        let client = create_client().map_err(|e| format!("Failed to get client: {e}"))?;
        let response = api::call(client.menu_preview(restaurant_id))
            .await
            .map_err(|e| e.to_string())?;
        if response.success {
            response
                .menu
                .ok_or_else(|| "Menu missing from response".to_string())
        } else {
            Err(response
                .error
                .unwrap_or_else(|| "Failed to fetch menu preview".to_string()))
        }
    }

    /// Persist the previewed menu
    pub async fn save_menu(&self, restaurant_id: &str) -> Result<(), String> {
        let client = create_client().map_err(|e| format!("Failed to get client: {e}"))?;
        let response = api::call(client.save_menu(restaurant_id))
            .await
            .map_err(|e| e.to_string())?;
        ack_to_result(response, "Failed to save menu")
    }
}

fn ack_to_result(response: AckResponse, fallback: &str) -> Result<(), String> {
    if response.success {
        Ok(())
    } else {
        Err(response
            .message
            .or(response.error)
            .unwrap_or_else(|| fallback.to_string()))
    }
}
