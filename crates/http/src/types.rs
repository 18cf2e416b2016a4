//! Wire types shared with the partner backend.
//!
//! Field names are camelCase on the wire. Payloads the client never
//! interprets (per-step prior input, POS menu internals) stay as
//! [`serde_json::Value`].

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fmt;

/// One stage of the onboarding wizard.
///
/// Declaration order is the progression order; `Complete` is terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepKey {
    PersonalDetails,
    RestaurantInfo,
    PosIntegration,
    MenuPreview,
    Complete,
}

impl StepKey {
    /// All steps in progression order.
    pub const ALL: [StepKey; 5] = [
        StepKey::PersonalDetails,
        StepKey::RestaurantInfo,
        StepKey::PosIntegration,
        StepKey::MenuPreview,
        StepKey::Complete,
    ];

    /// Position of this step in the progression.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Human-readable step title.
    pub fn title(self) -> &'static str {
        match self {
            StepKey::PersonalDetails => "Personal Details",
            StepKey::RestaurantInfo => "Restaurant Information",
            StepKey::PosIntegration => "POS Integration",
            StepKey::MenuPreview => "Menu Preview",
            StepKey::Complete => "Complete",
        }
    }
}

impl fmt::Display for StepKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Authenticated partner record, as returned by `/auth/me` and the
/// login/register responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    // The backend is inconsistent about this field's casing.
    #[serde(alias = "phone_number")]
    pub phone_number: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub restaurant_id: Option<String>,
}

/// One entry in the wizard's step indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepDescriptor {
    pub key: StepKey,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub completed: bool,
    pub editable: bool,
    pub is_current: bool,
}

/// The full onboarding snapshot for the current identity.
///
/// The backend is the single source of truth: a snapshot is stored verbatim
/// and replaced wholesale on the next fetch, never merged. Invariant under
/// normal operation: exactly one descriptor has `is_current` set and it
/// matches `current_step`, and `completed_steps` is the progression prefix
/// before `current_step`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingState {
    pub current_step: StepKey,
    #[serde(default)]
    pub completed_steps: Vec<StepKey>,
    #[serde(default)]
    pub available_steps: Vec<StepDescriptor>,
    #[serde(default)]
    pub step_data: BTreeMap<StepKey, Value>,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub restaurant_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl OnboardingState {
    /// Snapshot shown to a visitor with no identity: the wizard opens on
    /// personal details with nothing completed. Pure, no network involved.
    pub fn signed_out_default() -> Self {
        Self {
            current_step: StepKey::PersonalDetails,
            completed_steps: Vec::new(),
            available_steps: vec![StepDescriptor {
                key: StepKey::PersonalDetails,
                title: StepKey::PersonalDetails.title().to_string(),
                description: Some(
                    "Create your account and provide basic information".to_string(),
                ),
                completed: false,
                editable: true,
                is_current: true,
            }],
            step_data: BTreeMap::new(),
            progress: 0,
            restaurant_id: None,
            user_id: None,
        }
    }

    /// Snapshot used when an identity exists but the onboarding-state call
    /// fails: assume the account step is done and restaurant creation is
    /// next, seeding the personal-details data from local identity fields.
    ///
    /// This keeps the wizard usable while the backend is unavailable. It
    /// understates progress for users who got further than restaurant
    /// creation; that approximation is deliberate and not reconciled here.
    pub fn service_unavailable_fallback(user: &UserInfo) -> Self {
        let mut step_data = BTreeMap::new();
        step_data.insert(
            StepKey::PersonalDetails,
            json!({
                "name": user.name,
                "email": user.email,
                "phone": user.phone_number,
            }),
        );
        Self {
            current_step: StepKey::RestaurantInfo,
            completed_steps: vec![StepKey::PersonalDetails],
            available_steps: vec![
                StepDescriptor {
                    key: StepKey::PersonalDetails,
                    title: StepKey::PersonalDetails.title().to_string(),
                    description: None,
                    completed: true,
                    editable: true,
                    is_current: false,
                },
                StepDescriptor {
                    key: StepKey::RestaurantInfo,
                    title: StepKey::RestaurantInfo.title().to_string(),
                    description: None,
                    completed: false,
                    editable: true,
                    is_current: true,
                },
            ],
            step_data,
            progress: 20,
            restaurant_id: None,
            user_id: Some(user.id.clone()),
        }
    }

    /// Descriptor for a given step, if the backend listed it.
    pub fn descriptor(&self, key: StepKey) -> Option<&StepDescriptor> {
        self.available_steps.iter().find(|d| d.key == key)
    }

    /// Index of the current step within `available_steps`.
    pub fn current_index(&self) -> usize {
        self.available_steps
            .iter()
            .position(|d| d.key == self.current_step)
            .unwrap_or(0)
    }

    /// Whether onboarding has reached its terminal step.
    pub fn is_terminal(&self) -> bool {
        self.current_step == StepKey::Complete
    }
}

// ---------------------------------------------------------------------------
// Auth endpoints

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub phone_number: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub role: String,
}

/// Login/register response: logical failures arrive inside a 2xx body.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyTokenResponse {
    pub is_valid: bool,
}

/// Generic `{success}` acknowledgement used by mutation endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AckResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// Restaurant endpoints

/// Envelope around the onboarding snapshot. The snapshot fields sit beside
/// the envelope fields on the wire; a failed response simply lacks them, so
/// the snapshot is re-parsed leniently from the leftover fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawOnboardingStateResponse")]
pub struct OnboardingStateResponse {
    pub success: bool,
    pub message: Option<String>,
    pub state: Option<OnboardingState>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawOnboardingStateResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(flatten)]
    rest: serde_json::Map<String, Value>,
}

impl From<RawOnboardingStateResponse> for OnboardingStateResponse {
    fn from(raw: RawOnboardingStateResponse) -> Self {
        let state = serde_json::from_value(Value::Object(raw.rest)).ok();
        Self {
            success: raw.success,
            message: raw.message,
            state,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardRestaurantRequest {
    pub restaurant_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub contact: String,
    pub cuisine_type: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PosIntegrationRequest {
    pub pos_system: String,
    pub restaurant_id: String,
    pub menu_sharing_code: String,
    pub api_key: String,
    pub api_secret: String,
    pub access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuPreviewResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub menu: Option<PosMenu>,
}

/// Menu as reported by the partner's POS system. The portal renders it but
/// never interprets it beyond display.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosMenu {
    #[serde(default)]
    pub restaurant_info: Value,
    #[serde(default)]
    pub categories: Vec<MenuCategory>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuCategory {
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub is_veg: bool,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub variations: Vec<Value>,
    #[serde(default)]
    pub addons: Vec<Value>,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Dashboard endpoints

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub avg_order_value: f64,
    #[serde(default)]
    pub pending_orders: u64,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            total_orders: 0,
            total_revenue: 0.0,
            avg_order_value: 0.0,
            pending_orders: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> UserInfo {
        UserInfo {
            id: "u-42".to_string(),
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone_number: "9876543210".to_string(),
            role: "RESTAURANT_OWNER".to_string(),
            restaurant_id: None,
        }
    }

    fn assert_snapshot_invariant(state: &OnboardingState) {
        let current: Vec<_> = state
            .available_steps
            .iter()
            .filter(|d| d.is_current)
            .collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].key, state.current_step);
        let expected_prefix: Vec<_> = StepKey::ALL
            .iter()
            .copied()
            .take_while(|s| *s != state.current_step)
            .collect();
        assert_eq!(state.completed_steps, expected_prefix);
    }

    #[test]
    fn step_order_matches_progression() {
        assert!(StepKey::PersonalDetails < StepKey::RestaurantInfo);
        assert!(StepKey::MenuPreview < StepKey::Complete);
        for (i, step) in StepKey::ALL.iter().enumerate() {
            assert_eq!(step.index(), i);
        }
    }

    #[test]
    fn step_key_wire_names() {
        let json = serde_json::to_string(&StepKey::PosIntegration).unwrap();
        assert_eq!(json, "\"POS_INTEGRATION\"");
        let key: StepKey = serde_json::from_str("\"MENU_PREVIEW\"").unwrap();
        assert_eq!(key, StepKey::MenuPreview);
    }

    #[test]
    fn signed_out_default_shape() {
        let state = OnboardingState::signed_out_default();
        assert_eq!(state.current_step, StepKey::PersonalDetails);
        assert_eq!(state.progress, 0);
        assert!(state.completed_steps.is_empty());
        assert_eq!(state.available_steps.len(), 1);
        assert!(state.available_steps[0].editable);
        assert_snapshot_invariant(&state);
        // Deterministic: two calls agree exactly.
        assert_eq!(state, OnboardingState::signed_out_default());
    }

    #[test]
    fn fallback_assumes_restaurant_info_is_next() {
        let user = sample_user();
        let state = OnboardingState::service_unavailable_fallback(&user);
        assert_eq!(state.current_step, StepKey::RestaurantInfo);
        assert_eq!(state.completed_steps, vec![StepKey::PersonalDetails]);
        assert_eq!(state.progress, 20);
        assert_eq!(state.user_id.as_deref(), Some("u-42"));
        assert_snapshot_invariant(&state);

        let seeded = &state.step_data[&StepKey::PersonalDetails];
        assert_eq!(seeded["name"], "Asha Rao");
        assert_eq!(seeded["email"], "asha@example.com");
        assert_eq!(seeded["phone"], "9876543210");
    }

    #[test]
    fn fallback_is_idempotent() {
        let user = sample_user();
        assert_eq!(
            OnboardingState::service_unavailable_fallback(&user),
            OnboardingState::service_unavailable_fallback(&user)
        );
    }

    #[test]
    fn onboarding_state_response_round_trip() {
        let body = r#"{
            "success": true,
            "currentStep": "POS_INTEGRATION",
            "completedSteps": ["PERSONAL_DETAILS", "RESTAURANT_INFO"],
            "availableSteps": [
                {"key": "PERSONAL_DETAILS", "title": "Personal Details",
                 "completed": true, "editable": true, "isCurrent": false},
                {"key": "RESTAURANT_INFO", "title": "Restaurant Information",
                 "completed": true, "editable": true, "isCurrent": false},
                {"key": "POS_INTEGRATION", "title": "POS Integration",
                 "description": "Connect your POS system",
                 "completed": false, "editable": false, "isCurrent": true}
            ],
            "stepData": {
                "RESTAURANT_INFO": {"restaurantName": "Spice Villa", "city": "Pune"}
            },
            "progress": 50,
            "restaurantId": "r-7",
            "userId": "u-42"
        }"#;

        let response: OnboardingStateResponse = serde_json::from_str(body).unwrap();
        assert!(response.success);
        let state = response.state.unwrap();
        assert_eq!(state.current_step, StepKey::PosIntegration);
        assert_eq!(state.current_index(), 2);
        assert_eq!(state.restaurant_id.as_deref(), Some("r-7"));
        assert!(!state.is_terminal());
        assert_eq!(
            state.step_data[&StepKey::RestaurantInfo]["restaurantName"],
            "Spice Villa"
        );
        let descriptor = state.descriptor(StepKey::PosIntegration).unwrap();
        assert!(descriptor.is_current && !descriptor.editable);
    }

    #[test]
    fn onboarding_state_response_logical_failure_has_no_state() {
        let body = r#"{"success": false, "message": "no onboarding record"}"#;
        let response: OnboardingStateResponse = serde_json::from_str(body).unwrap();
        assert!(!response.success);
        assert!(response.state.is_none());
        assert_eq!(response.message.as_deref(), Some("no onboarding record"));
    }

    #[test]
    fn user_info_accepts_both_phone_spellings() {
        let camel = r#"{"id":"1","name":"A","email":"a@b.c","phoneNumber":"111"}"#;
        let snake = r#"{"id":"1","name":"A","email":"a@b.c","phone_number":"222"}"#;
        let u1: UserInfo = serde_json::from_str(camel).unwrap();
        let u2: UserInfo = serde_json::from_str(snake).unwrap();
        assert_eq!(u1.phone_number, "111");
        assert_eq!(u2.phone_number, "222");
    }

    #[test]
    fn menu_preview_deserializes_with_sparse_items() {
        let body = r#"{
            "success": true,
            "menu": {
                "restaurantInfo": {"name": "Spice Villa"},
                "categories": [
                    {"name": "Starters", "items": [
                        {"name": "Paneer Tikka", "price": 240.0, "isVeg": true,
                         "variations": [{"name": "Half"}], "addons": []},
                        {"name": "Chicken 65"}
                    ]}
                ]
            }
        }"#;
        let response: MenuPreviewResponse = serde_json::from_str(body).unwrap();
        let menu = response.menu.unwrap();
        assert_eq!(menu.categories.len(), 1);
        let items = &menu.categories[0].items;
        assert_eq!(items[0].variations.len(), 1);
        // Missing availability defaults to available.
        assert!(items[1].is_available);
        assert!(!items[1].is_veg);
    }
}
