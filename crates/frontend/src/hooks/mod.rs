//! Custom hooks for the application

pub mod use_onboarding_state;

pub use use_onboarding_state::{use_onboarding_state, OnboardingStateHandle};
