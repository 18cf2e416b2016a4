//! Shared UI components

pub mod guards;
pub mod spinner;
pub mod step_indicator;
pub mod toast;

pub use guards::{ProtectedRoute, PublicRoute};
pub use spinner::{PageSpinner, Spinner};
pub use step_indicator::StepIndicator;
pub use toast::ToastProvider;
