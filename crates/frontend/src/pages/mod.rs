//! Page components

pub mod dashboard;
pub mod landing;
pub mod login;
pub mod onboarding;

pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use onboarding::OnboardingFlow;
