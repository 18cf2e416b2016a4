//! API services wrapping the shared client

pub mod auth;
pub mod dashboard;
pub mod restaurant;

pub use auth::AuthApiService;
pub use dashboard::DashboardApiService;
pub use restaurant::RestaurantApiService;
