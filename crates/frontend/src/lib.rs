pub mod api;
pub mod app;
pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod hooks;
pub mod notify;
pub mod pages;
pub mod services;

pub use app::App;
