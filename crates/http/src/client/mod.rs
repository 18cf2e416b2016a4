//! HTTP client for the partner backend
//!
//! One cookie-session client, with typed endpoint groups split by backend
//! resource: [`auth`], [`restaurant`], [`dashboard`].

mod auth;
mod dashboard;
pub mod error;
mod restaurant;
mod typed;

pub use error::ClientError;
pub use typed::{DingClient, DingClientBuilder};
