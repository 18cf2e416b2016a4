//! Typed HTTP client for the Ding partner backend.
//!
//! The backend owns all onboarding state and validation; this crate only
//! knows how to reach it. Wire types live in [`types`], the cookie-session
//! client and its per-resource endpoint groups in [`client`].

pub mod client;
pub mod types;

pub use client::{ClientError, DingClient, DingClientBuilder};
