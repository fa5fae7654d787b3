//! Shared types for the Orebi storefront
//!
//! Common types used by any client of the storefront REST API:
//! data models, the JSON response envelope, and auth/request DTOs.

pub mod client;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};
