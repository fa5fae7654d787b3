//! Data models
//!
//! Shared between the storefront API server and its clients.
//! Field names follow the server's JSON conventions (camelCase keys,
//! Mongo `_id` identifiers), so types carry explicit serde renames.

pub mod contact;
pub mod order;

// Re-exports
pub use contact::*;
pub use order::*;
