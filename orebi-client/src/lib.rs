//! Orebi Client - HTTP client for the storefront REST API
//!
//! Wraps the storefront endpoints (orders, auth, profile, contacts) and
//! carries the in-memory order view layer: snapshot feed, filter/sort
//! projection, selection, cart merge and invoice aggregation.

pub mod config;
pub mod error;
pub mod http;
pub mod orders;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use orders::{
    Cart, CartEntry, CartMerge, DateRange, Invoice, OrderFeed, OrderScope, OrderSelection,
    SortDirection, SortKey, StatusFilter, ViewConfig, build_invoice, project,
};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, PlaceOrderRequest, ProfileUpdate, UserInfo};
pub use shared::models::{Order, OrderItem, OrderStatus, PaymentMethod, PaymentStatus};
