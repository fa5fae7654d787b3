//! Order view layer
//!
//! Read-only views over a point-in-time order snapshot: fetch/refresh,
//! filter-sort projection, selection with bulk actions, and invoice
//! aggregation. Everything here except [`feed`] is pure and synchronous.

pub mod cart;
pub mod feed;
pub mod invoice;
pub mod selection;
pub mod view;

pub use cart::{Cart, CartEntry, CartMerge};
pub use feed::{OrderFeed, OrderScope};
pub use invoice::{Invoice, build_invoice};
pub use selection::OrderSelection;
pub use view::{DateRange, SortDirection, SortKey, StatusFilter, ViewConfig, project};
