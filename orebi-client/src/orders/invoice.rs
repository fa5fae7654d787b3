//! Invoice aggregation over a selection of orders
//!
//! A pure reduction: nothing here persists or deduplicates invoices.
//! Amount summation goes through `Decimal` so a pile of f64 order
//! totals cannot drift in the cents.

use crate::orders::OrderSelection;
use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use serde::Serialize;
use shared::models::{Order, OrderAddress};

/// Prefix of synthesized invoice numbers
pub const INVOICE_PREFIX: &str = "INV-";

/// Monetary rounding (2 decimal places)
const DECIMAL_PLACES: u32 = 2;

/// Derived, non-persisted aggregation over the selected orders
///
/// `invoice_number` is synthesized from the generation timestamp;
/// uniqueness holds only per process and millisecond, which is
/// acceptable because invoices are never stored or deduplicated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub invoice_number: String,
    #[serde(rename = "generatedDate")]
    pub generated_at: DateTime<Utc>,
    /// Included orders, in snapshot order
    pub orders: Vec<Order>,
    /// Sum of stored order amounts (not recomputed from items)
    pub total_amount: f64,
    /// Count of line entries across orders (not total quantity)
    pub item_count: usize,
    /// Bill-to snapshot of the first included order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to: Option<OrderAddress>,
}

/// Build an invoice from the orders currently selected.
///
/// An empty selection yields an empty invoice with zero totals; callers
/// are expected to disable the action instead, but the aggregator stays
/// defensive.
pub fn build_invoice(
    orders: &[Order],
    selected: &OrderSelection,
    generated_at: DateTime<Utc>,
) -> Invoice {
    let included: Vec<Order> = orders
        .iter()
        .filter(|order| selected.contains(&order.id))
        .cloned()
        .collect();

    let total_amount = included
        .iter()
        .map(|order| Decimal::from_f64(order.amount).unwrap_or_default())
        .sum::<Decimal>()
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0);

    Invoice {
        invoice_number: format!("{INVOICE_PREFIX}{}", generated_at.timestamp_millis()),
        generated_at,
        total_amount,
        item_count: included.iter().map(|order| order.items.len()).sum(),
        bill_to: included.first().and_then(|order| order.address.clone()),
        orders: included,
    }
}
