//! Filter-sort projection over an order snapshot
//!
//! [`project`] is pure and deterministic: the caller supplies "now", so
//! date windows never depend on a hidden clock. Filters run first
//! (search, status, date — commutative), the stable sort always last.

use chrono::{DateTime, Duration, Months, NaiveTime, TimeZone, Utc};
use shared::models::{Order, OrderStatus};

/// Sortable column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Id,
    #[default]
    Date,
    Amount,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Relative date window, lower-bounded at `now - window`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    All,
    /// Since midnight of the current calendar day, in `now`'s timezone
    Today,
    /// Last 7 days
    Week,
    /// Last calendar month (day-clamped subtraction)
    Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

/// User-controlled filter/sort parameters for the order view
#[derive(Debug, Clone, Default)]
pub struct ViewConfig {
    /// Case-insensitive substring matched against id, customer
    /// name/email and the address name fields; empty matches everything
    pub search_term: String,
    pub status: StatusFilter,
    pub date: DateRange,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
}

impl ViewConfig {
    /// Column-header click semantics: re-sorting the active ascending
    /// column flips to descending, anything else sorts ascending
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort_direction = if self.sort_key == key && self.sort_direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        self.sort_key = key;
    }

    /// Reset filters and search, keeping the sort order
    pub fn clear_filters(&mut self) {
        self.search_term.clear();
        self.status = StatusFilter::All;
        self.date = DateRange::All;
    }
}

/// Produce the view-ready ordered subset of `orders`.
///
/// Pure and idempotent: re-applying with the same config and `now`
/// yields the same sequence. The sort is stable, so ties preserve the
/// snapshot's relative order.
pub fn project<Tz: TimeZone>(orders: &[Order], config: &ViewConfig, now: DateTime<Tz>) -> Vec<Order> {
    let mut view: Vec<Order> = orders
        .iter()
        .filter(|order| matches_search(order, &config.search_term))
        .filter(|order| match config.status {
            StatusFilter::All => true,
            StatusFilter::Only(status) => order.status == status,
        })
        .cloned()
        .collect();

    if let Some(lower) = lower_bound(&now, config.date) {
        view.retain(|order| order.date >= lower);
    }

    view.sort_by(|a, b| {
        let ordering = match config.sort_key {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Amount => a.amount.total_cmp(&b.amount),
            SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
        };
        match config.sort_direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    view
}

/// Case-insensitive substring search; fields absent on an order never
/// match and never fail
fn matches_search(order: &Order, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    let hit = |field: Option<&str>| {
        field
            .map(|value| value.to_lowercase().contains(&term))
            .unwrap_or(false)
    };

    order.id.to_lowercase().contains(&term)
        || hit(order.customer.as_ref().and_then(|c| c.name.as_deref()))
        || hit(order.customer.as_ref().and_then(|c| c.email.as_deref()))
        || hit(order.address.as_ref().and_then(|a| a.first_name.as_deref()))
        || hit(order.address.as_ref().and_then(|a| a.last_name.as_deref()))
}

/// Lower bound of the retained window, or `None` when unbounded
fn lower_bound<Tz: TimeZone>(now: &DateTime<Tz>, range: DateRange) -> Option<DateTime<Utc>> {
    let bound = match range {
        DateRange::All => return None,
        DateRange::Today => now
            .with_time(NaiveTime::MIN)
            .earliest()
            // midnight unrepresentable in this timezone (DST gap)
            .unwrap_or_else(|| now.clone() - Duration::days(1)),
        DateRange::Week => now.clone() - Duration::days(7),
        DateRange::Month => now
            .clone()
            .checked_sub_months(Months::new(1))
            .unwrap_or_else(|| now.clone()),
    };
    Some(bound.with_timezone(&Utc))
}
