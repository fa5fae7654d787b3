//! Order retrieval and snapshot cache
//!
//! [`OrderFeed`] owns the last successful fetch. A failed refresh keeps
//! the previous snapshot so a transient outage never blanks the view.

use crate::{ClientResult, HttpClient};
use chrono::{DateTime, Utc};
use shared::models::Order;

/// Which order collection to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderScope {
    /// Current authenticated user's orders
    #[default]
    Mine,
    /// All orders; the server enforces the admin requirement
    All,
}

/// In-memory order snapshot, refreshed on demand
#[derive(Debug, Clone)]
pub struct OrderFeed {
    http: HttpClient,
    snapshot: Vec<Order>,
    fetched_at: Option<DateTime<Utc>>,
}

impl OrderFeed {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            snapshot: Vec::new(),
            fetched_at: None,
        }
    }

    /// Fetch the order collection and replace the snapshot.
    ///
    /// On failure the error is returned and the previous snapshot is
    /// retained. Taking `&mut self` means refreshes cannot overlap, so
    /// there is no stale-response race to deduplicate.
    pub async fn refresh(&mut self, scope: OrderScope) -> ClientResult<&[Order]> {
        tracing::debug!(?scope, "refreshing order snapshot");

        let result = match scope {
            OrderScope::Mine => self.http.my_orders().await,
            OrderScope::All => self.http.list_orders().await,
        };

        match result {
            Ok(orders) => {
                tracing::info!(count = orders.len(), "order snapshot refreshed");
                self.snapshot = orders;
                self.fetched_at = Some(Utc::now());
                Ok(&self.snapshot)
            }
            Err(err) => {
                tracing::warn!(error = %err, "order refresh failed, keeping previous snapshot");
                Err(err)
            }
        }
    }

    /// The last successful snapshot (empty before the first fetch)
    pub fn orders(&self) -> &[Order] {
        &self.snapshot
    }

    /// When the snapshot was last refreshed
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    /// Ids present in the snapshot, for selection reconciliation
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.snapshot.iter().map(|o| o.id.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}
