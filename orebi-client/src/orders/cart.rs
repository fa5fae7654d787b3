//! Cart merge for the add-order-to-cart bulk action
//!
//! The cart is a plain in-memory state container. Merging an order is
//! best-effort and never fails partway: entries are staged on a scratch
//! copy and committed in one assignment, so a half-merged cart cannot
//! be observed even if this grows fallible steps later.

use shared::models::{Order, OrderItem};

/// A line in the cart
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    /// Catalog reference this entry is keyed on
    pub product_ref: String,
    pub name: String,
    /// Unit price
    pub price: f64,
    pub quantity: i32,
    pub image: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
}

impl CartEntry {
    fn from_item(item: &OrderItem) -> Self {
        Self {
            product_ref: cart_key(item),
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
            image: item.image.clone(),
            description: item.description.clone(),
            category: item.category.clone(),
            brand: item.brand.clone(),
        }
    }
}

/// Outcome counts of a merge, for the notification layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartMerge {
    /// New entries inserted
    pub added: usize,
    /// Existing entries whose quantity was incremented
    pub updated: usize,
}

impl CartMerge {
    pub fn total(&self) -> usize {
        self.added + self.updated
    }
}

/// In-memory cart state
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge every item of `order` into the cart: increment quantity
    /// when an entry with the same product reference exists, insert a
    /// new entry otherwise.
    pub fn merge_order(&mut self, order: &Order) -> CartMerge {
        let mut staged = self.entries.clone();
        let mut outcome = CartMerge::default();

        for item in &order.items {
            let key = cart_key(item);
            match staged.iter_mut().find(|entry| entry.product_ref == key) {
                Some(entry) => {
                    entry.quantity += item.quantity;
                    outcome.updated += 1;
                }
                None => {
                    staged.push(CartEntry::from_item(item));
                    outcome.added += 1;
                }
            }
        }

        tracing::debug!(
            order_id = %order.id,
            added = outcome.added,
            updated = outcome.updated,
            "merged order into cart"
        );
        self.entries = staged;
        outcome
    }
}

/// Cart identity of an order item: catalog product id when present,
/// else the line entry id, else the item name (a removed product must
/// still be re-insertable)
fn cart_key(item: &OrderItem) -> String {
    item.product_id
        .clone()
        .or_else(|| item.id.clone())
        .unwrap_or_else(|| item.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::{OrderStatus, PaymentMethod, PaymentStatus};

    fn item(product_id: Option<&str>, name: &str, quantity: i32) -> OrderItem {
        OrderItem {
            id: Some(format!("line-{name}")),
            product_id: product_id.map(str::to_string),
            name: name.to_string(),
            price: 9.99,
            quantity,
            image: None,
            description: Some("desc".to_string()),
            category: Some("gadgets".to_string()),
            brand: None,
        }
    }

    fn order(items: Vec<OrderItem>) -> Order {
        Order {
            id: "ord-1".to_string(),
            date: Utc::now(),
            amount: 0.0,
            status: OrderStatus::Delivered,
            payment_status: PaymentStatus::Paid,
            payment_method: PaymentMethod::Card,
            items,
            address: None,
            customer: None,
        }
    }

    #[test]
    fn test_merge_adds_new_entries() {
        let mut cart = Cart::new();
        let outcome = cart.merge_order(&order(vec![
            item(Some("p1"), "Clock", 2),
            item(Some("p2"), "Watch", 1),
        ]));

        assert_eq!(outcome, CartMerge { added: 2, updated: 0 });
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_merge_increments_existing_quantity() {
        let mut cart = Cart::new();
        cart.merge_order(&order(vec![item(Some("p1"), "Clock", 2)]));

        let outcome = cart.merge_order(&order(vec![
            item(Some("p1"), "Clock", 3),
            item(Some("p3"), "Lamp", 1),
        ]));

        assert_eq!(outcome, CartMerge { added: 1, updated: 1 });
        assert_eq!(outcome.total(), 2);
        let clock = cart
            .entries()
            .iter()
            .find(|e| e.product_ref == "p1")
            .unwrap();
        assert_eq!(clock.quantity, 5);
    }

    #[test]
    fn test_item_without_product_id_falls_back_to_line_id() {
        let mut cart = Cart::new();
        cart.merge_order(&order(vec![item(None, "Orphan", 1)]));

        // Same line id merges, it does not duplicate
        let outcome = cart.merge_order(&order(vec![item(None, "Orphan", 2)]));
        assert_eq!(outcome, CartMerge { added: 0, updated: 1 });
        assert_eq!(cart.entries()[0].quantity, 3);
        assert_eq!(cart.entries()[0].product_ref, "line-Orphan");
    }
}
