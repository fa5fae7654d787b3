// orebi-client/tests/order_flow.rs
// End-to-end view-layer flow over wire-shaped fixtures

use chrono::{DateTime, Utc};
use orebi_client::{
    Cart, ClientConfig, OrderSelection, OrderStatus, SortDirection, SortKey, StatusFilter,
    ViewConfig, build_invoice, project,
};
use shared::models::Order;
use shared::response::{ApiStatus, OrdersPayload};

const ORDER_LIST_FIXTURE: &str = r#"{
    "success": true,
    "orders": [
        {
            "_id": "665f000000000000000000a1",
            "date": 1772355600000,
            "amount": 120.5,
            "status": "delivered",
            "paymentStatus": "paid",
            "paymentMethod": "card",
            "items": [
                {"productId": "p-clock", "name": "Clock", "price": 60.25, "quantity": 2}
            ],
            "address": {"firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com"},
            "userId": {"_id": "u1", "name": "Ada Lovelace", "email": "ada@example.com"}
        },
        {
            "_id": "665f000000000000000000b2",
            "date": 1772269200000,
            "amount": 35.0,
            "status": "pending",
            "paymentStatus": "pending",
            "paymentMethod": "cod",
            "items": [
                {"productId": "p-lamp", "name": "Lamp", "price": 20.0, "quantity": 1},
                {"name": "Mystery Item", "price": 15.0, "quantity": 1}
            ]
        },
        {
            "_id": "665f000000000000000000c3",
            "date": 1771750800000,
            "amount": 75.0,
            "status": "delivered",
            "paymentStatus": "paid",
            "paymentMethod": "applepay",
            "items": [
                {"productId": "p-watch", "name": "Watch", "price": 75.0, "quantity": 1}
            ],
            "userId": {"_id": "u2", "name": "Grace Hopper", "email": "grace@example.com"}
        }
    ]
}"#;

fn fixture_orders() -> Vec<Order> {
    let status: ApiStatus = serde_json::from_str(ORDER_LIST_FIXTURE).unwrap();
    assert!(status.success);
    let payload: OrdersPayload = serde_json::from_str(ORDER_LIST_FIXTURE).unwrap();
    payload.orders
}

#[test]
fn test_fixture_decodes_defensively() {
    let orders = fixture_orders();
    assert_eq!(orders.len(), 3);
    // Second order has no address/customer and a dangling item
    assert!(orders[1].address.is_none());
    assert!(orders[1].customer.is_none());
    assert!(orders[1].items[1].product_id.is_none());
}

#[test]
fn test_filter_select_invoice_flow() {
    let orders = fixture_orders();
    let now: DateTime<Utc> = "2026-03-01T12:00:00Z".parse().unwrap();

    // Admin filters the view down to delivered orders, amount ascending
    let config = ViewConfig {
        status: StatusFilter::Only(OrderStatus::Delivered),
        sort_key: SortKey::Amount,
        sort_direction: SortDirection::Asc,
        ..Default::default()
    };
    let view = project(&orders, &config, now);
    let visible: Vec<&str> = view.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(
        visible,
        vec!["665f000000000000000000c3", "665f000000000000000000a1"]
    );

    // Select-all acts on the visible subset only
    let mut selection = OrderSelection::new();
    selection.select_all(visible);
    assert_eq!(selection.len(), 2);

    // Invoice aggregates the selected orders against the full snapshot
    let invoice = build_invoice(&orders, &selection, now);
    assert_eq!(invoice.total_amount, 195.5);
    assert_eq!(invoice.item_count, 2);
    assert_eq!(invoice.orders.len(), 2);
    // Bill-to comes from the first included order in snapshot order
    assert_eq!(
        invoice.bill_to.as_ref().unwrap().email.as_deref(),
        Some("ada@example.com")
    );

    // A refresh that dropped an order prunes the selection silently
    let refreshed: Vec<Order> = orders
        .iter()
        .filter(|o| o.id != "665f000000000000000000c3")
        .cloned()
        .collect();
    selection.retain_known(refreshed.iter().map(|o| o.id.as_str()));
    assert_eq!(selection.len(), 1);
}

#[test]
fn test_reorder_merges_order_into_cart() {
    let orders = fixture_orders();
    let mut cart = Cart::new();

    let first = cart.merge_order(&orders[1]);
    assert_eq!(first.added, 2);
    assert_eq!(first.updated, 0);

    // Re-merging the same order only bumps quantities
    let second = cart.merge_order(&orders[1]);
    assert_eq!(second.added, 0);
    assert_eq!(second.updated, 2);
    let lamp = cart
        .entries()
        .iter()
        .find(|e| e.product_ref == "p-lamp")
        .unwrap();
    assert_eq!(lamp.quantity, 2);
}

#[test]
fn test_client_config_builder() {
    let config = ClientConfig::new("http://localhost:8000/")
        .with_token("jwt-token")
        .with_timeout(5);

    let client = config.build_http_client();
    assert_eq!(client.token(), Some("jwt-token"));

    let anonymous = ClientConfig::default().build_http_client();
    assert!(anonymous.token().is_none());

    let upgraded = anonymous.with_token("later");
    assert_eq!(upgraded.token(), Some("later"));
}
