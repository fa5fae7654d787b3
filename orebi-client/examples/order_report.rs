//! Fetch the order list and print an invoice summary for every
//! delivered order.
//!
//! ```sh
//! cargo run --example order_report -- admin@example.com secret
//! ```

use chrono::Utc;
use orebi_client::{
    ClientConfig, OrderFeed, OrderScope, OrderSelection, OrderStatus, SortDirection, SortKey,
    StatusFilter, ViewConfig, build_invoice, project,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orebi_client=debug".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let email = args.next().unwrap_or_else(|| "admin@example.com".into());
    let password = args.next().unwrap_or_else(|| "password".into());

    let mut http = ClientConfig::default().build_http_client();
    let user = http.login(&email, &password).await?;
    println!("logged in as {} ({})", user.name, user.role);

    let scope = if user.is_admin() {
        OrderScope::All
    } else {
        OrderScope::Mine
    };
    let mut feed = OrderFeed::new(http);
    feed.refresh(scope).await?;

    let config = ViewConfig {
        status: StatusFilter::Only(OrderStatus::Delivered),
        sort_key: SortKey::Date,
        sort_direction: SortDirection::Desc,
        ..Default::default()
    };
    let now = Utc::now();
    let view = project(feed.orders(), &config, now);
    println!("{} delivered orders", view.len());

    let mut selection = OrderSelection::new();
    selection.select_all(view.iter().map(|o| o.id.as_str()));

    let invoice = build_invoice(feed.orders(), &selection, now);
    println!(
        "{}: {} orders, {} line items, total {:.2}",
        invoice.invoice_number,
        invoice.orders.len(),
        invoice.item_count,
        invoice.total_amount
    );

    Ok(())
}
