// aardvark-client/examples/table_session.rs
// Fetch the menu from the server and run one table's order and payment

use std::collections::BTreeMap;

use aardvark_client::{ClientConfig, Food, Menu};
use shared::Restaurant;

/// Used when the server has no menu to offer
fn house_menu() -> anyhow::Result<Menu> {
    Ok(Menu::from_items([
        Food::new("wood", "main course", "woody...", 123.00)?,
        Food::new("bread", "main course", "I am BREAD.", 111.00)?,
        Food::new("cardboard", "dessert", "Fibericious", 321.00)?,
    ]))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "table_session=info,aardvark_client=info,shared=info".into()),
        )
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(server = %config.base_url, "Starting table session");
    let client = config.build_client()?;

    let menu = match client.request_menu().await {
        Ok(menu) if !menu.is_empty() => menu,
        Ok(_) => house_menu()?,
        Err(e) => {
            tracing::warn!("Server unreachable, using house menu: {}", e);
            house_menu()?
        }
    };
    println!("{}", menu.render());

    let mut restaurant = Restaurant::new(menu, 4);
    let table = restaurant.table_mut(2)?;
    table.seat(3);

    let mut items: BTreeMap<String, u32> = BTreeMap::new();
    for food in ["wood", "bread", "cardboard"] {
        if let Err(e) = table.order(food) {
            tracing::warn!("{}", e);
            continue;
        }
        *items.entry(food.to_string()).or_default() += 1;
    }

    println!("{}", table.render_orders());
    println!("{}", table.render_bill());
    let bill = table.compute_bill();
    table.pay_bill(bill);
    tracing::info!(table = table.num(), paid = table.total_paid(), "Bill paid");

    match client.submit_order(&items, table.num()).await {
        Ok(response) => tracing::info!(status = %response.status(), "Order submitted"),
        Err(e) => tracing::warn!("Order not submitted: {}", e),
    }

    let empty: Vec<u32> = restaurant.find_empty_tables().iter().map(|t| t.num()).collect();
    tracing::info!(?empty, "Free tables");
    Ok(())
}
