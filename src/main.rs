//! Demonstration driver for the kiosk ordering core.
//!
//! Walks the full operator flow from the command line: login, build a cart
//! from drafts against the default menu, submit the order. A missing
//! webhook URL is reported, not fatal — the cart survives for retry, which
//! is exactly the production behavior.

use pos_kiosk::config::Config;
use pos_kiosk::lifecycle::{setup_tracing, Kiosk};
use pos_kiosk::menu::MenuCatalog;
use pos_kiosk::model::DraftQuantities;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting kiosk ordering system");

    let config = Config::load();
    let menu = MenuCatalog::default();
    let kiosk = Kiosk::new(&config);

    let span = tracing::info_span!("login");
    async {
        info!("Logging in");
        kiosk
            .session_client
            .login(&config.password)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    // The presentation side owns the draft quantities and passes them
    // explicitly; a successful add resets each draft to zero.
    let mut drafts = DraftQuantities::new();
    drafts.set("Drinks", "Coke", 2);
    drafts.set("Snacks", "Chips", 1);

    for (category, item) in [("Drinks", "Coke"), ("Snacks", "Chips")] {
        let unit_price = menu
            .price_of(category, item)
            .ok_or_else(|| format!("{item} missing from menu"))?;
        let line = kiosk
            .session_client
            .add_from_draft(&mut drafts, category, item, unit_price)
            .await
            .map_err(|e| e.to_string())?;
        info!(name = %line.name, quantity = line.quantity, "Added to cart");
    }

    let view = kiosk
        .session_client
        .snapshot()
        .await
        .map_err(|e| e.to_string())?;
    info!(total = view.total, lines = view.lines.len(), "Cart ready");

    let span = tracing::info_span!("order_submission");
    let result = async {
        info!("Submitting order");
        kiosk.session_client.submit_order().await
    }
    .instrument(span)
    .await;

    match result {
        Ok(receipt) => {
            info!(total = receipt.total, order = %receipt.order_text, "Order delivered")
        }
        Err(e) => error!(error = %e, "Order submission failed, cart preserved"),
    }

    kiosk.shutdown().await?;

    info!("Kiosk run completed");
    Ok(())
}
