//! # Comercia
//!
//! Walkthrough binary for the order-composition workflow against a live
//! API: load the snapshots, provision a demo customer and product
//! through the panels, compose an order for them (including one
//! deliberately over-stock attempt), then read back the dashboard.
//!
//! The API root comes from `COMERCIA_API_URL` (or a `.env` file),
//! defaulting to the local development server.

use std::sync::Arc;

use comercia_app::confirm::AutoConfirm;
use comercia_app::ids::IdStrategy;
use comercia_app::lifecycle::BackofficeSystem;
use comercia_gateway::tracing::setup_tracing;
use comercia_gateway::GatewayConfig;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();
    dotenvy::dotenv().ok();

    let config = GatewayConfig::from_env();
    info!(base_url = %config.base_url, "Starting comercia");

    let system = BackofficeSystem::new(config, IdStrategy::default(), Arc::new(AutoConfirm));

    let span = tracing::info_span!("initial_load");
    async {
        info!("Loading snapshots");
        system.composer.load_all().await;
        let state = system.composer.state();
        info!(
            customers = state.customers.len(),
            products = state.products.len(),
            orders = state.orders.len(),
            "Snapshots loaded"
        );
        if let Some(message) = state.error_message() {
            error!(message = %message, "Initial load reported an error");
        }
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("provisioning");
    async {
        info!("Creating demo customer");
        system.customers_panel.open_form();
        system
            .customers_panel
            .edit_form("Alice Distribution", "0801-1990-00001");
        system
            .customers_panel
            .save()
            .await
            .map_err(|e| e.to_string())?;

        info!("Creating demo product");
        system.products_panel.open_form();
        system.products_panel.edit_form("Super Widget", 25.5, 10);
        system
            .products_panel
            .save()
            .await
            .map_err(|e| e.to_string())?;

        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("order_composition");
    async {
        info!("Reloading snapshots to pick up the demo data");
        system.composer.load_all().await;

        let state = system.composer.state();
        let Some(customer) = state.customers.last().cloned() else {
            info!("No customers on the server; nothing to compose");
            return Ok(());
        };
        let Some(product) = state.products.last().cloned() else {
            info!("No products on the server; nothing to compose");
            return Ok(());
        };

        info!(customer = %customer.name, "Creating an order");
        system.composer.open_order_form();
        system.composer.edit_order_form(customer.id.clone());
        system
            .composer
            .create_order()
            .await
            .map_err(|e| e.to_string())?;

        let Some(order_id) = system
            .composer
            .state()
            .orders
            .last()
            .map(|o| o.id.clone())
        else {
            info!("Created order not visible yet; skipping composition");
            return Ok(());
        };

        system
            .composer
            .select_order(&order_id)
            .await
            .map_err(|e| e.to_string())?;
        system
            .composer
            .open_add_product()
            .map_err(|e| e.to_string())?;

        // Ask for one unit more than the shelf holds to show the
        // client-side stock check firing before anything hits the wire.
        let over_stock = i64::from(product.stock) + 1;
        system
            .composer
            .edit_add_product_form(product.id.clone(), over_stock);
        match system.composer.add_product().await {
            Ok(()) => info!("Over-stock add unexpectedly went through"),
            Err(e) => info!(error = %e, "Over-stock add rejected as expected"),
        }

        system.composer.edit_add_product_form(product.id.clone(), 1);
        match system.composer.add_product().await {
            Ok(()) => info!(order_id = %order_id, product = %product.name, "Product added"),
            Err(e) => error!(error = %e, "Could not compose the order"),
        }

        let state = system.composer.state();
        info!(
            lines = state.line_items.len(),
            total = state.current_order().map(|o| o.total).unwrap_or(0.0),
            "Composition finished"
        );
        system.composer.close_detail();
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("dashboard_refresh");
    async {
        system.dashboard.refresh().await;
        let stats = system.dashboard.stats();
        info!(
            customers = stats.total_customers,
            products = stats.total_products,
            orders = stats.total_orders,
            total_sales = stats.total_sales,
            low_stock = stats.low_stock_products,
            status = ?stats.stock_status(),
            "Dashboard refreshed"
        );
    }
    .instrument(span)
    .await;

    info!("Walkthrough completed");
    Ok(())
}
