//! # System Lifecycle & Wiring
//!
//! Builds the whole client stack in one place: one gateway, one typed
//! client per collection, the composer and the panels, all sharing the
//! same transport, id strategy and confirmation gate.
//!
//! Construction is cheap and synchronous; nothing talks to the server
//! until the first load.

use std::sync::Arc;

use comercia_gateway::{GatewayConfig, HttpGateway, ResourceGateway};

use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::composer::OrderComposer;
use crate::confirm::ConfirmGate;
use crate::ids::IdStrategy;
use crate::shell::{CustomersPanel, DashboardPanel, ProductsPanel};

/// The wired application.
pub struct BackofficeSystem {
    pub composer: OrderComposer,
    pub customers_panel: CustomersPanel,
    pub products_panel: ProductsPanel,
    pub dashboard: DashboardPanel,
}

impl BackofficeSystem {
    /// Wires the system over HTTP using `config`.
    pub fn new(config: GatewayConfig, ids: IdStrategy, confirm: Arc<dyn ConfirmGate>) -> Self {
        let gateway: Arc<dyn ResourceGateway> = Arc::new(HttpGateway::new(config));
        Self::with_gateway(gateway, ids, confirm)
    }

    /// Wires the system over any transport. Tests inject a mock gateway
    /// here.
    pub fn with_gateway(
        gateway: Arc<dyn ResourceGateway>,
        ids: IdStrategy,
        confirm: Arc<dyn ConfirmGate>,
    ) -> Self {
        let customers = CustomerClient::new(gateway.clone(), ids);
        let products = ProductClient::new(gateway.clone(), ids);
        let orders = OrderClient::new(gateway, ids);

        Self {
            composer: OrderComposer::new(
                customers.clone(),
                products.clone(),
                orders.clone(),
                confirm.clone(),
            ),
            customers_panel: CustomersPanel::new(customers.clone(), confirm.clone()),
            products_panel: ProductsPanel::new(products.clone(), confirm),
            dashboard: DashboardPanel::new(customers, products, orders),
        }
    }
}
