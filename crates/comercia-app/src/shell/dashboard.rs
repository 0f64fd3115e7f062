//! # Dashboard Panel
//!
//! Read-only aggregate view over all three collections. Statistics are
//! recomputed from fresh snapshots on every refresh; nothing here
//! mutates server-side data.

use tokio::sync::watch;
use tracing::{instrument, warn};

use crate::clients::{CollectionClient, CustomerClient, OrderClient, ProductClient};
use crate::shell::PanelError;
use crate::state::StateCell;

/// Alert level derived from the low-stock share of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    Normal,
    Warning,
    Critical,
}

/// Aggregate statistics plus the usual panel flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub total_customers: usize,
    pub total_products: usize,
    pub total_orders: usize,
    /// Sum of all order totals.
    pub total_sales: f64,
    pub low_stock_products: usize,
    pub busy: bool,
    pub last_error: Option<PanelError>,
}

impl DashboardStats {
    /// Average sale value per order; zero when there are no orders.
    pub fn average_sale(&self) -> f64 {
        if self.total_orders > 0 {
            self.total_sales / self.total_orders as f64
        } else {
            0.0
        }
    }

    /// Share of the catalog that is low on stock, as a percentage.
    pub fn low_stock_percentage(&self) -> f64 {
        if self.total_products > 0 {
            self.low_stock_products as f64 / self.total_products as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Critical at 20% low stock, warning at 10%.
    pub fn stock_status(&self) -> StockStatus {
        let percentage = self.low_stock_percentage();
        if percentage >= 20.0 {
            StockStatus::Critical
        } else if percentage >= 10.0 {
            StockStatus::Warning
        } else {
            StockStatus::Normal
        }
    }

    /// Whether anything needs attention.
    pub fn has_alerts(&self) -> bool {
        self.low_stock_products > 0
    }
}

/// The statistics panel.
pub struct DashboardPanel {
    customers: CustomerClient,
    products: ProductClient,
    orders: OrderClient,
    state: StateCell<DashboardStats>,
}

impl DashboardPanel {
    pub fn new(customers: CustomerClient, products: ProductClient, orders: OrderClient) -> Self {
        Self {
            customers,
            products,
            orders,
            state: StateCell::default(),
        }
    }

    /// Snapshot of the current statistics.
    pub fn stats(&self) -> DashboardStats {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardStats> {
        self.state.subscribe()
    }

    /// Recomputes every statistic from fresh snapshots.
    ///
    /// The three loads run concurrently and land together; if any fails
    /// the previous numbers stay and one static message is recorded.
    #[instrument(skip(self))]
    pub async fn refresh(&self) {
        self.state.mutate(|s| {
            s.busy = true;
            s.last_error = None;
        });

        let (customers, products, orders) = tokio::join!(
            self.customers.list(),
            self.products.list(),
            self.orders.list(),
        );

        match (customers, products, orders) {
            (Ok(customers), Ok(products), Ok(orders)) => {
                self.state.mutate(|s| {
                    s.total_customers = customers.len();
                    s.total_products = products.len();
                    s.low_stock_products = products.iter().filter(|p| p.is_low_stock()).count();
                    s.total_orders = orders.len();
                    s.total_sales = orders.iter().map(|o| o.total).sum();
                    s.busy = false;
                });
            }
            (customers, products, orders) => {
                for error in [customers.err(), products.err(), orders.err()]
                    .into_iter()
                    .flatten()
                {
                    warn!(error = %error, "Statistics load failed");
                }
                self.state.mutate(|s| {
                    s.last_error = Some(PanelError::Remote("Could not load statistics"));
                    s.busy = false;
                });
            }
        }
    }
}
