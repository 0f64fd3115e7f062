//! # Order-Composition Engine
//!
//! Owns the in-memory view of one order's line items and the snapshots
//! it validates against. Every mutation follows the same shape: local
//! preconditions first (nothing reaches the wire if they fail), then
//! one remote call, then a refresh of whatever that call may have
//! changed server-side.
//!
//! ## State & Observation
//!
//! All state lives in one [`ComposerState`] value behind a
//! [`StateCell`]. Operations return their outcome as a
//! [`ComposerError`] AND record it in the state, so imperative callers
//! can match on the result while passive observers render the message.
//!
//! ## Refresh Orchestration
//!
//! Line-item mutations change server-side data the client does not
//! compute: the order's totals and the product's on-hand quantity. So
//! after each successful mutation the engine re-fetches the selected
//! order's line items and then the full customer/product/order
//! snapshots. Totals are never recomputed locally.
//!
//! ## Stale-Response Discard
//!
//! Selecting an order starts a new selection generation; closing the
//! detail view does too. A line-item refresh carries the generation it
//! started under and its result is dropped if the generation moved on,
//! so a slow response for a previous selection can never overwrite the
//! current one.

pub mod error;
pub mod state;

pub use error::ComposerError;
pub use state::{AddProductForm, ComposerState, OrderForm};

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{instrument, warn};

use crate::clients::{CollectionClient, CustomerClient, OrderClient, ProductClient};
use crate::confirm::ConfirmGate;
use crate::model::OrderDraft;
use crate::state::StateCell;

/// The order-composition workflow engine.
///
/// Methods take `&self`; all mutation goes through the observable state
/// cell, so the engine can be shared behind an `Arc`.
pub struct OrderComposer {
    customers: CustomerClient,
    products: ProductClient,
    orders: OrderClient,
    confirm: Arc<dyn ConfirmGate>,
    state: StateCell<ComposerState>,
}

impl OrderComposer {
    pub fn new(
        customers: CustomerClient,
        products: ProductClient,
        orders: OrderClient,
        confirm: Arc<dyn ConfirmGate>,
    ) -> Self {
        Self {
            customers,
            products,
            orders,
            confirm,
            state: StateCell::default(),
        }
    }

    /// Snapshot of the current workflow state.
    pub fn state(&self) -> ComposerState {
        self.state.get()
    }

    /// Observer handle over the workflow state.
    pub fn subscribe(&self) -> watch::Receiver<ComposerState> {
        self.state.subscribe()
    }

    /// Reloads the customer, product and order snapshots concurrently.
    ///
    /// A failed load keeps the previous snapshot and records its own
    /// message; the busy flag covers the whole reload.
    #[instrument(skip(self))]
    pub async fn load_all(&self) {
        self.state.mutate(|s| s.busy = true);

        let (customers, products, orders) = tokio::join!(
            self.customers.list(),
            self.products.list(),
            self.orders.list(),
        );

        match customers {
            Ok(list) => self.state.mutate(|s| s.customers = list),
            Err(e) => {
                warn!(error = %e, "Customer snapshot load failed");
                self.record(ComposerError::Remote("Could not load customers"));
            }
        }
        match products {
            Ok(list) => self.state.mutate(|s| s.products = list),
            Err(e) => {
                warn!(error = %e, "Product snapshot load failed");
                self.record(ComposerError::Remote("Could not load products"));
            }
        }
        match orders {
            Ok(list) => self.state.mutate(|s| s.orders = list),
            Err(e) => {
                warn!(error = %e, "Order snapshot load failed");
                self.record(ComposerError::Remote("Could not load orders"));
            }
        }

        self.state.mutate(|s| s.busy = false);
    }

    /// Opens the new-order form with a cleared buffer.
    pub fn open_order_form(&self) {
        self.state.mutate(|s| {
            s.order_form_open = true;
            s.order_form = OrderForm::default();
        });
    }

    pub fn close_order_form(&self) {
        self.state.mutate(|s| s.order_form_open = false);
    }

    /// Sets the chosen customer on the new-order form.
    pub fn edit_order_form(&self, customer_id: impl Into<String>) {
        let customer_id = customer_id.into();
        self.state.mutate(|s| s.order_form.customer_id = customer_id);
    }

    /// Submits the new-order form.
    ///
    /// Requires a chosen customer; totals go out as zeros for the
    /// server to fill in. On success the snapshots reload and the form
    /// closes; on failure it stays open for a retry.
    #[instrument(skip(self))]
    pub async fn create_order(&self) -> Result<(), ComposerError> {
        let customer_id = self.state.read(|s| s.order_form.customer_id.clone());
        if customer_id.is_empty() {
            return Err(self.fail(ComposerError::Validation("Select a customer")));
        }

        match self.orders.create(OrderDraft::for_customer(customer_id)).await {
            Ok(()) => {
                self.load_all().await;
                self.close_order_form();
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Order creation failed");
                Err(self.fail(ComposerError::Remote("Could not create the order")))
            }
        }
    }

    /// Opens the detail view on `order_id` and loads its line items.
    ///
    /// The previous order's items are cleared right away, never shown
    /// under the new selection. Starts a new selection generation, so a
    /// line-item refresh still in flight for a previous selection can
    /// no longer land.
    #[instrument(skip(self))]
    pub async fn select_order(&self, order_id: &str) -> Result<(), ComposerError> {
        let mut series = 0;
        self.state.mutate(|s| {
            s.series += 1;
            series = s.series;
            s.selected_order_id = Some(order_id.to_string());
            s.line_items.clear();
            s.detail_open = true;
        });
        self.refresh_line_items(order_id, series).await
    }

    /// Closes the detail view, abandoning any in-flight line-item
    /// refresh for it.
    pub fn close_detail(&self) {
        self.state.mutate(|s| {
            s.series += 1;
            s.detail_open = false;
            s.add_product_open = false;
            s.selected_order_id = None;
        });
    }

    /// Opens the add-product sub-view with a reset form (no product
    /// chosen, one unit). Without a selected order the sub-view has no
    /// target and the operation is rejected.
    pub fn open_add_product(&self) -> Result<(), ComposerError> {
        if self.state.read(|s| s.selected_order_id.is_none()) {
            return Err(self.fail(ComposerError::Validation("No order selected")));
        }
        self.state.mutate(|s| {
            s.add_product_open = true;
            s.add_product_form = AddProductForm::default();
        });
        Ok(())
    }

    pub fn close_add_product(&self) {
        self.state.mutate(|s| s.add_product_open = false);
    }

    /// Sets the product choice and quantity on the add-product form.
    pub fn edit_add_product_form(&self, product_id: impl Into<String>, quantity: i64) {
        let product_id = product_id.into();
        self.state.mutate(|s| {
            s.add_product_form.product_id = product_id;
            s.add_product_form.quantity = quantity;
        });
    }

    /// Submits the add-product form against the selected order.
    ///
    /// Validates the form, then checks the requested quantity against
    /// the product's on-hand quantity in the loaded snapshot; both
    /// checks run before anything reaches the wire. On success the line
    /// items and all snapshots re-fetch, then the sub-view closes. On
    /// failure every view flag stays as it was so the user can retry.
    #[instrument(skip(self))]
    pub async fn add_product(&self) -> Result<(), ComposerError> {
        let (form, selected, series) = self.state.read(|s| {
            (
                s.add_product_form.clone(),
                s.selected_order_id.clone(),
                s.series,
            )
        });

        if form.product_id.is_empty() || form.quantity <= 0 {
            return Err(self.fail(ComposerError::Validation(
                "Complete the form before submitting",
            )));
        }
        let Some(order_id) = selected else {
            return Err(self.fail(ComposerError::Validation(
                "Complete the form before submitting",
            )));
        };

        let product = self
            .state
            .read(|s| s.products.iter().find(|p| p.id == form.product_id).cloned());
        let Some(product) = product else {
            return Err(self.fail(ComposerError::ProductNotFound));
        };

        let requested = u32::try_from(form.quantity).unwrap_or(u32::MAX);
        if product.stock < requested {
            return Err(self.fail(ComposerError::InsufficientStock {
                requested,
                available: product.stock,
            }));
        }

        match self
            .orders
            .add_line_item(&order_id, &product.id, requested)
            .await
        {
            Ok(()) => {
                // The line item exists server-side from here on; a failed
                // refresh only hides it until the next one.
                let _ = self.refresh_line_items(&order_id, series).await;
                self.load_all().await;
                self.close_add_product();
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Add line item failed");
                Err(self.fail(ComposerError::Remote(
                    "Could not add the product to the order",
                )))
            }
        }
    }

    /// Rewrites a line item's quantity.
    ///
    /// The quantity must be positive, checked before any call. On-hand
    /// stock is not re-checked on this path; the server stays
    /// authoritative for updates.
    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        line_item_id: &str,
        new_quantity: i64,
    ) -> Result<(), ComposerError> {
        if new_quantity <= 0 {
            return Err(self.fail(ComposerError::Validation(
                "Quantity must be greater than 0",
            )));
        }
        let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);

        match self.orders.update_line_quantity(line_item_id, quantity).await {
            Ok(()) => {
                self.refresh_after_line_mutation().await;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Quantity update failed");
                Err(self.fail(ComposerError::Remote("Could not update the quantity")))
            }
        }
    }

    /// Removes a line item after confirmation. Declining is a silent
    /// no-op.
    #[instrument(skip(self))]
    pub async fn remove_line(&self, line_item_id: &str) -> Result<(), ComposerError> {
        if !self
            .confirm
            .confirm("Remove this product from the order?")
            .await
        {
            return Ok(());
        }

        match self.orders.remove_line_item(line_item_id).await {
            Ok(()) => {
                self.refresh_after_line_mutation().await;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Line item removal failed");
                Err(self.fail(ComposerError::Remote("Could not remove the product")))
            }
        }
    }

    /// Deletes an order after confirmation and reloads the snapshots.
    ///
    /// Deleting the selected order does not close the detail view; its
    /// stale line items stay until the user closes it.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, order_id: &str) -> Result<(), ComposerError> {
        if !self.confirm.confirm("Delete this order?").await {
            return Ok(());
        }

        match self.orders.remove(order_id).await {
            Ok(()) => {
                self.load_all().await;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Order deletion failed");
                Err(self.fail(ComposerError::Remote("Could not delete the order")))
            }
        }
    }

    /// Post-mutation refresh: line items for the still-selected order,
    /// then the full snapshots. Skipped entirely when the detail view
    /// closed in the meantime.
    async fn refresh_after_line_mutation(&self) {
        let (selected, series) = self.state.read(|s| (s.selected_order_id.clone(), s.series));
        if let Some(order_id) = selected {
            let _ = self.refresh_line_items(&order_id, series).await;
            self.load_all().await;
        }
    }

    /// Fetches line items for `order_id`; the result only lands while
    /// the selection generation is still `series`.
    async fn refresh_line_items(&self, order_id: &str, series: u64) -> Result<(), ComposerError> {
        match self.orders.line_items(order_id).await {
            Ok(items) => {
                self.state.mutate(|s| {
                    if s.series == series {
                        s.line_items = items;
                    }
                });
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, order_id, "Line item refresh failed");
                if self.state.read(|s| s.series != series) {
                    // Stale failure; the user has moved on.
                    return Ok(());
                }
                Err(self.fail(ComposerError::Remote(
                    "Could not load the order's line items",
                )))
            }
        }
    }

    fn record(&self, error: ComposerError) {
        self.state.mutate(|s| s.last_error = Some(error));
    }

    fn fail(&self, error: ComposerError) -> ComposerError {
        self.record(error.clone());
        error
    }
}
