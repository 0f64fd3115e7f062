//! # Order Client
//!
//! Typed accessor for the `/ordenes` collection plus the line-item
//! operations hanging off it. Line items live under two path families:
//! reads and creation are order-scoped (`/ordenes/{id}/detalles`,
//! `/ordenes/{id}/productos/{pid}`), while quantity updates and removal
//! address the line item directly (`/detalles/{id}`).

use std::sync::Arc;

use comercia_gateway::ResourceGateway;
use serde_json::json;
use tracing::{debug, instrument};

use crate::clients::{accept, acknowledge, decode_list, embed_id, ClientError, CollectionClient};
use crate::ids::IdStrategy;
use crate::model::{LineItem, Order, OrderDraft};

/// Id prefix used by the timestamp id strategy.
pub const ORDER_ID_PREFIX: &str = "ORD";

/// Client for the order collection and its line items.
#[derive(Clone)]
pub struct OrderClient {
    gateway: Arc<dyn ResourceGateway>,
    ids: IdStrategy,
}

impl OrderClient {
    pub fn new(gateway: Arc<dyn ResourceGateway>, ids: IdStrategy) -> Self {
        Self { gateway, ids }
    }

    #[instrument(skip(self, draft))]
    pub async fn create(&self, draft: OrderDraft) -> Result<(), ClientError> {
        debug!("Sending create request");
        let mut body =
            serde_json::to_value(&draft).map_err(|e| ClientError::Decode(e.to_string()))?;
        embed_id(&mut body, "ordenId", self.ids.generate(ORDER_ID_PREFIX));
        let envelope = self.gateway.create(Self::RESOURCE, body).await?;
        accept(envelope).map(|_| ())
    }

    /// Fetches the line items of one order.
    #[instrument(skip(self))]
    pub async fn line_items(&self, order_id: &str) -> Result<Vec<LineItem>, ClientError> {
        debug!("Sending request");
        let path = format!("{}/{order_id}/detalles", Self::RESOURCE);
        let envelope = self.gateway.fetch(&path).await?;
        decode_list(envelope)
    }

    /// Adds `quantity` units of a product to an order. The server
    /// creates the line item and reprices the order.
    #[instrument(skip(self))]
    pub async fn add_line_item(
        &self,
        order_id: &str,
        product_id: &str,
        quantity: u32,
    ) -> Result<(), ClientError> {
        debug!("Sending request");
        let path = format!("{}/{order_id}/productos/{product_id}", Self::RESOURCE);
        let envelope = self
            .gateway
            .create(&path, json!({ "cantidad": quantity }))
            .await?;
        acknowledge(envelope)
    }

    /// Rewrites the quantity of one line item.
    #[instrument(skip(self))]
    pub async fn update_line_quantity(
        &self,
        line_item_id: &str,
        quantity: u32,
    ) -> Result<(), ClientError> {
        debug!("Sending request");
        let path = format!("/detalles/{line_item_id}");
        let envelope = self
            .gateway
            .replace(&path, json!({ "cantidad": quantity }))
            .await?;
        acknowledge(envelope)
    }

    /// Removes one line item from its order.
    #[instrument(skip(self))]
    pub async fn remove_line_item(&self, line_item_id: &str) -> Result<(), ClientError> {
        debug!("Sending request");
        let path = format!("/detalles/{line_item_id}");
        let envelope = self.gateway.remove(&path).await?;
        acknowledge(envelope)
    }
}

impl CollectionClient for OrderClient {
    type Entity = Order;

    const RESOURCE: &'static str = "/ordenes";

    fn gateway(&self) -> &dyn ResourceGateway {
        self.gateway.as_ref()
    }
}
