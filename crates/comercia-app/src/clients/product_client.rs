//! # Product Client
//!
//! Typed accessor for the `/productos` collection.

use std::sync::Arc;

use comercia_gateway::ResourceGateway;
use tracing::{debug, instrument};

use crate::clients::{accept, embed_id, ClientError, CollectionClient};
use crate::ids::IdStrategy;
use crate::model::{Product, ProductDraft};

/// Id prefix used by the timestamp id strategy.
pub const PRODUCT_ID_PREFIX: &str = "PROD";

/// Client for the product catalog.
#[derive(Clone)]
pub struct ProductClient {
    gateway: Arc<dyn ResourceGateway>,
    ids: IdStrategy,
}

impl ProductClient {
    pub fn new(gateway: Arc<dyn ResourceGateway>, ids: IdStrategy) -> Self {
        Self { gateway, ids }
    }

    #[instrument(skip(self, draft))]
    pub async fn create(&self, draft: ProductDraft) -> Result<(), ClientError> {
        debug!("Sending create request");
        let mut body =
            serde_json::to_value(&draft).map_err(|e| ClientError::Decode(e.to_string()))?;
        embed_id(&mut body, "productoId", self.ids.generate(PRODUCT_ID_PREFIX));
        let envelope = self.gateway.create(Self::RESOURCE, body).await?;
        accept(envelope).map(|_| ())
    }
}

impl CollectionClient for ProductClient {
    type Entity = Product;

    const RESOURCE: &'static str = "/productos";

    fn gateway(&self) -> &dyn ResourceGateway {
        self.gateway.as_ref()
    }
}
