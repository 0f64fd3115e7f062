//! # Collection Clients
//!
//! Typed accessors over the generic gateway, one per remote collection.
//! The [`CollectionClient`] trait provides the uniform list, get,
//! replace and remove operations; each client adds its own create
//! method (id embedding differs per resource) and, for orders, the
//! line-item operations.
//!
//! Payloads cross the gateway as [`serde_json::Value`]; this layer is
//! where they become typed entities.

pub mod customer_client;
pub mod order_client;
pub mod product_client;

pub use customer_client::CustomerClient;
pub use order_client::OrderClient;
pub use product_client::ProductClient;

use async_trait::async_trait;
use comercia_gateway::{ApiResponse, GatewayError, ResourceGateway};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by collection clients.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// The transport failed before an envelope arrived.
    #[error("gateway error: {0}")]
    Gateway(String),

    /// The server answered with `success == false`.
    #[error("rejected by server: {0}")]
    Rejected(String),

    /// The envelope arrived but its payload did not match the entity
    /// shape.
    #[error("unexpected payload: {0}")]
    Decode(String),
}

impl From<GatewayError> for ClientError {
    fn from(error: GatewayError) -> Self {
        ClientError::Gateway(error.to_string())
    }
}

/// Unwraps an envelope, turning `success == false` into
/// [`ClientError::Rejected`].
pub(crate) fn accept(envelope: ApiResponse<Value>) -> Result<Option<Value>, ClientError> {
    if envelope.success {
        Ok(envelope.data)
    } else {
        Err(ClientError::Rejected(
            envelope.detail().unwrap_or("unspecified error").to_string(),
        ))
    }
}

/// Decodes a collection payload; a missing `data` field counts as an
/// empty collection, matching how the API reports empty lists.
pub(crate) fn decode_list<T: DeserializeOwned>(
    envelope: ApiResponse<Value>,
) -> Result<Vec<T>, ClientError> {
    match accept(envelope)? {
        Some(value) => serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string())),
        None => Ok(Vec::new()),
    }
}

/// Decodes a single-entity payload; here a missing `data` field is an
/// error.
pub(crate) fn decode_entity<T: DeserializeOwned>(
    envelope: ApiResponse<Value>,
) -> Result<T, ClientError> {
    let value = accept(envelope)?
        .ok_or_else(|| ClientError::Decode("response carried no data".to_string()))?;
    serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Acknowledges a mutation response, discarding any payload.
pub(crate) fn acknowledge(envelope: ApiResponse<Value>) -> Result<(), ClientError> {
    accept(envelope).map(|_| ())
}

/// Uniform CRUD surface of a remote collection.
///
/// Implementors supply the gateway handle, the entity type and the
/// resource path; the operations come for free. Creation is NOT part of
/// the trait because each resource embeds its id differently.
#[async_trait]
pub trait CollectionClient: Send + Sync {
    /// Entity stored in this collection.
    type Entity: Serialize + DeserializeOwned + Send + Sync;

    /// Resource path under the API root, e.g. `/clientes`.
    const RESOURCE: &'static str;

    fn gateway(&self) -> &dyn ResourceGateway;

    /// Fetches the whole collection.
    async fn list(&self) -> Result<Vec<Self::Entity>, ClientError> {
        debug!(resource = Self::RESOURCE, "Sending list request");
        let envelope = self.gateway().fetch(Self::RESOURCE).await?;
        decode_list(envelope)
    }

    /// Fetches one entity by id.
    async fn get_by_id(&self, id: &str) -> Result<Self::Entity, ClientError> {
        debug!(resource = Self::RESOURCE, id, "Sending get request");
        let path = format!("{}/{id}", Self::RESOURCE);
        let envelope = self.gateway().fetch(&path).await?;
        decode_entity(envelope)
    }

    /// Replaces one entity wholesale.
    async fn replace(&self, id: &str, entity: &Self::Entity) -> Result<(), ClientError> {
        debug!(resource = Self::RESOURCE, id, "Sending replace request");
        let path = format!("{}/{id}", Self::RESOURCE);
        let body =
            serde_json::to_value(entity).map_err(|e| ClientError::Decode(e.to_string()))?;
        let envelope = self.gateway().replace(&path, body).await?;
        acknowledge(envelope)
    }

    /// Deletes one entity by id.
    async fn remove(&self, id: &str) -> Result<(), ClientError> {
        debug!(resource = Self::RESOURCE, id, "Sending remove request");
        let path = format!("{}/{id}", Self::RESOURCE);
        let envelope = self.gateway().remove(&path).await?;
        acknowledge(envelope)
    }
}

/// Inserts a generated id into a create payload. No-op when the payload
/// is not an object or the strategy leaves assignment to the server.
pub(crate) fn embed_id(body: &mut Value, key: &str, id: Option<String>) {
    if let (Value::Object(map), Some(id)) = (body, id) {
        map.insert(key.to_string(), Value::String(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accept_rejects_failed_envelopes_with_detail() {
        let envelope = ApiResponse::failed("duplicate id");

        assert_eq!(
            accept(envelope),
            Err(ClientError::Rejected("duplicate id".to_string()))
        );
    }

    #[test]
    fn test_accept_falls_back_when_no_detail_is_given() {
        let envelope = ApiResponse::<Value> {
            success: false,
            data: None,
            error: None,
            message: None,
        };

        assert_eq!(
            accept(envelope),
            Err(ClientError::Rejected("unspecified error".to_string()))
        );
    }

    #[test]
    fn test_decode_list_treats_missing_data_as_empty() {
        let items: Vec<Value> = decode_list(ApiResponse::ok_empty()).unwrap();

        assert!(items.is_empty());
    }

    #[test]
    fn test_decode_entity_requires_data() {
        let result: Result<Value, _> = decode_entity(ApiResponse::ok_empty());

        assert_eq!(
            result,
            Err(ClientError::Decode("response carried no data".to_string()))
        );
    }

    #[test]
    fn test_embed_id_inserts_into_objects_only() {
        let mut body = json!({ "nombre": "Acme" });
        embed_id(&mut body, "clienteId", Some("CLI-7".to_string()));
        assert_eq!(body["clienteId"], json!("CLI-7"));

        let mut body = json!({ "nombre": "Acme" });
        embed_id(&mut body, "clienteId", None);
        assert_eq!(body, json!({ "nombre": "Acme" }));
    }
}
