//! # Customer Client
//!
//! Typed accessor for the `/clientes` collection.

use std::sync::Arc;

use comercia_gateway::ResourceGateway;
use tracing::{debug, instrument};

use crate::clients::{accept, embed_id, ClientError, CollectionClient};
use crate::ids::IdStrategy;
use crate::model::{Customer, CustomerDraft};

/// Id prefix used by the timestamp id strategy.
pub const CUSTOMER_ID_PREFIX: &str = "CLI";

/// Client for the customer collection.
#[derive(Clone)]
pub struct CustomerClient {
    gateway: Arc<dyn ResourceGateway>,
    ids: IdStrategy,
}

impl CustomerClient {
    pub fn new(gateway: Arc<dyn ResourceGateway>, ids: IdStrategy) -> Self {
        Self { gateway, ids }
    }

    // Custom create method as the id embedding is per-resource

    #[instrument(skip(self, draft))]
    pub async fn create(&self, draft: CustomerDraft) -> Result<(), ClientError> {
        debug!("Sending create request");
        let mut body =
            serde_json::to_value(&draft).map_err(|e| ClientError::Decode(e.to_string()))?;
        embed_id(&mut body, "clienteId", self.ids.generate(CUSTOMER_ID_PREFIX));
        let envelope = self.gateway.create(Self::RESOURCE, body).await?;
        accept(envelope).map(|_| ())
    }
}

impl CollectionClient for CustomerClient {
    type Entity = Customer;

    const RESOURCE: &'static str = "/clientes";

    fn gateway(&self) -> &dyn ResourceGateway {
        self.gateway.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comercia_gateway::mock::{MockGateway, Op};
    use serde_json::json;

    fn client(gateway: &Arc<MockGateway>, ids: IdStrategy) -> CustomerClient {
        CustomerClient::new(gateway.clone(), ids)
    }

    #[tokio::test]
    async fn test_create_embeds_a_timestamp_id() {
        let gateway = Arc::new(MockGateway::new());
        gateway.expect_create("/clientes").return_empty();

        client(&gateway, IdStrategy::TimestampPrefix)
            .create(CustomerDraft::new("Acme", "0801-1990-12345"))
            .await
            .unwrap();

        let calls = gateway.calls_of(Op::Create);
        let body = calls[0].body.as_ref().unwrap();
        assert!(body["clienteId"].as_str().unwrap().starts_with("CLI-"));
        assert_eq!(body["nombre"], json!("Acme"));
        assert_eq!(body["identidad"], json!("0801-1990-12345"));
    }

    #[tokio::test]
    async fn test_create_omits_the_id_for_server_assignment() {
        let gateway = Arc::new(MockGateway::new());
        gateway.expect_create("/clientes").return_empty();

        client(&gateway, IdStrategy::ServerAssigned)
            .create(CustomerDraft::new("Acme", "0801-1990-12345"))
            .await
            .unwrap();

        let calls = gateway.calls_of(Op::Create);
        assert_eq!(
            calls[0].body,
            Some(json!({ "nombre": "Acme", "identidad": "0801-1990-12345" }))
        );
    }

    #[tokio::test]
    async fn test_list_decodes_wire_field_names() {
        let gateway = Arc::new(MockGateway::new());
        gateway.expect_fetch("/clientes").return_data(json!([
            { "clienteId": "CLI-1", "nombre": "Acme", "identidad": "0801-1990-12345" }
        ]));

        let customers = client(&gateway, IdStrategy::default()).list().await.unwrap();

        assert_eq!(
            customers,
            vec![Customer::new("CLI-1", "Acme", "0801-1990-12345")]
        );
    }

    #[tokio::test]
    async fn test_get_by_id_reads_the_entity_path() {
        let gateway = Arc::new(MockGateway::new());
        gateway.expect_fetch("/clientes/CLI-1").return_data(json!(
            { "clienteId": "CLI-1", "nombre": "Acme", "identidad": "0801-1990-12345" }
        ));

        let customer = client(&gateway, IdStrategy::default())
            .get_by_id("CLI-1")
            .await
            .unwrap();

        assert_eq!(customer, Customer::new("CLI-1", "Acme", "0801-1990-12345"));
    }

    #[tokio::test]
    async fn test_rejected_envelope_surfaces_as_client_error() {
        let gateway = Arc::new(MockGateway::new());
        gateway
            .expect_create("/clientes")
            .return_ok(comercia_gateway::ApiResponse::failed("identity taken"));

        let result = client(&gateway, IdStrategy::default())
            .create(CustomerDraft::new("Acme", "0801-1990-12345"))
            .await;

        assert_eq!(
            result,
            Err(ClientError::Rejected("identity taken".to_string()))
        );
    }
}
