//! # Resource Gateway Trait
//!
//! The contract between typed accessors and whatever carries their
//! requests. Production code wires in [`crate::http::HttpGateway`]; tests
//! substitute [`crate::mock::MockGateway`] without touching the accessors.

use async_trait::async_trait;
use serde_json::Value;

use crate::envelope::ApiResponse;
use crate::error::GatewayError;

/// Generic request/response transport to the collection-oriented API.
///
/// Implementations perform exactly one request per call and surface the
/// raw envelope. Paths are resource-relative (`/productos`,
/// `/ordenes/ORD-1/detalles`) and joined to a base URL by the transport.
#[async_trait]
pub trait ResourceGateway: Send + Sync {
    /// Retrieves the resource at `path`.
    async fn fetch(&self, path: &str) -> Result<ApiResponse<Value>, GatewayError>;

    /// Creates a resource under `path` from `body`.
    async fn create(&self, path: &str, body: Value) -> Result<ApiResponse<Value>, GatewayError>;

    /// Replaces the resource at `path` with `body`.
    async fn replace(&self, path: &str, body: Value) -> Result<ApiResponse<Value>, GatewayError>;

    /// Deletes the resource at `path`.
    async fn remove(&self, path: &str) -> Result<ApiResponse<Value>, GatewayError>;
}
