//! # Comercia Gateway
//!
//! Generic data-access layer for the comercia business-management client.
//! It provides the transport seam between typed collection accessors and a
//! remote, collection-oriented REST API.
//!
//! ## Architecture Overview
//!
//! The gateway separates concerns into three pieces:
//!
//! 1. **Contract** ([`ResourceGateway`]) - four operations (fetch, create,
//!    replace, remove), each addressed by a resource path. Payloads cross
//!    this seam as [`serde_json::Value`]; typing them is the accessor
//!    layer's job, which keeps the trait object-safe.
//! 2. **Transport** ([`HttpGateway`]) - the production implementation over
//!    HTTP/JSON. No retries, no timeout, no caching, and no business logic.
//! 3. **Test double** ([`mock::MockGateway`]) - an in-memory implementation
//!    fed from an expectation queue, recording every request it sees.
//!
//! Every response is wrapped in the API's common envelope
//! ([`ApiResponse`]): a `success` flag plus optional `data`, `error` and
//! `message` fields. The gateway hands the envelope upward untouched -
//! deciding what a `success == false` envelope means is the caller's
//! concern.
//!
//! ## Example
//!
//! ```rust
//! use comercia_gateway::mock::MockGateway;
//! use comercia_gateway::ResourceGateway;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let gateway = MockGateway::new();
//!     gateway.expect_fetch("/productos").return_data(json!([]));
//!
//!     let envelope = gateway.fetch("/productos").await.unwrap();
//!     assert!(envelope.success);
//!     gateway.verify();
//! }
//! ```
//!
//! ## Testing
//!
//! See the [`mock`] module for the full expectation-builder API and the
//! call-recording helpers used to assert that an operation did (or did
//! not) reach the wire.

pub mod envelope;
pub mod error;
pub mod gateway;
pub mod http;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use envelope::ApiResponse;
pub use error::GatewayError;
pub use gateway::ResourceGateway;
pub use http::{GatewayConfig, HttpGateway};
