//! # Mock Gateway & Testing Guide
//!
//! In-memory [`ResourceGateway`] for exercising accessors and engines
//! without a server.
//!
//! ## Expectation Queue
//!
//! Tests queue expectations up front with the fluent builders, then run
//! the code under test:
//!
//! ```rust
//! use comercia_gateway::mock::MockGateway;
//! use comercia_gateway::ResourceGateway;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let gateway = MockGateway::new();
//!     gateway
//!         .expect_fetch("/clientes")
//!         .return_data(json!([{ "clienteId": "CLI-1", "nombre": "Acme" }]));
//!
//!     let envelope = gateway.fetch("/clientes").await.unwrap();
//!     assert!(envelope.success);
//!     gateway.verify();
//! }
//! ```
//!
//! Expectations are matched by operation and path, not by arrival order,
//! because callers may issue several loads concurrently. A request with no
//! matching expectation panics, failing the test at the point of the
//! unplanned call.
//!
//! ## Call Recording
//!
//! Every request is recorded before it is answered. [`MockGateway::calls`]
//! and [`MockGateway::calls_of`] let tests assert that an operation did,
//! or did not, reach the wire and in what order.
//!
//! ## Verification
//!
//! [`MockGateway::verify`] panics if any queued expectation was never
//! consumed, catching tests that silently skipped a step.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::envelope::ApiResponse;
use crate::error::GatewayError;
use crate::gateway::ResourceGateway;

/// The four gateway operations, used to key expectations and recorded
/// calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Fetch,
    Create,
    Replace,
    Remove,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Op::Fetch => "fetch",
            Op::Create => "create",
            Op::Replace => "replace",
            Op::Remove => "remove",
        };
        write!(f, "{name}")
    }
}

/// One expected request and its canned response.
struct Expectation {
    op: Op,
    path: String,
    response: Result<ApiResponse<Value>, GatewayError>,
}

/// One observed request, body included for create/replace.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub op: Op,
    pub path: String,
    pub body: Option<Value>,
}

/// A [`ResourceGateway`] fed from an expectation queue.
///
/// Uses interior mutability so a single instance can be shared behind an
/// `Arc` between the test and the code under test.
#[derive(Default)]
pub struct MockGateway {
    expectations: Mutex<VecDeque<Expectation>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockGateway {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a fetch of `path`.
    pub fn expect_fetch(&self, path: impl Into<String>) -> ExpectationBuilder<'_> {
        self.expect(Op::Fetch, path)
    }

    /// Expects a create under `path`.
    pub fn expect_create(&self, path: impl Into<String>) -> ExpectationBuilder<'_> {
        self.expect(Op::Create, path)
    }

    /// Expects a replace of `path`.
    pub fn expect_replace(&self, path: impl Into<String>) -> ExpectationBuilder<'_> {
        self.expect(Op::Replace, path)
    }

    /// Expects a removal of `path`.
    pub fn expect_remove(&self, path: impl Into<String>) -> ExpectationBuilder<'_> {
        self.expect(Op::Remove, path)
    }

    fn expect(&self, op: Op, path: impl Into<String>) -> ExpectationBuilder<'_> {
        ExpectationBuilder {
            op,
            path: path.into(),
            expectations: &self.expectations,
        }
    }

    /// All requests observed so far, in arrival order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Requests matching `op`, in arrival order.
    pub fn calls_of(&self, op: Op) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.op == op)
            .cloned()
            .collect()
    }

    /// Panics if any queued expectation was never consumed.
    pub fn verify(&self) {
        let expectations = self.expectations.lock().unwrap();
        if !expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                expectations.len()
            );
        }
    }

    fn respond(
        &self,
        op: Op,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiResponse<Value>, GatewayError> {
        self.calls.lock().unwrap().push(RecordedCall {
            op,
            path: path.to_string(),
            body,
        });

        let mut expectations = self.expectations.lock().unwrap();
        let position = expectations
            .iter()
            .position(|expectation| expectation.op == op && expectation.path == path);
        match position.and_then(|index| expectations.remove(index)) {
            Some(expectation) => expectation.response,
            None => panic!("Unexpected request: {op} {path}"),
        }
    }
}

/// Ties a queued request to its canned response.
#[must_use = "an expectation does nothing until a return_* method queues its response"]
pub struct ExpectationBuilder<'a> {
    op: Op,
    path: String,
    expectations: &'a Mutex<VecDeque<Expectation>>,
}

impl ExpectationBuilder<'_> {
    /// Queues a complete envelope.
    pub fn return_ok(self, envelope: ApiResponse<Value>) {
        self.push(Ok(envelope));
    }

    /// Queues a successful envelope wrapping `data`.
    pub fn return_data(self, data: Value) {
        self.push(Ok(ApiResponse::ok(data)));
    }

    /// Queues a successful envelope with no payload.
    pub fn return_empty(self) {
        self.push(Ok(ApiResponse::ok_empty()));
    }

    /// Queues a transport failure.
    pub fn return_err(self, error: GatewayError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<ApiResponse<Value>, GatewayError>) {
        self.expectations.lock().unwrap().push_back(Expectation {
            op: self.op,
            path: self.path,
            response,
        });
    }
}

#[async_trait]
impl ResourceGateway for MockGateway {
    async fn fetch(&self, path: &str) -> Result<ApiResponse<Value>, GatewayError> {
        self.respond(Op::Fetch, path, None)
    }

    async fn create(&self, path: &str, body: Value) -> Result<ApiResponse<Value>, GatewayError> {
        self.respond(Op::Create, path, Some(body))
    }

    async fn replace(&self, path: &str, body: Value) -> Result<ApiResponse<Value>, GatewayError> {
        self.respond(Op::Replace, path, Some(body))
    }

    async fn remove(&self, path: &str) -> Result<ApiResponse<Value>, GatewayError> {
        self.respond(Op::Remove, path, None)
    }
}
