use serde::{Deserialize, Serialize};

/// An order header. Money fields are written by the server; the client
/// sends zeros on creation and never recomputes them locally, it
/// re-fetches instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "ordenId")]
    pub id: String,
    #[serde(rename = "clienteId")]
    pub customer_id: String,
    pub subtotal: f64,
    #[serde(rename = "impuesto")]
    pub tax: f64,
    pub total: f64,
}

/// Payload for creating an order. Totals start at zero and are owned by
/// the server from then on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    #[serde(rename = "clienteId")]
    pub customer_id: String,
    pub subtotal: f64,
    #[serde(rename = "impuesto")]
    pub tax: f64,
    pub total: f64,
}

/// One line of an order: a product reference plus quantity and the
/// server-computed money columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "detalleOrdenId")]
    pub id: String,
    #[serde(rename = "ordenId")]
    pub order_id: String,
    #[serde(rename = "productoId")]
    pub product_id: String,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    pub subtotal: f64,
    #[serde(rename = "impuesto")]
    pub tax: f64,
    pub total: f64,
}

impl OrderDraft {
    /// Draft for `customer_id` with zeroed totals.
    pub fn for_customer(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            subtotal: 0.0,
            tax: 0.0,
            total: 0.0,
        }
    }
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        subtotal: f64,
        tax: f64,
        total: f64,
    ) -> Self {
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            subtotal,
            tax,
            total,
        }
    }
}

impl LineItem {
    pub fn new(
        id: impl Into<String>,
        order_id: impl Into<String>,
        product_id: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            order_id: order_id.into(),
            product_id: product_id.into(),
            quantity,
            subtotal: 0.0,
            tax: 0.0,
            total: 0.0,
        }
    }
}
