use serde::{Deserialize, Serialize};

/// Products with fewer units on hand than this count as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "productoId")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Unit price; must be positive for creation and edits.
    #[serde(rename = "precio")]
    pub price: f64,
    /// On-hand quantity.
    #[serde(rename = "existencia")]
    pub stock: u32,
}

/// Payload for creating a product. The id is supplied separately,
/// either by the server or by an id strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "existencia")]
    pub stock: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Opaque identifier, e.g. `PROD-1714406400000`
    /// * `name` - Product name
    /// * `price` - Unit price
    /// * `stock` - On-hand quantity
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            stock,
        }
    }

    /// Whether on-hand quantity has fallen under [`LOW_STOCK_THRESHOLD`].
    pub fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
        }
    }
}
