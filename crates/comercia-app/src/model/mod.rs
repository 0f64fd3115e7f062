//! # Domain Model
//!
//! Pure data structures mirroring the remote API's wire format. Field
//! names on the wire are Spanish (`clienteId`, `existencia`); the Rust
//! structs expose English names via serde renames.

pub mod customer;
pub mod order;
pub mod product;

pub use customer::{Customer, CustomerDraft};
pub use order::{LineItem, Order, OrderDraft};
pub use product::{Product, ProductDraft, LOW_STOCK_THRESHOLD};
