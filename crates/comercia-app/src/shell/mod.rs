//! # Presentation Shell
//!
//! Headless counterparts of the view components around the composer:
//! CRUD panels for customers and products, and a read-only dashboard.
//! Each panel owns one observable state value, loads its collection,
//! buffers one form and runs create/edit/delete cycles against its
//! client.

pub mod customers;
pub mod dashboard;
pub mod products;

pub use customers::{CustomerForm, CustomersPanel};
pub use dashboard::{DashboardPanel, DashboardStats, StockStatus};
pub use products::{ProductForm, ProductsPanel};

use thiserror::Error;

/// Failure of a panel operation. Same split as the composer: local
/// validation versus remote failure with a static per-operation
/// message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PanelError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("{0}")]
    Remote(&'static str),
}

/// Observable state shared by the CRUD panels: the loaded collection,
/// one form buffer and the flags around it.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState<E, F> {
    pub entries: Vec<E>,
    pub form: F,
    pub form_open: bool,
    /// Id of the entry being edited, `None` while creating.
    pub editing_id: Option<String>,
    pub busy: bool,
    pub last_error: Option<PanelError>,
}

impl<E, F: Default> Default for PanelState<E, F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            form: F::default(),
            form_open: false,
            editing_id: None,
            busy: false,
            last_error: None,
        }
    }
}
