//! # Composer State
//!
//! The complete observable state of the order-composition workflow:
//! the four collection snapshots, the view flags, the form buffers and
//! the last recorded error. One value, mutated only by the composer,
//! published through a [`crate::state::StateCell`].

use crate::composer::ComposerError;
use crate::model::{Customer, LineItem, Order, Product};

/// Buffer behind the new-order form. Submission requires a chosen
/// customer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    pub customer_id: String,
}

/// Buffer behind the add-product sub-view.
#[derive(Debug, Clone, PartialEq)]
pub struct AddProductForm {
    pub product_id: String,
    /// Raw quantity input; validated to be positive on submission.
    pub quantity: i64,
}

impl Default for AddProductForm {
    fn default() -> Self {
        Self {
            product_id: String::new(),
            quantity: 1,
        }
    }
}

/// Snapshot-style state of the workflow.
///
/// The collections are independently refreshed snapshots, not
/// subscriptions. They can disagree with the server and with each other
/// between refresh cycles; consistency is re-established only by the
/// next refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComposerState {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    /// Line items of the selected order. Cleared when the selection
    /// changes; left as-is when the detail view closes, unreachable
    /// until the next selection.
    pub line_items: Vec<LineItem>,

    pub selected_order_id: Option<String>,
    pub order_form_open: bool,
    pub detail_open: bool,
    pub add_product_open: bool,
    /// Set while the full snapshot reload is in flight.
    pub busy: bool,
    pub last_error: Option<ComposerError>,

    pub order_form: OrderForm,
    pub add_product_form: AddProductForm,

    /// Selection generation. Selecting an order or closing the detail
    /// view bumps it; line-item refreshes carry the generation they
    /// started under and are discarded if it moved on.
    pub series: u64,
}

impl ComposerState {
    /// Name of a customer in the snapshot, or `"Unknown"`.
    pub fn customer_name(&self, customer_id: &str) -> &str {
        self.customers
            .iter()
            .find(|c| c.id == customer_id)
            .map(|c| c.name.as_str())
            .unwrap_or("Unknown")
    }

    /// Name of a product in the snapshot, or `"Unknown"`.
    pub fn product_name(&self, product_id: &str) -> &str {
        self.products
            .iter()
            .find(|p| p.id == product_id)
            .map(|p| p.name.as_str())
            .unwrap_or("Unknown")
    }

    /// The selected order, if it still exists in the snapshot.
    pub fn current_order(&self) -> Option<&Order> {
        let selected = self.selected_order_id.as_deref()?;
        self.orders.iter().find(|o| o.id == selected)
    }

    /// The user-facing text of the last error, if any.
    pub fn error_message(&self) -> Option<String> {
        self.last_error.as_ref().map(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups_fall_back_to_unknown() {
        let state = ComposerState {
            customers: vec![Customer::new("CLI-1", "Acme", "0801")],
            products: vec![Product::new("PROD-1", "Widget", 9.5, 10)],
            ..Default::default()
        };

        assert_eq!(state.customer_name("CLI-1"), "Acme");
        assert_eq!(state.customer_name("CLI-404"), "Unknown");
        assert_eq!(state.product_name("PROD-1"), "Widget");
        assert_eq!(state.product_name("PROD-404"), "Unknown");
    }

    #[test]
    fn test_current_order_requires_both_selection_and_presence() {
        let mut state = ComposerState {
            orders: vec![Order::new("ORD-1", "CLI-1", 10.0, 1.5, 11.5)],
            ..Default::default()
        };
        assert!(state.current_order().is_none());

        state.selected_order_id = Some("ORD-1".to_string());
        assert_eq!(state.current_order().map(|o| o.id.as_str()), Some("ORD-1"));

        state.selected_order_id = Some("ORD-2".to_string());
        assert!(state.current_order().is_none());
    }

    #[test]
    fn test_add_product_form_defaults_to_one_unit() {
        let form = AddProductForm::default();

        assert_eq!(form.product_id, "");
        assert_eq!(form.quantity, 1);
    }
}
