//! # Products Panel
//!
//! Form-driven CRUD over the product catalog. The form holds raw
//! numeric input, so a negative stock count is representable and gets
//! rejected at save time rather than by the type system.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{instrument, warn};

use crate::clients::{CollectionClient, ProductClient};
use crate::confirm::ConfirmGate;
use crate::model::{Product, ProductDraft};
use crate::shell::{PanelError, PanelState};
use crate::state::StateCell;

/// Form buffer for creating or editing a product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub price: f64,
    /// Raw stock input; validated to be non-negative on save.
    pub stock: i64,
}

/// CRUD panel over the product catalog.
pub struct ProductsPanel {
    client: ProductClient,
    confirm: Arc<dyn ConfirmGate>,
    state: StateCell<PanelState<Product, ProductForm>>,
}

impl ProductsPanel {
    pub fn new(client: ProductClient, confirm: Arc<dyn ConfirmGate>) -> Self {
        Self {
            client,
            confirm,
            state: StateCell::default(),
        }
    }

    /// Snapshot of the panel state.
    pub fn state(&self) -> PanelState<Product, ProductForm> {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<PanelState<Product, ProductForm>> {
        self.state.subscribe()
    }

    /// How many loaded products are low on stock.
    pub fn low_stock_count(&self) -> usize {
        self.state
            .read(|s| s.entries.iter().filter(|p| p.is_low_stock()).count())
    }

    /// Reloads the catalog. A failure keeps the previous entries.
    #[instrument(skip(self))]
    pub async fn load(&self) {
        self.state.mutate(|s| s.busy = true);
        match self.client.list().await {
            Ok(list) => self.state.mutate(|s| {
                s.entries = list;
                s.busy = false;
            }),
            Err(e) => {
                warn!(error = %e, "Product load failed");
                self.state.mutate(|s| {
                    s.last_error = Some(PanelError::Remote("Could not load products"));
                    s.busy = false;
                });
            }
        }
    }

    /// Opens the form empty, for creation.
    pub fn open_form(&self) {
        self.state.mutate(|s| {
            s.form_open = true;
            s.editing_id = None;
            s.form = ProductForm::default();
        });
    }

    pub fn close_form(&self) {
        self.state.mutate(|s| {
            s.form_open = false;
            s.editing_id = None;
        });
    }

    /// Opens the form pre-filled from an existing entry. Unknown ids
    /// are ignored.
    pub fn begin_edit(&self, product_id: &str) {
        self.state.mutate(|s| {
            let Some(product) = s.entries.iter().find(|p| p.id == product_id).cloned() else {
                return;
            };
            s.form = ProductForm {
                name: product.name,
                price: product.price,
                stock: i64::from(product.stock),
            };
            s.editing_id = Some(product.id);
            s.form_open = true;
        });
    }

    /// Sets all form fields.
    pub fn edit_form(&self, name: impl Into<String>, price: f64, stock: i64) {
        let name = name.into();
        self.state.mutate(|s| {
            s.form.name = name;
            s.form.price = price;
            s.form.stock = stock;
        });
    }

    /// Submits the form. Requires a name, a positive price and a
    /// non-negative stock count; creates or replaces depending on the
    /// editing flag.
    #[instrument(skip(self))]
    pub async fn save(&self) -> Result<(), PanelError> {
        let (form, editing) = self.state.read(|s| (s.form.clone(), s.editing_id.clone()));
        if form.name.is_empty() || form.price <= 0.0 || form.stock < 0 {
            return Err(self.fail(PanelError::Validation("Complete all fields correctly")));
        }
        let stock = u32::try_from(form.stock).unwrap_or(u32::MAX);

        let result = match &editing {
            Some(id) => {
                if !self.state.read(|s| s.entries.iter().any(|p| &p.id == id)) {
                    return Ok(());
                }
                let updated = Product {
                    id: id.clone(),
                    name: form.name,
                    price: form.price,
                    stock,
                };
                self.client.replace(id, &updated).await
            }
            None => {
                self.client
                    .create(ProductDraft::new(form.name, form.price, stock))
                    .await
            }
        };

        match result {
            Ok(()) => {
                self.load().await;
                self.close_form();
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Product save failed");
                let message = if editing.is_some() {
                    "Could not update the product"
                } else {
                    "Could not create the product"
                };
                Err(self.fail(PanelError::Remote(message)))
            }
        }
    }

    /// Deletes after confirmation; declining is a silent no-op.
    #[instrument(skip(self))]
    pub async fn delete(&self, product_id: &str) -> Result<(), PanelError> {
        if !self.confirm.confirm("Delete this product?").await {
            return Ok(());
        }

        match self.client.remove(product_id).await {
            Ok(()) => {
                self.load().await;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Product deletion failed");
                Err(self.fail(PanelError::Remote("Could not delete the product")))
            }
        }
    }

    fn fail(&self, error: PanelError) -> PanelError {
        self.state.mutate(|s| s.last_error = Some(error.clone()));
        error
    }
}
