//! # Customers Panel
//!
//! Form-driven CRUD over the customer collection. Creation and editing
//! share one form buffer; which of the two happens on save depends on
//! whether an entry id is being edited.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{instrument, warn};

use crate::clients::{CollectionClient, CustomerClient};
use crate::confirm::ConfirmGate;
use crate::model::{Customer, CustomerDraft};
use crate::shell::{PanelError, PanelState};
use crate::state::StateCell;

/// Form buffer for creating or editing a customer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerForm {
    pub name: String,
    pub identity_number: String,
}

/// CRUD panel over the customer collection.
pub struct CustomersPanel {
    client: CustomerClient,
    confirm: Arc<dyn ConfirmGate>,
    state: StateCell<PanelState<Customer, CustomerForm>>,
}

impl CustomersPanel {
    pub fn new(client: CustomerClient, confirm: Arc<dyn ConfirmGate>) -> Self {
        Self {
            client,
            confirm,
            state: StateCell::default(),
        }
    }

    /// Snapshot of the panel state.
    pub fn state(&self) -> PanelState<Customer, CustomerForm> {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<PanelState<Customer, CustomerForm>> {
        self.state.subscribe()
    }

    /// Reloads the collection. A failure keeps the previous entries.
    #[instrument(skip(self))]
    pub async fn load(&self) {
        self.state.mutate(|s| s.busy = true);
        match self.client.list().await {
            Ok(list) => self.state.mutate(|s| {
                s.entries = list;
                s.busy = false;
            }),
            Err(e) => {
                warn!(error = %e, "Customer load failed");
                self.state.mutate(|s| {
                    s.last_error = Some(PanelError::Remote("Could not load customers"));
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
            s.form = CustomerForm::default();
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
    pub fn begin_edit(&self, customer_id: &str) {
        self.state.mutate(|s| {
            let Some(customer) = s.entries.iter().find(|c| c.id == customer_id).cloned() else {
                return;
            };
            s.form = CustomerForm {
                name: customer.name,
                identity_number: customer.identity_number,
            };
            s.editing_id = Some(customer.id);
            s.form_open = true;
        });
    }

    /// Sets both form fields.
    pub fn edit_form(&self, name: impl Into<String>, identity_number: impl Into<String>) {
        let (name, identity_number) = (name.into(), identity_number.into());
        self.state.mutate(|s| {
            s.form.name = name;
            s.form.identity_number = identity_number;
        });
    }

    /// Submits the form: creates when nothing is being edited,
    /// otherwise replaces the edited entry wholesale. On success the
    /// collection reloads and the form closes; on failure the form
    /// stays open.
    #[instrument(skip(self))]
    pub async fn save(&self) -> Result<(), PanelError> {
        let (form, editing) = self.state.read(|s| (s.form.clone(), s.editing_id.clone()));
        if form.name.is_empty() || form.identity_number.is_empty() {
            return Err(self.fail(PanelError::Validation("Complete all fields")));
        }

        let result = match &editing {
            Some(id) => {
                // The edited entry can vanish from the snapshot between
                // begin_edit and save; then there is nothing to update.
                if !self.state.read(|s| s.entries.iter().any(|c| &c.id == id)) {
                    return Ok(());
                }
                let updated = Customer {
                    id: id.clone(),
                    name: form.name,
                    identity_number: form.identity_number,
                };
                self.client.replace(id, &updated).await
            }
            None => {
                self.client
                    .create(CustomerDraft {
                        name: form.name,
                        identity_number: form.identity_number,
                    })
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
                warn!(error = %e, "Customer save failed");
                let message = if editing.is_some() {
                    "Could not update the customer"
                } else {
                    "Could not create the customer"
                };
                Err(self.fail(PanelError::Remote(message)))
            }
        }
    }

    /// Deletes after confirmation; declining is a silent no-op.
    #[instrument(skip(self))]
    pub async fn delete(&self, customer_id: &str) -> Result<(), PanelError> {
        if !self.confirm.confirm("Delete this customer?").await {
            return Ok(());
        }

        match self.client.remove(customer_id).await {
            Ok(()) => {
                self.load().await;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Customer deletion failed");
                Err(self.fail(PanelError::Remote("Could not delete the customer")))
            }
        }
    }

    fn fail(&self, error: PanelError) -> PanelError {
        self.state.mutate(|s| s.last_error = Some(error.clone()));
        error
    }
}
