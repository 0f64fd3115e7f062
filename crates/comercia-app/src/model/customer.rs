use serde::{Deserialize, Serialize};

/// A registered customer.
///
/// Owns no relationships; orders reference customers by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "clienteId")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    /// National identity number.
    #[serde(rename = "identidad")]
    pub identity_number: String,
}

/// Payload for creating a customer. The id is supplied separately,
/// either by the server or by an id strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDraft {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "identidad")]
    pub identity_number: String,
}

impl Customer {
    /// Creates a new Customer instance.
    ///
    /// # Arguments
    /// * `id` - Opaque identifier, e.g. `CLI-1714406400000`
    /// * `name` - Customer's display name
    /// * `identity_number` - National identity number
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        identity_number: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            identity_number: identity_number.into(),
        }
    }
}

impl CustomerDraft {
    pub fn new(name: impl Into<String>, identity_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identity_number: identity_number.into(),
        }
    }
}
