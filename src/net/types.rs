//! Wire types shared with the sales backend.
//!
//! Field names are camelCase on the wire (the backend is a JS service), so
//! every struct carries a `rename_all` attribute rather than per-field
//! renames.

use serde::{Deserialize, Serialize};

/// A subscription plan the visitor can pick on the subscription page.
///
/// Persisted to durable storage once selected so a payment step started in a
/// prior visit can resume.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub features: Vec<String>,
}

/// A sale record as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub product: String,
    pub amount: f64,
    pub quantity: u32,
    #[serde(default)]
    pub customer_email: Option<String>,
    /// Fulfillment stage. Only ever advanced, never rolled back; the
    /// dedicated `decstatus` endpoint bumps it to 2.
    #[serde(default)]
    pub dec_status: u8,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload for creating a sale. The backend assigns the id.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDraft {
    pub product: String,
    pub amount: f64,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
}

/// Partial update for an existing sale. Absent fields are omitted from the
/// JSON body so the backend only touches what the caller set.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
}

/// Aggregate analytics object. The shape is backend-defined and open-ended,
/// so it is kept as a flattened map rather than validated field by field.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Analytics {
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Analytics {
    /// Read a numeric metric by key, if the backend sent one.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(serde_json::Value::as_f64)
    }
}
