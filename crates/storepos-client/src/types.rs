//! Request and response types for the StorePOS API.
//!
//! These types mirror the server's API contract.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─────────────────────────────────────────────────────────────────────────────
// Auth
// ─────────────────────────────────────────────────────────────────────────────

/// Credentials sent to the login endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Username or email address.
    pub username_or_email: String,
    /// Account password.
    pub password: String,
}

/// Envelope returned by the login endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Whether the credentials were accepted.
    pub success: bool,
    /// Human-readable outcome message.
    #[serde(default)]
    pub message: Option<String>,
    /// Token payload, present when `success` is true.
    #[serde(default)]
    pub data: Option<AuthData>,
}

/// Token payload inside a successful login response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    /// Bearer token for subsequent requests.
    pub access_token: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Products
// ─────────────────────────────────────────────────────────────────────────────

/// A product record.
///
/// The server is the sole schema authority: every field is optional, unset
/// fields are omitted on serialize, and fields the client does not model are
/// carried in [`extra`](Product::extra) untouched. The same type serves
/// create requests (no `id`) and server responses (server-assigned `id`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Stock-keeping unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Scannable barcode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Category label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Sale price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Acquisition cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    /// Units on hand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_qty: Option<i64>,
    /// Whether the product is sellable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Fields not modeled by the client, passed through as-is.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}
