//! Order domain types.
//!
//! `OrderPayload` is the boundary shape: everything optional, exactly as a
//! storefront client may send it. `OrderRequest` only exists after
//! validation, so downstream code never re-checks required fields.

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Raw order payload as received over HTTP. Untyped at the boundary:
/// all fields optional, defaults applied during validation/formatting.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OrderPayload {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    /// Absent cart is treated as an empty one.
    #[serde(default)]
    pub cart: Option<Vec<CartItem>>,
}

/// One line of a customer's order.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CartItem {
    /// Item title; rendered as "Unknown" when absent.
    #[serde(default)]
    pub title: Option<String>,

    /// Item price; rendered as 0 when absent. Decimal keeps price
    /// formatting exact (9.99 stays "9.99").
    #[serde(default)]
    pub price: Option<Decimal>,
}

/// A validated order. Required fields are trimmed and non-empty.
#[derive(Debug, Clone)]
pub struct OrderRequest {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub cart_items: Vec<CartItem>,
}

/// Rendered order summary. A pure function of `OrderRequest` plus the
/// recipient number; immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    /// Human-readable multi-line order text.
    pub message_text: String,

    /// `https://wa.me/<recipient>?text=<encoded message_text>`.
    pub deep_link_url: String,
}

/// Rejection of an order payload due to missing/empty required fields.
///
/// Lists every missing field, not just the first one found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing required field(s): {}", .missing.join(", "))]
pub struct OrderValidationError {
    pub missing: Vec<&'static str>,
}
