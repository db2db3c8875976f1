//! Order summary rendering.
//!
//! # Responsibilities
//! - Render the multi-line order message shown to the business
//! - Build the wa.me deep link with the message percent-encoded
//!
//! # Design Decisions
//! - Fully percent-encodes reserved characters, not just spaces and
//!   newlines; item titles are arbitrary user input
//! - Decimal display for prices (no binary-float rounding in output)
//! - Infallible for a validated order; an empty cart yields an empty
//!   cart block

use rust_decimal::Decimal;

use crate::order::types::{CartItem, OrderRequest, OrderSummary};

/// Title shown for cart items without one.
const UNKNOWN_TITLE: &str = "Unknown";

/// Render the order message and wa.me deep link for `recipient`.
pub fn format_summary(order: &OrderRequest, recipient: &str) -> OrderSummary {
    let cart_block = order
        .cart_items
        .iter()
        .map(item_line)
        .collect::<Vec<_>>()
        .join("\n");

    let message_text = format!(
        "Hello, my name is {}.\nMy phone is {}.\nMy address is: {}.\n\nI want to order:\n{}",
        order.name, order.phone, order.address, cart_block
    );

    let deep_link_url = format!(
        "https://wa.me/{}?text={}",
        recipient,
        urlencoding::encode(&message_text)
    );

    OrderSummary {
        message_text,
        deep_link_url,
    }
}

/// One cart line: `- <title> ($<price>)`, with defaults for absent fields.
fn item_line(item: &CartItem) -> String {
    let title = item.title.as_deref().unwrap_or(UNKNOWN_TITLE);
    let price = item.price.unwrap_or(Decimal::ZERO);
    format!("- {} (${})", title, price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn order(cart_items: Vec<CartItem>) -> OrderRequest {
        OrderRequest {
            name: "Ada".to_string(),
            phone: "123".to_string(),
            address: "1 Infinite Loop".to_string(),
            cart_items,
        }
    }

    fn item(title: &str, price: &str) -> CartItem {
        CartItem {
            title: Some(title.to_string()),
            price: Some(Decimal::from_str(price).unwrap()),
        }
    }

    #[test]
    fn renders_expected_message() {
        let summary = format_summary(&order(vec![item("Widget", "9.99")]), "2347026972403");
        assert!(summary.message_text.starts_with("Hello, my name is Ada."));
        assert!(summary.message_text.contains("My phone is 123."));
        assert!(summary.message_text.contains("My address is: 1 Infinite Loop."));
        assert!(summary.message_text.contains("I want to order:"));
        assert!(summary.message_text.contains("- Widget ($9.99)"));
    }

    #[test]
    fn deep_link_has_fixed_prefix_and_encoding() {
        let summary = format_summary(&order(vec![item("Widget", "9.99")]), "2347026972403");
        assert!(summary
            .deep_link_url
            .starts_with("https://wa.me/2347026972403?text="));
        // Spaces and newlines must be encoded at minimum.
        assert!(summary.deep_link_url.contains("%20"));
        assert!(summary.deep_link_url.contains("%0A"));
        assert!(!summary.deep_link_url.contains(' '));
        assert!(!summary.deep_link_url.contains('\n'));
    }

    #[test]
    fn encodes_reserved_characters_in_titles() {
        let summary = format_summary(&order(vec![item("Tea & Biscuits?", "3")]), "1");
        assert!(summary.deep_link_url.contains("%26"));
        assert!(summary.deep_link_url.contains("%3F"));
        assert!(summary.message_text.contains("- Tea & Biscuits? ($3)"));
    }

    #[test]
    fn applies_item_defaults() {
        let summary = format_summary(&order(vec![CartItem::default()]), "1");
        assert!(summary.message_text.contains("- Unknown ($0)"));
    }

    #[test]
    fn empty_cart_yields_empty_block() {
        let summary = format_summary(&order(vec![]), "1");
        assert!(summary.message_text.ends_with("I want to order:\n"));
    }

    #[test]
    fn pure_function_is_idempotent() {
        let o = order(vec![item("Widget", "9.99")]);
        assert_eq!(format_summary(&o, "42"), format_summary(&o, "42"));
    }

    #[test]
    fn joins_multiple_items_with_newlines() {
        let summary = format_summary(&order(vec![item("A", "1"), item("B", "2.50")]), "1");
        assert!(summary.message_text.contains("- A ($1)\n- B ($2.50)"));
    }
}
