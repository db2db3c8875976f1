//! Order payload validation.
//!
//! # Responsibilities
//! - Check required fields (name, phone, address) are present and
//!   non-empty after trimming
//! - Default an absent cart to an empty one
//!
//! # Design Decisions
//! - Returns all missing fields, not just the first
//! - Pure function: OrderPayload → Result<OrderRequest, OrderValidationError>
//! - No side effects, no logging; callers decide how to surface errors

use crate::order::types::{OrderPayload, OrderRequest, OrderValidationError};

/// Validate a raw payload into a well-formed [`OrderRequest`].
pub fn validate(payload: OrderPayload) -> Result<OrderRequest, OrderValidationError> {
    let mut missing = Vec::new();

    let name = required(&payload.name, "name", &mut missing);
    let phone = required(&payload.phone, "phone", &mut missing);
    let address = required(&payload.address, "address", &mut missing);

    if !missing.is_empty() {
        return Err(OrderValidationError { missing });
    }

    Ok(OrderRequest {
        name,
        phone,
        address,
        cart_items: payload.cart.unwrap_or_default(),
    })
}

/// Extract a required field, recording it as missing when absent or
/// empty after trimming.
fn required(
    value: &Option<String>,
    field: &'static str,
    missing: &mut Vec<&'static str>,
) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => {
            missing.push(field);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::types::CartItem;

    fn payload(name: &str, phone: &str, address: &str) -> OrderPayload {
        OrderPayload {
            name: Some(name.to_string()),
            phone: Some(phone.to_string()),
            address: Some(address.to_string()),
            cart: None,
        }
    }

    #[test]
    fn accepts_complete_payload() {
        let order = validate(payload("Ada", "123", "1 Infinite Loop")).unwrap();
        assert_eq!(order.name, "Ada");
        assert_eq!(order.phone, "123");
        assert_eq!(order.address, "1 Infinite Loop");
        assert!(order.cart_items.is_empty());
    }

    #[test]
    fn trims_required_fields() {
        let order = validate(payload("  Ada  ", " 123", "1 Infinite Loop ")).unwrap();
        assert_eq!(order.name, "Ada");
        assert_eq!(order.phone, "123");
        assert_eq!(order.address, "1 Infinite Loop");
    }

    #[test]
    fn reports_all_missing_fields() {
        let err = validate(OrderPayload::default()).unwrap_err();
        assert_eq!(err.missing, vec!["name", "phone", "address"]);
        assert_eq!(
            err.to_string(),
            "Missing required field(s): name, phone, address"
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut p = payload("Ada", "   ", "1 Infinite Loop");
        p.phone = Some("   ".to_string());
        let err = validate(p).unwrap_err();
        assert_eq!(err.missing, vec!["phone"]);
    }

    #[test]
    fn absent_cart_becomes_empty() {
        let mut p = payload("Ada", "123", "1 Infinite Loop");
        p.cart = None;
        assert!(validate(p).unwrap().cart_items.is_empty());
    }

    #[test]
    fn cart_items_pass_through() {
        let mut p = payload("Ada", "123", "1 Infinite Loop");
        p.cart = Some(vec![CartItem::default(), CartItem::default()]);
        assert_eq!(validate(p).unwrap().cart_items.len(), 2);
    }
}
