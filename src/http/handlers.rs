//! Endpoint handlers.
//!
//! Three endpoints: the WhatsApp number lookup, order submission, and a
//! liveness probe. All are stateless request/response transforms over
//! the shared [`AppState`].

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::order::{self, types::OrderPayload};

/// Service identifier reported by the health endpoint.
const SERVICE_NAME: &str = "order-gateway";

#[derive(Serialize)]
pub struct WhatsAppNumber {
    pub status: &'static str,
    pub whatsapp: String,
}

#[derive(Serialize)]
pub struct OrderAccepted {
    pub status: &'static str,
    pub whatsapp_url: String,
    pub whatsapp_number: String,
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// GET /get_whatsapp — the configured recipient number. No computation.
pub async fn get_whatsapp(State(state): State<AppState>) -> Json<WhatsAppNumber> {
    Json(WhatsAppNumber {
        status: "success",
        whatsapp: state.whatsapp_number.to_string(),
    })
}

/// POST /submit_order — validate the payload, render the order summary,
/// and return the pre-filled wa.me link.
pub async fn submit_order(
    State(state): State<AppState>,
    payload: Result<Json<OrderPayload>, JsonRejection>,
) -> Result<Json<OrderAccepted>, ApiError> {
    let Json(payload) = payload?;

    let request = order::validate(payload)?;
    let summary = order::format_summary(&request, &state.whatsapp_number);

    tracing::info!(
        customer = %request.name,
        items = request.cart_items.len(),
        "Order submitted"
    );

    Ok(Json(OrderAccepted {
        status: "success",
        whatsapp_url: summary.deep_link_url,
        whatsapp_number: state.whatsapp_number.to_string(),
    }))
}

/// GET /health — liveness probe, independent of any other state.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}
