//! Order REST API handlers.
//!
//! Bodies are read as raw JSON and run through `OrderInput::validate`, so
//! field errors come back as a `{"message", "errors"}` map instead of a serde
//! rejection.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use serde_json::Value;
use tracing::instrument;

use freshwash_core::{Order, OrderId, OrderInput};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::state::AppState;

/// Build the orders API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/orders", get(list).post(create))
        .route("/api/orders/{id}", get(show).put(update).delete(delete))
}

/// Parse a path id. Anything that is not a UUID cannot name an order.
fn parse_id(raw: &str) -> Result<OrderId> {
    OrderId::parse(raw).map_err(|_| order_not_found())
}

fn order_not_found() -> AppError {
    AppError::NotFound("Order".to_string())
}

/// Unwrap a JSON body, mapping malformed payloads to 400.
fn json_body(payload: std::result::Result<Json<Value>, JsonRejection>) -> Result<Value> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// List every order.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Json<Vec<Order>> {
    Json(state.orders().list_all().await)
}

/// Fetch one order.
///
/// # Errors
///
/// Returns 404 if no order has this id.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Order>> {
    let id = parse_id(&id)?;
    state
        .orders()
        .get_by_id(id)
        .await
        .map(Json)
        .ok_or_else(order_not_found)
}

/// Validate and create an order.
///
/// # Errors
///
/// Returns 400 if the body is not JSON or fails validation.
#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>)> {
    let input = OrderInput::validate(&json_body(payload)?)?;
    add_breadcrumb("api", "Create order", &[("customer", input.customer_name.as_str())]);

    let order = state.orders().create(input).await;
    tracing::info!(order_id = %order.id, "Order created via API");
    Ok((StatusCode::CREATED, Json(order)))
}

/// Validate and replace an order.
///
/// Validation runs before the lookup, so an invalid body for a missing id is
/// a 400.
///
/// # Errors
///
/// Returns 400 on a bad body and 404 if no order has this id.
#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Order>> {
    let input = OrderInput::validate(&json_body(payload)?)?;
    let id = parse_id(&id)?;
    let id_str = id.to_string();
    add_breadcrumb("api", "Update order", &[("order_id", id_str.as_str())]);

    let order = state
        .orders()
        .update(id, input)
        .await
        .ok_or_else(order_not_found)?;
    tracing::info!(order_id = %id, "Order updated via API");
    Ok(Json(order))
}

/// Delete an order.
///
/// # Errors
///
/// Returns 404 if nothing was deleted.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    if !state.orders().delete(id).await {
        return Err(order_not_found());
    }
    tracing::info!(order_id = %id, "Order deleted via API");
    Ok(StatusCode::NO_CONTENT)
}
