//! Create, edit and delete order handlers.
//!
//! Successful mutations redirect back to the orders list with a `notice`
//! query parameter. Failed validation re-renders the form with 400.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use freshwash_core::{OrderId, OrderInput};

use crate::error::add_breadcrumb;
use crate::filters;
use crate::routes::not_found_page;
use crate::state::AppState;

use super::types::{
    Notice, OptionView, OrderForm, OrderFormView, laundry_type_options, short_id, status_options,
};

const EDIT_NOT_FOUND: &str =
    "The order you're trying to edit could not be found or has been deleted.";
const DELETE_NOT_FOUND: &str = "The order could not be found or has already been deleted.";

fn order_not_found(message: &'static str) -> Response {
    not_found_page("Order Not Found", message)
}

/// Create/edit order form template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/form.html")]
pub struct OrderFormTemplate {
    pub current_path: &'static str,
    pub editing: bool,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub submit_label: &'static str,
    /// Form POST target.
    pub action: String,
    /// Short id of the order being edited.
    pub order_ref: Option<String>,
    pub form: OrderFormView,
    pub laundry_options: Vec<OptionView>,
    pub status_options: Vec<OptionView>,
}

impl OrderFormTemplate {
    fn create(form: OrderFormView) -> Self {
        Self {
            current_path: "/create",
            editing: false,
            title: "Create New Order",
            subtitle: "Fill in the details to place a new laundry order.",
            submit_label: "Create Order",
            action: "/create".to_string(),
            order_ref: None,
            laundry_options: laundry_type_options(&form.laundry_type),
            status_options: status_options(&form.status),
            form,
        }
    }

    fn edit(id: OrderId, form: OrderFormView) -> Self {
        let id = id.to_string();
        Self {
            current_path: "/orders",
            editing: true,
            title: "Edit Order",
            subtitle: "Update the details for this laundry order.",
            submit_label: "Update Order",
            action: format!("/edit/{id}"),
            order_ref: Some(short_id(&id)),
            laundry_options: laundry_type_options(&form.laundry_type),
            status_options: status_options(&form.status),
            form,
        }
    }
}

/// Display the new order form.
#[instrument]
pub async fn new_page() -> impl IntoResponse {
    OrderFormTemplate::create(OrderFormView::blank())
}

/// Validate and create an order.
#[instrument(skip(state, form))]
pub async fn create(State(state): State<AppState>, Form(form): Form<OrderForm>) -> Response {
    add_breadcrumb("order", "Create order submitted", &[]);

    match OrderInput::validate(&form.to_value()) {
        Ok(input) => {
            let order = state.orders().create(input).await;
            tracing::info!(order_id = %order.id, "Order created");
            Redirect::to(&Notice::Created.redirect_url()).into_response()
        }
        Err(errors) => {
            tracing::debug!(%errors, "Order form rejected");
            let view = OrderFormView::from_submission(form, errors);
            (StatusCode::BAD_REQUEST, OrderFormTemplate::create(view)).into_response()
        }
    }
}

/// Display the edit form pre-filled with the stored order.
#[instrument(skip(state))]
pub async fn edit_page(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = OrderId::parse(&id) else {
        return order_not_found(EDIT_NOT_FOUND);
    };

    match state.orders().get_by_id(id).await {
        Some(order) => OrderFormTemplate::edit(id, OrderFormView::from(&order)).into_response(),
        None => order_not_found(EDIT_NOT_FOUND),
    }
}

/// Validate and replace an existing order.
#[instrument(skip(state, form))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<OrderForm>,
) -> Response {
    let Ok(id) = OrderId::parse(&id) else {
        return order_not_found(EDIT_NOT_FOUND);
    };
    let id_str = id.to_string();
    add_breadcrumb("order", "Update order submitted", &[("order_id", id_str.as_str())]);

    let input = match OrderInput::validate(&form.to_value()) {
        Ok(input) => input,
        Err(errors) => {
            tracing::debug!(order_id = %id, %errors, "Order form rejected");
            let view = OrderFormView::from_submission(form, errors);
            return (StatusCode::BAD_REQUEST, OrderFormTemplate::edit(id, view)).into_response();
        }
    };

    match state.orders().update(id, input).await {
        Some(_) => {
            tracing::info!(order_id = %id, "Order updated");
            Redirect::to(&Notice::Updated.redirect_url()).into_response()
        }
        None => order_not_found(EDIT_NOT_FOUND),
    }
}

/// Delete an order.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = OrderId::parse(&id) else {
        return order_not_found(DELETE_NOT_FOUND);
    };
    let id_str = id.to_string();
    add_breadcrumb("order", "Delete order submitted", &[("order_id", id_str.as_str())]);

    if state.orders().delete(id).await {
        tracing::info!(order_id = %id, "Order deleted");
        Redirect::to(&Notice::Deleted.redirect_url()).into_response()
    } else {
        order_not_found(DELETE_NOT_FOUND)
    }
}
