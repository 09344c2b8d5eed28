//! Orders list page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use tracing::instrument;

use crate::db::OrderSummary;
use crate::filters;
use crate::state::AppState;

use super::types::{
    Notice, OptionView, OrderRowView, OrdersQuery, StatusFilter, filter_orders,
    status_filter_options,
};

/// Orders list template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrdersIndexTemplate {
    pub current_path: &'static str,
    pub orders: Vec<OrderRowView>,
    /// Summary over all orders, not just the filtered ones.
    pub summary: OrderSummary,
    pub search: String,
    pub status_options: Vec<OptionView>,
    /// Whether any search or status filter is active.
    pub filtered: bool,
    pub notice: Option<Notice>,
}

/// Display the orders table with search and status filter.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> impl IntoResponse {
    let all_orders = state.orders().list_all().await;
    let summary = OrderSummary::from_orders(&all_orders);

    let search = query.q.unwrap_or_default();
    let status = StatusFilter::from_param(query.status.as_deref());
    let orders = filter_orders(all_orders, search.trim(), status);

    tracing::debug!(
        shown = orders.len(),
        total = summary.total,
        status = status.as_param(),
        "Listing orders"
    );

    OrdersIndexTemplate {
        current_path: "/orders",
        orders: orders.iter().map(OrderRowView::from).collect(),
        summary,
        filtered: !search.trim().is_empty() || status != StatusFilter::All,
        search,
        status_options: status_filter_options(status),
        notice: Notice::from_param(query.notice.as_deref()),
    }
}
