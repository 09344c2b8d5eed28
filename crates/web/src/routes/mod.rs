//! HTTP route handlers for the FreshWash site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Landing page
//! GET  /health                 - Health check
//!
//! # Order screens
//! GET  /orders                 - Orders table (?q=, ?status=, ?notice=)
//! GET  /create                 - New order form
//! POST /create                 - Create order (redirects to /orders)
//! GET  /edit/{id}              - Edit order form
//! POST /edit/{id}              - Update order (redirects to /orders)
//! POST /orders/{id}/delete     - Delete order (redirects to /orders)
//!
//! # REST API
//! GET    /api/orders           - List orders
//! POST   /api/orders           - Create order (201)
//! GET    /api/orders/{id}      - Fetch order
//! PUT    /api/orders/{id}      - Replace order
//! DELETE /api/orders/{id}      - Delete order (204)
//! ```

pub mod api;
pub mod home;
pub mod orders;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::filters;
use crate::state::AppState;

/// Create the order screen routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(orders::list::index))
        .route(
            "/create",
            get(orders::form::new_page).post(orders::form::create),
        )
        .route(
            "/edit/{id}",
            get(orders::form::edit_page).post(orders::form::update),
        )
        .route("/orders/{id}/delete", post(orders::form::delete))
}

/// Build all page and API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .merge(order_routes())
        .merge(api::router())
        .fallback(fallback)
}

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub current_path: &'static str,
    pub heading: &'static str,
    pub message: &'static str,
}

/// Render the not-found page with a 404 status.
pub fn not_found_page(heading: &'static str, message: &'static str) -> Response {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            current_path: "",
            heading,
            message,
        },
    )
        .into_response()
}

async fn fallback() -> Response {
    not_found_page("Page Not Found", "The page you're looking for doesn't exist.")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::config::WebConfig;
    use crate::{app, state::AppState};

    fn test_app() -> axum::Router {
        app(AppState::seeded(WebConfig::default()))
    }

    async fn send(app: &axum::Router, request: Request<Body>) -> axum::response::Response {
        app.clone().oneshot(request).await.unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn form_request(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn jane_doe() -> Value {
        json!({
            "customerName": "Jane Doe",
            "phoneNumber": "5551234567",
            "laundryType": "Wash",
            "weight": 2.5,
            "status": "Pending"
        })
    }

    async fn first_order_id(app: &axum::Router) -> String {
        let list = body_json(send(app, get("/api/orders")).await).await;
        list[0]["id"].as_str().unwrap().to_string()
    }

    // -------------------------------------------------------------------------
    // REST API
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_api_lists_seed_orders() {
        let app = test_app();
        let response = send(&app, get("/api/orders")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let list = body_json(response).await;
        let names: Vec<&str> = list
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["customerName"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            [
                "Alice Johnson",
                "Bob Smith",
                "Carol White",
                "David Brown",
                "Eva Martinez"
            ]
        );
    }

    #[tokio::test]
    async fn test_api_end_to_end_lifecycle() {
        let app = test_app();

        let response = send(&app, json_request("POST", "/api/orders", &jane_doe())).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        let id = created["id"].as_str().unwrap().to_string();
        assert_eq!(created["customerName"], "Jane Doe");
        assert_eq!(created["weight"], json!(2.5));

        let list = body_json(send(&app, get("/api/orders")).await).await;
        assert_eq!(list.as_array().unwrap().len(), 6);

        let mut completed = jane_doe();
        completed["status"] = json!("Completed");
        let uri = format!("/api/orders/{id}");
        let response = send(&app, json_request("PUT", &uri, &completed)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "Completed");

        let fetched = body_json(send(&app, get(&uri)).await).await;
        assert_eq!(fetched["status"], "Completed");
        assert_eq!(fetched["id"], json!(id));

        let response = send(
            &app,
            Request::delete(&uri).body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let list = body_json(send(&app, get("/api/orders")).await).await;
        assert_eq!(list.as_array().unwrap().len(), 5);

        let response = send(&app, get(&uri)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "message": "Order not found" }));
    }

    #[tokio::test]
    async fn test_api_create_rejects_invalid_fields() {
        let app = test_app();
        let payload = json!({
            "customerName": "J",
            "phoneNumber": "555123456",
            "laundryType": "Wash-Only",
            "weight": 0,
            "status": "Shipped"
        });
        let response = send(&app, json_request("POST", "/api/orders", &payload)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Validation failed");
        let errors = body["errors"].as_object().unwrap();
        for field in ["customerName", "phoneNumber", "laundryType", "weight", "status"] {
            assert!(errors.contains_key(field), "missing error for {field}");
        }

        let list = body_json(send(&app, get("/api/orders")).await).await;
        assert_eq!(list.as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_api_malformed_json_is_bad_request() {
        let app = test_app();
        let request = Request::post("/api/orders")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = send(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["message"].is_string());
    }

    #[tokio::test]
    async fn test_api_unknown_ids_are_not_found() {
        let app = test_app();
        let missing = "/api/orders/00000000-0000-4000-8000-000000000000";

        assert_eq!(send(&app, get(missing)).await.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            send(&app, get("/api/orders/not-a-uuid")).await.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            send(&app, json_request("PUT", missing, &jane_doe())).await.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            send(&app, Request::delete(missing).body(Body::empty()).unwrap())
                .await
                .status(),
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_api_update_validates_before_lookup() {
        let app = test_app();
        let missing = "/api/orders/00000000-0000-4000-8000-000000000000";
        let response = send(&app, json_request("PUT", missing, &json!({}))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_api_create_ignores_client_id() {
        let app = test_app();
        let mut payload = jane_doe();
        payload["id"] = json!("00000000-0000-4000-8000-000000000000");
        let created = body_json(send(&app, json_request("POST", "/api/orders", &payload)).await).await;
        assert_ne!(created["id"], payload["id"]);
    }

    // -------------------------------------------------------------------------
    // Pages
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_health() {
        let response = send(&test_app(), get("/health")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }

    #[tokio::test]
    async fn test_home_page() {
        let response = send(&test_app(), get("/")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        assert!(response.headers().contains_key("content-security-policy"));
        let html = body_text(response).await;
        assert!(html.contains("Simple, Transparent Pricing"));
    }

    #[tokio::test]
    async fn test_orders_page_filters_by_search_and_status() {
        let app = test_app();

        let html = body_text(send(&app, get("/orders")).await).await;
        assert!(html.contains("Alice Johnson"));
        assert!(html.contains("Eva Martinez"));
        assert!(html.contains("21.2 kg"));

        let html = body_text(send(&app, get("/orders?q=bob")).await).await;
        assert!(html.contains("Bob Smith"));
        assert!(!html.contains("Alice Johnson"));

        let html = body_text(send(&app, get("/orders?status=Completed")).await).await;
        assert!(html.contains("Alice Johnson"));
        assert!(html.contains("David Brown"));
        assert!(!html.contains("Carol White"));

        let html = body_text(send(&app, get("/orders?q=nobody")).await).await;
        assert!(html.contains("No orders found"));
    }

    #[tokio::test]
    async fn test_orders_page_shows_notice() {
        let html = body_text(send(&test_app(), get("/orders?notice=deleted")).await).await;
        assert!(html.contains("The order has been successfully removed."));
    }

    #[tokio::test]
    async fn test_create_form_defaults_to_pending() {
        let response = send(&test_app(), get("/create")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Create New Order"));
        assert!(html.contains(r#"<option value="Pending" selected>"#));
    }

    #[tokio::test]
    async fn test_create_form_submission_redirects() {
        let app = test_app();
        let response = send(
            &app,
            form_request(
                "/create",
                "customerName=Jane+Doe&phoneNumber=5551234567&laundryType=Dry+Clean&weight=1.5&status=Pending",
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/orders?notice=created"
        );

        let list = body_json(send(&app, get("/api/orders")).await).await;
        assert_eq!(list.as_array().unwrap().len(), 6);
        assert_eq!(list[5]["laundryType"], "Dry Clean");
    }

    #[tokio::test]
    async fn test_create_form_errors_rerender() {
        let app = test_app();
        let response = send(
            &app,
            form_request(
                "/create",
                "customerName=J&phoneNumber=555&laundryType=Wash&weight=0&status=Pending",
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = body_text(response).await;
        assert!(html.contains("Customer name must be at least 2 characters"));
        assert!(html.contains("Phone number must be at least 10 digits"));
        assert!(html.contains("Weight must be at least 0.1 kg"));

        let list = body_json(send(&app, get("/api/orders")).await).await;
        assert_eq!(list.as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_edit_form_update_and_delete() {
        let app = test_app();
        let id = first_order_id(&app).await;

        let response = send(&app, get(&format!("/edit/{id}"))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Edit Order"));
        assert!(html.contains("Alice Johnson"));

        let response = send(
            &app,
            form_request(
                &format!("/edit/{id}"),
                "customerName=Alice+Jones&phoneNumber=5551234567&laundryType=Iron&weight=3&status=Pending",
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/orders?notice=updated"
        );

        let order = body_json(send(&app, get(&format!("/api/orders/{id}"))).await).await;
        assert_eq!(order["customerName"], "Alice Jones");
        assert_eq!(order["laundryType"], "Iron");

        let response = send(&app, form_request(&format!("/orders/{id}/delete"), "")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/orders?notice=deleted"
        );

        let response = send(&app, form_request(&format!("/orders/{id}/delete"), "")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_edit_missing_order_is_not_found() {
        let app = test_app();
        let response = send(&app, get("/edit/00000000-0000-4000-8000-000000000000")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("Order Not Found"));

        let response = send(&app, get("/edit/garbage")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let response = send(&test_app(), get("/nope")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
