//! Client tests against an in-process HTTP server.

use std::convert::Infallible;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use http_body_util::BodyExt;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::Request;
use hyper::Response;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use storefront_lib::Error;
use storefront_lib::StorefrontClient;
use storefront_lib::api::Colors;
use storefront_lib::api::Sizes;
use storefront_lib::auth::AnonymousTokenProvider;
use storefront_lib::auth::StaticTokenProvider;
use storefront_lib::auth::TokenProvider;
use storefront_lib::error::ApiError;
use storefront_lib::error::AuthError;
use storefront_lib::form::ColorForm;
use storefront_lib::form::CouponForm;
use storefront_lib::form::Form;
use storefront_lib::form::SizeForm;
use storefront_lib::model::CollectionQuery;
use storefront_lib::model::Gender;
use storefront_lib::model::OrderStatus;
use storefront_lib::model::ProductPayload;
use storefront_lib::model::ReviewFilters;
use storefront_lib::model::ReviewStatusFilter;
use storefront_lib::model::ReviewStatusPayload;

// =============================================================================
// Test server
// =============================================================================

/// One request as the server saw it.
#[derive(Debug, Clone)]
struct Seen {
    method: String,
    /// Path and query.
    uri: String,
    authorization: Option<String>,
    body: String,
}

#[derive(Clone)]
struct Route {
    method: &'static str,
    path: &'static str,
    status: u16,
    body: &'static str,
    delay: Option<Duration>,
}

fn route(method: &'static str, path: &'static str, status: u16, body: &'static str) -> Route {
    Route {
        method,
        path,
        status,
        body,
        delay: None,
    }
}

struct TestServer {
    base_url: String,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl TestServer {
    /// Serve the given routes on a random local port. Unknown routes get 404.
    async fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let routes = Arc::new(routes);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let server_seen = Arc::clone(&seen);
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let io = TokioIo::new(stream);
                let routes = Arc::clone(&routes);
                let seen = Arc::clone(&server_seen);

                tokio::spawn(async move {
                    let service = service_fn(move |req: Request<Incoming>| {
                        let routes = Arc::clone(&routes);
                        let seen = Arc::clone(&seen);
                        async move { Ok::<_, Infallible>(respond(req, &routes, &seen).await) }
                    });
                    let _ = http1::Builder::new().serve_connection(io, service).await;
                });
            }
        });

        Self {
            base_url: format!("http://{}/api", addr),
            seen,
        }
    }

    fn client(&self) -> StorefrontClient {
        StorefrontClient::builder()
            .url(&self.base_url)
            .token_provider(StaticTokenProvider::new("admin-token"))
            .build()
            .unwrap()
    }

    fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    fn last(&self) -> Seen {
        self.seen().pop().expect("no request reached the server")
    }
}

async fn respond(
    req: Request<Incoming>,
    routes: &[Route],
    seen: &Mutex<Vec<Seen>>,
) -> Response<Full<Bytes>> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let uri = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| path.clone());
    let authorization = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = req.into_body().collect().await.unwrap().to_bytes();

    seen.lock().unwrap().push(Seen {
        method: method.clone(),
        uri,
        authorization,
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let matched = routes
        .iter()
        .find(|r| r.method == method && format!("/api{}", r.path) == path);

    match matched {
        Some(route) => {
            if let Some(delay) = route.delay {
                tokio::time::sleep(delay).await;
            }
            Response::builder()
                .status(route.status)
                .header("Content-Type", "application/json")
                .body(Full::new(Bytes::from(route.body)))
                .unwrap()
        }
        None => Response::builder()
            .status(404)
            .body(Full::new(Bytes::from("not found")))
            .unwrap(),
    }
}

// =============================================================================
// Envelope unwrapping
// =============================================================================

const COLORS: &str = r##"{
    "success": true,
    "data": [
        { "id": 1, "name": "Black", "code": "BLK", "hexCode": "#000000" },
        { "id": 2, "name": "White", "code": "WHT", "hexCode": "#FFFFFF" }
    ]
}"##;

#[tokio::test]
async fn list_unwraps_envelope_data() {
    let server = TestServer::start(vec![route("GET", "/masters/colors", 200, COLORS)]).await;

    let colors = server.client().list_masters::<Colors>().await.unwrap();

    assert_eq!(colors.len(), 2);
    assert_eq!(colors[0].name, "Black");
    assert_eq!(colors[1].hex_code, "#FFFFFF");
}

#[tokio::test]
async fn bearer_token_is_sent() {
    let server = TestServer::start(vec![route("GET", "/masters/colors", 200, COLORS)]).await;

    server.client().list_masters::<Colors>().await.unwrap();

    let seen = server.last();
    assert_eq!(seen.method, "GET");
    assert_eq!(seen.uri, "/api/masters/colors");
    assert_eq!(seen.authorization.as_deref(), Some("Bearer admin-token"));
}

#[tokio::test]
async fn anonymous_requests_carry_no_authorization() {
    let server = TestServer::start(vec![route("GET", "/masters/colors", 200, COLORS)]).await;
    let client = StorefrontClient::builder()
        .url(&server.base_url)
        .token_provider(AnonymousTokenProvider)
        .build()
        .unwrap();

    client.list_masters::<Colors>().await.unwrap();

    assert_eq!(server.last().authorization, None);
}

#[tokio::test]
async fn rejection_uses_server_message() {
    let body = r#"{ "success": false, "message": "Color code already exists." }"#;
    let server = TestServer::start(vec![route("GET", "/masters/colors", 200, body)]).await;

    let err = server.client().list_masters::<Colors>().await.unwrap_err();

    match err {
        Error::Rejected { message } => assert_eq!(message, "Color code already exists."),
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn rejection_without_message_uses_resource_fallback() {
    let server = TestServer::start(vec![
        route("GET", "/masters/colors", 200, r#"{ "success": false }"#),
        route("GET", "/masters/sizes", 200, r#"{ "success": false, "message": "  " }"#),
    ])
    .await;
    let client = server.client();

    let colors = client.list_masters::<Colors>().await.unwrap_err();
    let sizes = client.list_masters::<Sizes>().await.unwrap_err();

    assert_eq!(colors.to_string(), "Color API error.");
    assert_eq!(sizes.to_string(), "Size API error.");
}

#[tokio::test]
async fn unparseable_body_is_a_parse_error() {
    let server = TestServer::start(vec![route("GET", "/masters/colors", 200, "<html>")]).await;

    let err = server.client().list_masters::<Colors>().await.unwrap_err();

    assert!(matches!(err, Error::Api(ApiError::Parse { .. })));
}

#[tokio::test]
async fn mismatched_data_is_a_parse_error() {
    let body = r#"{ "success": true, "data": { "not": "a list" } }"#;
    let server = TestServer::start(vec![route("GET", "/masters/colors", 200, body)]).await;

    let err = server.client().list_masters::<Colors>().await.unwrap_err();

    assert!(matches!(err, Error::Api(ApiError::Parse { .. })));
}

// =============================================================================
// HTTP failures
// =============================================================================

#[tokio::test]
async fn error_status_reports_envelope_message() {
    let body = r#"{ "success": false, "message": "Database unavailable" }"#;
    let server = TestServer::start(vec![route("GET", "/coupons/admin", 500, body)]).await;

    let err = server.client().list_coupons().await.unwrap_err();

    assert_eq!(err.status_code(), Some(500));
    match err {
        Error::Api(api) => {
            assert!(api.is_retryable());
            assert!(matches!(api, ApiError::Http { ref message, .. } if message == "Database unavailable"));
        }
        other => panic!("expected HTTP error, got {:?}", other),
    }
}

#[tokio::test]
async fn error_status_without_envelope_keeps_raw_text() {
    let server = TestServer::start(vec![]).await;

    let err = server.client().list_coupons().await.unwrap_err();

    assert_eq!(err.status_code(), Some(404));
    assert!(matches!(&err, Error::Api(ApiError::Http { message, .. }) if message == "not found"));
}

#[tokio::test]
async fn unauthorized_drops_the_token() {
    let body = r#"{ "success": false, "message": "Session expired" }"#;
    let server = TestServer::start(vec![route("GET", "/admin/users", 401, body)]).await;
    let provider = Arc::new(StaticTokenProvider::new("stale-token"));
    let client = StorefrontClient::builder()
        .url(&server.base_url)
        .token_provider(Arc::clone(&provider))
        .build()
        .unwrap();

    let err = client.list_users().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(!provider.has_token().await);

    client.list_users().await.unwrap_err();
    let seen = server.seen();
    assert_eq!(seen[0].authorization.as_deref(), Some("Bearer stale-token"));
    assert_eq!(seen[1].authorization, None);
}

#[tokio::test]
async fn slow_response_times_out() {
    let mut slow = route("GET", "/masters/colors", 200, COLORS);
    slow.delay = Some(Duration::from_millis(500));
    let server = TestServer::start(vec![slow]).await;
    let client = StorefrontClient::builder()
        .url(&server.base_url)
        .token_provider(AnonymousTokenProvider)
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = client.list_masters::<Colors>().await.unwrap_err();

    assert!(matches!(err, Error::Api(ApiError::Timeout(_))));
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = StorefrontClient::builder()
        .url("not a url")
        .token_provider(AnonymousTokenProvider)
        .build();

    assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
}

// =============================================================================
// Resource operations
// =============================================================================

#[tokio::test]
async fn review_filters_become_query_parameters() {
    let body = r#"{ "success": true, "data": [] }"#;
    let server = TestServer::start(vec![route("GET", "/reviews/admin/list", 200, body)]).await;
    let client = server.client();

    client
        .list_reviews(ReviewFilters {
            status: ReviewStatusFilter::Pending,
            rating: Some(4),
        })
        .await
        .unwrap();
    client.list_reviews(ReviewFilters::default()).await.unwrap();

    let seen = server.seen();
    assert_eq!(seen[0].uri, "/api/reviews/admin/list?status=pending&rating=4");
    assert_eq!(seen[1].uri, "/api/reviews/admin/list");
}

#[tokio::test]
async fn collection_query_is_sent() {
    let body = r#"{ "success": true, "data": [
        { "id": 3, "name": "Summer", "slug": "summer", "showOnHome": true, "homeOrder": 1 }
    ] }"#;
    let server = TestServer::start(vec![route("GET", "/masters/collections", 200, body)]).await;

    let collections = server
        .client()
        .list_collections(CollectionQuery {
            show_on_home: true,
            limit: Some(4),
        })
        .await
        .unwrap();

    assert_eq!(collections[0].home_order, Some(1));
    assert_eq!(server.last().uri, "/api/masters/collections?showOnHome=true&limit=4");
}

#[tokio::test]
async fn missing_shipping_setting_is_none() {
    let server = TestServer::start(vec![route(
        "GET",
        "/orders/admin/shipping-settings",
        200,
        r#"{ "success": true, "data": null }"#,
    )])
    .await;

    let setting = server.client().shipping_setting().await.unwrap();

    assert_eq!(setting, None);
}

const USERS: &str = r#"{ "success": true, "data": [
    { "id": "u1", "fullName": "Ada Admin", "email": "ada@shop.example", "role": "super-admin", "isActive": true },
    { "id": "u2", "fullName": "Ravi Rider", "email": "ravi@shop.example", "role": "partner", "isActive": true },
    { "id": "u3", "email": "cara@shop.example", "role": "customer" }
] }"#;

#[tokio::test]
async fn partners_are_users_with_partner_role() {
    let server = TestServer::start(vec![route("GET", "/admin/users", 200, USERS)]).await;
    let client = server.client();

    let partners = client.list_partners().await.unwrap();
    assert_eq!(partners.len(), 1);
    assert_eq!(partners[0].id, "u2");

    assert!(client.get_partner("u2").await.unwrap().is_some());
    assert!(client.get_partner("u1").await.unwrap().is_none());
}

#[tokio::test]
async fn toggle_active_patches_user() {
    let body = r#"{ "success": true, "data": { "id": "u2", "email": "ravi@shop.example", "isActive": false } }"#;
    let server =
        TestServer::start(vec![route("PATCH", "/admin/users/u2/toggle-active", 200, body)]).await;

    let state = server.client().toggle_user_active("u2").await.unwrap();

    assert!(!state.is_active);
    assert_eq!(server.last().method, "PATCH");
}

#[tokio::test]
async fn remove_accepts_any_data() {
    let server = TestServer::start(vec![route(
        "DELETE",
        "/masters/colors/7",
        200,
        r#"{ "success": true, "message": "Deleted" }"#,
    )])
    .await;

    server.client().remove_master::<Colors>(7).await.unwrap();

    assert_eq!(server.last().method, "DELETE");
}

#[tokio::test]
async fn created_coupon_sends_validated_payload() {
    let body = r#"{ "success": true, "data": {
        "id": 9, "code": "SUMMER10", "type": "NORMAL", "discountType": "PERCENT",
        "discountValue": 10, "perUserLimit": 1, "isActive": true
    } }"#;
    let server = TestServer::start(vec![route("POST", "/coupons/admin", 201, body)]).await;
    let form = CouponForm {
        code: " summer10 ".to_string(),
        discount_value: "10".to_string(),
        ..Default::default()
    };

    let payload = form.validate().unwrap();
    let coupon = server.client().create_coupon(&payload).await.unwrap();

    assert_eq!(coupon.id, 9);
    let sent: serde_json::Value = serde_json::from_str(&server.last().body).unwrap();
    assert_eq!(sent["code"], "SUMMER10");
    assert_eq!(sent["type"], "NORMAL");
    assert_eq!(sent["discountType"], "PERCENT");
    assert_eq!(sent["perUserLimit"], 1);
    assert!(sent.get("comboRequiredQuantity").is_none());
}

// =============================================================================
// Edits
// =============================================================================

#[tokio::test]
async fn created_size_is_posted_to_the_collection() {
    let body = r#"{ "success": true, "data": { "id": 4, "code": "XL", "label": "Extra Large" } }"#;
    let server = TestServer::start(vec![route("POST", "/masters/sizes", 201, body)]).await;
    let form = SizeForm {
        code: " XL ".to_string(),
        label: "Extra Large".to_string(),
        sort_order: String::new(),
    };

    let size = server
        .client()
        .create_master::<Sizes>(&form.validate().unwrap())
        .await
        .unwrap();

    assert_eq!(size.id, 4);
    let seen = server.last();
    assert_eq!(seen.method, "POST");
    let sent: serde_json::Value = serde_json::from_str(&seen.body).unwrap();
    assert_eq!(sent, serde_json::json!({ "code": "XL", "label": "Extra Large" }));
}

#[tokio::test]
async fn updated_master_is_put_by_id() {
    let body = r##"{ "success": true, "data": { "id": 2, "name": "Jet Black", "code": "BLK", "hexCode": "#000" } }"##;
    let server = TestServer::start(vec![route("PUT", "/masters/colors/2", 200, body)]).await;
    let form = ColorForm {
        name: "Jet Black".to_string(),
        code: "BLK".to_string(),
        hex_code: "#000".to_string(),
    };

    let color = server
        .client()
        .update_master::<Colors>(2, &form.validate().unwrap())
        .await
        .unwrap();

    assert_eq!(color.name, "Jet Black");
    let seen = server.last();
    assert_eq!(seen.method, "PUT");
    assert_eq!(seen.uri, "/api/masters/colors/2");
    let sent: serde_json::Value = serde_json::from_str(&seen.body).unwrap();
    assert_eq!(sent["hexCode"], "#000");
    assert_eq!(sent["name"], "Jet Black");
}

#[tokio::test]
async fn updated_coupon_is_patched_by_id() {
    let body = r#"{ "success": true, "data": {
        "id": 9, "code": "SUMMER10", "type": "NORMAL", "discountType": "PERCENT",
        "discountValue": 15, "perUserLimit": 2, "isActive": false
    } }"#;
    let server = TestServer::start(vec![route("PATCH", "/coupons/admin/9", 200, body)]).await;
    let form = CouponForm {
        code: "summer10".to_string(),
        discount_value: "15".to_string(),
        per_user_limit: "2".to_string(),
        is_active: false,
        ..Default::default()
    };

    let coupon = server
        .client()
        .update_coupon(9, &form.validate().unwrap())
        .await
        .unwrap();

    assert!(!coupon.is_active);
    let seen = server.last();
    assert_eq!(seen.method, "PATCH");
    assert_eq!(seen.uri, "/api/coupons/admin/9");
    let sent: serde_json::Value = serde_json::from_str(&seen.body).unwrap();
    assert_eq!(sent["perUserLimit"], 2);
    assert_eq!(sent["isActive"], false);
}

#[tokio::test]
async fn review_status_sends_only_the_changed_flag() {
    let body = r#"{ "success": true, "data": {
        "id": 5, "rating": 4, "isApproved": true, "isFeatured": false,
        "createdAt": "2024-05-01T10:00:00Z", "updatedAt": "2024-05-02T10:00:00Z"
    } }"#;
    let server = TestServer::start(vec![route("PATCH", "/reviews/admin/5", 200, body)]).await;

    let review = server
        .client()
        .update_review_status(
            5,
            ReviewStatusPayload {
                is_approved: Some(true),
                is_featured: None,
            },
        )
        .await
        .unwrap();

    assert!(review.is_approved);
    let seen = server.last();
    assert_eq!(seen.method, "PATCH");
    let sent: serde_json::Value = serde_json::from_str(&seen.body).unwrap();
    assert_eq!(sent, serde_json::json!({ "isApproved": true }));
}

const PRODUCT: &str = r#"{ "success": true, "data": {
    "id": 12, "name": "Summer Tee", "slug": "summer tee/2", "categoryId": 3,
    "variants": [ { "id": 1, "colorId": 1, "sizeId": 2, "sku": "ST-BLK-M", "stockQuantity": 5, "basePrice": 799 } ]
} }"#;

#[tokio::test]
async fn product_slug_is_percent_encoded() {
    let server =
        TestServer::start(vec![route("GET", "/products/summer%20tee%2F2", 200, PRODUCT)]).await;

    let product = server.client().get_product("summer tee/2").await.unwrap();

    assert_eq!(product.id, 12);
    assert_eq!(product.total_stock(), 5);
    assert_eq!(server.last().uri, "/api/products/summer%20tee%2F2");
}

#[tokio::test]
async fn product_create_and_update() {
    let server = TestServer::start(vec![
        route("POST", "/products", 201, PRODUCT),
        route("PUT", "/products/12", 200, PRODUCT),
    ])
    .await;
    let client = server.client();
    let payload = ProductPayload {
        name: "Summer Tee".to_string(),
        slug: "summer-tee".to_string(),
        short_description: String::new(),
        description: String::new(),
        gender: Gender::Unisex,
        category_id: 3,
        collection_id: None,
        is_active: true,
        variants: Vec::new(),
        images: Vec::new(),
    };

    client.create_product(&payload).await.unwrap();
    client.update_product(12, &payload).await.unwrap();

    let seen = server.seen();
    assert_eq!((seen[0].method.as_str(), seen[0].uri.as_str()), ("POST", "/api/products"));
    assert_eq!((seen[1].method.as_str(), seen[1].uri.as_str()), ("PUT", "/api/products/12"));
    let sent: serde_json::Value = serde_json::from_str(&seen[1].body).unwrap();
    assert_eq!(sent["categoryId"], 3);
    assert_eq!(sent["gender"], "UNISEX");
    assert!(sent.get("variants").is_none());
}

#[tokio::test]
async fn order_is_fetched_by_id() {
    let body = r#"{ "success": true, "data": {
        "id": "8f14e45f-ceea", "status": "PACKED", "addressName": "Asha", "total": 1499,
        "items": [ { "productName": "Summer Tee", "quantity": 2, "unitPrice": 749.5, "totalPrice": 1499 } ]
    } }"#;
    let server = TestServer::start(vec![route("GET", "/orders/admin/8f14e45f-ceea", 200, body)]).await;

    let order = server.client().get_order("8f14e45f-ceea").await.unwrap();

    assert_eq!(order.status, OrderStatus::Packed);
    assert_eq!(order.items[0].quantity, 2);
}

// =============================================================================
// Token providers
// =============================================================================

struct BrokenStore;

#[async_trait]
impl TokenProvider for BrokenStore {
    async fn token(&self, _base_url: &str) -> Result<Option<String>, AuthError> {
        Err(AuthError::Store("session file is locked".to_string()))
    }
}

#[tokio::test]
async fn token_store_failure_stops_the_request() {
    let server = TestServer::start(vec![route("GET", "/masters/colors", 200, COLORS)]).await;
    let client = StorefrontClient::builder()
        .url(&server.base_url)
        .token_provider(BrokenStore)
        .build()
        .unwrap();

    let err = client.list_masters::<Colors>().await.unwrap_err();

    assert!(matches!(err, Error::Auth(AuthError::Store(_))));
    assert!(server.seen().is_empty());
}
