// aardvark-client/tests/gateway.rs
// Gateway tests against a fake restaurant server

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use aardvark_client::{
    BookingRequest, ClientConfig, ClientError, Food, FoodType, Menu, MenuEntry, RestaurantClient,
    TimeSlot,
};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde_json::{Value, json};
use shared::client::{AvailabilityQuery, BillQuery, BookingRefQuery, OrderSubmission};
use shared::models::{BookingCreate, BookingStore};

#[derive(Clone, Default)]
struct FakeServer {
    bookings: Arc<Mutex<BookingStore>>,
    menus: Arc<Mutex<Vec<Vec<MenuEntry>>>>,
    orders: Arc<Mutex<Vec<OrderSubmission>>>,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

fn menu_json() -> Value {
    json!([
        {"fields": {"name": "Wood", "type": "Main Course", "description": "woody...", "price": 123.0}},
        {"fields": {"name": "bread", "type": "main course", "description": "I am BREAD.", "price": "111"}},
        {"fields": {"name": "cardboard", "type": "dessert", "description": "Fibericious", "price": 321}},
    ])
}

async fn booking_ref(
    State(server): State<FakeServer>,
    Query(query): Query<BookingRefQuery>,
) -> (StatusCode, String) {
    if query.field != "name" {
        return (StatusCode::BAD_REQUEST, format!("unsupported field {}", query.field));
    }
    let store = server.bookings.lock().unwrap();
    match store.find_by_name(&query.value) {
        Ok(booking) => (StatusCode::OK, booking.reference.clone()),
        Err(e) => (StatusCode::NOT_FOUND, e.to_string()),
    }
}

async fn update_booking(
    State(server): State<FakeServer>,
    Json(request): Json<BookingRequest>,
) -> (StatusCode, Json<Value>) {
    let mut store = server.bookings.lock().unwrap();
    match store.insert(BookingCreate::from(request)) {
        Ok(booking) => (StatusCode::CREATED, Json(json!({"reference": booking.reference}))),
        Err(e) => (StatusCode::BAD_REQUEST, Json(json!({"error": e.message}))),
    }
}

async fn update_menu(
    State(server): State<FakeServer>,
    Json(entries): Json<Vec<MenuEntry>>,
) -> Json<Value> {
    let count = entries.len();
    server.menus.lock().unwrap().push(entries);
    Json(json!({"received": count}))
}

async fn submit_order(
    State(server): State<FakeServer>,
    Json(submission): Json<OrderSubmission>,
) -> Json<Value> {
    let lines = submission.order.len();
    server.orders.lock().unwrap().push(submission);
    Json(json!({"accepted": lines}))
}

async fn available_tables(Query(query): Query<AvailabilityQuery>) -> Json<Value> {
    let tables: Vec<u32> = match (query.time, query.size) {
        (TimeSlot::Nine, Some(size)) if size <= 4 => vec![1, 3],
        _ => vec![],
    };
    Json(json!({"tables": tables}))
}

async fn available_sizes(Query(query): Query<AvailabilityQuery>) -> Json<Value> {
    assert!(query.size.is_none());
    Json(json!({"sizes": [2, 4, 6]}))
}

async fn total_bill(Query(query): Query<BillQuery>) -> (StatusCode, Json<Value>) {
    if query.table == 10 {
        (StatusCode::OK, Json(json!({"bill": 555.0})))
    } else {
        (StatusCode::NOT_FOUND, Json(json!({"error": "no such table"})))
    }
}

fn router(server: FakeServer) -> Router {
    Router::new()
        .route("/table", get(booking_ref))
        .route("/table/total", get(|| async { Json(json!({"tables": [0, 1, 2, 3]})) }))
        .route("/menu/get", get(|| async { Json(menu_json()) }))
        .route("/menu/update", post(update_menu))
        .route("/booking/update", post(update_booking))
        .route("/booking/tables", get(available_tables))
        .route("/booking/sizes", get(available_sizes))
        .route("/order/submit", post(submit_order))
        .route("/order/bill", get(total_bill))
        .with_state(server)
}

/// Every route answers 500
fn broken_router() -> Router {
    Router::new().fallback(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database is down") })
}

fn booking(name: &str) -> BookingRequest {
    BookingRequest {
        name: name.to_string(),
        email: "guest@example.com".to_string(),
        phone: "07700900123".to_string(),
        date: date(),
        time: TimeSlot::Nine,
        table: 2,
        size: 4,
    }
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2016, 5, 3).unwrap()
}

#[tokio::test]
async fn test_request_menu_parses_items() {
    init_tracing();
    let client = RestaurantClient::in_process(router(FakeServer::default()));

    let menu = client.request_menu().await.unwrap();
    assert_eq!(menu.len(), 3);
    let wood = menu.find_item("WOOD").unwrap();
    assert_eq!(wood.food_type(), FoodType::MainCourse);
    assert_eq!(menu.find_item("bread").unwrap().price(), 111.0);

    let names: Vec<&str> = menu.items().map(Food::name).collect();
    assert_eq!(names, vec!["wood", "bread", "cardboard"]);
}

#[tokio::test]
async fn test_request_menu_is_empty_on_server_error() {
    init_tracing();
    let client = RestaurantClient::in_process(broken_router());

    let menu = client.request_menu().await.unwrap();
    assert!(menu.is_empty());

    let err = client.try_request_menu().await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn test_request_menu_rejects_invalid_item() {
    let router = Router::new().route(
        "/menu/get",
        get(|| async {
            Json(json!([{"fields": {"name": "soup", "type": "starter", "description": "hot", "price": -1}}]))
        }),
    );
    let client = RestaurantClient::in_process(router);

    let err = client.request_menu().await.unwrap_err();
    assert!(matches!(err, ClientError::Domain(_)));
}

#[tokio::test]
async fn test_send_menu_posts_fields() {
    let server = FakeServer::default();
    let client = RestaurantClient::in_process(router(server.clone()));
    let menu = Menu::from_items([
        Food::new("wood", "main course", "woody...", 123.0).unwrap(),
        Food::new("water", "beverage", "wet", 1).unwrap(),
    ]);

    let response = client.send_menu(&menu).await.unwrap();
    assert!(response.is_success());
    assert_eq!(response.json::<Value>().unwrap(), json!({"received": 2}));

    let sent = server.menus.lock().unwrap();
    assert_eq!(sent[0][1].fields.name, "water");
    assert_eq!(sent[0][1].fields.food_type, "beverage");
    assert_eq!(Menu::from_entries(sent[0].clone()).unwrap(), menu);
}

#[tokio::test]
async fn test_booking_round_trip() {
    init_tracing();
    let server = FakeServer::default();
    let client = RestaurantClient::in_process(router(server.clone()));

    let response = client.send_booking(&booking("Abd-Allah")).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let reference = response.json::<Value>().unwrap()["reference"]
        .as_str()
        .unwrap()
        .to_string();

    assert_eq!(client.fetch_booking_ref("abd-allah").await.unwrap(), reference);

    let stored = server.bookings.lock().unwrap();
    let booking = stored.find_by_reference(&reference).unwrap();
    assert_eq!(booking.table, Some(2));
    assert_eq!(booking.time, TimeSlot::Nine);
}

#[tokio::test]
async fn test_rejected_booking_is_returned_as_is() {
    let client = RestaurantClient::in_process(router(FakeServer::default()));
    let mut request = booking("Abd-Allah");
    request.phone = "0".repeat(20);

    let response = client.send_booking(&request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.text().contains("phone"));
}

#[tokio::test]
async fn test_fetch_booking_ref_returns_body_on_failure() {
    let client = RestaurantClient::in_process(router(FakeServer::default()));
    let text = client.fetch_booking_ref("nobody").await.unwrap();
    assert_eq!(text, "booking for nobody not found");
}

#[tokio::test]
async fn test_submit_order() {
    let server = FakeServer::default();
    let client = RestaurantClient::in_process(router(server.clone()));

    let mut items = BTreeMap::new();
    items.insert("wood".to_string(), 2);
    items.insert("bread".to_string(), 1);

    let response = client.submit_order(&items, 10).await.unwrap();
    assert_eq!(response.json::<Value>().unwrap(), json!({"accepted": 2}));

    let orders = server.orders.lock().unwrap();
    let foods: Vec<&str> = orders[0].order.iter().map(|l| l.food.as_str()).collect();
    assert_eq!(foods, vec!["bread", "wood"]);
    assert!(orders[0].order.iter().all(|l| l.table == 10));
}

#[tokio::test]
async fn test_available_tables_and_sizes() {
    let client = RestaurantClient::in_process(router(FakeServer::default()));

    let tables = client
        .request_available_tables(date(), TimeSlot::Nine, 4)
        .await
        .unwrap();
    assert_eq!(tables, vec![1, 3]);

    let none = client
        .request_available_tables(date(), TimeSlot::Fifteen, 4)
        .await
        .unwrap();
    assert!(none.is_empty());

    let sizes = client
        .request_available_sizes(date(), TimeSlot::Eleven)
        .await
        .unwrap();
    assert_eq!(sizes, vec![2, 4, 6]);
}

#[tokio::test]
async fn test_availability_is_empty_on_server_error() {
    init_tracing();
    let client = RestaurantClient::in_process(broken_router());

    let tables = client
        .request_available_tables(date(), TimeSlot::Nine, 2)
        .await
        .unwrap();
    assert!(tables.is_empty());

    let sizes = client
        .request_available_sizes(date(), TimeSlot::Nine)
        .await
        .unwrap();
    assert!(sizes.is_empty());

    let err = client
        .try_request_available_sizes(date(), TimeSlot::Nine)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Status { .. }));
}

#[tokio::test]
async fn test_total_tables_and_bill() {
    let client = RestaurantClient::in_process(router(FakeServer::default()));

    assert_eq!(client.request_total_tables().await.unwrap(), vec![0, 1, 2, 3]);
    assert_eq!(client.request_total_bill(10).await.unwrap(), 555.0);

    let err = client.request_total_bill(99).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn test_total_tables_reports_server_error() {
    let client = RestaurantClient::in_process(broken_router());
    let err = client.request_total_tables().await.unwrap_err();
    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, "database is down");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_network_client_over_socket() {
    init_tracing();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(FakeServer::default())).await.unwrap();
    });

    let config = ClientConfig::from_socket(&addr.to_string()).with_timeout(5);
    let client = config.build_client().unwrap();

    let menu = client.request_menu().await.unwrap();
    assert_eq!(menu.len(), 3);
    assert_eq!(client.request_total_bill(10).await.unwrap(), 555.0);

    let response = client.send_booking(&booking("Maya")).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_transport_failure_is_not_swallowed() {
    // Bind then drop to get a port nothing listens on
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = ClientConfig::from_socket(&addr.to_string())
        .with_timeout(2)
        .build_client()
        .unwrap();

    let err = client.request_menu().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}
