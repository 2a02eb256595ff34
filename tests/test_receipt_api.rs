//! End-to-end tests: run the router in-process on an ephemeral port and drive it over HTTP.

use receipt_processor::{transport, InMemoryReceiptStore, ReceiptService};
use reqwest::StatusCode;
use serde_json::{json, Value as JsonValue};
use std::collections::HashSet;
use std::sync::Arc;

const INVALID: &str = "The receipt is invalid.";
const NOT_FOUND: &str = "No receipt found for that ID.";

async fn spawn_server() -> String {
    let store = Arc::new(InMemoryReceiptStore::new());
    let app_state = transport::http::AppState::new(ReceiptService::new(store));
    let router = transport::http::create_router(app_state);

    // Bind to an ephemeral port to avoid conflicts with a running server.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}

fn target_receipt() -> JsonValue {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ],
        "total": "35.35"
    })
}

fn corner_market_receipt() -> JsonValue {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"}
        ],
        "total": "9.00"
    })
}

async fn submit(client: &reqwest::Client, base_url: &str, receipt: &JsonValue) -> String {
    let resp = client
        .post(format!("{}/receipts/process", base_url))
        .json(receipt)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: JsonValue = resp.json().await.unwrap();
    body["id"].as_str().expect("id is a string").to_string()
}

async fn points(client: &reqwest::Client, base_url: &str, id: &str) -> u64 {
    let resp = client
        .get(format!("{}/receipts/{}/points", base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: JsonValue = resp.json().await.unwrap();
    body["points"].as_u64().expect("points is an integer")
}

async fn assert_text(resp: reqwest::Response, status: StatusCode, text: &str) {
    assert_eq!(resp.status(), status);
    assert_eq!(resp.text().await.unwrap(), text);
}

#[tokio::test]
async fn scores_example_receipts() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let target_id = submit(&client, &base_url, &target_receipt()).await;
    let market_id = submit(&client, &base_url, &corner_market_receipt()).await;

    assert_eq!(points(&client, &base_url, &target_id).await, 28);
    assert_eq!(points(&client, &base_url, &market_id).await, 109);
}

#[tokio::test]
async fn repeated_lookups_are_stable() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let id = submit(&client, &base_url, &target_receipt()).await;

    let first = points(&client, &base_url, &id).await;
    let second = points(&client, &base_url, &id).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn every_submission_gets_a_new_id() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let mut ids = HashSet::new();
    for _ in 0..10 {
        ids.insert(submit(&client, &base_url, &corner_market_receipt()).await);
    }
    assert_eq!(ids.len(), 10);

    let health: JsonValue = client
        .get(format!("{}/health", base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["receipts"], 10);
}

#[tokio::test]
async fn accepts_json_without_content_type() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/receipts/process", base_url))
        .body(target_receipt().to_string())
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn rejects_invalid_submissions() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();
    let url = format!("{}/receipts/process", base_url);

    let mut bad_total = corner_market_receipt();
    bad_total["total"] = json!("9");

    let mut no_items = corner_market_receipt();
    no_items["items"] = json!([]);

    let mut bad_price = corner_market_receipt();
    bad_price["items"][0]["price"] = json!("2.5");

    let mut bad_retailer = corner_market_receipt();
    bad_retailer["retailer"] = json!("M&M Corner Market!");

    let mut bad_date = corner_market_receipt();
    bad_date["purchaseDate"] = json!("2022-02-30");

    let mut bad_time = corner_market_receipt();
    bad_time["purchaseTime"] = json!("25:00");

    for receipt in [bad_total, no_items, bad_price, bad_retailer, bad_date, bad_time] {
        let resp = client.post(&url).json(&receipt).send().await.unwrap();
        assert_text(resp, StatusCode::BAD_REQUEST, INVALID).await;
    }

    let resp = client.post(&url).body("{not json").send().await.unwrap();
    assert_text(resp, StatusCode::BAD_REQUEST, INVALID).await;

    let resp = client.post(&url).body("").send().await.unwrap();
    assert_text(resp, StatusCode::BAD_REQUEST, INVALID).await;
}

#[tokio::test]
async fn wrong_method_on_process_is_bad_request() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/receipts/process", base_url))
        .send()
        .await
        .unwrap();
    assert_text(resp, StatusCode::BAD_REQUEST, INVALID).await;

    let resp = client
        .put(format!("{}/receipts/process", base_url))
        .json(&target_receipt())
        .send()
        .await
        .unwrap();
    assert_text(resp, StatusCode::BAD_REQUEST, INVALID).await;
}

#[tokio::test]
async fn unknown_or_malformed_ids_are_not_found() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let stored = submit(&client, &base_url, &target_receipt()).await;
    let padded = format!("%20{}%20", stored);

    for id in [
        "7fb1377b-b223-49d9-a31a-5a02701dd310",
        "not-a-uuid",
        "12345",
        padded.as_str(),
    ] {
        let resp = client
            .get(format!("{}/receipts/{}/points", base_url, id))
            .send()
            .await
            .unwrap();
        assert_text(resp, StatusCode::NOT_FOUND, NOT_FOUND).await;
    }

    let resp = client
        .get(format!("{}/receipts//points", base_url))
        .send()
        .await
        .unwrap();
    assert_text(resp, StatusCode::NOT_FOUND, NOT_FOUND).await;
}

#[tokio::test]
async fn wrong_method_on_points_is_not_found() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let id = submit(&client, &base_url, &target_receipt()).await;

    let resp = client
        .post(format!("{}/receipts/{}/points", base_url, id))
        .send()
        .await
        .unwrap();
    assert_text(resp, StatusCode::NOT_FOUND, NOT_FOUND).await;

    let resp = client
        .head(format!("{}/receipts/{}/points", base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
