use std::net::TcpListener;
use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};

use sigint::api::DynAPI;
use sigint::engine::Engine;
use sigint::seed::example_towers;
use sigint::server::serve_listener;
use sigint::store::MemoryStore;

struct App {
    client: reqwest::Client,
    base_url: String,
}

/// Serves a freshly seeded session on an ephemeral port.
fn app() -> App {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let store = MemoryStore::with_towers(example_towers().unwrap());
    let api = Arc::new(Engine::new(Arc::new(store))) as DynAPI;
    tokio::spawn(serve_listener(api, listener));

    App {
        client: reqwest::Client::new(),
        base_url: format!("http://{}", addr),
    }
}

async fn send(app: &App, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let url = format!("{}{}", app.base_url, uri);
    let req = match method {
        "POST" => app.client.post(url),
        "PUT" => app.client.put(url),
        "DELETE" => app.client.delete(url),
        _ => app.client.get(url),
    };
    let req = match body {
        Some(body) => req.json(&body),
        None => req,
    };

    let res = req.send().await.unwrap();
    let status = res.status();

    (status, res.json().await.unwrap())
}

#[tokio::test]
async fn submit_and_list() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/towers",
        Some(json!({
            "latitude": "10",
            "longitude": "20",
            "carrier": "X",
            "towerType": "LTE",
            "submittedBy": "y"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["verified"], false);
    assert!(body["data"].get("frequency").is_none());
    assert!(body["data"].get("signalStrength").is_none());

    let (_, body) = send(&app, "GET", "/towers", None).await;
    let towers = body["data"].as_array().unwrap();
    assert_eq!(towers.len(), 7);
    assert_eq!(towers[6]["carrier"], "X");
}

#[tokio::test]
async fn missing_latitude_is_a_bad_request() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/towers",
        Some(json!({ "latitude": "", "longitude": "20", "carrier": "X", "submittedBy": "y" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "latitude is required");

    let (_, body) = send(&app, "GET", "/towers", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn recent_submissions() {
    let app = app();

    let (_, body) = send(&app, "GET", "/recent", None).await;
    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["6", "5", "4"]);

    let (_, body) = send(&app, "GET", "/recent?limit=1", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn find_tower() {
    let app = app();

    let (status, body) = send(&app, "GET", "/towers/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["carrier"], "EE");
    assert_eq!(body["data"]["towerType"], "5G");

    let (status, body) = send(&app, "GET", "/towers/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn selection_round_trip() {
    let app = app();

    let (_, body) = send(&app, "GET", "/selection", None).await;
    assert_eq!(body["data"]["kind"], "recent");
    assert_eq!(body["data"]["content"].as_array().unwrap().len(), 3);

    let (status, body) = send(&app, "PUT", "/selection", Some(json!({ "id": "2" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["carrier"], "T-Mobile");

    let (_, body) = send(&app, "GET", "/selection", None).await;
    assert_eq!(body["data"]["kind"], "details");
    assert_eq!(body["data"]["content"]["title"], "T-Mobile");
    assert_eq!(body["data"]["content"]["signalStrength"], "-78 dBm");
    assert_eq!(body["data"]["content"]["status"], "✓ Verified");

    let (status, _) = send(&app, "DELETE", "/selection", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/selection", None).await;
    assert_eq!(body["data"]["kind"], "recent");
}

#[tokio::test]
async fn selecting_unknown_tower() {
    let app = app();

    let (status, _) = send(&app, "PUT", "/selection", Some(json!({ "id": "nope" }))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn map_markers() {
    let app = app();

    let (_, body) = send(&app, "GET", "/map", None).await;

    assert_eq!(body["message"], "6 towers mapped");
    assert_eq!(body["data"]["zoom"], 3);
    let markers = body["data"]["markers"].as_array().unwrap();
    assert_eq!(markers.len(), 6);
    assert_eq!(markers[0]["title"], "Verizon Tower");
    assert_eq!(markers[0]["position"]["y"], 40.7128);
}
