use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use shared::protocol::GenerateTripRequest;
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

use crate::{maps_search_url, ClientError, PlannerClient};

#[derive(Clone)]
struct ServerState {
    tx: Arc<Mutex<Option<oneshot::Sender<GenerateTripRequest>>>>,
    status: StatusCode,
    body: serde_json::Value,
}

async fn handle_generate_trip(
    State(state): State<ServerState>,
    Json(request): Json<GenerateTripRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    if let Some(tx) = state.tx.lock().await.take() {
        let _ = tx.send(request);
    }
    (state.status, Json(state.body.clone()))
}

async fn spawn_planner_server(
    status: StatusCode,
    body: serde_json::Value,
) -> anyhow::Result<(String, oneshot::Receiver<GenerateTripRequest>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (tx, rx) = oneshot::channel();
    let state = ServerState {
        tx: Arc::new(Mutex::new(Some(tx))),
        status,
        body,
    };
    let app = Router::new()
        .route("/generate_trip", post(handle_generate_trip))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((format!("http://{addr}"), rx))
}

fn sample_request() -> GenerateTripRequest {
    GenerateTripRequest {
        destination: "Paris".to_string(),
        from_date: "2025-06-01".to_string(),
        to_date: "2025-06-04".to_string(),
        days: "4".to_string(),
        budget: "2000".to_string(),
        interests: vec!["Culture".to_string(), "Food".to_string()],
    }
}

#[tokio::test]
async fn generate_trip_posts_the_form_fields() {
    let (server_url, payload_rx) =
        spawn_planner_server(StatusCode::OK, serde_json::json!({"summary": "Day 1 - Louvre"}))
            .await
            .expect("spawn server");
    let client = PlannerClient::new(&server_url).expect("client");

    let summary = client
        .generate_trip(&sample_request())
        .await
        .expect("generate");
    assert_eq!(summary.as_deref(), Some("Day 1 - Louvre"));

    let payload = payload_rx.await.expect("payload");
    assert_eq!(payload.destination, "Paris");
    assert_eq!(payload.from_date, "2025-06-01");
    assert_eq!(payload.to_date, "2025-06-04");
    assert_eq!(payload.days, "4");
    assert_eq!(payload.budget, "2000");
    assert_eq!(payload.interests, vec!["Culture", "Food"]);
}

#[tokio::test]
async fn generate_trip_reads_missing_summary_as_none() {
    let (server_url, _payload_rx) = spawn_planner_server(StatusCode::OK, serde_json::json!({}))
        .await
        .expect("spawn server");
    let client = PlannerClient::new(&server_url).expect("client");

    let summary = client
        .generate_trip(&sample_request())
        .await
        .expect("generate");
    assert!(summary.is_none());
}

#[tokio::test]
async fn generate_trip_treats_empty_summary_as_none() {
    let (server_url, _payload_rx) =
        spawn_planner_server(StatusCode::OK, serde_json::json!({"summary": ""}))
            .await
            .expect("spawn server");
    let client = PlannerClient::new(&server_url).expect("client");

    let summary = client
        .generate_trip(&sample_request())
        .await
        .expect("generate");
    assert!(summary.is_none());
}

#[tokio::test]
async fn generate_trip_surfaces_backend_failure_status() {
    let (server_url, _payload_rx) = spawn_planner_server(
        StatusCode::INTERNAL_SERVER_ERROR,
        serde_json::json!({"error": "model unavailable"}),
    )
    .await
    .expect("spawn server");
    let client = PlannerClient::new(&server_url).expect("client");

    let err = client
        .generate_trip(&sample_request())
        .await
        .expect_err("should fail");
    match err {
        ClientError::UnexpectedStatus { status, .. } => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        }
        other => panic!("unexpected error variant: {other}"),
    }
}

#[tokio::test]
async fn generate_trip_fails_when_server_unreachable() {
    // Bind then drop the listener so the port is known-closed.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = PlannerClient::new(&format!("http://{addr}")).expect("client");
    let err = client
        .generate_trip(&sample_request())
        .await
        .expect_err("should fail");
    assert!(matches!(err, ClientError::Transport { .. }));
}

#[test]
fn rejects_unparseable_server_url() {
    let err = PlannerClient::new("not a url").expect_err("should fail");
    assert!(matches!(err, ClientError::InvalidServerUrl { .. }));
}

#[test]
fn export_page_url_targets_the_fixed_path() {
    let client = PlannerClient::new("http://127.0.0.1:5000/").expect("client");
    assert_eq!(client.base_url(), "http://127.0.0.1:5000");
    assert_eq!(client.export_page_url(), "http://127.0.0.1:5000/export_page");
}

#[test]
fn maps_search_url_embeds_the_encoded_destination() {
    let url = maps_search_url("Paris");
    assert_eq!(
        url,
        "https://www.google.com/maps/search/?api=1&query=attractions+in+Paris"
    );

    let multi_word = maps_search_url("New York");
    assert!(multi_word.contains("query=attractions+in+New+York"));
}
