//! Integration tests for circledot-server API

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use circledot_core::{Board, Coord, Game, GameConfig};
use circledot_server::{create_router, ServerConfig, ServerState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> Router {
    let config = ServerConfig {
        game: GameConfig::default().with_seed(7),
        ..ServerConfig::default()
    };
    let state = Arc::new(ServerState::from_config(config.game.clone()).unwrap());
    create_router(&config, state)
}

/// 5x5 board, nothing blocked, token in the middle
fn open_board_app() -> Router {
    let game = Game::from_board(Board::empty(5, Coord::new(2, 2)).unwrap());
    let state = Arc::new(ServerState::new(game));
    create_router(&ServerConfig::default(), state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

/// POST with a raw body and no content type
async fn post_raw(app: &Router, uri: &str, body: &'static str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_status_endpoint() {
    let app = test_app();
    let (status, json) = get(&app, "/api/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["engine"], "circledot");
    assert_eq!(json["board_size"], 9);
    assert_eq!(json["game"], "in_play");
}

#[tokio::test]
async fn test_game_snapshot() {
    let app = test_app();
    let (status, json) = get(&app, "/api/game").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["size"], 9);
    assert_eq!(json["steps"], 0);
    assert_eq!(json["status"], "in_play");

    let cells = json["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 9);
    assert_eq!(cells[0].as_array().unwrap().len(), 9);

    let row = json["token"]["row"].as_i64().unwrap() as usize;
    let col = json["token"]["col"].as_i64().unwrap() as usize;
    assert_eq!(cells[row][col], "occupied");
}

#[tokio::test]
async fn test_block_moves_token() {
    let app = open_board_app();
    let (status, json) = post(&app, "/api/game/block", json!({ "row": 2, "col": 3 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"]["continue"], json!({ "row": 2, "col": 1 }));
    assert_eq!(json["game"]["steps"], 1);
    assert_eq!(json["game"]["cells"][2][3], "blocked");
    assert_eq!(json["game"]["cells"][2][1], "occupied");
}

#[tokio::test]
async fn test_block_out_of_range() {
    let app = open_board_app();
    let (status, json) = post(&app, "/api/game/block", json!({ "row": 7, "col": 0 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("outside"));

    let (_, game) = get(&app, "/api/game").await;
    assert_eq!(game["steps"], 0);
}

#[tokio::test]
async fn test_finished_game_rejects_blocks() {
    let app = open_board_app();
    post(&app, "/api/game/block", json!({ "row": 2, "col": 3 })).await;
    let (status, json) = post(&app, "/api/game/block", json!({ "row": 4, "col": 4 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"]["lost"], 2);
    assert_eq!(json["game"]["status"], "lost");

    let (status, _) = post(&app, "/api/game/block", json!({ "row": 1, "col": 1 })).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_reset_with_size_and_seed() {
    let app = test_app();
    post(&app, "/api/game/block", json!({ "row": 0, "col": 0 })).await;

    let (status, json) = post(&app, "/api/game/reset", json!({ "size": 5, "seed": 1 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["size"], 5);
    assert_eq!(json["steps"], 0);
    assert_eq!(json["status"], "in_play");

    // Same seed gives the same board
    let (_, again) = post(&app, "/api/game/reset", json!({ "size": 5, "seed": 1 })).await;
    assert_eq!(json["cells"], again["cells"]);
}

#[tokio::test]
async fn test_reset_rejects_bad_size() {
    let app = test_app();
    let (status, json) = post(&app, "/api/game/reset", json!({ "size": 2 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());

    let (_, game) = get(&app, "/api/game").await;
    assert_eq!(game["size"], 9);
}

#[tokio::test]
async fn test_reset_without_body() {
    let app = open_board_app();
    post(&app, "/api/game/block", json!({ "row": 2, "col": 3 })).await;

    let (status, json) = post_raw(&app, "/api/game/reset", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["size"], 5);
    assert_eq!(json["steps"], 0);
    assert_eq!(json["status"], "in_play");
}

#[tokio::test]
async fn test_reset_rejects_malformed_body() {
    let app = test_app();
    let (status, json) = post_raw(&app, "/api/game/reset", "{ size: five }").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("invalid reset body"));
}

#[tokio::test]
async fn test_cors_only_when_enabled() {
    let request = || {
        Request::builder()
            .uri("/api/status")
            .header("origin", "http://localhost:5173")
            .body(Body::empty())
            .unwrap()
    };

    let response = test_app().oneshot(request()).await.unwrap();
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());

    let config = ServerConfig {
        cors: true,
        ..ServerConfig::default()
    };
    let state = Arc::new(ServerState::from_config(GameConfig::default().with_seed(7)).unwrap());
    let response = create_router(&config, state).oneshot(request()).await.unwrap();
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_unknown_path_without_front_end() {
    let response = test_app()
        .oneshot(Request::builder().uri("/index.html").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
