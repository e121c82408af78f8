/// HTTP 라우터 통합 테스트 (인메모리 SQLite + oneshot)
mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use server::app;
use tower::util::ServiceExt;

use common::{response_to_json, test_state};

async fn test_app() -> Router {
    app(test_state().await)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, response_to_json(response).await)
}

#[tokio::test]
async fn health_should_report_database_ok() {
    let app = test_app().await;

    let (status, json) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["checks"]["database"]["status"], true);
}

#[tokio::test]
async fn setup_db_should_be_idempotent() {
    let app = test_app().await;

    let (first_status, first) = send(&app, Method::GET, "/api/setup-db", None).await;
    let (second_status, second) = send(&app, Method::GET, "/api/setup-db", None).await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first["success"], true);
    assert_eq!(second["success"], true);
    assert!(second["message"].is_string());
}

#[tokio::test]
async fn exercise_with_non_numeric_id_should_return_400() {
    let app = test_app().await;

    let (status, json) = send(&app, Method::GET, "/api/oevelser/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["isSuccess"], false);
    assert_eq!(json["code"], "COMMON400");
}

#[tokio::test]
async fn unknown_exercise_should_return_404() {
    let app = test_app().await;

    let (status, json) = send(&app, Method::GET, "/api/oevelser/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "EXERCISE4041");
}

#[tokio::test]
async fn deleting_unknown_exercise_should_return_404() {
    let app = test_app().await;

    let (status, json) = send(&app, Method::DELETE, "/api/oevelser/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["isSuccess"], false);
    assert_eq!(json["code"], "EXERCISE4041");
}

#[tokio::test]
async fn created_exercise_should_be_returned_without_envelope() {
    // Arrange
    let app = test_app().await;
    let (_, category) = send(
        &app,
        Method::POST,
        "/api/kategorier",
        Some(json!({ "name": "Kontra" })),
    )
    .await;
    let (_, focus) = send(
        &app,
        Method::POST,
        "/api/fokuspunkter",
        Some(json!({ "text": "Hurtig omstilling" })),
    )
    .await;

    // Act
    let (create_status, created) = send(
        &app,
        Method::POST,
        "/api/oevelser",
        Some(json!({
            "name": "2 mod 1",
            "usesPositions": true,
            "minimumParticipants": 3,
            "categoryId": category["result"]["categoryId"],
            "focusPointIds": [focus["result"]["focusPointId"]],
            "positions": [{ "positionCode": "PM", "isOffensive": true }],
            "variations": [{
                "name": "Med pivot",
                "positions": [{ "positionCode": "ST", "countRequired": 1, "isOffensive": true }]
            }]
        })),
    )
    .await;
    let id = created["result"]["exerciseId"].as_i64().unwrap();
    let (status, exercise) = send(&app, Method::GET, &format!("/api/oevelser/{}", id), None).await;

    // Assert
    assert_eq!(create_status, StatusCode::OK);
    assert_eq!(status, StatusCode::OK);
    assert!(exercise.get("isSuccess").is_none());
    assert_eq!(exercise["name"], "2 mod 1");
    assert_eq!(exercise["category"]["name"], "Kontra");
    assert_eq!(exercise["focusPoints"][0]["text"], "Hurtig omstilling");
    assert_eq!(exercise["positions"][0]["positionCode"], "PM");
    assert_eq!(exercise["variations"][0]["positions"][0]["positionCode"], "ST");
}

#[tokio::test]
async fn exercise_with_wrong_side_code_should_be_rejected() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/oevelser",
        Some(json!({
            "name": "Forsvar",
            "positions": [{ "positionCode": "PM", "isOffensive": false }]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_category_should_return_409() {
    let app = test_app().await;

    send(&app, Method::POST, "/api/kategorier", Some(json!({ "name": "Opvarmning" }))).await;
    let (status, json) = send(
        &app,
        Method::POST,
        "/api/kategorier",
        Some(json!({ "name": "Opvarmning" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "COMMON409");
}

#[tokio::test]
async fn team_player_flow_should_work_end_to_end() {
    // Arrange
    let app = test_app().await;
    let (_, team) = send(&app, Method::POST, "/api/hold", Some(json!({ "name": "A" }))).await;
    let team_id = team["result"]["teamId"].as_i64().unwrap();

    // Act
    let (create_status, _) = send(
        &app,
        Method::POST,
        &format!("/api/hold/{}/spillere", team_id),
        Some(json!({
            "name": "Jensen",
            "jerseyNumber": 7,
            "offensivePositions": [{ "position": "ST", "isPrimary": true }]
        })),
    )
    .await;
    let (status, detail) = send(&app, Method::GET, &format!("/api/hold/{}", team_id), None).await;

    // Assert
    assert_eq!(create_status, StatusCode::OK);
    assert_eq!(status, StatusCode::OK);
    let player = &detail["result"]["players"][0];
    assert_eq!(player["name"], "Jensen");
    assert_eq!(player["jerseyNumber"], 7);
    assert_eq!(player["offensivePositions"][0]["position"], "ST");
    assert_eq!(player["offensivePositions"][0]["isPrimary"], true);
}

#[tokio::test]
async fn blank_player_name_should_return_400() {
    let app = test_app().await;
    let (_, team) = send(&app, Method::POST, "/api/hold", Some(json!({ "name": "A" }))).await;
    let team_id = team["result"]["teamId"].as_i64().unwrap();

    let (status, json) = send(
        &app,
        Method::POST,
        &format!("/api/hold/{}/spillere", team_id),
        Some(json!({ "name": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["isSuccess"], false);
}

#[tokio::test]
async fn unknown_team_should_return_404() {
    let app = test_app().await;

    let (status, json) = send(&app, Method::GET, "/api/hold/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "TEAM4041");
    assert!(json["result"].is_null());
}

#[tokio::test]
async fn malformed_json_should_return_400() {
    let app = test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/hold")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn shared_training_flow_should_count_teams() {
    // Arrange
    let app = test_app().await;
    let (_, a) = send(&app, Method::POST, "/api/hold", Some(json!({ "name": "U15 Drenge" }))).await;
    let team_id = a["result"]["teamId"].as_i64().unwrap();

    // Act
    let (_, created) = send(
        &app,
        Method::POST,
        "/api/traeninger/faelles",
        Some(json!({ "name": "Stævne", "date": "2026-04-12", "teamIds": [team_id] })),
    )
    .await;
    let (_, listed) = send(&app, Method::GET, "/api/traeninger/faelles", None).await;
    let training_id = created["result"]["trainingId"].as_i64().unwrap();
    let (delete_status, deleted) = send(
        &app,
        Method::DELETE,
        &format!("/api/traeninger/{}", training_id),
        None,
    )
    .await;

    // Assert
    assert_eq!(listed["result"][0]["holdCount"], 1);
    assert_eq!(listed["result"][0]["teamNames"][0], "U15 Drenge");
    assert_eq!(delete_status, StatusCode::OK);
    assert_eq!(deleted["success"], true);
}
