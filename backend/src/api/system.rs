use axum::{Json, http::StatusCode};
use serde_json::{Value, json};

pub const ROOT_MESSAGE: &str = "Response Model Demo - POST /users/ to create a user, GET /debug/users/ to compare internal and returned data";

pub async fn root() -> Json<Value> {
    Json(json!({ "message": ROOT_MESSAGE }))
}

pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
