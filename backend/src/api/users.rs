use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::api::server::AppState;
use crate::db::models::{NewUser, StoredUser};
use crate::engine::{self, schema};

/// Fields of a stored user that never leave the server.
pub const FILTERED_OUT_FIELDS: [&str; 4] = ["password", "hashed_password", "internal_id", "api_key"];

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    let Value::Object(body) = payload else {
        return Err(ApiError::MalformedBody {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "request body must be a JSON object".to_string(),
        });
    };

    let accepted = engine::project(&body, schema::user_create()).map_err(|err| {
        let fields: Vec<&str> = err.fields().collect();
        tracing::info!(?fields, "rejected user create");
        ApiError::InputValidation(err)
    })?;

    // Every field NewUser reads was just checked against UserCreate.
    let new_user: NewUser = serde_json::from_value(Value::Object(accepted)).map_err(|e| {
        ApiError::MalformedBody {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: e.to_string(),
        }
    })?;

    let user = state
        .users
        .insert(StoredUser::from_new(new_user, Utc::now()))
        .await;
    tracing::info!(username = %user.username, "user created");

    let out = engine::project(&user.to_record(), schema::user_out()).map_err(ApiError::OutputValidation)?;

    Ok((StatusCode::CREATED, Json(out)))
}

pub async fn debug_users(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let Some(user) = state.users.first().await else {
        return Ok(Json(json!({ "message": "No users created yet" })));
    };

    let internal = user.to_record();
    let returned = engine::project(&internal, schema::user_out()).map_err(ApiError::OutputValidation)?;

    Ok(Json(json!({
        "internal_data": internal,
        "what_response_model_returns": returned,
        "filtered_out_fields": FILTERED_OUT_FIELDS,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::dropped_fields;

    #[test]
    fn filtered_list_matches_projection() {
        let user = StoredUser::from_new(
            NewUser {
                username: "johndoe".to_string(),
                email: "john@example.com".to_string(),
                full_name: None,
                password: "pw".to_string(),
            },
            Utc::now(),
        );
        let record = user.to_record();
        assert_eq!(dropped_fields(&record, schema::user_out()), FILTERED_OUT_FIELDS);
    }
}
