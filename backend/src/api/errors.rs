use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::engine::{FieldError, ValidationError};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body does not satisfy the input schema.
    #[error("request failed validation: {0}")]
    InputValidation(#[source] ValidationError),

    /// A stored record does not satisfy the output schema. This is a bug.
    #[error("response failed validation: {0}")]
    OutputValidation(#[source] ValidationError),

    #[error("malformed request body: {message}")]
    MalformedBody { status: StatusCode, message: String },
}

#[derive(Debug, Serialize)]
struct FieldIssue<'a> {
    field: &'a str,
    kind: &'static str,
    message: String,
}

impl<'a> From<&'a FieldError> for FieldIssue<'a> {
    fn from(err: &'a FieldError) -> Self {
        Self {
            field: err.field(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

fn issues(err: &ValidationError) -> Vec<FieldIssue<'_>> {
    err.errors.iter().map(FieldIssue::from).collect()
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InputValidation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::OutputValidation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MalformedBody { status, .. } => *status,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::InputValidation(err) => json!({
                "error": "validation_error",
                "message": err.to_string(),
                "fields": issues(err),
            }),
            ApiError::OutputValidation(err) => {
                tracing::error!(schema = err.schema, error = %err, "output validation failed");
                json!({
                    "error": "response_validation_error",
                    "message": err.to_string(),
                    "fields": issues(err),
                })
            }
            ApiError::MalformedBody { message, .. } => json!({
                "error": "malformed_body",
                "message": message,
            }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn broken_output() -> ValidationError {
        ValidationError {
            schema: "UserOut",
            errors: vec![FieldError::missing("join_date")],
        }
    }

    #[tokio::test]
    async fn output_validation_is_a_server_error() {
        let res = ApiError::OutputValidation(broken_output()).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "response_validation_error");
        assert_eq!(body["fields"][0]["field"], "join_date");
    }

    #[test]
    fn input_validation_is_a_client_error() {
        let err = ApiError::InputValidation(broken_output());
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
