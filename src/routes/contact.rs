use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use careweave_contact::{Acknowledgment, Metadata, SubmitFormInput};
use serde_json::json;

use crate::routes::AppState;

/// JSON errors for the contact API
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    /// Body was not a JSON object we could decode
    Body(JsonRejection),
}

impl From<careweave_contact::Error> for ApiError {
    fn from(err: careweave_contact::Error) -> Self {
        match err {
            careweave_contact::Error::Validation(message) => ApiError::Validation(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Body(rejection) => {
                tracing::warn!(err = %rejection, "unreadable contact payload");

                (rejection.status(), Json(json!({ "error": rejection.body_text() })))
                    .into_response()
            }
        }
    }
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

/// POST /api/contact
pub async fn action(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    input: Result<Json<SubmitFormInput>, JsonRejection>,
) -> Result<Json<Acknowledgment>, ApiError> {
    let Json(input) = input.map_err(ApiError::Body)?;

    let metadata = Metadata {
        user_agent: header_value(&headers, header::USER_AGENT),
        origin: header_value(&headers, header::ORIGIN),
    };

    let ack = app_state.contact_command.submit_form(input, &metadata)?;

    Ok(Json(ack))
}
