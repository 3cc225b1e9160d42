//! Change Name Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use renick_app::names::{NameChangeError, SessionCredential, validate_display_name};

use crate::state::State;

const FIELDS_REQUIRED_MESSAGE: &str = "Session ID and new name are required";
const NAME_LENGTH_MESSAGE: &str = "Name must be between 2 and 30 characters";
const SUCCESS_MESSAGE: &str = "Name changed successfully!";
const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";
const INTERNAL_ERROR_MESSAGE: &str =
    "An error occurred while changing the name. Please try again.";
const REJECTED_FALLBACK_MESSAGE: &str =
    "Failed to change name. Please check your session ID and try again.";

/// Change Name Request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ChangeNameRequest {
    /// Session cookie value for the upstream platform
    pub session_id: Option<String>,

    /// Desired display name
    pub new_name: Option<String>,
}

/// Change Name Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ChangeNameResponse {
    /// Whether the name change went through
    pub success: bool,

    /// Human-readable outcome description
    pub message: String,

    /// Upstream response body, when one was received
    #[serde(skip_serializing_if = "Option::is_none")]
    #[salvo(schema(value_type = Option<Object>))]
    pub data: Option<Value>,
}

impl ChangeNameResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    fn rejected(message: String, payload: Value) -> Self {
        Self {
            success: false,
            message,
            data: Some(payload),
        }
    }

    fn changed(payload: Value) -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            data: Some(payload),
        }
    }
}

/// Change Name Handler
///
/// Validates the submitted credential and display name, forwards the change
/// to the upstream platform, and relays the outcome.
#[endpoint(
    tags("names"),
    summary = "Change Display Name",
    responses(
        (status_code = StatusCode::OK, description = "Name changed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid input or upstream rejection"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Json<ChangeNameResponse> {
    // Absent or malformed bodies fall through to the missing-field check.
    let body: ChangeNameRequest = req.parse_json().await.unwrap_or_default();

    let (session_id, new_name) = match (non_empty(body.session_id), non_empty(body.new_name)) {
        (Some(session_id), Some(new_name)) => (session_id, new_name),
        _ => {
            res.status_code(StatusCode::BAD_REQUEST);

            return Json(ChangeNameResponse::failure(FIELDS_REQUIRED_MESSAGE));
        }
    };

    if validate_display_name(&new_name).is_err() {
        res.status_code(StatusCode::BAD_REQUEST);

        return Json(ChangeNameResponse::failure(NAME_LENGTH_MESSAGE));
    }

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

            return Json(ChangeNameResponse::failure(INTERNAL_ERROR_MESSAGE));
        }
    };

    let session = SessionCredential::new(session_id);

    match state
        .app
        .names
        .change_display_name(&session, &new_name)
        .await
    {
        Ok(changed) => Json(ChangeNameResponse::changed(changed.payload)),
        Err(NameChangeError::Rejected { message, payload }) => {
            res.status_code(StatusCode::BAD_REQUEST);

            Json(ChangeNameResponse::rejected(
                message.unwrap_or_else(|| REJECTED_FALLBACK_MESSAGE.to_string()),
                payload,
            ))
        }
        Err(NameChangeError::Upstream(source)) => {
            error!("failed to change display name: {source}");

            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

            Json(ChangeNameResponse::failure(INTERNAL_ERROR_MESSAGE))
        }
    }
}

/// Fallback for requests that reach the route with any other method.
#[salvo::handler]
pub(crate) async fn method_not_allowed(res: &mut Response) -> Json<ChangeNameResponse> {
    res.status_code(StatusCode::METHOD_NOT_ALLOWED);

    Json(ChangeNameResponse::failure(METHOD_NOT_ALLOWED_MESSAGE))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
