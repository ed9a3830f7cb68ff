//! JSON response bodies of the dispatch surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Body returned when a request path resolved to an action.
#[derive(Debug, Clone, Serialize)]
pub struct ActionResponse {
    pub request_id: String,
    /// Component name, e.g. `sea_seaLandAction`.
    pub action: String,
    pub identity: String,
    /// Method that serves the parameter path.
    pub execute: String,
    pub parameters: Vec<String>,
    /// Canonical path of the action, when it can be derived.
    pub action_path: Option<String>,
}

/// Body returned when nothing accepted the request path.
#[derive(Debug, Clone, Serialize)]
pub struct NotFoundResponse {
    pub request_id: String,
    pub path: String,
    pub expected: Vec<String>,
    pub message: String,
}

impl IntoResponse for ActionResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

impl IntoResponse for NotFoundResponse {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, Json(self)).into_response()
    }
}
