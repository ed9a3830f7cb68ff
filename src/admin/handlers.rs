use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::http::server::AppState;
use crate::registry::ExecuteDefinition;
use crate::routing::{ResolvedAction, UrlChain};

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub actions: usize,
    pub cached_paths: usize,
}

#[derive(Serialize)]
pub struct ActionStatus {
    pub name: String,
    pub identity: String,
    pub enabled: bool,
    pub action_path: Option<String>,
    pub executes: Vec<ExecuteDefinition>,
}

#[derive(Serialize)]
pub struct ResolveReport {
    pub path: String,
    pub resolved: Option<ResolvedAction>,
    pub execute: Option<String>,
    pub expected: Vec<String>,
}

#[derive(Deserialize)]
pub struct PathQuery {
    pub path: String,
}

#[derive(Deserialize)]
pub struct UrlQuery {
    pub identity: String,
    #[serde(default)]
    pub redirect: bool,
    /// Comma-separated positional parts.
    pub parts: Option<String>,
    /// Comma-separated flat key,value GET parameters.
    pub params: Option<String>,
    pub hash: Option<String>,
}

#[derive(Serialize)]
pub struct ViewReport {
    pub view: String,
    pub action_path: String,
}

pub async fn get_status(State(state): State<AppState>) -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        actions: state.registry.load().len(),
        cached_paths: state.cache.len(),
    })
}

pub async fn get_actions(State(state): State<AppState>) -> Json<Vec<ActionStatus>> {
    let registry = state.registry.load_full();
    let statuses = registry
        .iter()
        .map(|action| ActionStatus {
            name: action.name.clone(),
            identity: action.identity.clone(),
            enabled: action.enabled,
            action_path: state.paths.resolve_action_path(&action.identity).ok(),
            executes: action.executes.clone(),
        })
        .collect();
    Json(statuses)
}

pub async fn get_resolve(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Json<ResolveReport> {
    let dispatch = state.dispatch(&query.path);
    let expected = if dispatch.is_none() {
        state.paths.expected_candidates(&query.path)
    } else {
        Vec::new()
    };
    Json(ResolveReport {
        execute: dispatch.as_ref().map(|d| d.execute.clone()),
        resolved: dispatch.map(|d| d.resolved),
        expected,
        path: query.path,
    })
}

fn split_list(value: Option<&str>) -> Vec<&str> {
    value
        .map(|v| v.split(',').collect())
        .unwrap_or_default()
}

pub async fn get_url(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    let mut chain = UrlChain::new()
        .params(split_list(query.params.as_deref()));
    for part in split_list(query.parts.as_deref()) {
        chain = chain.maybe_part(Some(part).filter(|p| !p.is_empty()));
    }
    if let Some(hash) = &query.hash {
        chain = chain.hash(hash);
    }

    state
        .paths
        .to_action_url(&query.identity, query.redirect, Some(&chain))
        .map(|url| Json(serde_json::json!({ "identity": query.identity, "url": url })))
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))
}

pub async fn get_view(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Json<ViewReport> {
    Json(ViewReport {
        action_path: state.paths.infer_action_path(&query.path),
        view: query.path,
    })
}
