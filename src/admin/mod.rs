//! Admin inspection endpoints.
//!
//! Mounted under `/_admin` when `admin.enabled`, every route behind the
//! bearer-token middleware in `auth.rs`.

pub mod auth;
pub mod handlers;

use axum::{middleware, routing::get, Router};

use self::auth::admin_auth_middleware;
use self::handlers::*;
use crate::http::server::AppState;

pub fn setup_admin_router(state: AppState) -> Router {
    Router::new()
        .route("/_admin/status", get(get_status))
        .route("/_admin/actions", get(get_actions))
        .route("/_admin/resolve", get(get_resolve))
        .route("/_admin/url", get(get_url))
        .route("/_admin/view", get(get_view))
        .layer(middleware::from_fn_with_state(state.clone(), admin_auth_middleware))
        .with_state(state)
}
