//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the dispatch handler
//! - Wire up middleware (request ID, tracing, timeout)
//! - Resolve every request path against the current action registry
//! - Swap in reloaded registries without restarting
//! - Observability (metrics, correlation IDs)

use std::convert::Infallible;
use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwap;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::admin::setup_admin_router;
use crate::config::schema::AdminConfig;
use crate::config::RouterConfig;
use crate::http::cache::ResolutionCache;
use crate::http::request::{propagate_request_id_layer, request_id_of, set_request_id_layer};
use crate::http::response::{ActionResponse, NotFoundResponse};
use crate::observability::metrics;
use crate::registry::action::split_parameters;
use crate::registry::ActionRegistry;
use crate::routing::{ActionPathResolver, ResolvedAction};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub paths: Arc<ActionPathResolver>,
    pub registry: Arc<ArcSwap<ActionRegistry>>,
    pub cache: Arc<ResolutionCache>,
    pub admin: AdminConfig,
}

/// A resolved request, enriched with what the registry knows about it.
#[derive(Debug, Clone)]
pub struct Dispatch {
    pub resolved: ResolvedAction,
    pub identity: String,
    pub execute: String,
    pub parameters: Vec<String>,
}

impl AppState {
    pub fn new(config: &RouterConfig, paths: ActionPathResolver, registry: ActionRegistry) -> Self {
        metrics::record_registry_size(registry.len());
        Self {
            paths: Arc::new(paths),
            registry: Arc::new(ArcSwap::from_pointee(registry)),
            cache: Arc::new(ResolutionCache::new(config.cache.enabled, config.cache.max_entries)),
            admin: config.admin.clone(),
        }
    }

    /// Replace the registry and forget outcomes computed against the old one.
    pub fn swap_registry(&self, registry: ActionRegistry) {
        let actions = registry.len();
        self.registry.store(Arc::new(registry));
        self.cache.clear();
        metrics::record_registry_size(actions);
        tracing::info!(actions, "Action registry swapped");
    }

    /// Resolve `path` the way live requests are dispatched.
    ///
    /// Disabled actions and actions with no method for the parameter path are
    /// declined, letting the search continue with deeper candidates.
    pub fn dispatch(&self, path: &str) -> Option<Dispatch> {
        // generation first: an outcome must never be tagged newer than its registry
        let generation = self.cache.generation();
        let registry = self.registry.load_full();

        if let Some(cached) = self.cache.get(path) {
            let dispatch = cached.and_then(|resolved| Self::describe(&registry, resolved));
            metrics::record_resolution(dispatch.is_some());
            return dispatch;
        }

        let mut accepted: Option<ResolvedAction> = None;
        let result: Result<bool, Infallible> = self.paths.resolve(path, registry.as_ref(), |found| {
            let Some(action) = registry.get(found.action_name) else {
                return Ok(false);
            };
            if !action.enabled {
                tracing::debug!(action = %found.action_name, "Declining disabled action");
                return Ok(false);
            }
            if action.find_execute(found.parameter_path).is_none() {
                return Ok(false);
            }
            accepted = Some(ResolvedAction::from(found));
            Ok(true)
        });
        let handled = match result {
            Ok(handled) => handled,
            Err(never) => match never {},
        };
        metrics::record_resolution(handled);

        self.cache.insert(path, generation, accepted.clone());
        accepted.and_then(|resolved| Self::describe(&registry, resolved))
    }

    fn describe(registry: &ActionRegistry, resolved: ResolvedAction) -> Option<Dispatch> {
        let action = registry.get(&resolved.action_name)?;
        let execute = action.find_execute(&resolved.parameter_path)?;
        let segments = split_parameters(&resolved.parameter_path);
        let parameters = execute.parameters(&segments).into_iter().map(str::to_string).collect();
        Some(Dispatch {
            identity: action.identity.clone(),
            execute: execute.method.clone(),
            parameters,
            resolved,
        })
    }
}

/// HTTP server exposing convention-based dispatch.
pub struct HttpServer {
    router: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RouterConfig, paths: ActionPathResolver, registry: ActionRegistry) -> Self {
        let state = AppState::new(&config, paths, registry);
        let router = Self::build_router(&config, state.clone());
        Self { router, state }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &RouterConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/{*path}", any(dispatch_handler))
            .route("/", any(dispatch_handler))
            .with_state(state.clone());

        if config.admin.enabled {
            router = router.merge(setup_admin_router(state));
        }

        router.layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
                .layer(propagate_request_id_layer()),
        )
    }

    /// The fully layered router, e.g. for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Registries received on `registry_updates` replace the current one;
    /// the server drains and stops when `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut registry_updates: mpsc::UnboundedReceiver<ActionRegistry>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let state = self.state.clone();
        tokio::spawn(async move {
            while let Some(registry) = registry_updates.recv().await {
                state.swap_registry(registry);
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Catch-all handler: resolve the path, report the action or diagnostics.
async fn dispatch_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request_id_of(&request);
    let path = request.uri().path().to_string();
    let method = request.method().to_string();

    match state.dispatch(&path) {
        Some(dispatch) => {
            tracing::debug!(
                request_id = %request_id,
                path = %path,
                action = %dispatch.resolved.action_name,
                execute = %dispatch.execute,
                parameter_path = %dispatch.resolved.parameter_path,
                "Action resolved"
            );
            metrics::record_request(&method, 200, start_time);
            let action_path = state.paths.resolve_action_path(&dispatch.identity).ok();
            ActionResponse {
                request_id,
                action: dispatch.resolved.action_name,
                identity: dispatch.identity,
                execute: dispatch.execute,
                parameters: dispatch.parameters,
                action_path,
            }
            .into_response()
        }
        None => {
            let message = state.paths.expected_routing_message(&path);
            tracing::warn!(request_id = %request_id, path = %path, "No routing action{}", message);
            metrics::record_request(&method, 404, start_time);
            NotFoundResponse {
                request_id,
                expected: state.paths.expected_candidates(&path),
                path,
                message,
            }
            .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{ActionConfig, ExecuteConfig};
    use crate::naming::DefaultNamingConvention;

    fn action(identity: &str, enabled: bool, executes: Vec<ExecuteConfig>) -> ActionConfig {
        ActionConfig {
            identity: identity.into(),
            enabled,
            executes,
        }
    }

    fn state(actions: &[ActionConfig]) -> AppState {
        let config = RouterConfig::default();
        let registry =
            ActionRegistry::from_actions(actions, &DefaultNamingConvention::default()).unwrap();
        AppState::new(&config, ActionPathResolver::from_config(&config), registry)
    }

    #[test]
    fn test_dispatch_declines_disabled_action() {
        let state = state(&[
            action("app.web.SeaAction", false, vec![]),
            action("app.web.sea.SeaAction", true, vec![]),
        ]);
        let dispatch = state.dispatch("/sea/").unwrap();
        assert_eq!(dispatch.resolved.action_name, "sea_seaAction");
        assert_eq!(dispatch.identity, "app.web.sea.SeaAction");
    }

    #[test]
    fn test_dispatch_named_method_parameters() {
        let state = state(&[action(
            "app.web.SeaAction",
            true,
            vec![ExecuteConfig { method: "land".into(), params: 1, optional_params: 0 }],
        )]);
        let dispatch = state.dispatch("/sea/land/7").unwrap();
        assert_eq!(dispatch.execute, "land");
        assert_eq!(dispatch.parameters, vec!["7"]);
        assert_eq!(dispatch.resolved.parameter_path, "land/7");
    }

    #[test]
    fn test_dispatch_empty_parameter_needs_execute() {
        // index requires one parameter, so a bare /sea/ has nothing to run
        let state = state(&[action(
            "app.web.SeaAction",
            true,
            vec![ExecuteConfig { method: "index".into(), params: 1, optional_params: 0 }],
        )]);
        assert!(state.dispatch("/sea/").is_none());
        assert!(state.dispatch("/sea/3").is_some());
    }

    #[test]
    fn test_swap_clears_cache() {
        let state = state(&[action("app.web.SeaAction", true, vec![])]);
        assert!(state.dispatch("/sea/").is_some());
        assert!(state.dispatch("/land/").is_none());
        assert_eq!(state.cache.len(), 2);

        let convention = DefaultNamingConvention::default();
        let registry =
            ActionRegistry::from_actions(&[action("app.web.LandAction", true, vec![])], &convention).unwrap();
        state.swap_registry(registry);

        assert!(state.cache.is_empty());
        assert!(state.dispatch("/land/").is_some());
        assert!(state.dispatch("/sea/").is_none());
    }

    #[test]
    fn test_outcome_racing_a_swap_is_not_cached() {
        let state = state(&[action("app.web.SeaAction", true, vec![])]);

        // a request reads the generation, then the registry is swapped
        let generation = state.cache.generation();
        let convention = DefaultNamingConvention::default();
        let registry =
            ActionRegistry::from_actions(&[action("app.web.LandAction", true, vec![])], &convention).unwrap();
        state.swap_registry(registry);
        state.cache.insert("/land/", generation, None);

        assert!(state.cache.get("/land/").is_none());
        assert!(state.dispatch("/land/").is_some());
    }

    #[test]
    fn test_cached_outcomes_are_counted() {
        let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        let state = state(&[action("app.web.SeaAction", true, vec![])]);

        ::metrics::with_local_recorder(&recorder, || {
            assert!(state.dispatch("/land/").is_none());
            assert_eq!(state.cache.get("/land/"), Some(None));
            assert!(state.dispatch("/land/").is_none());
            assert!(state.dispatch("/sea/").is_some());
            assert!(state.dispatch("/sea/").is_some());
        });

        let rendered = handle.render();
        assert!(rendered.contains(r#"router_resolutions_total{outcome="not_found"} 2"#), "{}", rendered);
        assert!(rendered.contains(r#"router_resolutions_total{outcome="found"} 2"#), "{}", rendered);
    }
}
