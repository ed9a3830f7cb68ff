//! Convention-based action routing.
//!
//! # Data Flow
//! ```text
//! Incoming request path (/sea/land/3/)
//!     → adjust.rs (optional request path customization)
//!     → candidate.rs (seaAction, sea_seaAction, seaLandAction, ...)
//!     → resolver.rs (probe registry: exists? arity ok? caller accepts?)
//!     → Return: accepted (action name, parameter path) or not found
//!
//! Reverse direction:
//!     url.rs      action identity → /sea/land/ (+ parts, query, hash, redirect)
//!     view.rs     view template path → best-guess action path
//!     expected.rs unresolved path → expected action names for 404 pages
//! ```
//!
//! # Design Decisions
//! - No route table: names are inferred from path segment structure
//! - Shortest plausible action name is tried first
//! - Deterministic: same path and registry always resolve the same way
//! - Operations never log; callers decide what is worth reporting

pub mod adjust;
pub mod candidate;
pub mod error;
pub mod expected;
pub mod resolver;
pub mod url;
pub mod view;

use std::sync::Arc;

use crate::config::RouterConfig;
use crate::naming::{DefaultNamingConvention, NamingConvention};

pub use adjust::{ActionAdjustment, ConfiguredAdjustment, NoAdjustment};
pub use candidate::{split_segments, ActionCandidate, CandidateNames, RequestWords};
pub use error::{UrlBuildError, UrlResult};
pub use expected::{build_expected_candidates, expected_routing_message, may_be_parameter_token};
pub use resolver::{ActionProbe, FoundAction, PathResolver, ResolvedAction};
pub use url::{UrlBuilder, UrlChain};
pub use view::ViewPathInferencer;

/// Every routing operation behind one handle, configured once at boot.
#[derive(Debug, Clone)]
pub struct ActionPathResolver {
    convention: Arc<dyn NamingConvention>,
    resolver: PathResolver,
    urls: UrlBuilder,
    views: ViewPathInferencer,
}

impl ActionPathResolver {
    pub fn new(
        convention: Arc<dyn NamingConvention>,
        adjustment: Arc<dyn ActionAdjustment>,
        redirect_marker: impl Into<String>,
    ) -> Self {
        Self {
            resolver: PathResolver::new(convention.clone(), adjustment.clone()),
            urls: UrlBuilder::new(convention.clone(), redirect_marker),
            views: ViewPathInferencer::new(adjustment),
            convention,
        }
    }

    pub fn from_config(config: &RouterConfig) -> Self {
        let convention: Arc<dyn NamingConvention> = Arc::new(DefaultNamingConvention::from_config(&config.naming));
        let adjustment: Arc<dyn ActionAdjustment> = Arc::new(ConfiguredAdjustment::from_config(&config.adjustment));
        tracing::info!(
            action_suffix = %convention.action_suffix(),
            root_package = %convention.root_package(),
            adjustment = ?adjustment,
            redirect_marker = %config.url.redirect_marker,
            "Action path resolver configured"
        );
        Self::new(convention, adjustment, config.url.redirect_marker.clone())
    }

    pub fn convention(&self) -> &dyn NamingConvention {
        self.convention.as_ref()
    }

    /// Shared handle to the convention, e.g. for the registry watcher.
    pub fn convention_handle(&self) -> Arc<dyn NamingConvention> {
        self.convention.clone()
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    pub fn urls(&self) -> &UrlBuilder {
        &self.urls
    }

    pub fn views(&self) -> &ViewPathInferencer {
        &self.views
    }

    /// See [`PathResolver::resolve`].
    pub fn resolve<P, F>(&self, request_path: &str, probe: &P, on_candidate: F) -> Result<bool, P::Error>
    where
        P: ActionProbe + ?Sized,
        F: FnMut(&FoundAction<'_>) -> Result<bool, P::Error>,
    {
        self.resolver.resolve(request_path, probe, on_candidate)
    }

    /// See [`PathResolver::find`].
    pub fn find<P>(&self, request_path: &str, probe: &P) -> Result<Option<ResolvedAction>, P::Error>
    where
        P: ActionProbe + ?Sized,
    {
        self.resolver.find(request_path, probe)
    }

    pub fn resolve_action_path(&self, identity: &str) -> UrlResult<String> {
        self.urls.resolve_action_path(identity)
    }

    pub fn to_action_url(&self, identity: &str, redirect: bool, chain: Option<&UrlChain>) -> UrlResult<String> {
        self.urls.to_action_url(identity, redirect, chain)
    }

    pub fn infer_action_path(&self, view_path: &str) -> String {
        self.views.infer_action_path(view_path)
    }

    /// Expected action names for the customized form of `request_path`.
    pub fn expected_candidates(&self, request_path: &str) -> Vec<String> {
        let customized = self.resolver.customize(request_path);
        build_expected_candidates(&customized, self.convention.action_suffix())
    }

    pub fn expected_routing_message(&self, request_path: &str) -> String {
        let names = self.expected_candidates(request_path);
        expected_routing_message(request_path, &names, self.convention.root_package())
    }
}
