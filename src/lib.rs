//! Convention-based action routing.
//!
//! Request paths map to registered actions purely by naming convention:
//! `/sea/land/3/` is tried as `seaAction`, `sea_seaAction`, `seaLandAction`,
//! `sea_seaLandAction`, ... until a registered action can take the remaining
//! segments as parameters. The reverse direction turns an action identity
//! back into its path.

// Core
pub mod naming;
pub mod registry;
pub mod routing;

// Surfaces
pub mod admin;
pub mod http;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::RouterConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use registry::ActionRegistry;
pub use routing::{ActionPathResolver, ActionProbe, PathResolver, UrlBuilder, UrlChain, ViewPathInferencer};
