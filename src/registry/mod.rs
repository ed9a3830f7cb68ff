//! Action registry subsystem.
//!
//! # Data Flow
//! ```text
//! ActionConfig[] (inline config + registry file)
//!     → validation (suffix, duplicate names, duplicate methods)
//!     → action.rs (component name + execute arities)
//!     → store.rs (immutable ActionRegistry, probed by the resolver)
//! ```
//!
//! # Design Decisions
//! - Built once per load, never mutated; reloads build a new registry
//! - Lookups by component name are O(1)
//! - Implements `ActionProbe` so the resolver never sees this type directly

pub mod action;
pub mod store;

pub use action::{ActionDefinition, ExecuteDefinition, INDEX_METHOD};
pub use store::{load_registry, ActionRegistry};
