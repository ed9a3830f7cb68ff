//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//!
//! Registry file (TOML [[actions]]):
//!     loader.rs reads it at boot
//!     → watcher.rs detects change
//!     → registry rebuilt & validated
//!     → atomic swap of Arc<ActionRegistry>
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; only the action registry reloads
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::ConfigError;
pub use schema::ActionConfig;
pub use schema::ExecuteConfig;
pub use schema::RouterConfig;
