//! Naming convention subsystem.
//!
//! # Data Flow
//! ```text
//! Action identity (app.web.sea.SeaLandAction)
//!     → convention.rs (component name: sea_seaLandAction, acronyms folded)
//!     → case.rs (decamelize: seaLand → sea/land)
//!     → consumed by routing (candidate names, action paths)
//! ```
//!
//! # Design Decisions
//! - Convention is configured once at boot and read-only afterwards
//! - Routing only sees the `NamingConvention` trait, never the config

pub mod case;
pub mod convention;

pub use case::{camel_words, decamelize, fold_camel, init_cap, init_uncap};
pub use convention::{DefaultNamingConvention, NamingConvention};
