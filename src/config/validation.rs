//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check naming settings are usable
//! - Check registered actions follow the naming convention
//! - Detect actions colliding on one component name
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: config → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::{ActionConfig, RouterConfig};
use crate::naming::NamingConvention;

/// A single semantic problem found in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address must not be empty")]
    EmptyBindAddress,

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("naming.{0} must not be empty")]
    EmptyNaming(&'static str),

    #[error("naming.decamelize_delimiter '{0}' must not contain letters or digits")]
    WordDelimiter(String),

    #[error("url.redirect_marker must not be empty")]
    EmptyRedirectMarker,

    #[error("action identity must not be empty")]
    EmptyIdentity,

    #[error("action '{identity}' does not end with suffix '{suffix}'")]
    MissingSuffix { identity: String, suffix: String },

    #[error("actions '{first}' and '{second}' share component name '{name}'")]
    DuplicateAction {
        name: String,
        first: String,
        second: String,
    },

    #[error("action '{identity}' declares method '{method}' more than once")]
    DuplicateMethod { identity: String, method: String },
}

/// Validate the main configuration, including inline actions.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.trim().is_empty() {
        errors.push(ValidationError::EmptyBindAddress);
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.naming.action_suffix.is_empty() {
        errors.push(ValidationError::EmptyNaming("action_suffix"));
    }
    if config.naming.root_action_name.is_empty() {
        errors.push(ValidationError::EmptyNaming("root_action_name"));
    }
    if config.naming.decamelize_delimiter.is_empty() {
        errors.push(ValidationError::EmptyNaming("decamelize_delimiter"));
    } else if config.naming.decamelize_delimiter.chars().any(char::is_alphanumeric) {
        errors.push(ValidationError::WordDelimiter(config.naming.decamelize_delimiter.clone()));
    }
    if config.url.redirect_marker.is_empty() {
        errors.push(ValidationError::EmptyRedirectMarker);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a set of actions against the naming convention.
pub fn validate_actions(
    actions: &[ActionConfig],
    convention: &dyn NamingConvention,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen: Vec<(String, &str)> = Vec::with_capacity(actions.len());

    for action in actions {
        let identity = action.identity.trim();
        if identity.is_empty() {
            errors.push(ValidationError::EmptyIdentity);
            continue;
        }
        if !identity.ends_with(convention.action_suffix()) {
            errors.push(ValidationError::MissingSuffix {
                identity: identity.to_string(),
                suffix: convention.action_suffix().to_string(),
            });
        }

        let name = convention.component_name(identity);
        if let Some((_, first)) = seen.iter().find(|(n, _)| *n == name) {
            errors.push(ValidationError::DuplicateAction {
                name: name.clone(),
                first: first.to_string(),
                second: identity.to_string(),
            });
        } else {
            seen.push((name, identity));
        }

        let mut methods = HashSet::new();
        for execute in &action.executes {
            if !methods.insert(execute.method.as_str()) {
                errors.push(ValidationError::DuplicateMethod {
                    identity: identity.to_string(),
                    method: execute.method.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
