//! Request path to action resolution.
//!
//! # Responsibilities
//! - Split the (possibly customized) request path into words
//! - Walk candidate names shallow to deep, consumed count by consumed count
//! - Offer each existing, arity-compatible candidate to the caller
//!
//! # Design Decisions
//! - Not found is `Ok(false)`, not an error
//! - Probe and callback errors propagate untouched through `?`
//! - A declined candidate does not stop the search
//! - No shared mutable state: safe to call from any number of tasks

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::naming::NamingConvention;
use crate::routing::adjust::ActionAdjustment;
use crate::routing::candidate::{CandidateNames, RequestWords};

/// Registry capability the resolver probes candidates against.
pub trait ActionProbe {
    type Error;

    /// Whether an action with this component name is registered.
    fn exists(&self, name: &str) -> Result<bool, Self::Error>;

    /// Whether the action can consume the trailing `parameter_path`.
    fn accepts_parameters(&self, name: &str, parameter_path: &str) -> Result<bool, Self::Error>;
}

/// A candidate offered to the caller's accept callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoundAction<'a> {
    /// Request path after customization.
    pub request_path: &'a str,
    pub action_name: &'a str,
    /// Unconsumed trailing segments; empty when none remain.
    pub parameter_path: &'a str,
}

/// Outcome of an always-accepting resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedAction {
    pub action_name: String,
    pub parameter_path: String,
}

impl From<&FoundAction<'_>> for ResolvedAction {
    fn from(found: &FoundAction<'_>) -> Self {
        Self {
            action_name: found.action_name.to_string(),
            parameter_path: found.parameter_path.to_string(),
        }
    }
}

/// Resolves request paths to action component names by convention.
#[derive(Clone)]
pub struct PathResolver {
    convention: Arc<dyn NamingConvention>,
    adjustment: Arc<dyn ActionAdjustment>,
}

impl fmt::Debug for PathResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathResolver")
            .field("action_suffix", &self.convention.action_suffix())
            .field("adjustment", &self.adjustment)
            .finish()
    }
}

impl PathResolver {
    pub fn new(convention: Arc<dyn NamingConvention>, adjustment: Arc<dyn ActionAdjustment>) -> Self {
        Self { convention, adjustment }
    }

    /// The path actually resolved for `request_path`.
    pub fn customize<'a>(&self, request_path: &'a str) -> std::borrow::Cow<'a, str> {
        match self.adjustment.customize_request_path(request_path) {
            Some(customized) => std::borrow::Cow::Owned(customized),
            None => std::borrow::Cow::Borrowed(request_path),
        }
    }

    /// Search for an action serving `request_path`.
    ///
    /// Every candidate that exists in `probe` and either leaves no parameters
    /// or passes the arity check is passed to `on_candidate`. Returns `Ok(true)`
    /// as soon as the callback accepts one, `Ok(false)` when none is accepted.
    pub fn resolve<P, F>(&self, request_path: &str, probe: &P, mut on_candidate: F) -> Result<bool, P::Error>
    where
        P: ActionProbe + ?Sized,
        F: FnMut(&FoundAction<'_>) -> Result<bool, P::Error>,
    {
        let request_path = self.customize(request_path);
        let words = RequestWords::new(&request_path, self.convention.delimiter());
        let candidates = CandidateNames::new(
            words.words(),
            self.convention.action_suffix(),
            self.convention.root_action_name(),
        );

        for candidate in candidates {
            if !probe.exists(&candidate.full_name)? {
                continue;
            }
            let parameter_path = words.parameter_path(candidate.consumed);
            if !parameter_path.is_empty() && !probe.accepts_parameters(&candidate.full_name, &parameter_path)? {
                continue;
            }
            let found = FoundAction {
                request_path: &request_path,
                action_name: &candidate.full_name,
                parameter_path: &parameter_path,
            };
            if on_candidate(&found)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Resolve, accepting the first eligible candidate.
    pub fn find<P>(&self, request_path: &str, probe: &P) -> Result<Option<ResolvedAction>, P::Error>
    where
        P: ActionProbe + ?Sized,
    {
        let mut resolved = None;
        self.resolve(request_path, probe, |found| {
            resolved = Some(ResolvedAction::from(found));
            Ok(true)
        })?;
        Ok(resolved)
    }
}
