//! Adjustment hooks applied around resolution.
//!
//! # Responsibilities
//! - Rewrite a request path before it is split into segments
//! - Offer an alternate word list when a view name does not match its directory

use std::fmt;

use crate::config::schema::AdjustmentConfig;

/// Application hook consulted by the resolver and the view inferencer.
pub trait ActionAdjustment: Send + Sync + fmt::Debug {
    /// Replacement path to resolve instead of `request_path`, if any.
    fn customize_request_path(&self, _request_path: &str) -> Option<String> {
        None
    }

    /// Words to retry view inference with; empty means no retry.
    fn view_retry_words(&self, _view_path: &str, _words: &[String]) -> Vec<String> {
        Vec::new()
    }
}

/// Adjustment that changes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAdjustment;

impl ActionAdjustment for NoAdjustment {}

/// Adjustment driven by `[adjustment]` configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredAdjustment {
    request_path_prefix: Option<String>,
    view_retry_prefixes: Vec<String>,
}

impl ConfiguredAdjustment {
    pub fn from_config(config: &AdjustmentConfig) -> Self {
        Self {
            request_path_prefix: config
                .request_path_prefix
                .as_deref()
                .map(|p| p.trim_end_matches('/').to_string())
                .filter(|p| !p.is_empty()),
            view_retry_prefixes: config.view_retry_prefixes.clone(),
        }
    }
}

impl ActionAdjustment for ConfiguredAdjustment {
    fn customize_request_path(&self, request_path: &str) -> Option<String> {
        let prefix = self.request_path_prefix.as_deref()?;
        let rest = request_path.strip_prefix(prefix)?;
        // "/api" must not strip "/apiary"
        if rest.is_empty() {
            Some("/".to_string())
        } else if rest.starts_with('/') {
            Some(rest.to_string())
        } else {
            None
        }
    }

    fn view_retry_words(&self, _view_path: &str, words: &[String]) -> Vec<String> {
        match words.split_first() {
            Some((first, rest)) if self.view_retry_prefixes.iter().any(|p| p == first) => rest.to_vec(),
            _ => Vec::new(),
        }
    }
}
