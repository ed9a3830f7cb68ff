//! Action identity to URL conversion.
//!
//! # Responsibilities
//! - Derive the canonical path of an action from its identity
//! - Append positional parts, GET parameters, hash and redirect marker
//! - Add, swap scheme for, and remove the redirect marker on existing URLs

use std::fmt;
use std::sync::Arc;

use crate::naming::NamingConvention;
use crate::routing::error::{UrlBuildError, UrlResult};

/// Extra pieces appended to an action path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlChain {
    parts: Vec<Option<String>>,
    params: Vec<String>,
    hash: Option<String>,
}

impl UrlChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional path part, rendered as `part/`.
    pub fn part(mut self, part: impl ToString) -> Self {
        self.parts.push(Some(part.to_string()));
        self
    }

    /// Append a positional part that may be absent; absent parts are skipped.
    pub fn maybe_part<T: ToString>(mut self, part: Option<T>) -> Self {
        self.parts.push(part.map(|p| p.to_string()));
        self
    }

    /// Append flat GET parameters: key, value, key, value...
    pub fn params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.params.extend(params.into_iter().map(|p| p.to_string()));
        self
    }

    pub fn param(mut self, key: impl ToString, value: impl ToString) -> Self {
        self.params.push(key.to_string());
        self.params.push(value.to_string());
        self
    }

    pub fn hash(mut self, hash: impl ToString) -> Self {
        self.hash = Some(hash.to_string());
        self
    }

    pub fn parts(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().flatten().map(String::as_str)
    }

    pub fn get_params(&self) -> &[String] {
        &self.params
    }

    pub fn get_hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }
}

/// Builds URLs pointing at registered actions.
#[derive(Clone)]
pub struct UrlBuilder {
    convention: Arc<dyn NamingConvention>,
    redirect_marker: String,
}

impl fmt::Debug for UrlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlBuilder")
            .field("redirect_marker", &self.redirect_marker)
            .finish()
    }
}

impl UrlBuilder {
    pub fn new(convention: Arc<dyn NamingConvention>, redirect_marker: impl Into<String>) -> Self {
        Self {
            convention,
            redirect_marker: redirect_marker.into(),
        }
    }

    pub fn redirect_marker(&self) -> &str {
        &self.redirect_marker
    }

    /// Canonical path of an action, e.g. `app.web.sea.SeaLandAction` → `/sea/land/`.
    pub fn resolve_action_path(&self, identity: &str) -> UrlResult<String> {
        let identity = identity.trim();
        if identity.is_empty() {
            return Err(UrlBuildError::EmptyArgument("identity"));
        }
        let component = self.convention.component_name(identity);
        let simple = component.rsplit_once('_').map_or(component.as_str(), |(_, s)| s);
        let simple = simple.strip_suffix(self.convention.action_suffix()).unwrap_or(simple);
        Ok(format!("/{}/", self.convention.decamelize(simple)))
    }

    /// URL moving to the action, optionally marked as a redirect.
    pub fn to_action_url(&self, identity: &str, redirect: bool, chain: Option<&UrlChain>) -> UrlResult<String> {
        let path = self.resolve_action_path(identity)?;
        self.build_url(&path, chain, redirect)
    }

    /// Assemble `path` + parts + `?k=v&..` + `#hash` + redirect marker.
    pub fn build_url(&self, path: &str, chain: Option<&UrlChain>, redirect: bool) -> UrlResult<String> {
        let params = chain.map(UrlChain::get_params).unwrap_or_default();
        if params.len() % 2 != 0 {
            return Err(UrlBuildError::OddQueryParameters {
                url: path.to_string(),
                count: params.len(),
            });
        }

        let mut url = String::from(path);
        if let Some(chain) = chain {
            for part in chain.parts() {
                url.push_str(part);
                url.push('/');
            }
        }
        for (i, param) in params.iter().enumerate() {
            url.push(match i {
                0 => '?',
                i if i % 2 == 0 => '&',
                _ => '=',
            });
            url.push_str(param);
        }
        if let Some(hash) = chain.and_then(UrlChain::get_hash) {
            url.push('#');
            url.push_str(hash);
        }
        if redirect {
            url.push(if params.is_empty() { '?' } else { '&' });
            url.push_str(&self.redirect_marker);
        }
        Ok(url)
    }

    /// `/member/list/` → `/member/list/?redirect=true`.
    pub fn to_redirect_path(&self, path: &str) -> String {
        let delimiter = if path.contains('?') { '&' } else { '?' };
        format!("{}{}{}", path, delimiter, self.redirect_marker)
    }

    pub fn to_ssl_redirect_path(&self, url: &str) -> String {
        self.to_redirect_path(&url.replacen("http:", "https:", 1))
    }

    pub fn to_non_ssl_redirect_path(&self, url: &str) -> String {
        self.to_redirect_path(&url.replacen("https:", "http:", 1))
    }

    /// Strip a trailing redirect marker together with its `?`/`&` delimiter.
    pub fn remove_redirect_mark(&self, path: &str) -> String {
        match path.strip_suffix(self.redirect_marker.as_str()) {
            Some(rest) => rest
                .strip_suffix(['?', '&'])
                .unwrap_or(rest)
                .to_string(),
            None => path.to_string(),
        }
    }
}
