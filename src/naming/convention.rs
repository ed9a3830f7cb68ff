//! Action naming convention.
//!
//! # Responsibilities
//! - Supply the action suffix appended to every candidate name
//! - Map a qualified action identity to its component name
//! - Decamelize simple names into path fragments

use std::fmt;

use crate::config::schema::NamingConfig;
use crate::naming::case::{decamelize, fold_camel};

/// Naming metadata consumed by the routing core.
pub trait NamingConvention: Send + Sync + fmt::Debug {
    /// Suffix every action component name ends with, e.g. `Action`.
    fn action_suffix(&self) -> &str;

    /// Bare name of the action serving `/`, without the suffix.
    fn root_action_name(&self) -> &str;

    /// Dot-qualified package actions live under, e.g. `app.web`.
    fn root_package(&self) -> &str;

    /// Component name for a qualified identity.
    ///
    /// `app.web.sea.SeaLandAction` becomes `sea_seaLandAction` when the root
    /// package is `app.web`. The class part must be the name the words of its
    /// decamelized path fold back into.
    fn component_name(&self, identity: &str) -> String;

    /// Delimiter placed between decamelized words.
    fn delimiter(&self) -> &str;

    /// Convert a camel-case simple name into a lowercase path fragment.
    fn decamelize(&self, name: &str) -> String;
}

/// Convention driven by `[naming]` configuration.
#[derive(Debug, Clone)]
pub struct DefaultNamingConvention {
    action_suffix: String,
    root_action_name: String,
    root_package: String,
    delimiter: String,
}

impl DefaultNamingConvention {
    pub fn new(
        action_suffix: impl Into<String>,
        root_action_name: impl Into<String>,
        root_package: impl Into<String>,
        delimiter: impl Into<String>,
    ) -> Self {
        Self {
            action_suffix: action_suffix.into(),
            root_action_name: root_action_name.into(),
            root_package: root_package.into(),
            delimiter: delimiter.into(),
        }
    }

    pub fn from_config(config: &NamingConfig) -> Self {
        Self::new(
            config.action_suffix.clone(),
            config.root_action_name.clone(),
            config.root_package.clone(),
            config.decamelize_delimiter.clone(),
        )
    }
}

impl Default for DefaultNamingConvention {
    fn default() -> Self {
        Self::from_config(&NamingConfig::default())
    }
}

impl NamingConvention for DefaultNamingConvention {
    fn action_suffix(&self) -> &str {
        &self.action_suffix
    }

    fn root_action_name(&self) -> &str {
        &self.root_action_name
    }

    fn root_package(&self) -> &str {
        &self.root_package
    }

    fn component_name(&self, identity: &str) -> String {
        let (package, simple) = match identity.rsplit_once('.') {
            Some((package, simple)) => (package, simple),
            None => ("", identity),
        };
        let relative = if self.root_package.is_empty() {
            Some(package)
        } else if package == self.root_package {
            Some("")
        } else {
            package
                .strip_prefix(self.root_package.as_str())
                .and_then(|rest| rest.strip_prefix('.'))
        };

        let mut name = String::with_capacity(identity.len());
        if let Some(relative) = relative {
            for part in relative.split('.').filter(|p| !p.is_empty()) {
                name.push_str(&part.to_lowercase());
                name.push('_');
            }
        }
        match simple.strip_suffix(self.action_suffix.as_str()) {
            Some(stem) if !stem.is_empty() => {
                name.push_str(&fold_camel(stem));
                name.push_str(&self.action_suffix);
            }
            _ => name.push_str(&fold_camel(simple)),
        }
        name
    }

    fn delimiter(&self) -> &str {
        &self.delimiter
    }

    fn decamelize(&self, name: &str) -> String {
        decamelize(name, &self.delimiter)
    }
}
