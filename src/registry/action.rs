//! Registered action and handler method definitions.

use serde::Serialize;

use crate::config::schema::{ActionConfig, ExecuteConfig};
use crate::naming::NamingConvention;

/// Method invoked when the parameter path does not name another method.
pub const INDEX_METHOD: &str = "index";

/// One handler method with its trailing-parameter arity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecuteDefinition {
    pub method: String,
    pub params: usize,
    pub optional_params: usize,
}

impl ExecuteDefinition {
    pub fn index(params: usize) -> Self {
        Self::new(INDEX_METHOD, params, 0)
    }

    pub fn new(method: impl Into<String>, params: usize, optional_params: usize) -> Self {
        Self {
            method: method.into(),
            params,
            optional_params,
        }
    }

    pub fn is_index(&self) -> bool {
        self.method == INDEX_METHOD
    }

    fn accepts_count(&self, count: usize) -> bool {
        count >= self.params && count <= self.params + self.optional_params
    }

    /// Whether this method can consume the given parameter segments.
    ///
    /// Named methods expect their own name as the first segment.
    pub fn accepts(&self, segments: &[&str]) -> bool {
        if self.is_index() {
            return self.accepts_count(segments.len());
        }
        match segments.split_first() {
            Some((first, rest)) if *first == self.method => self.accepts_count(rest.len()),
            _ => false,
        }
    }

    /// The segments passed to the method as positional parameters.
    pub fn parameters<'a>(&self, segments: &[&'a str]) -> Vec<&'a str> {
        if self.is_index() {
            segments.to_vec()
        } else {
            segments.iter().skip(1).copied().collect()
        }
    }
}

impl From<&ExecuteConfig> for ExecuteDefinition {
    fn from(config: &ExecuteConfig) -> Self {
        Self::new(config.method.clone(), config.params, config.optional_params)
    }
}

/// A registered action component.
#[derive(Debug, Clone, Serialize)]
pub struct ActionDefinition {
    /// Qualified identity, e.g. `app.web.sea.SeaLandAction`.
    pub identity: String,
    /// Component name the resolver probes for, e.g. `sea_seaLandAction`.
    pub name: String,
    pub enabled: bool,
    pub executes: Vec<ExecuteDefinition>,
}

impl ActionDefinition {
    pub fn from_config(config: &ActionConfig, convention: &dyn NamingConvention) -> Self {
        let identity = config.identity.trim().to_string();
        let mut executes: Vec<ExecuteDefinition> =
            config.executes.iter().map(ExecuteDefinition::from).collect();
        if executes.is_empty() {
            executes.push(ExecuteDefinition::index(0));
        }
        Self {
            name: convention.component_name(&identity),
            identity,
            enabled: config.enabled,
            executes,
        }
    }

    /// Find the method serving `parameter_path`.
    ///
    /// Named methods win over `index` so `/sea/land/` reaches `land()` on
    /// `seaAction` even when `index` would also take one parameter.
    pub fn find_execute(&self, parameter_path: &str) -> Option<&ExecuteDefinition> {
        let segments = split_parameters(parameter_path);
        self.executes
            .iter()
            .filter(|e| !e.is_index())
            .chain(self.executes.iter().filter(|e| e.is_index()))
            .find(|e| e.accepts(&segments))
    }
}

/// Split a parameter path into its non-empty segments.
pub fn split_parameters(parameter_path: &str) -> Vec<&str> {
    parameter_path.split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::DefaultNamingConvention;

    fn sea_action() -> ActionDefinition {
        ActionDefinition {
            identity: "app.web.SeaAction".into(),
            name: "seaAction".into(),
            enabled: true,
            executes: vec![
                ExecuteDefinition::index(1),
                ExecuteDefinition::new("land", 0, 1),
            ],
        }
    }

    #[test]
    fn test_index_arity() {
        let execute = ExecuteDefinition::new(INDEX_METHOD, 1, 1);
        assert!(!execute.accepts(&[]));
        assert!(execute.accepts(&["3"]));
        assert!(execute.accepts(&["3", "4"]));
        assert!(!execute.accepts(&["3", "4", "5"]));
    }

    #[test]
    fn test_named_method_prefers_over_index() {
        let action = sea_action();
        assert_eq!(action.find_execute("land").unwrap().method, "land");
        assert_eq!(action.find_execute("land/7").unwrap().method, "land");
        assert_eq!(action.find_execute("3").unwrap().method, "index");
        assert!(action.find_execute("").is_none());
        assert!(action.find_execute("land/7/8").is_none());
    }

    #[test]
    fn test_parameters_skip_method_name() {
        let land = ExecuteDefinition::new("land", 1, 0);
        assert_eq!(land.parameters(&["land", "7"]), vec!["7"]);
        assert_eq!(ExecuteDefinition::index(1).parameters(&["3"]), vec!["3"]);
    }

    #[test]
    fn test_from_config_defaults_to_index() {
        let convention = DefaultNamingConvention::default();
        let config = ActionConfig {
            identity: " app.web.sea.SeaLandAction ".into(),
            enabled: true,
            executes: Vec::new(),
        };
        let action = ActionDefinition::from_config(&config, &convention);
        assert_eq!(action.name, "sea_seaLandAction");
        assert_eq!(action.identity, "app.web.sea.SeaLandAction");
        assert_eq!(action.executes, vec![ExecuteDefinition::index(0)]);
    }
}
