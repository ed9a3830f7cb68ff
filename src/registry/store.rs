//! In-memory action registry.
//!
//! # Responsibilities
//! - Hold every registered action keyed by component name
//! - Answer the resolver's existence and arity probes
//! - Load actions from inline config and an optional registry file

use std::collections::HashMap;
use std::convert::Infallible;
use std::path::Path;

use crate::config::loader::{load_registry_file, ConfigError};
use crate::config::schema::{ActionConfig, RegistryConfig};
use crate::config::validation::{validate_actions, ValidationError};
use crate::naming::NamingConvention;
use crate::registry::action::{ActionDefinition, ExecuteDefinition};
use crate::routing::ActionProbe;

/// Immutable set of registered actions.
#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
    actions: HashMap<String, ActionDefinition>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry, rejecting actions that break the naming convention.
    pub fn from_actions(
        actions: &[ActionConfig],
        convention: &dyn NamingConvention,
    ) -> Result<Self, Vec<ValidationError>> {
        validate_actions(actions, convention)?;
        let actions = actions
            .iter()
            .map(|config| {
                let action = ActionDefinition::from_config(config, convention);
                (action.name.clone(), action)
            })
            .collect();
        Ok(Self { actions })
    }

    /// Register a definition directly, replacing any action with its name.
    pub fn insert(&mut self, action: ActionDefinition) {
        self.actions.insert(action.name.clone(), action);
    }

    pub fn get(&self, name: &str) -> Option<&ActionDefinition> {
        self.actions.get(name)
    }

    /// Find the method of `name` that serves `parameter_path`.
    pub fn find_execute(&self, name: &str, parameter_path: &str) -> Option<&ExecuteDefinition> {
        self.actions.get(name)?.find_execute(parameter_path)
    }

    /// Actions sorted by component name.
    pub fn iter(&self) -> impl Iterator<Item = &ActionDefinition> {
        let mut actions: Vec<&ActionDefinition> = self.actions.values().collect();
        actions.sort_by(|a, b| a.name.cmp(&b.name));
        actions.into_iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl ActionProbe for ActionRegistry {
    type Error = Infallible;

    fn exists(&self, name: &str) -> Result<bool, Self::Error> {
        Ok(self.actions.contains_key(name))
    }

    fn accepts_parameters(&self, name: &str, parameter_path: &str) -> Result<bool, Self::Error> {
        Ok(self.find_execute(name, parameter_path).is_some())
    }
}

/// Build the registry from inline actions plus the configured registry file.
pub fn load_registry(
    config: &RegistryConfig,
    convention: &dyn NamingConvention,
) -> Result<ActionRegistry, ConfigError> {
    let mut actions = config.actions.clone();
    if let Some(path) = &config.path {
        let file = load_registry_file(Path::new(path))?;
        actions.extend(file.actions);
    }
    let registry =
        ActionRegistry::from_actions(&actions, convention).map_err(ConfigError::Validation)?;
    tracing::info!(actions = registry.len(), path = ?config.path, "Action registry loaded");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ExecuteConfig;
    use crate::naming::DefaultNamingConvention;

    fn config(identity: &str, executes: Vec<ExecuteConfig>) -> ActionConfig {
        ActionConfig {
            identity: identity.into(),
            enabled: true,
            executes,
        }
    }

    #[test]
    fn test_probe() {
        let convention = DefaultNamingConvention::default();
        let registry = ActionRegistry::from_actions(
            &[
                config("app.web.SeaAction", vec![]),
                config(
                    "app.web.sea.SeaLandAction",
                    vec![ExecuteConfig { method: "index".into(), params: 1, optional_params: 0 }],
                ),
            ],
            &convention,
        )
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.exists("seaAction"), Ok(true));
        assert_eq!(registry.exists("landAction"), Ok(false));
        assert_eq!(registry.accepts_parameters("sea_seaLandAction", "3"), Ok(true));
        assert_eq!(registry.accepts_parameters("sea_seaLandAction", "3/4"), Ok(false));
        assert_eq!(registry.accepts_parameters("seaAction", "3"), Ok(false));
        assert_eq!(registry.accepts_parameters("missingAction", "3"), Ok(false));
    }

    #[test]
    fn test_iter_sorted() {
        let convention = DefaultNamingConvention::default();
        let registry = ActionRegistry::from_actions(
            &[config("app.web.SeaAction", vec![]), config("app.web.LandAction", vec![])],
            &convention,
        )
        .unwrap();
        let names: Vec<&str> = registry.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["landAction", "seaAction"]);
    }

    #[test]
    fn test_load_rejects_invalid_actions() {
        let convention = DefaultNamingConvention::default();
        let registry_config = RegistryConfig {
            path: None,
            watch: false,
            actions: vec![config("app.web.SeaHandler", vec![])],
        };
        let err = load_registry(&registry_config, &convention).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_merges_file() {
        let path = std::env::temp_dir().join(format!("actions-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "[[actions]]\nidentity = \"app.web.LandAction\"\n").unwrap();

        let convention = DefaultNamingConvention::default();
        let registry_config = RegistryConfig {
            path: Some(path.to_string_lossy().into_owned()),
            watch: false,
            actions: vec![config("app.web.SeaAction", vec![])],
        };
        let registry = load_registry(&registry_config, &convention).unwrap();
        assert!(registry.get("landAction").is_some());
        assert!(registry.get("seaAction").is_some());

        std::fs::remove_file(path).unwrap_or_default();
    }
}
