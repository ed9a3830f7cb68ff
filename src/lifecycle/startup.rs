//! Startup sequencing.

use std::sync::Arc;

use crate::config::{ConfigError, RouterConfig};
use crate::naming::NamingConvention;
use crate::registry::{load_registry, ActionRegistry};
use crate::routing::ActionPathResolver;

/// Everything the server needs, built from one validated config.
#[derive(Debug)]
pub struct Bootstrapped {
    pub config: RouterConfig,
    pub convention: Arc<dyn NamingConvention>,
    pub paths: ActionPathResolver,
    pub registry: ActionRegistry,
}

/// Build the naming convention, resolver and initial registry.
pub fn bootstrap(config: RouterConfig) -> Result<Bootstrapped, ConfigError> {
    let paths = ActionPathResolver::from_config(&config);
    let convention = paths.convention_handle();
    let registry = load_registry(&config.registry, convention.as_ref())?;

    Ok(Bootstrapped {
        config,
        convention,
        paths,
        registry,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ActionConfig;

    #[test]
    fn test_bootstrap_inline_actions() {
        let mut config = RouterConfig::default();
        config.registry.actions.push(ActionConfig {
            identity: "app.web.sea.SeaLandAction".into(),
            enabled: true,
            executes: Vec::new(),
        });

        let booted = bootstrap(config).unwrap();
        assert_eq!(booted.registry.len(), 1);
        assert_eq!(
            booted.paths.find("/sea/land/", &booted.registry).unwrap().unwrap().action_name,
            "sea_seaLandAction"
        );
    }

    #[test]
    fn test_bootstrap_missing_registry_file() {
        let mut config = RouterConfig::default();
        config.registry.path = Some("no/such/actions.toml".into());
        assert!(matches!(bootstrap(config), Err(ConfigError::Io(_))));
    }
}
