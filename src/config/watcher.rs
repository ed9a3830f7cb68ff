//! Registry file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::schema::RegistryConfig;
use crate::naming::NamingConvention;
use crate::observability::metrics;
use crate::registry::{load_registry, ActionRegistry};

/// Monitors the registry file and rebuilds the registry when it changes.
pub struct RegistryWatcher {
    path: PathBuf,
    config: RegistryConfig,
    convention: Arc<dyn NamingConvention>,
    update_tx: mpsc::UnboundedSender<ActionRegistry>,
}

impl RegistryWatcher {
    /// Create a new RegistryWatcher for the file at `path`.
    ///
    /// Returns the watcher and a receiver for rebuilt registries.
    pub fn new(
        path: &Path,
        config: RegistryConfig,
        convention: Arc<dyn NamingConvention>,
    ) -> (Self, mpsc::UnboundedReceiver<ActionRegistry>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                config,
                convention,
                update_tx,
            },
            update_rx,
        )
    }

    /// Rebuild the registry now, sending it on success.
    fn reload(config: &RegistryConfig, convention: &dyn NamingConvention, tx: &mpsc::UnboundedSender<ActionRegistry>) {
        match load_registry(config, convention) {
            Ok(registry) => {
                metrics::record_registry_reload(true);
                let _ = tx.send(registry);
            }
            Err(e) => {
                metrics::record_registry_reload(false);
                tracing::error!("Failed to reload registry: {}. Keeping current actions.", e);
            }
        }
    }

    /// Start watching the file in a background thread.
    ///
    /// The returned watcher stops when dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx.clone();
        let config = self.config.clone();
        let convention = self.convention.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!("Registry file change detected, reloading...");
                        Self::reload(&config, convention.as_ref(), &tx);
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Registry watcher started");
        Ok(watcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::DefaultNamingConvention;

    #[test]
    fn test_reload_sends_valid_registry_only() {
        let path = std::env::temp_dir().join(format!("watch-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "[[actions]]\nidentity = \"app.web.SeaAction\"\n").unwrap();

        let config = RegistryConfig {
            path: Some(path.to_string_lossy().into_owned()),
            watch: true,
            actions: Vec::new(),
        };
        let convention = DefaultNamingConvention::default();
        let (tx, mut rx) = mpsc::unbounded_channel();

        RegistryWatcher::reload(&config, &convention, &tx);
        let registry = rx.try_recv().unwrap();
        assert!(registry.get("seaAction").is_some());

        std::fs::write(&path, "[[actions]]\nidentity = \"app.web.SeaHandler\"\n").unwrap();
        RegistryWatcher::reload(&config, &convention, &tx);
        assert!(rx.try_recv().is_err());

        std::fs::remove_file(path).unwrap_or_default();
    }
}
