//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::mpsc;

use action_router::config::{ActionConfig, ExecuteConfig, RouterConfig};
use action_router::naming::DefaultNamingConvention;
use action_router::{ActionPathResolver, ActionProbe, ActionRegistry, HttpServer, Shutdown};

/// In-memory probe: action name → number of trailing parameters it takes.
/// Records every name it was asked about.
#[derive(Default)]
pub struct ArityProbe {
    arities: HashMap<String, usize>,
    pub probed: RefCell<Vec<String>>,
}

impl ArityProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, arity: usize) -> Self {
        self.arities.insert(name.to_string(), arity);
        self
    }

    pub fn probe_count(&self) -> usize {
        self.probed.borrow().len()
    }
}

impl ActionProbe for ArityProbe {
    type Error = String;

    fn exists(&self, name: &str) -> Result<bool, String> {
        self.probed.borrow_mut().push(name.to_string());
        Ok(self.arities.contains_key(name))
    }

    fn accepts_parameters(&self, name: &str, parameter_path: &str) -> Result<bool, String> {
        let count = parameter_path.split('/').filter(|s| !s.is_empty()).count();
        Ok(self.arities.get(name) == Some(&count))
    }
}

pub fn action(identity: &str) -> ActionConfig {
    ActionConfig {
        identity: identity.to_string(),
        enabled: true,
        executes: Vec::new(),
    }
}

pub fn action_with(identity: &str, method: &str, params: usize) -> ActionConfig {
    ActionConfig {
        identity: identity.to_string(),
        enabled: true,
        executes: vec![ExecuteConfig {
            method: method.to_string(),
            params,
            optional_params: 0,
        }],
    }
}

pub fn registry(actions: &[ActionConfig]) -> ActionRegistry {
    ActionRegistry::from_actions(actions, &DefaultNamingConvention::default()).unwrap()
}

/// A router running on an ephemeral port.
pub struct RunningRouter {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub updates: mpsc::UnboundedSender<ActionRegistry>,
}

impl RunningRouter {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for RunningRouter {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the HTTP server with `config` and `registry`.
pub async fn start_router(config: RouterConfig, registry: ActionRegistry) -> RunningRouter {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let (updates, registry_updates) = mpsc::unbounded_channel();
    let server = HttpServer::new(config.clone(), ActionPathResolver::from_config(&config), registry);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, registry_updates, server_shutdown).await;
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    RunningRouter {
        addr,
        shutdown,
        updates,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
