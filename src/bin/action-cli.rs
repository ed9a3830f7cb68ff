use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;

use action_router::config::loader::load_config;
use action_router::config::RouterConfig;
use action_router::lifecycle::{bootstrap, Bootstrapped};
use action_router::routing::UrlChain;

#[derive(Parser)]
#[command(name = "action-cli")]
#[command(about = "Inspect convention-based action routing", long_about = None)]
struct Cli {
    /// Router configuration used by offline commands.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Registry file, overriding `registry.path` of the config.
    #[arg(short, long, global = true)]
    registry: Option<PathBuf>,

    /// Admin base URL for remote commands.
    #[arg(short, long, global = true, default_value = "http://localhost:8080")]
    url: String,

    /// Admin API key for remote commands.
    #[arg(short, long, global = true, default_value = "CHANGE_ME_IN_PRODUCTION")]
    key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a request path against the registry
    Resolve { path: String },
    /// Build the URL of an action identity
    Url {
        identity: String,
        /// Positional path part (repeatable)
        #[arg(long = "part")]
        parts: Vec<String>,
        /// GET parameter as key=value (repeatable)
        #[arg(long = "param")]
        params: Vec<String>,
        #[arg(long)]
        hash: Option<String>,
        #[arg(long)]
        redirect: bool,
    },
    /// Infer the action path of a view template
    View { path: String },
    /// List the actions expected for a path
    Expected { path: String },
    /// Check router status (remote)
    Status,
    /// List registered actions (remote)
    Actions,
    /// Resolve a path on the running router (remote)
    RemoteResolve { path: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Cli {
        config,
        registry,
        url,
        key,
        command,
    } = Cli::parse();
    let admin = Admin { url, key };

    let output = match command {
        Commands::Status => return admin.get("/_admin/status", &[]).await,
        Commands::Actions => return admin.get("/_admin/actions", &[]).await,
        Commands::RemoteResolve { path } => return admin.get("/_admin/resolve", &[("path", path.as_str())]).await,
        Commands::Resolve { path } => {
            let booted = load(config, registry)?;
            match booted.paths.find(&path, &booted.registry) {
                Ok(Some(resolved)) => serde_json::to_value(&resolved)?,
                Ok(None) => serde_json::json!({
                    "path": path,
                    "resolved": null,
                    "expected": booted.paths.expected_candidates(&path),
                }),
                Err(never) => match never {},
            }
        }
        Commands::Url { identity, parts, params, hash, redirect } => {
            let booted = load(config, registry)?;
            let mut chain = UrlChain::new();
            for part in parts {
                chain = chain.part(part);
            }
            for param in &params {
                let (key, value) = param.split_once('=').unwrap_or((param.as_str(), ""));
                chain = chain.param(key, value);
            }
            if let Some(hash) = hash {
                chain = chain.hash(hash);
            }
            let url = booted.paths.to_action_url(&identity, redirect, Some(&chain))?;
            serde_json::json!({ "identity": identity, "url": url })
        }
        Commands::View { path } => {
            let booted = load(config, registry)?;
            serde_json::json!({
                "action_path": booted.paths.infer_action_path(&path),
                "view": path,
            })
        }
        Commands::Expected { path } => {
            let booted = load(config, registry)?;
            println!("{}", booted.paths.expected_routing_message(&path));
            return Ok(());
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Bootstrap the router offline from config and registry files.
fn load(config: Option<PathBuf>, registry: Option<PathBuf>) -> Result<Bootstrapped, Box<dyn std::error::Error>> {
    let mut config = match config {
        Some(path) => load_config(&path)?,
        None => RouterConfig::default(),
    };
    if let Some(registry) = registry {
        config.registry.path = Some(registry.to_string_lossy().into_owned());
    }
    Ok(bootstrap(config)?)
}

struct Admin {
    url: String,
    key: String,
}

impl Admin {
    async fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<(), Box<dyn std::error::Error>> {
        let client = reqwest::Client::new();

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.key))?,
        );

        let res = client
            .get(format!("{}{}", self.url.trim_end_matches('/'), endpoint))
            .headers(headers)
            .query(query)
            .send()
            .await?;
        print_response(res).await
    }
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: Admin API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
