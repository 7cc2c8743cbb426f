//! Waypoint CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use http::Method;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use waypoint_config::{load_config, RouteTableConfig};
use waypoint_core::{Params, RouteId};
use waypoint_registry::{Dispatcher, Registry};

#[derive(Parser)]
#[command(name = "waypoint")]
#[command(about = "Inspect and query Waypoint route tables", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "warn", env = "WAYPOINT_LOG")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every registered route and its action
    Routes {
        /// Path to route table file
        #[arg(short, long, default_value = "routes.yaml")]
        config: PathBuf,

        /// Print the path-to-id map as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a request against the route table
    Match {
        /// Path to route table file
        #[arg(short, long, default_value = "routes.yaml")]
        config: PathBuf,

        /// HTTP method
        method: String,

        /// Request path
        path: String,
    },

    /// Validate a route table file
    Validate {
        /// Path to route table file
        #[arg(short, long, default_value = "routes.yaml")]
        config: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Debug, Serialize)]
struct MatchOutput<'a> {
    id: RouteId,
    action: &'a str,
    params: &'a Params,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command {
        Commands::Routes { config, json } => {
            let dispatcher = load_dispatcher(&config)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&dispatcher.routes())?);
            } else {
                for line in dispatcher.route_listing() {
                    println!("{line}");
                }
            }
            Ok(())
        }

        Commands::Match {
            config,
            method,
            path,
        } => {
            let dispatcher = load_dispatcher(&config)?;
            let method = parse_method(&method)?;

            match dispatcher.resolve(&method, &path) {
                Some(resolved) => {
                    let output = MatchOutput {
                        id: resolved.id,
                        action: resolved.action,
                        params: &resolved.params,
                    };
                    println!("{}", serde_json::to_string_pretty(&output)?);
                    Ok(())
                }
                None => {
                    tracing::info!(method = %method, path = %path, "No route matched");
                    eprintln!("no route matches {method} {path}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Validate { config } => match load_dispatcher(&config) {
            Ok(dispatcher) => {
                println!("✓ {} is valid", config.display());
                println!("  Routes: {}", dispatcher.len());
                println!("  Bundles: {}", dispatcher.actions().len());
                Ok(())
            }
            Err(e) => {
                tracing::error!("✗ Route table validation failed: {e:#}");
                eprintln!("✗ {}: {e:#}", config.display());
                std::process::exit(1);
            }
        },

        Commands::Version => {
            println!("Waypoint");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!("Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
            Ok(())
        }
    }
}

fn load_dispatcher(path: &Path) -> Result<Dispatcher> {
    let config = load_config(path)
        .with_context(|| format!("failed to load route table {}", path.display()))?;
    build_dispatcher(&config)
}

fn build_dispatcher(config: &RouteTableConfig) -> Result<Dispatcher> {
    let mut registry: Registry = Registry::new();

    for entry in &config.routes {
        registry
            .add_route(&entry.route, entry.action.as_str())
            .with_context(|| format!("cannot register {} => {}", entry.route, entry.action))?;
    }

    Ok(registry.build())
}

fn parse_method(method: &str) -> Result<Method> {
    Method::from_bytes(method.to_uppercase().as_bytes())
        .with_context(|| format!("invalid HTTP method '{method}'"))
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = match level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(filter.into()))
        .init();

    Ok(())
}
