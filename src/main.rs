//! Route table CLI.
//!
//! Loads a TOML route file, builds the trie, and lets you list routes,
//! resolve paths against it, or watch the file and re-resolve on change.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use segment_router::config::{build_trie, load_config, RouteWatcher};
use segment_router::observability::logging;
use segment_router::routing::{Bindings, RouteError, RouteResult, RouteTable};

#[derive(Parser)]
#[command(name = "segment-router")]
#[command(about = "Inspect and exercise a path-segment route table", long_about = None)]
struct Cli {
    /// Route file (TOML).
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the route file and build the trie
    Check,
    /// List registered routes
    Routes,
    /// Resolve paths and print the handler and bindings as JSON
    Match {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Resolve paths again every time the route file changes
    Watch { paths: Vec<String> },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    logging::init(&config.observability);

    let trie = build_trie(&config)?;
    tracing::info!(
        config = ?cli.config,
        routes = trie.len(),
        "Route table loaded"
    );

    match cli.command {
        Commands::Check => {
            println!("{}: {} routes OK", cli.config.display(), trie.len());
        }
        Commands::Routes => {
            for (template, handler) in trie.routes() {
                println!("{}\t{}", template, handler);
            }
        }
        Commands::Match { paths } => {
            let mut misses = 0;
            for path in &paths {
                let result = trie
                    .match_path(path)
                    .map(|found| (found.handler.clone(), found.bindings));
                if result.is_err() {
                    misses += 1;
                }
                println!("{}", report(path, result));
            }
            if misses > 0 {
                std::process::exit(1);
            }
        }
        Commands::Watch { paths } => {
            let table = RouteTable::new(trie);
            resolve_all(&table, &paths);

            let (watcher, mut updates) = RouteWatcher::new(&cli.config);
            let _watcher = watcher.run()?;

            loop {
                tokio::select! {
                    Some(trie) = updates.recv() => {
                        table.replace(trie);
                        resolve_all(&table, &paths);
                    }
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("Shutdown signal received");
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

fn resolve_all(table: &RouteTable<String>, paths: &[String]) {
    for path in paths {
        println!("{}", report(path, table.match_owned(path)));
    }
}

fn report(path: &str, result: RouteResult<(String, Bindings)>) -> Value {
    match result {
        Ok((handler, bindings)) => json!({
            "path": path,
            "handler": handler,
            "bindings": bindings,
        }),
        Err(RouteError::RouteNotFound { bindings, .. }) => json!({
            "path": path,
            "error": "route not found",
            "bindings": bindings,
        }),
        Err(e) => json!({
            "path": path,
            "error": e.to_string(),
        }),
    }
}
