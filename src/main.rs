//! glue-dispatch command-line front-end.
//!
//! Supplies the path and method that the dispatcher needs, either from the
//! command line or line by line from stdin, and prints what the handler
//! returns.
//!
//! ```text
//!   argv / stdin line          config.toml
//!         │                        │
//!         ▼                        ▼
//!   ┌───────────┐   ┌─────────────────────────┐
//!   │  Request  │   │ RouteTable + ambient ctx │◀── watcher (repl --watch)
//!   └─────┬─────┘   └────────────┬────────────┘
//!         └──────────┬───────────┘
//!                    ▼
//!              Router::dispatch ──▶ handler output (stdout)
//!                    │
//!                    └──▶ "<status> <error>" (stderr)
//! ```

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use arc_swap::ArcSwap;
use clap::{Parser, Subcommand};

use glue_dispatch::config::{
    load_config, override_log_level, ConfigWatcher, DispatchConfig, SharedRouteTable,
};
use glue_dispatch::handlers::{builtin_registry, default_routes};
use glue_dispatch::observability::logging;
use glue_dispatch::routing::{Request, RequestContext, Router};

#[derive(Parser)]
#[command(name = "glue-dispatch")]
#[command(about = "Dispatch request paths to handlers through a regex route table", long_about = None)]
struct Cli {
    /// Route table and settings (TOML). Built-in routes are used if omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured log level.
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dispatch one request and print the handler output
    Dispatch {
        /// Request path; falls back to [request].path from the config
        path: Option<String>,

        /// Request verb (GET, POST, PUT, DELETE, CLI)
        #[arg(short, long)]
        method: Option<String>,
    },
    /// List routes in match order
    Routes,
    /// Read "[VERB] PATH" lines from stdin and dispatch each
    Repl {
        /// Reload the route table when the config file changes
        #[arg(long)]
        watch: bool,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DispatchConfig {
            routes: default_routes(),
            ..Default::default()
        },
    };
    if let Some(level) = cli.log_level {
        override_log_level(&mut config, level)?;
    }

    logging::init(&config.observability);
    tracing::info!(
        config = ?cli.config,
        routes = config.routes.len(),
        "glue-dispatch v0.1.0 starting"
    );

    let router = Router::new(builtin_registry());
    for (pattern, handler) in &config.routes {
        if !router.registry().contains(handler) {
            tracing::warn!(
                pattern = %pattern,
                handler = %handler,
                "Route refers to an unregistered handler"
            );
        }
    }
    let table = config.route_table()?;

    match cli.command {
        Commands::Dispatch { path, method } => {
            let request = Request {
                path: path.as_deref(),
                method: method.as_deref(),
            };
            match router.dispatch(&table, request, &config.request) {
                Ok(body) => println!("{}", body),
                Err(e) => {
                    eprintln!("{} {}", e.status_code(), e);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Commands::Routes => {
            for route in table.iter() {
                println!("{}\t{}", route.pattern(), route.handler());
            }
        }
        Commands::Repl { watch } => {
            let shared: SharedRouteTable = Arc::new(ArcSwap::from_pointee(table));

            // Held for the lifetime of the loop; dropping it stops watching.
            let _watcher = match (&cli.config, watch) {
                (Some(path), true) => Some(ConfigWatcher::new(path, shared.clone()).run()?),
                (None, true) => {
                    tracing::warn!("--watch needs --config; routes will not reload");
                    None
                }
                _ => None,
            };

            repl(&router, &shared, &config.request)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Dispatch each stdin line until EOF. Failures are reported and the loop
/// continues.
fn repl(
    router: &Router<String>,
    table: &SharedRouteTable,
    ctx: &RequestContext,
) -> io::Result<()> {
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let snapshot = table.load();
        match router.dispatch(&snapshot, parse_line(line), ctx) {
            Ok(body) => println!("{}", body),
            Err(e) => eprintln!("{} {}", e.status_code(), e),
        }
    }
    Ok(())
}

/// `"POST /page/1"`, `"/page/1"` or a bare verb.
fn parse_line(line: &str) -> Request<'_> {
    match line.split_once(char::is_whitespace) {
        Some((verb, path)) => Request::new(path.trim(), verb),
        None if line.starts_with('/') => Request::path(line),
        None => Request {
            path: None,
            method: Some(line),
        },
    }
}
