//! Router CLI.
//!
//! Loads a route configuration and exercises the router against it:
//!
//! ```text
//! spa-router --config routes.toml match /users/42
//! spa-router query "?tag=a&tag=b"
//! spa-router --config routes.toml simulate /about /users/7 back replace:/blog/1 forward
//! ```
//!
//! Output is one JSON document per line on stdout; `simulate` lines carry the
//! dispatched event name and its `detail` record. Logs go to stderr.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;

use spa_router::config::{load_config, RouterConfig};
use spa_router::navigation::{
    Dispatch, MemoryHistory, NavigationController, NavigationEvent, StateHandle,
};
use spa_router::observability::logging::init_logging;
use spa_router::routing::{parse_query, RouteOutcome, RouteParams};

#[derive(Parser)]
#[command(name = "spa-router")]
#[command(about = "Match paths and simulate navigation against a route table", long_about = None)]
struct Cli {
    /// Route configuration file (TOML). Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the route table against a path
    Match {
        path: String,
    },
    /// Decode a query string
    Query {
        search: String,
    },
    /// Run a navigation session on an in-memory history.
    ///
    /// Steps: a target path, `replace:<target>`, `back` or `forward`.
    Simulate {
        /// Location the session starts at
        #[arg(long, default_value = "/")]
        start: String,

        steps: Vec<String>,
    },
}

/// One line of `match` / `simulate` output.
#[derive(Serialize)]
struct Report<'a> {
    step: &'a str,
    outcome: RouteOutcome,
    content: Option<&'a str>,
    #[serde(flatten)]
    dispatch: Dispatch<'a>,
}

/// Output of `match`.
#[derive(Serialize)]
struct MatchReport<'a> {
    path: &'a str,
    outcome: RouteOutcome,
    content: Option<&'a str>,
    params: &'a RouteParams,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };
    init_logging(&config.observability)?;

    tracing::debug!(
        routes = config.routes.len(),
        origin = %config.origin,
        "Router configuration ready"
    );

    match cli.command {
        Commands::Match { path } => {
            let table = config.build_table();
            let eval = table.evaluate(&path);
            let report = MatchReport {
                path: &path,
                outcome: eval.outcome(),
                content: eval.active_handle.map(String::as_str),
                params: &eval.params,
            };
            println!("{}", serde_json::to_string(&report)?);
        }
        Commands::Query { search } => {
            println!("{}", serde_json::to_string(&parse_query(&search))?);
        }
        Commands::Simulate { start, steps } => simulate(&config, &start, &steps)?,
    }

    Ok(())
}

fn simulate(
    config: &RouterConfig,
    start: &str,
    steps: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let origin = config.origin_url()?;
    let table = Arc::new(config.build_table());
    let mut controller = NavigationController::new(
        table,
        MemoryHistory::starting_at(start),
        &origin,
        StateHandle::new(),
    );

    // Subscribers only see borrowed handles, so record the visible content by value
    let visible = std::rc::Rc::new(std::cell::RefCell::new((RouteOutcome::None, None::<String>)));
    let sink = std::rc::Rc::clone(&visible);
    controller.subscribe(move |_event, eval| {
        *sink.borrow_mut() = (eval.outcome(), eval.active_handle.cloned());
    });

    let event = controller.start();
    print_step("start", &event, &visible.borrow())?;

    for step in steps {
        let event = match step.as_str() {
            "back" => controller.back(),
            "forward" => controller.forward(),
            other => Some(match other.strip_prefix("replace:") {
                Some(target) => controller.navigate(target, true),
                None => controller.navigate(other, false),
            }),
        };

        match event {
            Some(event) => print_step(step, &event, &visible.borrow())?,
            None => tracing::warn!(step = %step, "History boundary reached, step ignored"),
        }
    }

    Ok(())
}

fn print_step(
    step: &str,
    event: &NavigationEvent,
    visible: &(RouteOutcome, Option<String>),
) -> Result<(), serde_json::Error> {
    let report = Report {
        step,
        outcome: visible.0,
        content: visible.1.as_deref(),
        dispatch: Dispatch::from(event),
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
