use clap::{Parser, Subcommand};
use ctc_core::Config;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

mod commands;
mod view;

#[derive(Parser)]
#[command(name = "ctc", version, about = "CTC - Chud to Chad daily habit tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (today / social / progress panels)
    Session,
    /// Score a day from completed task ids
    Score(commands::score::DayArgs),
    /// Weekly stats including today
    Stats(commands::score::DayArgs),
    /// List starter tasks
    Tasks,
    /// Friends feed
    Feed,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Install the stderr subscriber. `RUST_LOG` wins; otherwise start at `warn`
/// until a config is loaded. The handle is `None` when `RUST_LOG` is set.
fn init_tracing() -> Option<FilterHandle> {
    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new("warn"), false),
    };
    let (filter, handle) = reload::Layer::new(filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    (!from_env).then_some(handle)
}

/// Load config for commands that read it and apply its log filter.
fn load_config(handle: Option<&FilterHandle>) -> Config {
    let config = Config::load_or_default();
    if let Some(handle) = handle {
        if let Err(e) = handle.reload(EnvFilter::new(&config.log.filter)) {
            tracing::warn!(error = %e, "failed to apply configured log filter");
        }
    }
    config
}

fn main() {
    let cli = Cli::parse();
    let handle = init_tracing();

    let result = match cli.command {
        Commands::Session => commands::session::run(&load_config(handle.as_ref())),
        Commands::Score(args) => commands::score::run_score(args, &load_config(handle.as_ref())),
        Commands::Stats(args) => commands::score::run_stats(args, &load_config(handle.as_ref())),
        Commands::Tasks => commands::feed::run_tasks(),
        Commands::Feed => commands::feed::run_feed(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
