use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;

use cardfeed::cli::Cli;
use cardfeed::config::Config;
use cardfeed::logging::{init_tracing, resolve_filter, LogTarget};
use cardfeed::{DataLoader, FeedViewModel, Resource};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?;

    let resource_path = cli.resource.as_deref().or(config.resource.path.as_deref());
    let resource = Resource::resolve(resource_path);
    let filter = resolve_filter(cli.log_filter.as_deref(), &config.logging.filter);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("cardfeed-worker")
        .build()
        .context("Failed to start async runtime")?;

    let view_model = FeedViewModel::new(DataLoader::new(resource), config.fetch.parse_errors);

    if cli.dump {
        init_tracing(filter, LogTarget::Stderr).context("Failed to initialize logging")?;
        return dump(&runtime, &view_model);
    }

    let log_file = config.log_file();
    init_tracing(filter, LogTarget::File(&log_file))
        .with_context(|| format!("Failed to open log file '{}'", log_file.display()))?;
    tracing::info!(origin = %view_model.loader().resource().origin(), "starting");

    cardfeed::ui::runtime::run(&config, view_model, runtime.handle())
}

/// Headless mode: one fetch, items on stdout, non-zero exit when it ends errored.
fn dump(runtime: &tokio::runtime::Runtime, view_model: &FeedViewModel) -> anyhow::Result<()> {
    runtime.block_on(view_model.fetch())?;

    let state = view_model.state();
    if state.errored {
        anyhow::bail!(
            "Failed to load resource '{}'",
            view_model.loader().resource().origin()
        );
    }

    let mut out = io::stdout().lock();
    for item in &state.items {
        writeln!(out, "{}", item.to_json())?;
    }
    out.flush()?;
    Ok(())
}
