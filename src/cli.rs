use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "cardfeed", version, about = "Browse a JSON list of cards in the terminal")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JSON file to load instead of the bundled sample
    #[arg(long, value_name = "PATH")]
    pub resource: Option<PathBuf>,

    /// Load once, print each item as a JSON line, and exit
    #[arg(long)]
    pub dump: bool,

    /// Log filter directive, overrides RUST_LOG and the config file
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}
