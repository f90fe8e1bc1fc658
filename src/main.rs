use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser as _;
use log::{info, warn};

use lndb_organizer::components::{session, PromptChooser};
use lndb_organizer::config::Config;
use lndb_organizer::context::{CancelToken, Context};
use lndb_organizer::parser::Lndb;
use lndb_organizer::sink;

#[derive(clap::Parser, Debug)]
#[command(
    name = "lndb-organizer",
    version,
    about = "Rename light novel volumes using LNDB metadata and submit them to the catalog"
)]
struct Cli {
    /// JSON configuration file
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Directory holding the volume files
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Keyword for the first search, skipping the prompt
    #[arg(long)]
    keyword: Option<String>,

    /// Search through the autocomplete endpoint, which covers every category
    #[arg(long)]
    all: bool,

    /// Enable debug logs
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = Config::load(&args.config)?;
    let working_dir = args
        .dir
        .canonicalize()
        .with_context(|| format!("working directory {}", args.dir.display()))?;

    let cancel = CancelToken::new();
    let handler = cancel.clone();
    ctrlc::set_handler(move || {
        if handler.is_cancelled() {
            std::process::exit(130);
        }
        warn!("stopping after the current file, press Ctrl-C again to quit now");
        handler.cancel();
    })?;

    let ctx = Context::new(&config, working_dir, cancel);
    let catalog = sink::create(&config.catalog.endpoint)?;
    let lndb = Lndb::new(config, args.all)?;

    match session::run(&ctx, &lndb, &PromptChooser, &catalog, args.keyword)? {
        Some(report) if report.cancelled => info!("cancelled"),
        Some(_) => info!("done"),
        None => info!("cancelled before a novel was selected"),
    }

    Ok(())
}
