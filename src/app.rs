// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod redub;
pub mod renamer;
pub mod rewriter;
pub mod scanner;

use anyhow::Result;
use clap::Parser;
use std::io;
use std::time::Instant;

use self::cli::Cli;
use self::config::{load_settings, resolve_config};
use self::formatter::OutputGenerator;

/// Parses arguments, gathers the run configuration, then redubs the tree.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();
    init_logging(args.verbose);

    if !args.no_banner {
        println!("{}", OutputGenerator::banner());
    }

    // 2. Resolve Configuration (settings file, arguments, prompts, confirmation)
    let settings = load_settings()?;
    let config = resolve_config(args, settings, &mut io::stdin().lock(), &mut io::stdout())?;
    log::debug!("Resolved configuration: {:?}", config);

    // 3. Walk and rewrite, printing each event as it happens
    let output = OutputGenerator::new(&config.root);
    let start = Instant::now();
    redub::run(&config, &mut |event| println!("{}", output.render(&event)))?;

    // 4. Report
    println!("{}", OutputGenerator::completed(start.elapsed()));

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
