// src/bin/biblionet.rs
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use biblionet_core::cli::{dispatch, Cli};
use biblionet_core::exit::BiblioExit;

fn main() -> BiblioExit {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match dispatch::execute(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            BiblioExit::from_error(&e)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "biblionet_core=debug,biblionet=debug" } else { "biblionet_core=info,biblionet=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
