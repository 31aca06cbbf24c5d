// src/cli/handlers.rs
//! Command handlers: load, filter, build, report.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::info;

use super::args::SourceArgs;
use crate::annotate::citation;
use crate::config::Config;
use crate::corpus;
use crate::exit::BiblioExit;
use crate::metadata;
use crate::network::{self, Network};
use crate::reporting;
use crate::types::{Corpus, Socket};

/// Folds command-line overrides into the loaded config.
fn merge(mut config: Config, source: &SourceArgs) -> Result<Config> {
    if let Some(socket) = source.socket {
        config.network.socket = socket;
    }
    if let Some(top) = source.top {
        config.network.top_n = top;
    }
    if let Some(year) = source.from_year {
        config.filter.from_year = Some(year);
    }
    if let Some(min) = source.min_citations {
        config.filter.min_citations = min;
    }
    if let Some(path) = &source.stopwords {
        config.content.stopwords_file = Some(path.clone());
    }
    config.validate()?;
    Ok(config)
}

fn load_corpus(config: &Config, source: &SourceArgs) -> Result<Corpus> {
    let corpus = corpus::load_dir(&source.dir, &config.corpus)
        .with_context(|| format!("loading corpus from {}", source.dir.display()))?;
    info!(articles = corpus.len(), dir = %source.dir.display(), "loaded corpus");

    if !config.filter.is_active() {
        return Ok(corpus);
    }
    let meta = metadata::extract(&corpus)?;
    let kept = metadata::filter(&corpus, &meta, &config.filter);
    info!(kept = kept.len(), dropped = corpus.len() - kept.len(), "applied metadata filter");
    Ok(kept)
}

fn build_network(config: &Config, corpus: &Corpus) -> Result<Network> {
    let stop = config.stopwords()?;
    let network = Network::build(config.network.socket, config.network.top_n, corpus, &stop)?;
    Ok(network)
}

/// Handles the build command.
///
/// # Errors
/// Returns error if loading, building or writing fails.
pub fn handle_build(
    config: Config,
    source: &SourceArgs,
    output: Option<PathBuf>,
    json: bool,
) -> Result<BiblioExit> {
    let config = merge(config, source)?;
    let corpus = load_corpus(&config, source)?;
    let network = build_network(&config, &corpus)?;

    let output = output.unwrap_or_else(|| config.network.output.clone());
    network.export(&output)?;
    reporting::print_summary(&network, &output, json)?;

    Ok(if network.summary().edges == 0 {
        BiblioExit::EmptyNetwork
    } else {
        BiblioExit::Success
    })
}

/// Handles the top command.
///
/// # Errors
/// Returns error if loading or building fails.
pub fn handle_top(config: Config, source: &SourceArgs, json: bool) -> Result<BiblioExit> {
    let config = merge(config, source)?;
    let corpus = load_corpus(&config, source)?;
    let network = build_network(&config, &corpus)?;
    reporting::print_top(&network, json)?;
    Ok(BiblioExit::Success)
}

/// Handles the dual command. Only meaningful for citations.
///
/// # Errors
/// Returns error if a non-citation socket was requested on the command line or
/// in the config file, or if building fails.
pub fn handle_dual(config: Config, source: &SourceArgs, json: bool) -> Result<BiblioExit> {
    let config = merge(config, source)?;
    if config.network.socket != Socket::Citation {
        bail!(
            "dual index is built from cited references, not the {} socket",
            config.network.socket
        );
    }

    let corpus = load_corpus(&config, source)?;
    let network = build_network(&config, &corpus)?;
    let dual = network.dual(citation::FIELD, &corpus)?;
    reporting::print_dual(&network, &dual, &network::article_labels(&corpus), json)?;
    Ok(BiblioExit::Success)
}
