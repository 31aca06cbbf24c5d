use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::types::Socket;

#[derive(Parser)]
#[command(name = "biblionet", version, about = "Co-occurrence networks from bibliographic exports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Read settings from this file instead of ./biblionet.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Debug-level logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a network and write it as a Pajek .net file
    Build {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the ranked items of a socket
    Top {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long)]
        json: bool,
    },
    /// List each top-ranked citation with the articles citing it
    Dual {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long)]
        json: bool,
    },
}

/// Corpus location and network parameters shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Directory of tab-delimited export files
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,
    #[arg(long, short, value_enum)]
    pub socket: Option<Socket>,
    /// Number of top-ranked items to keep
    #[arg(long, short = 'n', value_name = "N")]
    pub top: Option<usize>,
    /// Keep articles published in or after this year
    #[arg(long, value_name = "YEAR")]
    pub from_year: Option<u32>,
    /// Keep articles cited at least this often
    #[arg(long, value_name = "COUNT")]
    pub min_citations: Option<u32>,
    /// Stop-word file for the content socket, one word per line
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,
}
