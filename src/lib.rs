pub mod annotate;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod exit;
pub mod index;
pub mod metadata;
pub mod network;
pub mod reporting;
pub mod stopwords;
pub mod types;

pub use error::{BiblioError, Result};
pub use network::Network;
pub use stopwords::StopWords;
pub use types::{Corpus, Field, Record, Socket};
