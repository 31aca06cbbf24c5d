// src/index/mod.rs
//! Frequency ranking and per-article projection onto ranks.

pub mod frequency;
pub mod project;

pub use frequency::{build_index, FrequencyTable, RankedItem};
pub use project::{project, project_dual, DualIndex, PerArticleIndex};
