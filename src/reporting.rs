// src/reporting.rs
//! Console and JSON output for the CLI.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::index::{DualIndex, RankedItem};
use crate::network::{Network, Summary};

#[derive(Serialize)]
struct TopRow<'a> {
    #[serde(flatten)]
    item: &'a RankedItem,
    label: &'a str,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
struct ArticleRef<'a> {
    n: usize,
    id: &'a str,
}

#[derive(Serialize)]
struct DualRow<'a> {
    rank: usize,
    item: &'a str,
    label: &'a str,
    articles: Vec<ArticleRef<'a>>,
}

/// Prints the build summary after a network has been written.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_summary(network: &Network, output: &Path, json: bool) -> Result<()> {
    let s: Summary = network.summary();
    if json {
        println!("{}", serde_json::to_string_pretty(&s)?);
        return Ok(());
    }
    println!(
        "{} {} network -> {}",
        "✓".green().bold(),
        network.socket.to_string().bold(),
        output.display()
    );
    println!(
        "{}",
        format!(
            "  {} vertices, {} edges, {} isolated, max weight {}, {} articles indexed",
            s.vertices, s.edges, s.isolated, s.max_weight, s.articles_indexed
        )
        .dimmed()
    );
    if s.edges == 0 {
        println!("{}", "  no co-occurring pairs: the graph has no edges".yellow());
    }
    Ok(())
}

/// Prints ranked items with their counts and labels.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_top(network: &Network, json: bool) -> Result<()> {
    let rows: Vec<TopRow<'_>> = network
        .table
        .items()
        .iter()
        .map(|item| TopRow {
            item,
            label: network.labels.get(item.rank).unwrap_or(""),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{}", format!("Top {} {} items", rows.len(), network.socket).bold());
    for row in &rows {
        println!(
            "{:>5}  {:>6}  {}  {}",
            row.item.rank,
            row.item.count,
            row.label.cyan(),
            row.item.item.dimmed()
        );
    }
    Ok(())
}

fn dual_rows<'a>(network: &'a Network, dual: &'a DualIndex, articles: &[&'a str]) -> Vec<DualRow<'a>> {
    let numbers: HashMap<&str, usize> = articles.iter().enumerate().map(|(n, id)| (*id, n)).collect();
    network
        .table
        .items()
        .iter()
        .map(|r| DualRow {
            rank: r.rank,
            item: &r.item,
            label: network.labels.get(r.rank).unwrap_or(""),
            articles: dual
                .get(&r.rank)
                .into_iter()
                .flatten()
                .filter_map(|id| numbers.get(id.as_str()).map(|&n| ArticleRef { n, id }))
                .collect(),
        })
        .collect()
}

/// Prints each ranked item with the articles carrying it. Articles are
/// numbered by their position in `articles` (see [`crate::network::article_labels`]).
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_dual(network: &Network, dual: &DualIndex, articles: &[&str], json: bool) -> Result<()> {
    let rows = dual_rows(network, dual, articles);

    if json {
        let keyed: BTreeMap<usize, &DualRow<'_>> = rows.iter().map(|r| (r.rank, r)).collect();
        println!("{}", serde_json::to_string_pretty(&keyed)?);
        return Ok(());
    }

    for row in &rows {
        println!(
            "{} {} {}",
            row.label.cyan().bold(),
            format!("({} articles)", row.articles.len()).dimmed(),
            row.item.dimmed()
        );
        for article in &row.articles {
            println!("    {:>4}  {}", format!("#{}", article.n).dimmed(), article.id);
        }
    }
    Ok(())
}
