// tests/integration_export.rs
//! Loads an on-disk export, builds a network and checks the written Pajek file.

use anyhow::Result;
use biblionet_core::cli::{dispatch, Cli};
use biblionet_core::config::CorpusConfig;
use biblionet_core::corpus;
use biblionet_core::exit::BiblioExit;
use biblionet_core::{Network, Socket, StopWords};
use clap::Parser;
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

// --- Helpers ---

const HEADER: &str = "PT\tAU\tTI\tC1\tCR\tPY\tTC\tUT";

fn export_dir(rows: &[&str]) -> Result<TempDir> {
    let dir = tempfile::tempdir()?;
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    fs::write(dir.path().join("savedrecs.txt"), text)?;
    Ok(dir)
}

fn sample() -> Result<TempDir> {
    export_dir(&[
        "J\tA\tT1\t[A] MIT, X\tSmith J, 2000, NATURE; Jones K, 2001, SCIENCE; Smith J, 2000, CELL\t2001\t5\tWOS:1",
        "J\tB\tT2\t[B] MIT, Y\tSmith J, 2000, NATURE; Jones K, 2001, SCIENCE\t1998\t\tWOS:2",
        "J\tC\tT3\t[C] Yale Univ, Z\tLee M, 1999, PNAS\t2005\t40\tWOS:3",
    ])
}

fn vertex_and_edge_lines(text: &str) -> (Vec<&str>, Vec<&str>) {
    let mut lines = text.lines();
    let header = lines.next().unwrap_or_default();
    let n: usize = header.trim_start_matches("*Vertices ").parse().unwrap_or(usize::MAX);
    let vertices: Vec<&str> = lines.by_ref().take(n).collect();
    assert_eq!(lines.next(), Some("*Edges "));
    (vertices, lines.collect())
}

// --- Export format ---

#[test]
fn test_pajek_file_shape() -> Result<()> {
    let dir = sample()?;
    let corpus = corpus::load_dir(dir.path(), &CorpusConfig::default())?;
    let network = Network::build(Socket::Citation, 10, &corpus, &StopWords::new())?;

    let out = dir.path().join("cites.net");
    network.export(&out)?;
    let text = fs::read_to_string(&out)?;
    let (vertices, edges) = vertex_and_edge_lines(&text);

    assert_eq!(vertices.len(), network.matrix.size());
    assert_eq!(vertices[0], "1 SMITH_J_2000_0");
    assert!(vertices.contains(&"3 SMITH_J_2000_1"));

    let mut seen = HashSet::new();
    for line in &edges {
        let parts: Vec<u64> = line.split(' ').map(|p| p.parse().unwrap()).collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[0] < parts[1], "edge not upper-triangle: {line}");
        assert!(parts[2] > 0);
        assert!(seen.insert((parts[0], parts[1])), "repeated edge: {line}");
    }
    // NATURE-SCIENCE (twice), NATURE-CELL, SCIENCE-CELL
    assert_eq!(edges, vec!["1 2 2", "1 3 1", "2 3 1"]);
    Ok(())
}

#[test]
fn test_empty_network_still_writes_header() -> Result<()> {
    let dir = export_dir(&["J\tA\tT\tMIT, X\tLee M, 1999, PNAS\t2001\t1\tWOS:9"])?;
    let corpus = corpus::load_dir(dir.path(), &CorpusConfig::default())?;
    let network = Network::build(Socket::Citation, 10, &corpus, &StopWords::new())?;
    assert_eq!(network.render()?, "*Vertices 1\n1 LEE_M_1999_0\n*Edges \n");
    Ok(())
}

// --- CLI ---

#[test]
fn test_build_command_writes_output() -> Result<()> {
    let dir = sample()?;
    let out = dir.path().join("orgs.net");
    let cli = Cli::try_parse_from([
        "biblionet",
        "build",
        dir.path().to_str().unwrap_or_default(),
        "--socket",
        "organisation",
        "--output",
        out.to_str().unwrap_or_default(),
    ])?;

    let code = dispatch::execute(cli)?;
    assert_eq!(code, BiblioExit::EmptyNetwork);
    let text = fs::read_to_string(&out)?;
    assert!(text.starts_with("*Vertices 2\n1 MIT\n2 Yale_Univ\n"));
    Ok(())
}

#[test]
fn test_build_command_applies_metadata_filter() -> Result<()> {
    let dir = sample()?;
    let out = dir.path().join("recent.net");
    let cli = Cli::try_parse_from([
        "biblionet",
        "build",
        dir.path().to_str().unwrap_or_default(),
        "--from-year",
        "2000",
        "--output",
        out.to_str().unwrap_or_default(),
    ])?;

    assert_eq!(dispatch::execute(cli)?, BiblioExit::Success);
    let text = fs::read_to_string(&out)?;
    // WOS:2 (1998) is gone; WOS:1 and WOS:3 remain.
    assert!(text.starts_with("*Vertices 4\n"));
    assert!(text.contains("LEE_M_1999_0"));
    Ok(())
}

#[test]
fn test_missing_field_is_invalid_input() -> Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("a.txt"), "UT\tCR\nWOS:1\tx, 1\n")?;
    let cli = Cli::try_parse_from([
        "biblionet",
        "top",
        dir.path().to_str().unwrap_or_default(),
        "--socket",
        "content",
    ])?;

    let err = dispatch::execute(cli).unwrap_err();
    assert_eq!(BiblioExit::from_error(&err), BiblioExit::InvalidInput);
    Ok(())
}

#[test]
fn test_dual_rejects_non_citation_socket_from_config_file() -> Result<()> {
    let dir = sample()?;
    let config = dir.path().join("biblionet.toml");
    fs::write(&config, "[network]\nsocket = \"content\"\n")?;
    let cli = Cli::try_parse_from([
        "biblionet",
        "dual",
        dir.path().to_str().unwrap_or_default(),
        "--config",
        config.to_str().unwrap_or_default(),
    ])?;

    let err = dispatch::execute(cli).unwrap_err();
    assert!(err.to_string().contains("not the content socket"), "{err}");
    Ok(())
}

#[test]
fn test_dual_accepts_citation_socket_from_config_file() -> Result<()> {
    let dir = sample()?;
    let config = dir.path().join("biblionet.toml");
    fs::write(&config, "[network]\nsocket = \"citation\"\ntop_n = 2\n")?;
    let cli = Cli::try_parse_from([
        "biblionet",
        "dual",
        dir.path().to_str().unwrap_or_default(),
        "--config",
        config.to_str().unwrap_or_default(),
        "--json",
    ])?;

    assert_eq!(dispatch::execute(cli)?, BiblioExit::Success);
    Ok(())
}

#[test]
fn test_build_command_accepts_json_summary() -> Result<()> {
    let dir = sample()?;
    let out = dir.path().join("refs.net");
    let cli = Cli::try_parse_from([
        "biblionet",
        "build",
        dir.path().to_str().unwrap_or_default(),
        "--output",
        out.to_str().unwrap_or_default(),
        "--json",
    ])?;

    assert_eq!(dispatch::execute(cli)?, BiblioExit::Success);
    assert!(out.exists());
    Ok(())
}
