use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use anyhow::Context;
use colored::Colorize;

use keyfold_io::{read_pair_streams, write_pairs};
use keyfold_merge::{merge_report, MergeReport};
use keyfold_types::SparseVector;

use crate::cli::{Cli, Command, InspectArgs, MergeArgs, OutputFormat};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Merge(args) => cmd_merge(args, &cli.format),
        Command::Inspect(args) => cmd_inspect(args, &cli.format),
    }
}

fn cmd_merge(args: MergeArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let (a, b) = read_input(args.input.as_deref())?;
    let report = merge_report(&a, &b);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            render_merged(file, &report.merged, format)?;
        }
        None => render_merged(io::stdout().lock(), &report.merged, format)?,
    }

    if args.summary {
        // Summary goes to stderr so merged pairs on stdout stay clean.
        eprintln!(
            "{} Folded {} pairs into {} keys",
            "✓".green().bold(),
            report.pairs_folded,
            report.distinct_keys(),
        );
        eprintln!(
            "  shared: {}, only left: {}, only right: {}",
            report.shared_keys, report.only_left, report.only_right,
        );
    }
    Ok(())
}

fn cmd_inspect(args: InspectArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let (a, b) = read_input(args.input.as_deref())?;
    let report = merge_report(&a, &b);

    match format {
        OutputFormat::Text => {
            println!("Pairs folded: {}", report.pairs_folded.to_string().bold());
            println!("Distinct keys: {}", report.distinct_keys().to_string().bold());
            println!("  shared: {}", report.shared_keys.to_string().yellow());
            println!("  only left: {}", report.only_left.to_string().yellow());
            println!("  only right: {}", report.only_right.to_string().yellow());
        }
        OutputFormat::Json => {
            let stdout = io::stdout().lock();
            render_report(stdout, &report)?;
        }
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> anyhow::Result<(SparseVector, SparseVector)> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            read_pair_streams(BufReader::new(file))
                .with_context(|| format!("malformed input in {}", path.display()))
        }
        None => read_pair_streams(io::stdin().lock()).context("malformed input on stdin"),
    }
}

fn render_merged<W: Write>(
    mut writer: W,
    merged: &SparseVector,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => write_pairs(&mut writer, merged)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut writer, merged)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn render_report<W: Write>(mut writer: W, report: &MergeReport) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    Ok(())
}
