// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! pipewatch - Nagios-style health probe for GitLab pipelines

mod output;

use anyhow::Result;
use clap::{ArgAction, Parser};
use pipewatch_core::{GitlabClient, Probe, ProjectFilter, Report, WatchSet};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit code for the monitoring host when the probe itself fails.
const EXIT_UNKNOWN: u8 = 3;

#[derive(Parser)]
#[command(
    name = "pipewatch",
    version,
    about = "Checks GitLab pipeline status for monitored refs"
)]
struct Cli {
    /// URL of the GitLab server API
    #[arg(short, long, default_value = "http://localhost")]
    url: String,

    /// GitLab private access token; empty means unauthenticated
    #[arg(short, long, default_value = "")]
    token: String,

    /// Project path regex, anchored at the start; can be used multiple times
    #[arg(short, long = "project", value_name = "REGEX")]
    project: Vec<String>,

    /// Ref that generates a warning if its last pipeline failed; repeatable
    #[arg(short, long = "warning-ref", value_name = "REF")]
    warning_ref: Vec<String>,

    /// Ref that goes critical if its last pipeline failed; repeatable
    #[arg(short, long = "critical-ref", value_name = "REF")]
    critical_ref: Vec<String>,

    /// Increase diagnostic verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(report) => {
            println!("{}", output::status_line(&report));
            if cli.verbose > 0 {
                for line in output::detail_lines(&report) {
                    println!("{}", line);
                }
            }
            ExitCode::from(report.exit_code())
        }
        Err(err) => {
            println!("PIPEWATCH UNKNOWN: {}", err);
            ExitCode::from(EXIT_UNKNOWN)
        }
    }
}

fn run(cli: &Cli) -> Result<Report> {
    let filter = ProjectFilter::new(&cli.project)?;
    let watch = WatchSet::new(cli.warning_ref.clone(), cli.critical_ref.clone());
    let client = GitlabClient::new(&cli.url, &cli.token);

    tracing::info!(url = %cli.url, "probing");
    let probe = Probe::new(client, filter, watch);
    let metrics = probe.run()?;

    Ok(Report::new(metrics))
}

/// Set up subscriber with env filter; RUST_LOG overrides the verbosity
/// flag. Diagnostics go to stderr so the plugin line stays clean.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
