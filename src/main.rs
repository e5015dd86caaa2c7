// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * aphelion - Multi-Framework Compliance Assessment
 * Standalone CLI for cybersecurity compliance scoring
 *
 * Features:
 * - 8 supported compliance frameworks
 * - Weighted security scoring and risk-tier classification
 * - Prioritized remediation recommendations
 * - Multiple report formats (HTML, JSON, Markdown)
 * - Stateless HTTP assessment API
 *
 * (c) 2026 Bountyy Oy
 */

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};

use aphelion_assess::analytics::compute_analytics;
use aphelion_assess::api::{create_router, ApiState};
use aphelion_assess::catalog::{controls, frameworks};
use aphelion_assess::reporting::{ReportConfig, ReportEngine, ReportFormat};
use aphelion_assess::types::{AnalyticsResult, Selection};

/// aphelion - Multi-Framework Compliance Assessment
#[derive(Parser)]
#[command(name = "aphelion")]
#[command(author = "Bountyy Oy <info@bountyy.fi>")]
#[command(version = "2.1.0")]
#[command(about = "Cybersecurity compliance scoring across 8 frameworks", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode - only show results
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported compliance frameworks
    Frameworks,

    /// List the applicable controls for one or more frameworks
    Controls {
        /// Framework id(s), e.g. nist_csf, hipaa
        #[arg(short, long = "framework", required = true)]
        frameworks: Vec<String>,
    },

    /// Run a compliance assessment
    Assess {
        /// Framework id(s) to assess against
        #[arg(short, long = "framework", required = true)]
        frameworks: Vec<String>,

        /// Implemented control name (repeatable)
        #[arg(short, long = "control")]
        controls: Vec<String>,

        /// JSON file with an array of implemented control names
        #[arg(long)]
        controls_file: Option<PathBuf>,

        /// Output format: table, json, html, markdown
        #[arg(long, default_value = "table")]
        format: OutputFormat,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the HTTP assessment API
    Serve {
        /// Listen port
        #[arg(short, long, default_value = "6767")]
        port: u16,

        /// Bind address
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Html,
    Markdown,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if !cli.quiet {
        print_banner();
    }

    match cli.command {
        Commands::Frameworks => list_frameworks(),
        Commands::Controls { frameworks } => list_controls(&frameworks),
        Commands::Assess {
            frameworks,
            controls,
            controls_file,
            format,
            output,
        } => run_assessment(frameworks, controls, controls_file, format, output).await,
        Commands::Serve { port, bind } => serve(&bind, port).await,
    }
}

fn print_banner() {
    println!("             _          _ _");
    println!("  __ _ _ __ | |__   ___| (_) ___  _ __");
    println!(" / _` | '_ \\| '_ \\ / _ \\ | |/ _ \\| '_ \\");
    println!("| (_| | |_) | | | |  __/ | | (_) | | | |");
    println!(" \\__,_| .__/|_| |_|\\___|_|_|\\___/|_| |_|");
    println!("      |_|");
    println!("   Multi-Framework Compliance Assessment");
    println!("        v2.1 - (c) 2026 Bountyy Oy");
    println!();
}

fn list_frameworks() -> Result<()> {
    println!("Supported frameworks:\n");
    for framework in frameworks::all_frameworks() {
        let count = frameworks::control_set_name(framework.id)
            .and_then(controls::controls_for_framework)
            .map(|set| set.len())
            .unwrap_or(0);
        println!("  {:<22} {} ({} controls)", framework.id, framework.name, count);
        println!("  {:<22} {}", "", framework.description);
        println!();
    }
    Ok(())
}

fn list_controls(framework_ids: &[String]) -> Result<()> {
    for framework_id in framework_ids {
        let Some(set_name) = frameworks::control_set_name(framework_id) else {
            println!("{framework_id}: unknown framework id");
            continue;
        };
        let Some(framework_controls) = controls::controls_for_framework(set_name) else {
            continue;
        };
        println!("{set_name} ({} controls):", framework_controls.len());
        for control in framework_controls {
            println!("  - {control}");
        }
        println!();
    }
    Ok(())
}

async fn run_assessment(
    framework_ids: Vec<String>,
    mut selected_controls: Vec<String>,
    controls_file: Option<PathBuf>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    if let Some(path) = controls_file {
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read controls file {}", path.display()))?;
        let from_file: Vec<String> = serde_json::from_str(&raw)
            .with_context(|| format!("Controls file {} is not a JSON string array", path.display()))?;
        selected_controls.extend(from_file);
    }

    let selection = Selection::new(framework_ids, selected_controls);

    match format {
        OutputFormat::Table => {
            let analytics = compute_analytics(&selection);
            print_dashboard(&analytics);
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Html | OutputFormat::Markdown => {
            let report_format = match format {
                OutputFormat::Json => ReportFormat::Json,
                OutputFormat::Html => ReportFormat::Html,
                _ => ReportFormat::Markdown,
            };
            let report = ReportEngine::new()
                .generate_report(
                    &selection,
                    ReportConfig {
                        format: report_format,
                        branding: None,
                    },
                )
                .await?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &report.data)
                        .with_context(|| format!("Failed to write report to {}", path.display()))?;
                    info!("report written to {}", path.display());
                }
                None => {
                    let text = String::from_utf8(report.data)
                        .context("Report output is not valid UTF-8")?;
                    println!("{text}");
                }
            }
            Ok(())
        }
    }
}

fn print_dashboard(analytics: &AnalyticsResult) {
    println!("Security score:    {}/100", analytics.security_score);
    println!(
        "Coverage:          {:.2}% ({} of {} applicable controls)",
        analytics.coverage_percentage, analytics.controls_implemented, analytics.total_controls
    );
    println!(
        "Critical controls: {} of {} implemented",
        analytics.critical_controls_status.implemented, analytics.critical_controls_status.total
    );
    println!();

    println!("Framework compliance:");
    for (framework, compliance) in &analytics.framework_compliance {
        let missing = analytics
            .framework_missing_controls
            .get(framework)
            .unwrap_or(&0);
        println!("  {framework:<30} {compliance:>7.2}%  ({missing} missing)");
    }
    println!();

    let counts = &analytics.risk_levels;
    println!(
        "Missing controls by risk tier: {} critical, {} high, {} medium, {} low",
        counts.critical, counts.high, counts.medium, counts.low
    );
    for (label, bucket) in [
        ("CRITICAL", &analytics.risk_tiers.critical),
        ("HIGH", &analytics.risk_tiers.high),
        ("MEDIUM", &analytics.risk_tiers.medium),
        ("LOW", &analytics.risk_tiers.low),
    ] {
        for control in bucket {
            println!("  [{label:<8}] {control}");
        }
    }
    println!();

    if analytics.recommendations.is_empty() {
        println!("No recommendations - all applicable controls are implemented.");
    } else {
        println!("Recommendations:");
        for (idx, rec) in analytics.recommendations.iter().enumerate() {
            println!(
                "  {}. [{}] {}",
                idx + 1,
                rec.priority.to_string().to_uppercase(),
                rec.title
            );
            println!("     {}", rec.description);
        }
    }
}

async fn serve(bind: &str, port: u16) -> Result<()> {
    let state = Arc::new(ApiState::new());
    let router = create_router(state);
    let addr = format!("{bind}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("assessment API listening on {addr}");
    axum::serve(listener, router)
        .await
        .context("API server error")?;
    Ok(())
}
