use anyhow::Result;
use clap::Parser;
use mfa_audit_tools::commands;
use mfa_audit_tools::config::AnalyzerConfig;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "mfa-audit")]
#[command(about = "MFA adoption analysis of Microsoft 365 authentication method exports", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the *-AuthenticationMethods.csv export (prompted for when omitted)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Output directory (default: MFA-Analyzer on the desktop)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    tracing::info!("MFA Audit Tools v{} starting", env!("CARGO_PKG_VERSION"));

    let config = AnalyzerConfig::resolve(cli.path, cli.output)?;
    let started = Instant::now();
    let summary = commands::analyze::run(&config.input, &config.output_dir)?;

    println!("\n{}", "=".repeat(80));
    println!("Output: {}", summary.output_dir.display());
    println!("Files written: {}", summary.files_written.len());
    if let Some(reason) = &summary.registration_error {
        println!("User Registration Details skipped: {}", reason);
    }
    println!("Elapsed: {:.2?}", started.elapsed());
    println!("{}", "=".repeat(80));

    Ok(())
}
