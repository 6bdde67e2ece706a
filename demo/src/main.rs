//! Agora authorization core - demo CLI
//!
//! Runs one or both demo scenarios against the built-in sample site. Each
//! scenario uses real Agora components (guardian, action logger, in-memory
//! audit chain) wired together with fixture data.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- access-review
//!   cargo run -p demo -- audit-trail

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use agora_forum::scenarios::{access_review, audit_trail};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Agora - authorization guardian demo.
///
/// Each subcommand runs one or both scenarios, showing per-actor permission
/// decisions and the validated, hash-chained staff action log.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "Agora authorization core demo",
    long_about = "Runs Agora demo scenarios showing per-actor permission decisions\n\
                  and the validated, hash-chained staff action log."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run both scenarios in sequence.
    RunAll,
    /// Scenario 1: per-actor permission review across the sample site.
    AccessReview,
    /// Scenario 2: guardian-gated staff actions recorded to the audit chain.
    AuditTrail,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging. Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::RunAll => run_all(),
        Command::AccessReview => access_review::run_scenario(),
        Command::AuditTrail => audit_trail::run_scenario(),
    };

    match result {
        Ok(()) => {
            println!("All selected scenarios completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_all() -> agora_contracts::error::AgoraResult<()> {
    access_review::run_scenario()?;
    audit_trail::run_scenario()?;
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("Agora - Authorization Core");
    println!("Sample Site Demo");
    println!("==========================");
    println!();
    println!("One guardian per request:");
    println!("  [1] Construct Guardian(actor snapshot, site settings)");
    println!("  [2] Query it before every action or view");
    println!("  [3] Record permitted staff actions through the audit sink");
    println!();
}
