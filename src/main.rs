//! bet-points: prediction document checker.
//!
//! Entry point. Loads configuration, initialises structured logging,
//! checks every bet line of the configured prediction document and
//! writes corrected point annotations back unless running dry.

use anyhow::{bail, Result};
use tracing::{debug, info, warn};

use bet_points::config::AppConfig;
use bet_points::document::{self, DocumentReport};
use bet_points::engine::validator::diagnose_bet_with;
use bet_points::storage;

fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let cfg = AppConfig::load_or_default()?;
    init_logging();

    let path = cfg.document.path.as_str();
    info!(path, dry_run = cfg.document.dry_run, "bet-points starting up");

    if !storage::document_exists(Some(path)) {
        bail!("Prediction document not found: {path} (set [document].path in config.toml)");
    }
    let mut doc = storage::load_document(Some(path))?;

    let report = if cfg.document.dry_run {
        document::audit_document(&doc, &cfg.notation)
    } else {
        document::fix_document(&mut doc, &cfg.notation)
    };

    log_report(&report, &cfg);

    if report.has_changes() && !report.dry_run {
        storage::save_document(&doc, Some(path))?;
        info!(path, corrections = report.corrections.len(), "Corrected document written");
    } else if !report.has_changes() {
        info!("No corrections needed");
    }

    if cfg.document.fail_on_skipped && !report.skipped.is_empty() {
        bail!("{} bet line(s) could not be parsed", report.skipped.len());
    }

    Ok(())
}

/// Log every correction and skipped line.
fn log_report(report: &DocumentReport, cfg: &AppConfig) {
    for c in &report.corrections {
        info!(
            race = %c.race,
            strategy = %c.strategy,
            index = c.index,
            from = %c.from,
            to = %c.to,
            "Point annotation corrected"
        );
        debug!("\n{}", diagnose_bet_with(&c.from, &cfg.notation));
    }

    for s in &report.skipped {
        warn!(
            race = %s.race,
            strategy = %s.strategy,
            index = s.index,
            text = %s.text,
            error = %s.error,
            "Bet line left unchanged"
        );
    }
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bet_points=info"));

    let json_logging = std::env::var("BET_POINTS_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }
}
