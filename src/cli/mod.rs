//! CLI module for the HDB resale price predictor
//!
//! Subcommands:
//! - `serve`: HTTP API plus the prediction form
//! - `predict`: one-shot prediction from flags
//! - `categories`: print the accepted labels and their codes

pub mod categories;
pub mod predict;
pub mod serve;

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Estimate Singapore HDB resale flat prices with a pre-trained model
#[derive(Parser)]
#[command(name = "hdb-resale-predictor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server (API + form)
    Serve,

    /// Predict the price of one flat
    Predict(predict::PredictArgs),

    /// List valid towns, flat types and flat models
    Categories,
}

/// Load `.env` and layered configuration, then start logging.
///
/// Unreadable configuration falls back to defaults; inconsistent settings are an error.
pub(crate) fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    logging::init_logging(&config.logging);

    if let Err(e) = &loaded {
        warn!(error = %e, "Configuration could not be loaded, using defaults");
    }

    config.validate()?;

    Ok(config)
}
