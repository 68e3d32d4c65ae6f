use crate::book::LeadBook;
use crate::config::AppConfig;
use crate::db::{init_db, Database, LeadStore};
use crate::enrichment::{Enrichment, GeminiEnricher};
use crate::responses::error_to_response;
use crate::router::handle;
use anyhow::Context;
use astra::Server;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod book;
mod config;
mod db;
mod domain;
mod enrichment;
mod errors;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("paintflow=info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // 1️⃣ Database and lead list
    let db = Database::new(config.db_path.clone());
    init_db(&db).with_context(|| format!("initializing database at {}", config.db_path))?;

    // 2️⃣ Enrichment collaborator, if a key is configured
    let enrichment = match config.gemini {
        Some(gemini) => {
            info!(model = %gemini.model, "lead enrichment enabled");
            Enrichment::Enabled(Box::new(GeminiEnricher::new(
                gemini.api_key,
                gemini.model,
                gemini.timeout,
            )?))
        }
        None => {
            warn!("GEMINI_API_KEY not set, leads will carry the failure summary");
            Enrichment::Disabled
        }
    };

    let book = LeadBook::open(LeadStore::new(db), enrichment);

    // 3️⃣ Serve
    info!(addr = %config.addr, workers = config.workers, "starting server");

    Server::bind(&config.addr)
        .max_workers(config.workers)
        .serve(move |req, _info| match handle(req, &book) {
            Ok(resp) => resp,
            Err(err) => {
                if err.status() >= 500 {
                    error!(error = %err, "request failed");
                }
                error_to_response(err)
            }
        })
        .context("server ended with error")?;

    info!("server shut down cleanly");
    Ok(())
}
