//! Qiita:Team Atom feed generator
//!
//! A single-shot batch job: fetch the first page of team items, render them
//! as an Atom feed and write it to `<SECRET>.atom`.
//! Configuration comes from environment variables (see `config.rs`).
//!
//! Exit status is 0 when the feed was written and 1 when the items API did not
//! answer 200. Any other failure aborts with a non-zero status.

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;

#[cfg(test)]
mod test_utils;


use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use adapters::{FileFeedStore, QiitaClientImpl};
use app::{FeedService, FeedSettings, RunOutcome};
use config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Errors only unless RUST_LOG says otherwise
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let service = build_service(&config)?;

    let outcome: RunOutcome = service.run().await.context("Failed to generate feed")?;

    Ok(ExitCode::from(outcome.exit_status()))
}

/// Wire the Qiita client and the file store from configuration
fn build_service(config: &Config) -> Result<FeedService<QiitaClientImpl, FileFeedStore>> {
    let client = QiitaClientImpl::new(
        &config.qiita_base_url,
        &config.access_token,
        config.http_timeout,
    )
    .context("Failed to build Qiita client")?;

    let store = FileFeedStore::new(config.output_dir.clone());

    Ok(FeedService::new(
        Arc::new(client),
        Arc::new(store),
        FeedSettings::from(config),
    ))
}
