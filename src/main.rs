//! chirpy server binary.
//!
//! Run with:
//!   RUST_LOG=info cargo run
//!
//! Try:
//!   curl -X POST http://localhost:8080/api/validate_chirp \
//!        -d '{"body":"what a kerfuffle"}'
//!   curl http://localhost:8080/app/
//!   curl http://localhost:8080/admin/metrics

use anyhow::Context;
use chirpy::config::Config;
use chirpy::{App, Server};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is normal outside local dev.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("loading configuration")?;
    info!(
        platform = %config.platform,
        root = %config.fileserver_root.display(),
        "configuration loaded"
    );

    let app = App::new(config);
    Server::bind(&app.config().addr)?
        .serve(app.router())
        .await
        .context("server error")?;

    Ok(())
}
