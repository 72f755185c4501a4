// src/bin/estoque-report.rs
//! Prints every product as a fixed-width table on standard output.

use estoque::{config::AppConfig, database, report::{self, ReportError}};

async fn run() -> Result<String, ReportError> {
    let config = AppConfig::from_env()?;
    let pool = database::create_pool(&config).await?;
    tracing::info!("Connected to database");

    let output = report::generate(&pool).await;
    pool.close().await;
    output
}

#[tokio::main]
async fn main() {
    estoque::init_tracing();

    match run().await {
        Ok(output) => print!("{output}"),
        Err(e) => {
            tracing::error!(error = %e, "Report failed");
            std::process::exit(1);
        }
    }
}
