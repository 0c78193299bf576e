use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use hawaii_climate::{ClimateApiConfig, SqliteClimateStore, logging, web};

#[tokio::main]
async fn main() -> Result<()> {
    // Optional first argument: path to a TOML config file
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = ClimateApiConfig::load_from_path(config_path)?;

    logging::init_logging(&config.logging);

    let store = SqliteClimateStore::connect(&config.database)
        .await
        .with_context(|| format!("Failed to open database at {}", config.database.path))?;

    web::run(&config, Arc::new(store)).await?;
    Ok(())
}
