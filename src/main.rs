use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use worst_movies_api::utils::{logger, validation::Validate};
use worst_movies_api::{server, CliConfig, InMemoryMovieStore, MovieStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose);

    tracing::info!("Starting worst-movies-api");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let movies = worst_movies_api::load_movies(&config.csv_path)?;

    let store = InMemoryMovieStore::new();
    store.replace_all(movies).await?;

    let addr: SocketAddr = config.listen_addr.parse()?;
    server::run_server(addr, Arc::new(store)).await?;

    Ok(())
}
