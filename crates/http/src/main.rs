mod config;
mod route;

use std::sync::Arc;

use anyhow::Result;
use blotter_lib::{watch, DirectorySource, Library};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for ctrl-c: {err}");
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;

    info!("loading files from {}", config.blog_path);
    let library = Arc::new(Library::new(DirectorySource::new(config.blog_path.clone())));
    {
        let library = library.clone();
        tokio::task::spawn_blocking(move || library.refresh()).await??;
    }

    let _watcher = if config.watch {
        info!("watching {} for changes", config.blog_path);
        Some(watch::watch(library.clone(), &config.blog_path)?)
    } else {
        None
    };

    let app = route::router(library);

    let socket_addr_string = format!("0.0.0.0:{}", config.port);
    info!("listening for requests at {socket_addr_string}");
    axum::Server::bind(&socket_addr_string.parse()?)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutting down");
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run().await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
