pub mod routes;
pub mod state;

use std::{future, net::SocketAddr, path::PathBuf, sync::Arc};

use clap::Parser;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::EnvFilter;

use postit_storage::db::Db;

use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(
	version = postit_cli::VERSION,
	rename_all = "kebab",
	styles = postit_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = postit_config::load(&args.config)?;
	init_tracing(&config)?;
	let http_addr: SocketAddr = config.service.http_bind.parse()?;

	tracing::info!("Connecting to database.");
	let db = Arc::new(Db::connect(&config.storage.postgres).await?);

	db.ensure_schema().await?;

	let state = AppState::new(db.clone());
	let app = routes::router(state);

	let http_listener = TcpListener::bind(http_addr).await?;
	tracing::info!(%http_addr, "HTTP server listening.");
	axum::serve(http_listener, app).with_graceful_shutdown(shutdown_signal()).await?;

	db.close().await;
	tracing::info!("Database pool closed.");

	Ok(())
}

fn init_tracing(config: &postit_config::Config) -> color_eyre::Result<()> {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.try_init()
		.map_err(|err| color_eyre::eyre::eyre!(err))?;
	Ok(())
}

async fn shutdown_signal() {
	if let Err(err) = signal::ctrl_c().await {
		tracing::error!(error = %err, "Failed to listen for the shutdown signal.");
		future::pending::<()>().await;
	}

	tracing::info!("Shutdown signal received.");
}
