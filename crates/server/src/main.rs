use std::{
    net::{IpAddr, SocketAddr},
    str::FromStr,
    sync::Arc,
};

use clap::Parser;
use server::{
    cli::{Cli, Command},
    db, router, seed, AppState,
};
use shared::*;
use tokio::net::TcpListener;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    load_dotenv()?;
    configure_tracing();

    let args = Cli::parse();
    debug!(?args);

    // Run the migrations synchronously before creating the pool or launching the server
    let ran = db::run_migrations(&args.sqlite_connection_string)?;
    info!("Ran {ran} db migrations");

    let pool = db::create_pool(&args.sqlite_connection_string)?;

    match args.command.clone() {
        Some(Command::Seed { env, config }) => {
            seed::seed_pricing_plans(&pool, env, &config).await?;
        }
        Some(Command::Serve) | None => {
            let socket = SocketAddr::new(IpAddr::from_str(&args.bind_addr)?, args.port);

            let listener = TcpListener::bind(socket).await?;
            info!("listening on {}", listener.local_addr()?);

            let state = AppState { pool, args: Arc::new(args) };
            axum::serve(listener, router(state)).await?;
        }
    }

    Ok(())
}
