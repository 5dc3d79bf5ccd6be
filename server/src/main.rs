use clap::Parser;
use role::RoleRegistry;
use server::{app, init_logging};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Address to bind the HTTP server
    #[arg(long, env = "ANACHROVOX_ADDR", default_value = "0.0.0.0:3000")]
    addr: String,
    /// Directory holding the static front end
    #[arg(long, env = "ANACHROVOX_WWW", default_value = "www")]
    root: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let roles = Arc::new(RoleRegistry::with_defaults());
    let app = app(cli.root, roles);

    let addr: SocketAddr = cli.addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Development server running at http://localhost:{}", addr.port());
    axum::serve(listener, app).await?;
    Ok(())
}
