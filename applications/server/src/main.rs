/// Snapfeed Server - users and posts over HTTP
use clap::{Parser, Subcommand};
use snapfeed_server::{
    config::ServerConfig,
    router::create_router,
    state::{open_store, AppState},
};
use std::{net::SocketAddr, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "snapfeed-server")]
#[command(about = "Snapfeed users and posts HTTP service", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./config.toml if present)
    #[arg(short, long, global = true, env = "SNAPFEED_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Keep all data in process memory instead of MongoDB
        #[arg(long)]
        in_memory: bool,
    },
    /// Register a new user
    AddUser {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "snapfeed_server=info,snapfeed_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve { in_memory } => {
            serve(config, in_memory).await?;
        }
        Commands::AddUser {
            name,
            email,
            password,
        } => {
            add_user(config, &name, &email, &password).await?;
        }
    }

    Ok(())
}

async fn serve(config: ServerConfig, in_memory: bool) -> anyhow::Result<()> {
    tracing::info!("Starting Snapfeed Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let store = open_store(&config.store, in_memory).await?;
    tracing::info!("Document store ready");

    let app = create_router(AppState::new(store));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn add_user(config: ServerConfig, name: &str, email: &str, password: &str) -> anyhow::Result<()> {
    let store = open_store(&config.store, false).await?;
    let state = AppState::new(store);

    let id = state.accounts.register(name, email, password).await?;
    tracing::info!("Created user {} <{}> with id {}", name, email, id);

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
