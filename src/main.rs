use std::path::PathBuf;

use clap::Parser;
use dotenv::dotenv;
use tokio::net::{TcpListener, UnixListener};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lab_assistant::{
    server::{self, AppState, DEFAULT_MAX_BODY_BYTES},
    Edition,
};

#[derive(Debug, Parser)]
#[command(name = "lab-assistant", about = "Serve the Lab Code Assistant demo")]
struct Args {
    /// TCP port to listen on
    #[arg(long, env = "LAB_ASSISTANT_PORT", default_value_t = 5000)]
    port: u16,

    #[arg(long, env = "LAB_ASSISTANT_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Serve on a Unix socket instead of TCP
    #[arg(long, env = "LAB_ASSISTANT_UNIX")]
    unix: Option<PathBuf>,

    /// Which demo page to serve: preview or dashboard
    #[arg(long, env = "LAB_ASSISTANT_EDITION", default_value = "preview")]
    edition: Edition,

    /// Directory holding one subdirectory per edition
    #[arg(long, env = "LAB_ASSISTANT_FRONTEND", default_value = "frontend")]
    frontend: PathBuf,

    #[arg(long, env = "LAB_ASSISTANT_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    max_body_bytes: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lab_assistant=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();

    let mut state = AppState::new(args.edition, args.frontend);
    state.max_body_bytes = args.max_body_bytes;

    match state.check_frontend() {
        Ok(index) => info!("Serving page {}", index.display()),
        Err(e) => tracing::warn!("{e}, only the API will work"),
    }

    let app = server::router(state);
    info!("Initialized routes for the {} edition", args.edition);

    if let Some(socket_path) = args.unix {
        // delete the file before binding
        tokio::fs::remove_file(&socket_path).await.ok();
        let listener = UnixListener::bind(&socket_path)?;

        info!("Starting server on Unix socket: {}", socket_path.display());
        axum::serve(listener, app.into_make_service()).await?;
    } else {
        let listener = TcpListener::bind(format!("{}:{}", args.host, args.port)).await?;
        info!("Starting server on {}:{}", args.host, args.port);
        axum::serve(listener, app.into_make_service()).await?;
    }

    Ok(())
}
