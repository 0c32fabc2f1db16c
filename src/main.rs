use clap::Parser;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use language_search::build_router;
use language_search::config::AppConfig;
use language_search::startup::setup_backend;

#[derive(Parser, Debug)]
#[command(name = "language-search")]
#[command(about = "Search facade over a catalog of programming languages")]
struct Args {
    /// Configuration file path (default: config.yaml)
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Port to listen on (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides config file)
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt::init();

    // Fall back to the built-in configuration only when the default file is missing
    let mut app_config =
        if args.config == "config.yaml" && !std::path::Path::new("config.yaml").exists() {
            tracing::warn!("No config.yaml found, using in-memory SQLite with the sample catalog");
            AppConfig::default_config()
        } else {
            AppConfig::load_from_file(&args.config)
                .map_err(|e| format!("Failed to load configuration: {}", e))?
        };

    if let Some(port) = args.port {
        app_config.server.port = port;
    }
    if let Some(host) = args.host {
        app_config.server.host = host;
    }

    let backend = setup_backend(&app_config).await?;
    let app = build_router(backend);

    let host: std::net::IpAddr = app_config.server.host.parse().unwrap_or_else(|_| {
        tracing::warn!(
            "Invalid host address: {}, using 127.0.0.1",
            app_config.server.host
        );
        [127, 0, 0, 1].into()
    });
    let addr = SocketAddr::from((host, app_config.server.port));
    tracing::info!("Language search listening on {}", addr);
    tracing::info!("  Lookup: http://{}/languages/{{id}}", addr);
    tracing::info!("  Search: http://{}/languages/search?filter=...", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
