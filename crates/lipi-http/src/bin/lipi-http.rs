use clap::Parser;
use lipi_http::{start_server, ServerConfig};

/// Hinglish → Devanagari transliteration service
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8787)]
    port: u16,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "lipi_http={level},lipi_core={level},tower_http={level}",
                    level = cli.log_level
                ))
            }),
        )
        .init();

    start_server(ServerConfig {
        host: cli.host,
        port: cli.port,
    })
    .await
}
