use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mood_wallpaper::{
    config::Config,
    models::Category,
    services::FetchOrchestrator,
    style_engine::{self, StyleEngine},
    web::WebServer,
};

#[derive(Parser)]
#[command(name = "mood-wallpaper")]
#[command(version)]
#[command(about = "Mood-driven wallpaper service with a tiered fallback cascade")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "config.toml")]
    config: PathBuf,

    /// Listening IP address
    #[arg(short = 'H', long, global = true, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, global = true, value_name = "PORT")]
    port: Option<u16>,

    /// Log level
    #[arg(short = 'v', long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP service (default)
    Serve,
    /// Run one acquisition and write the image to a file
    Fetch {
        /// Mood label; unknown labels fall back to neutral
        #[arg(short, long, default_value = "neutral")]
        emotion: String,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Render a procedural wallpaper without touching the network
    Synthesize {
        #[arg(short, long, default_value = "neutral")]
        emotion: String,
        /// Seed for a reproducible render
        #[arg(short, long)]
        seed: Option<u64>,
        /// Recipe index
        #[arg(long)]
        style: Option<usize>,
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = if cli.log_level == "trace" {
        format!("mood_wallpaper={},tower_http=trace", cli.log_level)
    } else {
        format!("mood_wallpaper={}", cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting mood-wallpaper v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load_from_file(&cli.config)?;
    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Fetch { emotion, output } => fetch(config, &emotion, &output).await,
        Command::Synthesize {
            emotion,
            seed,
            style,
            output,
        } => synthesize(&emotion, seed, style, &output).await,
    }
}

async fn serve(config: Config) -> Result<()> {
    let orchestrator = FetchOrchestrator::from_config(&config)?;
    orchestrator.cache().ensure_layout().await?;
    info!(
        "Wallpaper cache at {}",
        orchestrator.cache().root().display()
    );

    let web_server = WebServer::new(&config, Arc::new(orchestrator))?;
    info!(
        "Starting web server on {}:{}",
        web_server.host(),
        web_server.port()
    );
    web_server.serve().await?;

    Ok(())
}

async fn fetch(config: Config, emotion: &str, output: &Path) -> Result<()> {
    let orchestrator = FetchOrchestrator::from_config(&config)?;
    let acquisition = orchestrator.acquire(emotion).await;
    tokio::fs::write(output, &acquisition.bytes)
        .await
        .with_context(|| format!("writing {}", output.display()))?;
    info!(
        "Wrote {} wallpaper from {} tier to {}",
        acquisition.category,
        acquisition.tier,
        output.display()
    );
    Ok(())
}

async fn synthesize(
    emotion: &str,
    seed: Option<u64>,
    style: Option<usize>,
    output: &Path,
) -> Result<()> {
    let category = Category::normalize(emotion);
    let engine = StyleEngine::new();
    let image = match style {
        Some(index) => engine.synthesize_with_recipe(category, index, seed)?,
        None => engine.synthesize(category, seed),
    };

    let is_png = output
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    let bytes = if is_png {
        style_engine::encode_png(&image)?
    } else {
        style_engine::encode_jpeg(&image)?
    };

    tokio::fs::write(output, bytes)
        .await
        .with_context(|| format!("writing {}", output.display()))?;
    info!("Wrote synthesized {} wallpaper to {}", category, output.display());
    Ok(())
}
