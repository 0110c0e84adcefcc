use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::seq::SliceRandom;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use memeforge::api::{create_router, AppState};
use memeforge::config::Config;
use memeforge::ingest::Ingestor;
use memeforge::render::{FontSet, MemeEngine};

#[derive(Parser)]
#[command(name = "memeforge")]
#[command(about = "Composites quotes from CSV/DOCX/PDF/TXT sources onto images")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the web app
    Serve,
    /// Render a single meme and print its path
    Generate {
        /// Image to caption; a random stock image when omitted
        #[arg(long)]
        image: Option<PathBuf>,
        /// Quote body; a random library quote when omitted
        #[arg(long)]
        body: Option<String>,
        /// Quote author; required when --body is given
        #[arg(long)]
        author: Option<String>,
        /// Output width in pixels
        #[arg(long)]
        width: Option<u32>,
        /// Seed for deterministic text placement
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "memeforge=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Generate {
            image,
            body,
            author,
            width,
            seed,
        } => generate(config, image, body, author, width, seed),
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let fonts = FontSet::load(&config.render.body_font, &config.render.author_font)?;

    tracing::info!(
        "Loading quote library from {}",
        config.data.quotes_dir.display()
    );
    let quotes = Ingestor::new()
        .collect_dir(&config.data.quotes_dir)
        .with_context(|| {
            format!(
                "failed to load quotes from {}",
                config.data.quotes_dir.display()
            )
        })?;
    tracing::info!("Loaded {} quotes", quotes.len());

    let images = discover_images(&config.data.images_dir)?;
    tracing::info!(
        "Found {} stock images in {}",
        images.len(),
        config.data.images_dir.display()
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, quotes, images, fonts);
    let app = create_router(state);

    tracing::info!("Memeforge starting on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn generate(
    config: Config,
    image: Option<PathBuf>,
    body: Option<String>,
    author: Option<String>,
    width: Option<u32>,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let fonts = FontSet::load(&config.render.body_font, &config.render.author_font)?;

    let image = match image {
        Some(path) => path,
        None => discover_images(&config.data.images_dir)?
            .choose(&mut rand::thread_rng())
            .cloned()
            .context("no stock images available")?,
    };

    let (body, author) = match body {
        Some(body) => {
            let author = author.context("--author is required when --body is given")?;
            (body, author)
        }
        None => {
            let quotes = Ingestor::new().collect_dir(&config.data.quotes_dir)?;
            let quote = quotes
                .choose(&mut rand::thread_rng())
                .context("quote library is empty")?;
            (quote.body.clone(), quote.author.clone())
        }
    };

    let mut engine = MemeEngine::from_config(&config.render, fonts);
    if let Some(seed) = seed {
        engine = engine.with_seed(seed);
    }

    let path = engine.make_meme(&image, &body, &author, width.unwrap_or(config.render.width))?;
    println!("{}", path.display());
    Ok(())
}

fn discover_images(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut images = Vec::new();
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read images dir {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        // Stock photos come with mixed-case extensions (IMG_0123.JPG).
        if ["jpg", "jpeg", "png"]
            .iter()
            .any(|image_ext| ext.eq_ignore_ascii_case(image_ext))
        {
            images.push(path);
        }
    }
    Ok(images)
}


async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
