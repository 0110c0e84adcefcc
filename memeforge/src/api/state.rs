use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::models::Quote;
use crate::render::{FontSet, MemeEngine};

/// Application context built once at startup and cloned into handlers.
///
/// Holds the parsed quote library, the discovered stock-image list and the
/// loaded fonts; there is no module-level global state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub quotes: Arc<Vec<Quote>>,
    pub images: Arc<Vec<PathBuf>>,
    pub fonts: FontSet,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config, quotes: Vec<Quote>, images: Vec<PathBuf>, fonts: FontSet) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent("memeforge/0.1")
            .build()
            .unwrap_or_default();

        Self {
            config: Arc::new(config),
            quotes: Arc::new(quotes),
            images: Arc::new(images),
            fonts,
            http,
        }
    }

    /// Engines mutate their bitmap in place and are not reentrant, so every
    /// request gets a fresh one.
    pub fn engine(&self) -> MemeEngine {
        MemeEngine::from_config(&self.config.render, self.fonts.clone())
    }
}
