use std::env;
use std::path::PathBuf;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub render: RenderConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Defaults applied to every render request that does not override them.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub output_dir: PathBuf,
    /// Target output width in pixels.
    pub width: u32,
    /// Fraction of the image width the body text must reach.
    pub text_scale: f32,
    /// Fixed character column the caption is wrapped at.
    pub wrap_width: usize,
    pub body_font: PathBuf,
    pub author_font: PathBuf,
}

#[derive(Debug, Clone)]
pub struct DataConfig {
    pub quotes_dir: PathBuf,
    pub images_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("MEMEFORGE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("MEMEFORGE_PORT", 3000),
            },
            render: RenderConfig {
                output_dir: env::var("MEMEFORGE_OUTPUT_DIR")
                    .unwrap_or_else(|_| "./static".to_string())
                    .into(),
                width: parse_env_or("MEMEFORGE_WIDTH", 500),
                text_scale: parse_env_or("MEMEFORGE_TEXT_SCALE", 0.7),
                wrap_width: parse_env_or("MEMEFORGE_WRAP_WIDTH", 40),
                body_font: env::var("MEMEFORGE_BODY_FONT")
                    .unwrap_or_else(|_| "./fonts/OpenSans-ExtraBold.ttf".to_string())
                    .into(),
                author_font: env::var("MEMEFORGE_AUTHOR_FONT")
                    .unwrap_or_else(|_| "./fonts/OpenSans-LightItalic.ttf".to_string())
                    .into(),
            },
            data: DataConfig {
                quotes_dir: env::var("MEMEFORGE_QUOTES_DIR")
                    .unwrap_or_else(|_| "./_data/quotes".to_string())
                    .into(),
                images_dir: env::var("MEMEFORGE_IMAGES_DIR")
                    .unwrap_or_else(|_| "./_data/photos".to_string())
                    .into(),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
