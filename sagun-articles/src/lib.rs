mod client;
mod config;

pub use crate::client::{ArticleClient, TitleSource};
pub use crate::config::{ArticleSourceConfig, DEFAULT_BASE_URL, DEFAULT_SEED_KEYWORDS};
