use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

pub const ENTRY_URL: &str = "https://kbbi.kemdikbud.go.id/entri";
pub const INDEX_URL: &str = "https://kbbi.vercel.app";
pub const KATLA_URL: &str = "https://katla.vercel.app/api/words";
pub const TIMEOUT_MS: i64 = 5_000;
pub const MAX_REDIRECT_DEPTH: i64 = 3;

/// Runtime settings. Every field can be overridden with a `KBBI_` variable,
/// e.g. `KBBI_DATA_DIR=/tmp/kbbi` or `KBBI_TIMEOUT_MS=10000`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub entry_url: String,
    pub index_url: String,
    pub katla_url: String,
    pub data_dir: PathBuf,
    pub word_list_path: PathBuf,
    pub timeout_ms: u64,
    pub max_redirect_depth: usize,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::with_prefix("KBBI").try_parsing(true))
    }

    fn from_env(env: Environment) -> Result<Self> {
        Config::builder()
            .set_default("entry_url", ENTRY_URL)?
            .set_default("index_url", INDEX_URL)?
            .set_default("katla_url", KATLA_URL)?
            .set_default("data_dir", "data")?
            .set_default("word_list_path", "words.json")?
            .set_default("timeout_ms", TIMEOUT_MS)?
            .set_default("max_redirect_depth", MAX_REDIRECT_DEPTH)?
            .add_source(env)
            .build()
            .context("Failed to read KBBI_* settings")?
            .try_deserialize()
            .context("Invalid KBBI_* settings")
    }
}
