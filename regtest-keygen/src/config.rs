//! Environment-driven configuration.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file in the working directory.

use anyhow::{anyhow, Context, Result};
use chain_keys::Chain;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<SYMBOL>_PK=...` / `<SYMBOL>_ADDRESS=...` lines, ready for a `.env` file.
    #[default]
    Env,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeygenConfig {
    /// Raw `KEYGEN_CHAIN`, parsed only when a run falls back to it.
    pub chain: Option<String>,
    pub format: OutputFormat,
    /// Whether the WIF and address use the compressed public key.
    pub compressed: bool,
}

impl Default for KeygenConfig {
    fn default() -> Self {
        Self {
            chain: None,
            format: OutputFormat::Env,
            compressed: true,
        }
    }
}

impl KeygenConfig {
    /// Load `.env` if present, then read `KEYGEN_*` variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any variable source; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        config.chain = lookup("KEYGEN_CHAIN").filter(|v| !v.trim().is_empty());

        if let Some(format) = lookup("KEYGEN_FORMAT") {
            config.format = match format.trim().to_ascii_lowercase().as_str() {
                "env" | "" => OutputFormat::Env,
                "json" => OutputFormat::Json,
                other => return Err(anyhow!("Invalid KEYGEN_FORMAT: {other} (expected env or json)")),
            };
        }

        if let Some(compressed) = lookup("KEYGEN_COMPRESSED") {
            config.compressed = parse_bool(&compressed)
                .with_context(|| format!("Invalid KEYGEN_COMPRESSED: {compressed}"))?;
        }

        Ok(config)
    }

    /// Chain to use when none is given on the command line.
    pub fn default_chain(&self) -> Result<Option<Chain>> {
        self.chain
            .as_deref()
            .map(|chain| chain.parse::<Chain>().context("Invalid KEYGEN_CHAIN"))
            .transpose()
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(anyhow!("expected true or false")),
    }
}
