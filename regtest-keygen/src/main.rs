//! Generate a regtest key for any supported chain.
//!
//! Usage: regtest-keygen [CHAIN]
//!
//! The chain comes from the first argument, then `KEYGEN_CHAIN`, and is
//! prompted for interactively when neither is set.

use anyhow::{Context, Result};
use chain_keys::Chain;
use inquire::Select;

use regtest_keygen::config::KeygenConfig;

fn main() -> Result<()> {
    regtest_keygen::init_tracing();
    let config = KeygenConfig::from_env()?;

    let chain = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<Chain>()
            .with_context(|| format!("Unsupported chain argument: {arg}"))?,
        None => match config.default_chain()? {
            Some(chain) => chain,
            None => Select::new("Select chain:", Chain::ALL.to_vec())
                .prompt()
                .context("Chain selection cancelled")?,
        },
    };

    regtest_keygen::run(chain, &config)
}
