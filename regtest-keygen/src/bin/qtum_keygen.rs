//! Print a fresh Qtum regtest key as `QTUM_PK` / `QTUM_ADDRESS`.

use chain_keys::Chain;

fn main() -> anyhow::Result<()> {
    regtest_keygen::main_for(Chain::Qtum)
}
