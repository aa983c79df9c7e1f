use super::*;

#[derive(Clone, Debug, Parser)]
pub(crate) struct Options {
  #[arg(long, value_enum, default_value_t, help = "Inscribe on <CHAIN>.")]
  pub(crate) chain: Chain,
  #[arg(
    long,
    help = "Commit signatures to <GENESIS_HASH>. Defaults to the chain's genesis block hash; required on elements-regtest."
  )]
  pub(crate) genesis_hash: Option<BlockHash>,
  #[arg(
    long,
    env = "LIQUIDSCRIBE_ESPLORA_URL",
    help = "Use Esplora API at <ESPLORA_URL>. Defaults to the chain's public instance; required on elements-regtest."
  )]
  pub(crate) esplora_url: Option<String>,
}

impl Options {
  pub(crate) fn genesis_hash(&self) -> Result<BlockHash> {
    self
      .genesis_hash
      .or_else(|| self.chain.genesis_hash())
      .ok_or_else(|| anyhow!("--genesis-hash is required on {}", self.chain))
  }

  pub(crate) fn esplora(&self) -> Result<Esplora> {
    let base_url = self
      .esplora_url
      .clone()
      .or_else(|| self.chain.default_esplora_url().map(Into::into))
      .ok_or_else(|| anyhow!("--esplora-url is required on {}", self.chain))?;

    Esplora::new(base_url)
  }
}
