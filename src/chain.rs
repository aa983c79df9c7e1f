use {super::*, clap::ValueEnum};

#[derive(ValueEnum, Default, Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Chain {
  #[default]
  #[value(alias = "main")]
  Liquid,
  #[value(alias = "test")]
  LiquidTestnet,
  ElementsRegtest,
}

impl Chain {
  pub(crate) fn address_params(self) -> &'static AddressParams {
    match self {
      Self::Liquid => &AddressParams::LIQUID,
      Self::LiquidTestnet => &AddressParams::LIQUID_TESTNET,
      Self::ElementsRegtest => &AddressParams::ELEMENTS,
    }
  }

  pub(crate) fn policy_asset(self) -> AssetId {
    match self {
      Self::Liquid => "6f0279e9ed041c3d710a9f57d0c02928416460c4b722ae3457a11eec381c526d",
      Self::LiquidTestnet => "144c654344aa716d6f3abcc1ca90e5641e4e2a7f633bc09fe3baf64585819a49",
      Self::ElementsRegtest => "5ac9f65c0efcc4775e0baec4ec03abdde22473cd3cf33c0419ca290e0751b225",
    }
    .parse()
    .expect("policy asset ids are valid")
  }

  /// Regtest deployments mint their own genesis, so there is no fixed hash to
  /// return for `ElementsRegtest`.
  pub(crate) fn genesis_hash(self) -> Option<BlockHash> {
    match self {
      Self::Liquid => Some(
        "1466275836220db2944ca059a3a10ef6fd2ea684b0688d2c379296888a206003"
          .parse()
          .expect("genesis hashes are valid"),
      ),
      Self::LiquidTestnet => Some(
        "a771da8e52ee6ad581ed1e9a99825e5b3b7992225534eaa2ae23244fe26ab1c1"
          .parse()
          .expect("genesis hashes are valid"),
      ),
      Self::ElementsRegtest => None,
    }
  }

  pub(crate) fn default_esplora_url(self) -> Option<&'static str> {
    match self {
      Self::Liquid => Some("https://blockstream.info/liquid/api/"),
      Self::LiquidTestnet => Some("https://blockstream.info/liquidtestnet/api/"),
      Self::ElementsRegtest => None,
    }
  }
}

impl Display for Chain {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Self::Liquid => "liquid",
        Self::LiquidTestnet => "liquid-testnet",
        Self::ElementsRegtest => "elements-regtest",
      }
    )
  }
}
