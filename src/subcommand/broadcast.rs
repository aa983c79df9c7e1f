use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Broadcast {
  #[arg(
    default_value = "reveal-tx.hex",
    help = "Broadcast the transaction hex in <TRANSACTION>."
  )]
  transaction: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Output {
  pub txid: Txid,
}

impl Broadcast {
  pub(crate) fn run(self, options: Options) -> Result {
    let transaction_hex = fs::read_to_string(&self.transaction)
      .with_context(|| format!("failed to read `{}`", self.transaction.display()))?;

    let bytes = hex::decode(transaction_hex.trim())
      .with_context(|| format!("`{}` is not valid hex", self.transaction.display()))?;

    encode::deserialize::<Transaction>(&bytes)
      .map_err(|source| InscriptionError::TransactionParse { source })?;

    let txid = options.esplora()?.broadcast(&transaction_hex)?;

    print_json(Output { txid })
  }
}
