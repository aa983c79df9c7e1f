use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Utxos {
  #[arg(help = "List the unspent outputs of <ADDRESS>.")]
  address: Address,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Output {
  pub utxos: Vec<esplora::Utxo>,
}

impl Utxos {
  pub(crate) fn run(self, options: Options) -> Result {
    ensure!(
      self.address.params == options.chain.address_params(),
      "address {} is not valid for {}",
      self.address,
      options.chain,
    );

    let utxos = options.esplora()?.utxos(&self.address)?;

    print_json(Output { utxos })
  }
}
