use super::*;

mod broadcast;
mod decode;
mod fees;
mod generate_key;
mod inscribe;
mod utxos;

#[derive(Debug, Parser)]
pub(crate) enum Subcommand {
  #[command(about = "Broadcast a reveal transaction artifact")]
  Broadcast(broadcast::Broadcast),
  #[command(about = "List the inscriptions in a raw transaction")]
  Decode(decode::Decode),
  #[command(about = "Fetch fee rate estimates")]
  Fees,
  #[command(about = "Generate an inscription key")]
  GenerateKey(generate_key::GenerateKey),
  #[command(about = "Inscribe the contents of a file")]
  Inscribe(inscribe::Inscribe),
  #[command(about = "List the unspent outputs of an address")]
  Utxos(utxos::Utxos),
}

impl Subcommand {
  pub(crate) fn run(self, options: Options) -> Result {
    match self {
      Self::Broadcast(broadcast) => broadcast.run(options),
      Self::Decode(decode) => decode.run(),
      Self::Fees => fees::run(options),
      Self::GenerateKey(generate_key) => generate_key.run(),
      Self::Inscribe(inscribe) => inscribe.run(options),
      Self::Utxos(utxos) => utxos.run(options),
    }
  }
}

pub(crate) fn print_json(output: impl Serialize) -> Result {
  serde_json::to_writer_pretty(io::stdout(), &output)?;
  println!();
  Ok(())
}
