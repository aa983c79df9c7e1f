use super::*;

#[derive(Debug, Parser)]
#[command(
  version,
  about = "Inscribe files onto Liquid with taproot envelope transactions"
)]
pub(crate) struct Arguments {
  #[command(flatten)]
  pub(crate) options: Options,
  #[command(subcommand)]
  pub(crate) subcommand: Subcommand,
}

impl Arguments {
  pub(crate) fn run(self) -> Result {
    self.subcommand.run(self.options)
  }
}
