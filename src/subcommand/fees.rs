use super::*;

#[derive(Debug, Serialize, Deserialize)]
pub struct Output {
  pub estimates: BTreeMap<String, f64>,
}

pub(crate) fn run(options: Options) -> Result {
  let estimates = options.esplora()?.fee_estimates()?;

  print_json(Output { estimates })
}
