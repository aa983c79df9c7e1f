use super::*;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum InscriptionError {
  #[snafu(display("inscription body may not be empty"))]
  EmptyPayload,
  #[snafu(display(
    "unsupported file extension `.{extension}`, supported extensions: {}",
    media::supported_extensions()
  ))]
  UnsupportedContentType { extension: String },
  #[snafu(display("malformed envelope: {reason}"))]
  MalformedEnvelope { reason: String },
  #[snafu(display("funding value {value} sat does not cover reveal fee {fee} sat"))]
  InsufficientFunds { value: u64, fee: u64 },
  #[snafu(display("invalid funding reference: {reason}"))]
  InvalidFundingReference { reason: String },
  #[snafu(context(false), display("failed to decode transaction"))]
  TransactionParse { source: encode::Error },
}
