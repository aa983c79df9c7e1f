use super::*;

pub(crate) mod envelope;
mod inscription;

pub use self::{envelope::ParsedEnvelope, inscription::Inscription};
