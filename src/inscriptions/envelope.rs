use {
  super::*,
  crate::error::MalformedEnvelope,
  elements::script::Instruction::{self, Op, PushBytes},
};

pub(crate) const PROTOCOL_ID: [u8; 3] = *b"ord";

pub(crate) const CONTENT_TYPE_TAG: [u8; 1] = [1];

#[derive(Debug, PartialEq, Clone)]
pub struct ParsedEnvelope {
  pub input: u32,
  pub payload: Inscription,
}

impl ParsedEnvelope {
  /// Scans every input's script witness. Inputs whose tapscript carries no
  /// envelope, or a malformed one, are skipped; a scan never fails.
  pub fn from_transaction(transaction: &Transaction) -> Vec<Self> {
    let mut envelopes = Vec::new();

    for (input, tx_in) in transaction.input.iter().enumerate() {
      let Some(tapscript) = tapscript(&tx_in.witness) else {
        continue;
      };

      if let Ok(Some(payload)) = decode_script(&tapscript) {
        envelopes.push(Self {
          input: input.try_into().expect("input count fits in u32"),
          payload,
        });
      }
    }

    envelopes
  }
}

/// The tapscript of a script-path witness stack: the second-to-last element
/// once the annex, if any, has been stripped.
fn tapscript(witness: &TxInWitness) -> Option<Script> {
  let stack = &witness.script_witness;

  let annex = stack.len() >= 2
    && stack
      .last()
      .map(|element| element.first() == Some(&0x50))
      .unwrap_or_default();

  let stack = if annex {
    &stack[..stack.len() - 1]
  } else {
    &stack[..]
  };

  if stack.len() >= 2 {
    Some(Script::from(stack[stack.len() - 2].clone()))
  } else {
    None
  }
}

/// Strict single-envelope decode. `Ok(None)` when the script carries no
/// `OP_FALSE OP_IF` prologue; `MalformedEnvelope` when a prologue is present
/// but the grammar is violated.
pub(crate) fn decode_script(script: &Script) -> Result<Option<Inscription>, InscriptionError> {
  let mut instructions = script.instructions().peekable();

  loop {
    match instructions.next() {
      Some(Ok(PushBytes(&[]))) => {
        if matches!(instructions.peek(), Some(Ok(Op(op))) if *op == opcodes::all::OP_IF) {
          instructions.next();
          break;
        }
      }
      Some(Ok(_)) => {}
      Some(Err(_)) => return Err(malformed("invalid script")),
      None => return Ok(None),
    }
  }

  match next(&mut instructions)? {
    PushBytes(bytes) if *bytes == PROTOCOL_ID => {}
    _ => return Err(malformed("protocol marker mismatch")),
  }

  match next(&mut instructions)? {
    PushBytes(bytes) if *bytes == CONTENT_TYPE_TAG => {}
    _ => return Err(malformed("missing content type marker")),
  }

  let content_type = match next(&mut instructions)? {
    PushBytes(bytes) if !bytes.is_empty() => bytes.to_vec(),
    _ => return Err(malformed("missing content type")),
  };

  match next(&mut instructions)? {
    PushBytes(&[]) => {}
    _ => return Err(malformed("missing body boundary")),
  }

  let mut body = Vec::new();

  loop {
    match next(&mut instructions)? {
      PushBytes(&[]) => return Err(malformed("empty body chunk")),
      PushBytes(chunk) if chunk.len() > MAX_SCRIPT_ELEMENT_SIZE => {
        return Err(malformed("body chunk exceeds maximum push size"));
      }
      PushBytes(chunk) => body.extend_from_slice(chunk),
      Op(op) if op == opcodes::all::OP_ENDIF => break,
      Op(_) => return Err(malformed("unexpected opcode in envelope")),
    }
  }

  Inscription::new(content_type, body)
    .map(Some)
    .map_err(|_| malformed("empty body"))
}

fn next<'a>(
  instructions: &mut impl Iterator<Item = Result<Instruction<'a>, script::Error>>,
) -> Result<Instruction<'a>, InscriptionError> {
  match instructions.next() {
    Some(Ok(instruction)) => Ok(instruction),
    Some(Err(_)) => Err(malformed("invalid script")),
    None => Err(malformed("unbalanced conditional")),
  }
}

fn malformed(reason: &str) -> InscriptionError {
  MalformedEnvelope { reason }.build()
}
