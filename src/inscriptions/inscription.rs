use {super::*, crate::error::EmptyPayload};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Inscription {
  pub content_type: Vec<u8>,
  pub body: Vec<u8>,
}

impl Inscription {
  pub fn new(
    content_type: impl Into<Vec<u8>>,
    body: Vec<u8>,
  ) -> Result<Self, InscriptionError> {
    if body.is_empty() {
      return EmptyPayload.fail();
    }

    Ok(Self {
      content_type: content_type.into(),
      body,
    })
  }

  pub fn from_file(path: &Path) -> Result<Self> {
    let content_type = media::content_type_for_path(path)?;

    let body =
      fs::read(path).with_context(|| format!("io error reading {}", path.display()))?;

    Ok(Self::new(content_type, body)?)
  }

  pub fn content_type(&self) -> Option<&str> {
    str::from_utf8(&self.content_type).ok()
  }

  /// Appends the envelope to `builder` in fixed token order. The body is split
  /// into consecutive pushes of at most `MAX_SCRIPT_ELEMENT_SIZE` bytes.
  pub(crate) fn append_reveal_script_to_builder(
    &self,
    mut builder: script::Builder,
  ) -> script::Builder {
    builder = builder
      .push_opcode(opcodes::OP_FALSE)
      .push_opcode(opcodes::all::OP_IF)
      .push_slice(&envelope::PROTOCOL_ID)
      .push_slice(&envelope::CONTENT_TYPE_TAG)
      .push_slice(&self.content_type)
      .push_slice(&[]);

    for chunk in self.body.chunks(MAX_SCRIPT_ELEMENT_SIZE) {
      builder = builder.push_slice(chunk);
    }

    builder.push_opcode(opcodes::all::OP_ENDIF)
  }

  pub(crate) fn append_reveal_script(&self, builder: script::Builder) -> Script {
    self.append_reveal_script_to_builder(builder).into_script()
  }

  /// The tapscript leaf the reveal input spends: a key-path guard followed by
  /// the inert envelope.
  pub(crate) fn reveal_script(&self, internal_key: XOnlyPublicKey) -> Script {
    self.append_reveal_script(
      script::Builder::new()
        .push_slice(&internal_key.serialize())
        .push_opcode(opcodes::all::OP_CHECKSIG),
    )
  }
}
