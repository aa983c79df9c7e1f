use {super::*, crate::error::UnsupportedContentType};

const TABLE: &[(&str, &[&str])] = &[
  ("application/json", &["json"]),
  ("application/pdf", &["pdf"]),
  ("image/jpeg", &["jpg", "jpeg"]),
  ("image/png", &["png"]),
  ("text/plain;charset=utf-8", &["txt"]),
];

pub(crate) fn content_type_for_path(path: &Path) -> Result<&'static str> {
  let extension = path
    .extension()
    .ok_or_else(|| anyhow!("file must have extension"))?
    .to_str()
    .ok_or_else(|| anyhow!("unrecognized extension"))?
    .to_lowercase();

  Ok(content_type_for_extension(&extension)?)
}

pub(crate) fn content_type_for_extension(
  extension: &str,
) -> Result<&'static str, InscriptionError> {
  for (content_type, extensions) in TABLE {
    if extensions.contains(&extension) {
      return Ok(content_type);
    }
  }

  UnsupportedContentType { extension }.fail()
}

pub(crate) fn supported_extensions() -> String {
  let mut extensions = TABLE
    .iter()
    .flat_map(|(_, extensions)| extensions.iter())
    .copied()
    .collect::<Vec<&str>>();

  extensions.sort();

  extensions.join(" ")
}
