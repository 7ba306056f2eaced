use super::*;

/// The single JSON value an extraction produces.
///
/// Serializes untagged: an article becomes a JSON object, text becomes a JSON
/// string, and an absent result of either kind becomes `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Extraction {
  Article(Option<Box<Article>>),
  Text(Option<String>),
}

impl Extraction {
  pub fn is_empty(&self) -> bool {
    matches!(self, Self::Article(None) | Self::Text(None))
  }

  pub fn to_json(&self) -> Result<String> {
    Ok(serde_json::to_string(self)?)
  }
}

/// Runs readability extraction over HTML documents.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
  options: ExtractOptions,
}

impl Extractor {
  /// Extracts the readable content of `html`.
  ///
  /// A document with nothing worth extracting is not an error; it produces an
  /// empty [`Extraction`] that serializes as `null`.
  pub fn extract(&self, html: &str) -> Result<Extraction> {
    let context =
      Pipeline::with_default_stages(Context::new(html, &self.options))
        .run()?;

    let extraction = context.into_extraction();

    debug!(empty = extraction.is_empty(), "extraction finished");

    Ok(extraction)
  }

  #[must_use]
  pub fn new(options: ExtractOptions) -> Self {
    Self { options }
  }

  pub fn options(&self) -> &ExtractOptions {
    &self.options
  }
}
