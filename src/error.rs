#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("aborting parsing document; {found} elements found (limit: {limit})")]
  ElementLimitExceeded { found: usize, limit: usize },
  #[error("invalid base url: {source}")]
  InvalidBaseUrl {
    #[from]
    source: url::ParseError,
  },
  #[error("failed to read input: {source}")]
  Io {
    #[from]
    source: std::io::Error,
  },
  #[error("failed to serialize extraction result: {source}")]
  Json {
    #[from]
    source: serde_json::Error,
  },
  #[error("missing HTML argument")]
  MissingArgument,
  #[error("readability setup failed: {0}")]
  Readability(String),
}
