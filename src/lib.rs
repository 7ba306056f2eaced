//! Pieces of the feedbasket feed reader: readable-content extraction for feed
//! entries, and the behavior of the dialogs used to add and edit feeds.

use {
  context::Context,
  document::Document,
  dom_query::{NodeId, NodeRef},
  pipeline::Pipeline,
  regex::Regex,
  serde::{Deserialize, Serialize},
  stage::{ElementLimitStage, NormalizeTextStage, ReadabilityStage, Stage},
  std::{
    collections::{BTreeMap, VecDeque},
    fmt::Debug,
    sync::LazyLock,
  },
  tracing::{debug, info, trace, warn},
  url::Url,
};

pub use crate::{
  article::Article,
  error::Error,
  extractor::{Extraction, Extractor},
  options::{ExtractOptions, ExtractOptionsBuilder},
};

pub mod modal;

mod article;
mod context;
mod document;
mod error;
mod extractor;
mod options;
mod pipeline;
mod stage;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
