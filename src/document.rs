use super::*;

pub(crate) struct Document {
  document: dom_query::Document,
}

impl Document {
  pub(crate) fn element_count(&self) -> usize {
    self
      .document
      .root()
      .descendants()
      .into_iter()
      .filter(NodeRef::is_element)
      .count()
  }

  pub(crate) fn parse(html: &str) -> Self {
    Document {
      document: dom_query::Document::from(html),
    }
  }
}
