/// The elements a [`ModalController`](super::ModalController) is wired to,
/// each given as a CSS selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalElements {
  pub close_button: String,
  pub dialog: String,
  pub fields: Vec<String>,
  pub form_container: Option<String>,
  pub open_button: String,
  pub search_form: Option<String>,
}

impl ModalElements {
  /// The "find/add feed" dialog: a URL search form whose results (or errors)
  /// render into the feed form container.
  pub fn add_feed() -> Self {
    Self {
      close_button: "#close-modal-button".into(),
      dialog: "#add-feed-modal".into(),
      fields: vec!["#url".into()],
      form_container: Some("#feed-form".into()),
      open_button: "#find-feed-button".into(),
      search_form: Some("#find-feed-form".into()),
    }
  }

  pub fn edit_feed() -> Self {
    Self {
      close_button: "#close-modal-button".into(),
      dialog: "#edit-feed-modal".into(),
      fields: Vec::new(),
      form_container: None,
      open_button: "#edit-feed-button".into(),
      search_form: None,
    }
  }

  /// The close button selector, restricted to descendants of this dialog.
  pub(crate) fn scoped_close_button(&self) -> String {
    format!("{} {}", self.dialog, self.close_button)
  }
}
