use super::*;

/// What a controller knows about its dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogState {
  form_fields: BTreeMap<String, String>,
  open: bool,
}

impl DialogState {
  pub(crate) fn clear_fields(&mut self) {
    for value in self.form_fields.values_mut() {
      value.clear();
    }
  }

  pub fn field(&self, selector: &str) -> Option<&str> {
    self.form_fields.get(selector).map(String::as_str)
  }

  pub fn fields(&self) -> &BTreeMap<String, String> {
    &self.form_fields
  }

  pub fn is_open(&self) -> bool {
    self.open
  }

  pub(crate) fn new<'a>(fields: impl IntoIterator<Item = &'a String>) -> Self {
    Self {
      form_fields: fields
        .into_iter()
        .map(|field| (field.clone(), String::new()))
        .collect(),
      open: false,
    }
  }

  pub(crate) fn record(&mut self, selector: &str, value: &str) {
    if let Some(field) = self.form_fields.get_mut(selector) {
      value.clone_into(field);
    }
  }

  pub(crate) fn set_open(&mut self, open: bool) {
    self.open = open;
  }
}
