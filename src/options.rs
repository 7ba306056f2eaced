use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
  pub base_url: Option<String>,
  pub char_threshold: usize,
  pub disable_json_ld: bool,
  pub keep_classes: bool,
  pub max_elems_to_parse: Option<usize>,
  pub text_only: bool,
}

impl Default for ExtractOptions {
  fn default() -> Self {
    Self {
      base_url: None,
      char_threshold: 500,
      disable_json_ld: false,
      keep_classes: false,
      max_elems_to_parse: None,
      text_only: false,
    }
  }
}

impl ExtractOptions {
  #[must_use]
  pub fn builder() -> ExtractOptionsBuilder {
    ExtractOptionsBuilder::default()
  }

  pub(crate) fn readability_config(&self) -> dom_smoothie::Config {
    dom_smoothie::Config {
      char_threshold: self.char_threshold,
      disable_json_ld: self.disable_json_ld,
      keep_classes: self.keep_classes,
      ..Default::default()
    }
  }
}

#[derive(Default)]
pub struct ExtractOptionsBuilder {
  inner: ExtractOptions,
}

impl ExtractOptionsBuilder {
  #[must_use]
  pub fn base_url(self, base_url: Option<String>) -> Self {
    Self {
      inner: ExtractOptions {
        base_url,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn build(self) -> ExtractOptions {
    self.inner
  }

  #[must_use]
  pub fn char_threshold(self, char_threshold: usize) -> Self {
    Self {
      inner: ExtractOptions {
        char_threshold,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn disable_json_ld(self, disable_json_ld: bool) -> Self {
    Self {
      inner: ExtractOptions {
        disable_json_ld,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn keep_classes(self, keep_classes: bool) -> Self {
    Self {
      inner: ExtractOptions {
        keep_classes,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn max_elems_to_parse(self, max_elems_to_parse: Option<usize>) -> Self {
    Self {
      inner: ExtractOptions {
        max_elems_to_parse,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn text_only(self, text_only: bool) -> Self {
    Self {
      inner: ExtractOptions {
        text_only,
        ..self.inner
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builder_starts_from_readability_defaults() {
    assert_eq!(ExtractOptions::builder().build(), ExtractOptions::default());
    assert_eq!(ExtractOptions::default().char_threshold, 500);
  }

  #[test]
  fn builder_overrides_only_what_is_set() {
    let options = ExtractOptions::builder()
      .base_url(Some("https://example.com/post".into()))
      .max_elems_to_parse(Some(10))
      .text_only(true)
      .build();

    assert_eq!(options.base_url.as_deref(), Some("https://example.com/post"));
    assert_eq!(options.max_elems_to_parse, Some(10));
    assert!(options.text_only);
    assert_eq!(options.char_threshold, 500);
    assert!(!options.keep_classes);
  }

  #[test]
  fn readability_config_carries_tuning_knobs() {
    let config = ExtractOptions::builder()
      .char_threshold(120)
      .keep_classes(true)
      .disable_json_ld(true)
      .build()
      .readability_config();

    assert_eq!(config.char_threshold, 120);
    assert!(config.keep_classes);
    assert!(config.disable_json_ld);
  }
}
