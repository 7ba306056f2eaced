use super::*;

pub(crate) struct Context<'a> {
  article: Option<Article>,
  html: &'a str,
  options: &'a ExtractOptions,
  text: Option<String>,
}

impl<'a> Context<'a> {
  pub(crate) fn article(&self) -> Option<&Article> {
    self.article.as_ref()
  }

  pub(crate) fn html(&self) -> &'a str {
    self.html
  }

  pub(crate) fn into_extraction(self) -> Extraction {
    if self.options.text_only {
      Extraction::Text(self.text)
    } else {
      Extraction::Article(self.article.map(Box::new))
    }
  }

  pub(crate) fn new(html: &'a str, options: &'a ExtractOptions) -> Self {
    Self {
      article: None,
      html,
      options,
      text: None,
    }
  }

  pub(crate) fn options(&self) -> &ExtractOptions {
    self.options
  }

  pub(crate) fn set_article(&mut self, article: Option<Article>) {
    self.article = article;
  }

  pub(crate) fn set_text(&mut self, text: Option<String>) {
    self.text = text;
  }
}
