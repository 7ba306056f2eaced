use super::*;

/// The readable content extracted from a document.
///
/// Serializes with the same camelCase keys readability.js produces, so callers
/// that consumed the JavaScript output keep working unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
  pub title: String,
  pub byline: Option<String>,
  pub dir: Option<String>,
  pub lang: Option<String>,
  pub content: String,
  pub text_content: String,
  pub length: usize,
  pub excerpt: Option<String>,
  pub site_name: Option<String>,
  pub published_time: Option<String>,
}

impl Article {
  #[allow(clippy::too_many_arguments)]
  pub fn new(
    title: String,
    byline: Option<String>,
    dir: Option<String>,
    lang: Option<String>,
    content: String,
    text_content: String,
    excerpt: Option<String>,
    site_name: Option<String>,
    published_time: Option<String>,
  ) -> Self {
    let length = text_content.chars().count();

    Self {
      title,
      byline,
      dir,
      lang,
      content,
      text_content,
      length,
      excerpt,
      site_name,
      published_time,
    }
  }
}

impl From<dom_smoothie::Article> for Article {
  fn from(article: dom_smoothie::Article) -> Self {
    Self::new(
      article.title,
      article.byline,
      article.dir,
      article.lang,
      article.content.to_string(),
      article.text_content.to_string(),
      article.excerpt,
      article.site_name,
      article.published_time,
    )
  }
}
