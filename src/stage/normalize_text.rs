use super::*;

static WHITESPACE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\s+").unwrap());

pub(crate) struct NormalizeTextStage;

impl Stage for NormalizeTextStage {
  fn name(&self) -> &'static str {
    "normalize-text"
  }

  fn run(&mut self, context: &mut Context<'_>) -> Result {
    if !context.options().text_only {
      return Ok(());
    }

    let text = context
      .article()
      .map(|article| Self::collapse_whitespace(&article.text_content))
      .filter(|text| !text.is_empty());

    if text.is_none() {
      debug!("article text is empty");
    }

    context.set_text(text);

    Ok(())
  }
}

impl NormalizeTextStage {
  fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
  }
}
