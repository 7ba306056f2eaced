use super::*;

pub(crate) struct ReadabilityStage;

impl Stage for ReadabilityStage {
  fn name(&self) -> &'static str {
    "readability"
  }

  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let base_url = context
      .options()
      .base_url
      .as_deref()
      .map(Url::parse)
      .transpose()?;

    let article = {
      let mut readability = dom_smoothie::Readability::new(
        context.html(),
        base_url.as_ref().map(Url::as_str),
        Some(context.options().readability_config()),
      )
      .map_err(|error| Error::Readability(error.to_string()))?;

      match readability.parse() {
        Ok(article) => Some(Article::from(article)),
        Err(error) => {
          debug!(%error, "no readable content found");
          None
        }
      }
    };

    context.set_article(article);

    Ok(())
  }
}
