use super::*;

pub(crate) struct ElementLimitStage;

impl Stage for ElementLimitStage {
  fn name(&self) -> &'static str {
    "element-limit"
  }

  fn run(&mut self, context: &mut Context<'_>) -> Result {
    if let Some(limit) = context.options().max_elems_to_parse {
      let found = Document::parse(context.html()).element_count();

      debug!(found, limit, "counted document elements");

      if found > limit {
        return Err(Error::ElementLimitExceeded { found, limit });
      }
    }

    Ok(())
  }
}
