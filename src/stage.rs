use super::*;

mod element_limit;
mod normalize_text;
mod readability;

pub(crate) use {
  element_limit::ElementLimitStage, normalize_text::NormalizeTextStage,
  readability::ReadabilityStage,
};

pub(crate) trait Stage {
  fn name(&self) -> &'static str;

  fn run(&mut self, context: &mut Context<'_>) -> Result;
}
