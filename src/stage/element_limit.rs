use super::*;

/// Refuses documents with more elements than the configured limit.
pub(crate) struct ElementLimitStage;

impl Stage for ElementLimitStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let Some(limit) = context.options().max_elems_to_parse else {
      return Ok(());
    };

    let found = context.document().element_count();

    debug!(found, limit, "checked element count");

    if found > limit {
      return Err(Error::ElementLimitExceeded { found, limit });
    }

    Ok(())
  }
}
