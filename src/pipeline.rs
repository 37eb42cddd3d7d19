use super::*;

/// Runs stages in order over one shared context, stopping at the first
/// failure.
pub(crate) struct Pipeline<'a> {
  context: Context<'a>,
  stages: Vec<Box<dyn Stage + 'a>>,
}

impl<'a> Pipeline<'a> {
  pub(crate) fn new(
    context: Context<'a>,
    stages: Vec<Box<dyn Stage + 'a>>,
  ) -> Self {
    Self { context, stages }
  }

  pub(crate) fn run(mut self) -> Result<Context<'a>> {
    for (index, stage) in self.stages.iter_mut().enumerate() {
      trace!(stage = index, "running stage");

      stage.run(&mut self.context)?;
    }

    Ok(self.context)
  }

  /// Element limit, noscript fallbacks, then classify, strip and clean.
  pub(crate) fn with_default_stages(context: Context<'a>) -> Self {
    Self::new(
      context,
      vec![
        Box::new(ElementLimitStage),
        Box::new(NoscriptStage),
        Box::new(ClassifyStage),
        Box::new(StripStage),
        Box::new(CleanStage),
      ],
    )
  }
}
