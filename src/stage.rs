use super::*;

#[cfg(test)]
macro_rules! test {
  (
    name: $name:ident,
    stages: [$($stage:expr),+ $(,)?],
    content: $content:expr,
    expected: $expected:expr $(,)?
  ) => {
    test! {
      name: $name,
      options: TransformOptions::default(),
      stages: [$($stage),+],
      content: $content,
      expected: $expected,
    }
  };
  (
    name: $name:ident,
    options: $options:expr,
    stages: [$($stage:expr),+ $(,)?],
    content: $content:expr,
    expected: $expected:expr $(,)?
  ) => {
    #[test]
    fn $name() {
      let mut document = Document::parse($content).unwrap();

      let options = $options;

      let mut context = Context::new(&mut document, &options);

      $($stage.run(&mut context).unwrap();)+

      pretty_assertions::assert_eq!(document.serialize(), $expected);
    }
  };
}

mod classify;
mod clean;
mod element_limit;
mod noscript;
mod strip;

pub(crate) use {
  classify::ClassifyStage, clean::CleanStage, element_limit::ElementLimitStage,
  noscript::NoscriptStage, strip::StripStage,
};

pub(crate) trait Stage {
  fn run(&mut self, context: &mut Context<'_>) -> Result;
}
