use super::*;

pub(crate) struct Context<'a> {
  classification: Classification,
  cleanup_passes: usize,
  document: &'a mut Document,
  options: &'a TransformOptions,
  recovered_images: usize,
  verbatim: HashSet<NodeId>,
}

impl<'a> Context<'a> {
  pub(crate) fn classification(&mut self) -> Classification {
    mem::take(&mut self.classification)
  }

  pub(crate) fn cleanup_passes(&self) -> usize {
    self.cleanup_passes
  }

  pub(crate) fn document(&mut self) -> &mut Document {
    &mut *self.document
  }

  pub(crate) fn new(
    document: &'a mut Document,
    options: &'a TransformOptions,
  ) -> Self {
    Self {
      classification: Classification::default(),
      cleanup_passes: 0,
      document,
      options,
      recovered_images: 0,
      verbatim: HashSet::new(),
    }
  }

  pub(crate) fn options(&self) -> &'a TransformOptions {
    self.options
  }

  /// Images found in `noscript` fallbacks, absent from the parsed tree.
  pub(crate) fn recovered_images(&self) -> usize {
    self.recovered_images
  }

  pub(crate) fn set_classification(&mut self, classification: Classification) {
    self.classification = classification;
  }

  pub(crate) fn set_cleanup_passes(&mut self, passes: usize) {
    self.cleanup_passes = passes;
  }

  pub(crate) fn set_recovered_images(&mut self, count: usize) {
    self.recovered_images = count;
  }

  pub(crate) fn set_verbatim(&mut self, verbatim: HashSet<NodeId>) {
    self.verbatim = verbatim;
  }

  /// Nodes whose subtrees are kept exactly as parsed.
  pub(crate) fn verbatim(&self) -> &HashSet<NodeId> {
    &self.verbatim
  }
}
