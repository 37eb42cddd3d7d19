use super::*;

/// The output of a transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transformation {
  pub html: String,
  pub report: Report,
}

/// Strips text from HTML documents, keeping their images.
///
/// A transformer holds only its options; every call parses its own tree, so
/// one transformer can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Transformer {
  options: TransformOptions,
}

impl Transformer {
  #[must_use]
  pub fn new(options: TransformOptions) -> Self {
    Self { options }
  }

  #[must_use]
  pub fn options(&self) -> &TransformOptions {
    &self.options
  }

  /// Parses `html`, removes its text and empty containers, and serializes the
  /// result.
  ///
  /// Either the whole document is processed or an error is returned; there
  /// are no partial results.
  pub fn transform(&self, html: &str) -> Result<Transformation> {
    let mut document = Document::parse(html)?;

    let elements_before = document.element_count();
    let images_before = document.image_count();
    let text_chars_before = document.text_chars();

    let context = Pipeline::with_default_stages(Context::new(
      &mut document,
      &self.options,
    ))
    .run()?;

    let cleanup_passes = context.cleanup_passes();
    let recovered_images = context.recovered_images();

    let report = Report {
      cleanup_passes,
      elements_removed: elements_before
        .saturating_sub(document.element_count()),
      images_after: document.image_count(),
      images_before: images_before + recovered_images,
      text_chars_after: document.text_chars(),
      text_chars_before,
    };

    debug!(
      images_before = report.images_before,
      images_after = report.images_after,
      text_chars_removed = report.text_chars_removed(),
      elements_removed = report.elements_removed,
      cleanup_passes = report.cleanup_passes,
      "transformed document"
    );

    Ok(Transformation {
      html: document.serialize(),
      report,
    })
  }
}
