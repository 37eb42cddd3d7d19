use super::*;

/// What happens to the text of a `figcaption` attached to a figure.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CaptionPolicy {
  /// Remove the caption text but keep the empty `figcaption` element.
  #[default]
  Strip,
  /// Keep the caption verbatim, text included.
  Keep,
}

#[derive(Debug, Clone)]
pub struct TransformOptions {
  pub caption_policy: CaptionPolicy,
  /// Attributes that keep an otherwise empty element alive when their value
  /// is non-empty.
  pub meaningful_attributes: Vec<String>,
  pub max_elems_to_parse: Option<usize>,
}

impl Default for TransformOptions {
  fn default() -> Self {
    Self {
      caption_policy: CaptionPolicy::default(),
      meaningful_attributes: Self::DEFAULT_MEANINGFUL_ATTRIBUTES
        .iter()
        .map(ToString::to_string)
        .collect(),
      max_elems_to_parse: None,
    }
  }
}

impl TransformOptions {
  pub const DEFAULT_MEANINGFUL_ATTRIBUTES: &'static [&'static str] =
    &["alt", "data-src", "data-srcset", "href", "src", "srcset"];

  #[must_use]
  pub fn builder() -> TransformOptionsBuilder {
    TransformOptionsBuilder::default()
  }

  pub(crate) fn has_meaningful_attribute(&self, element: &Element) -> bool {
    element.attrs().any(|(name, value)| {
      !value.trim().is_empty()
        && self
          .meaningful_attributes
          .iter()
          .any(|meaningful| meaningful.eq_ignore_ascii_case(name))
    })
  }
}

#[derive(Default)]
pub struct TransformOptionsBuilder {
  inner: TransformOptions,
}

impl TransformOptionsBuilder {
  #[must_use]
  pub fn build(self) -> TransformOptions {
    self.inner
  }

  #[must_use]
  pub fn caption_policy(self, caption_policy: CaptionPolicy) -> Self {
    Self {
      inner: TransformOptions {
        caption_policy,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn max_elems_to_parse(self, max_elems_to_parse: Option<usize>) -> Self {
    Self {
      inner: TransformOptions {
        max_elems_to_parse,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn meaningful_attributes<I, S>(self, attributes: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      inner: TransformOptions {
        meaningful_attributes: attributes.into_iter().map(Into::into).collect(),
        ..self.inner
      },
    }
  }
}
