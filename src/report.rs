use super::*;

/// Before/after statistics for one transformation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
  pub cleanup_passes: usize,
  pub elements_removed: usize,
  pub images_after: usize,
  pub images_before: usize,
  pub text_chars_after: usize,
  pub text_chars_before: usize,
}

impl Report {
  /// Percentage of input images still present in the output, or `None` when
  /// the input had no images.
  #[must_use]
  pub fn retention_rate(&self) -> Option<f64> {
    if self.images_before == 0 {
      return None;
    }

    Some(self.images_after as f64 / self.images_before as f64 * 100.0)
  }

  #[must_use]
  pub fn text_chars_removed(&self) -> usize {
    self.text_chars_before.saturating_sub(self.text_chars_after)
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn retention_rate_is_a_percentage() {
    let report = Report {
      images_after: 3,
      images_before: 4,
      ..Report::default()
    };

    assert_eq!(report.retention_rate(), Some(75.0));
  }

  #[test]
  fn retention_rate_is_undefined_without_images() {
    assert_eq!(Report::default().retention_rate(), None);
  }

  #[test]
  fn text_chars_removed_never_underflows() {
    let report = Report {
      text_chars_after: 12,
      text_chars_before: 5,
      ..Report::default()
    };

    assert_eq!(report.text_chars_removed(), 0);
  }
}
