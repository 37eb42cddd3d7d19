use super::*;

/// Attributes of one `img` element, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
  pub alt: String,
  pub class: Vec<String>,
  pub height: String,
  /// 1-based position among the document's images.
  pub index: usize,
  pub src: String,
  pub title: String,
  pub width: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageValidation {
  pub invalid: usize,
  /// Sources of the invalid images, in document order.
  pub invalid_sources: Vec<String>,
  pub total: usize,
  pub valid: usize,
}

/// Lists every `img` element in `html`.
#[must_use]
pub fn images(html: &str) -> Vec<ImageInfo> {
  let fragment = Html::parse_fragment(html);

  fragment
    .tree
    .root()
    .descendants()
    .filter_map(ElementRef::wrap)
    .filter(|element| element.value().name() == "img")
    .enumerate()
    .map(|(index, element)| {
      let attr = |name: &str| -> String {
        element.value().attr(name).unwrap_or_default().to_string()
      };

      ImageInfo {
        alt: attr("alt"),
        class: attr("class").split_whitespace().map(Into::into).collect(),
        height: attr("height"),
        index: index + 1,
        src: attr("src"),
        title: attr("title"),
        width: attr("width"),
      }
    })
    .collect()
}

/// Counts images whose `src` can be loaded from the post's page: absolute
/// `http`/`https` URLs and root-relative paths.
#[must_use]
pub fn validate_images(html: &str) -> ImageValidation {
  let mut validation = ImageValidation::default();

  for image in images(html) {
    validation.total += 1;

    if is_loadable_source(&image.src) {
      validation.valid += 1;
    } else {
      validation.invalid += 1;
      validation.invalid_sources.push(image.src);
    }
  }

  validation
}

fn is_loadable_source(src: &str) -> bool {
  let src = src.trim();

  if src.starts_with('/') {
    return true;
  }

  Url::parse(src).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}
