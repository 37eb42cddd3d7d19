use super::*;

/// Marks every node that is, or contains, image-bearing markup.
pub(crate) struct ClassifyStage;

impl Stage for ClassifyStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let classification = Self::classify(context.document());

    debug!(preserved = classification.len(), "classified document");

    context.set_classification(classification);

    Ok(())
  }
}

impl ClassifyStage {
  fn classify(document: &Document) -> Classification {
    let mut classification = Classification::default();

    for id in document.post_order(|_| true) {
      let Some(node) = document.get(id) else {
        continue;
      };

      if !node.value().is_element() {
        continue;
      }

      if media::is_intrinsic(node)
        || node
          .children()
          .any(|child| classification.contains(child.id()))
      {
        classification.insert(id);
      }
    }

    classification
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  fn preserved(content: &str) -> Vec<String> {
    let document = Document::parse(content).unwrap();

    let classification = ClassifyStage::classify(&document);

    document
      .post_order(|_| true)
      .into_iter()
      .filter(|id| classification.contains(*id))
      .filter_map(|id| document.get(id))
      .filter_map(|node| node.value().as_element().map(|e| e.name().into()))
      .collect()
  }

  #[test]
  fn text_only_document_preserves_nothing() {
    let document =
      Document::parse("<div><p>Hello <b>world</b></p></div>").unwrap();

    assert_eq!(ClassifyStage::classify(&document).len(), 0);
  }

  #[test]
  fn ancestors_of_images_are_preserved() {
    assert_eq!(
      preserved("<div><p>Text</p><section><img src=\"a.jpg\"></section></div>"),
      vec!["img", "section", "div"]
    );
  }

  #[test]
  fn figure_preserves_attached_caption() {
    assert_eq!(
      preserved(
        "<figure><img src=\"a.jpg\"><figcaption>Caption</figcaption></figure>"
      ),
      vec!["img", "figcaption", "figure"]
    );
  }

  #[test]
  fn stray_caption_is_ordinary_text() {
    assert_eq!(
      preserved("<div><figcaption>Floating</figcaption></div>"),
      Vec::<String>::new()
    );
  }

  #[test]
  fn picture_sources_are_preserved() {
    assert_eq!(
      preserved(
        "<picture><source srcset=\"a.webp\" type=\"image/webp\"><img src=\"a.jpg\"></picture>"
      ),
      vec!["source", "img", "picture"]
    );
  }

  #[test]
  fn unknown_tags_are_preserved_only_through_descendants() {
    assert_eq!(
      preserved(
        "<x-card>Plain</x-card><x-gallery><img src=\"a.jpg\"></x-gallery>"
      ),
      vec!["img", "x-gallery"]
    );
  }

  #[test]
  fn comments_are_never_preserved() {
    let document =
      Document::parse("<div><!-- note --><img src=\"a.jpg\"></div>").unwrap();

    let classification = ClassifyStage::classify(&document);

    let comments = document
      .post_order(|_| true)
      .into_iter()
      .filter(|id| {
        document
          .get(*id)
          .is_some_and(|node| node.value().is_comment())
      })
      .collect::<Vec<_>>();

    assert_eq!(comments.len(), 1);
    assert!(!classification.contains(comments[0]));
  }

  #[test]
  fn classification_does_not_touch_the_tree() {
    let content = "<div><p>Text</p><img src=\"a.jpg\"></div>";

    let document = Document::parse(content).unwrap();

    ClassifyStage::classify(&document);

    assert_eq!(document.serialize(), content);
  }
}
