use super::*;

/// Tags that carry image semantics on their own.
pub(crate) const MEDIA_TAGS: &[&str] =
  &["figcaption", "figure", "img", "picture", "source"];

/// Media tags that are childless by nature.
pub(crate) const STANDALONE_TAGS: &[&str] = &["img", "source"];

pub(crate) fn element_name<'a>(
  node: &NodeRef<'a, Node>,
) -> Option<&'a str> {
  match node.value() {
    Node::Element(element) => Some(element.name()),
    _ => None,
  }
}

/// A `figcaption` whose parent is a `figure`.
pub(crate) fn is_attached_caption(node: NodeRef<'_, Node>) -> bool {
  element_name(&node) == Some("figcaption")
    && node
      .parent()
      .is_some_and(|parent| element_name(&parent) == Some("figure"))
}

/// Whether the node is media-bearing regardless of its descendants.
///
/// A stray `figcaption` is plain content; only a caption attached to a
/// figure counts.
pub(crate) fn is_intrinsic(node: NodeRef<'_, Node>) -> bool {
  match element_name(&node) {
    Some("figcaption") => is_attached_caption(node),
    Some(name) => MEDIA_TAGS.contains(&name),
    None => false,
  }
}

pub(crate) fn is_standalone(name: &str) -> bool {
  STANDALONE_TAGS.contains(&name)
}

/// Whether any element below `node` renders an image.
pub(crate) fn contains_image(node: NodeRef<'_, Node>) -> bool {
  node.descendants().skip(1).any(|descendant| {
    matches!(element_name(&descendant), Some("img" | "picture" | "source"))
  })
}
