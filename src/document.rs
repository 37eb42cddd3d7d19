use super::*;

/// A parsed post body.
///
/// Markup is parsed as a fragment in body context, so the tree always hangs
/// off a single `html` element. That element is the document root: stages
/// work on its descendants and never remove it.
pub(crate) struct Document {
  html: Html,
  root_id: NodeId,
}

impl Document {
  pub(crate) fn depth(&self) -> usize {
    let Some(root) = self.root() else {
      return 0;
    };

    let (mut depth, mut max) = (0_usize, 0_usize);

    for edge in root.traverse() {
      match edge {
        Edge::Open(_) => {
          depth += 1;
          max = max.max(depth);
        }
        Edge::Close(_) => depth -= 1,
      }
    }

    max.saturating_sub(1)
  }

  /// Appends copies of the nodes under `fragment`'s root element to
  /// `parent`, in document order.
  pub(crate) fn append_fragment(&mut self, parent: NodeId, fragment: &Html) {
    let Some(source) = fragment
      .tree
      .root()
      .children()
      .find(|node| node.value().is_element())
    else {
      return;
    };

    let mut pending: Vec<(NodeRef<'_, Node>, NodeId)> =
      source.children().rev().map(|child| (child, parent)).collect();

    while let Some((node, target)) = pending.pop() {
      let Some(mut target) = self.html.tree.get_mut(target) else {
        continue;
      };

      let id = target.append(node.value().clone()).id();

      pending.extend(node.children().rev().map(|child| (child, id)));
    }
  }

  pub(crate) fn detach(&mut self, ids: &[NodeId]) {
    for id in ids {
      if let Some(mut node) = self.html.tree.get_mut(*id) {
        node.detach();
      }
    }
  }

  pub(crate) fn element_count(&self) -> usize {
    self
      .descendants()
      .filter(|node| node.value().is_element())
      .count()
  }

  pub(crate) fn get(&self, id: NodeId) -> Option<NodeRef<'_, Node>> {
    self.html.tree.get(id)
  }

  pub(crate) fn image_count(&self) -> usize {
    self
      .descendants()
      .filter(|node| media::element_name(node) == Some("img"))
      .count()
  }

  pub(crate) fn parse(markup: &str) -> Result<Self> {
    let html = Html::parse_fragment(markup);

    let root_id = html
      .tree
      .root()
      .children()
      .find(|node| node.value().is_element())
      .map(|node| node.id())
      .ok_or_else(|| Error::Parse {
        message: "parser produced no root element".into(),
      })?;

    Ok(Self { html, root_id })
  }

  /// Node ids below the root in post-order: children before their parent,
  /// siblings in document order.
  ///
  /// Nodes for which `descend` returns false are listed but their subtrees
  /// are not visited.
  pub(crate) fn post_order<F>(&self, descend: F) -> Vec<NodeId>
  where
    F: Fn(NodeRef<'_, Node>) -> bool,
  {
    let Some(root) = self.root() else {
      return Vec::new();
    };

    let mut order = Vec::new();

    let mut stack: Vec<(NodeRef<'_, Node>, bool)> =
      root.children().rev().map(|child| (child, false)).collect();

    while let Some((node, expanded)) = stack.pop() {
      if expanded || !node.has_children() || !descend(node) {
        order.push(node.id());
        continue;
      }

      stack.push((node, true));
      stack.extend(node.children().rev().map(|child| (child, false)));
    }

    order
  }

  pub(crate) fn root(&self) -> Option<NodeRef<'_, Node>> {
    self.html.tree.get(self.root_id)
  }

  pub(crate) fn serialize(&self) -> String {
    self
      .root()
      .and_then(ElementRef::wrap)
      .map(|root| root.inner_html())
      .unwrap_or_default()
  }

  /// Characters of visible text, ignoring surrounding whitespace per node.
  ///
  /// The raw body of a `noscript` element is markup, not text.
  pub(crate) fn text_chars(&self) -> usize {
    self
      .descendants()
      .filter(|node| {
        node.parent().is_none_or(|parent| {
          media::element_name(&parent) != Some("noscript")
        })
      })
      .filter_map(|node| match node.value() {
        Node::Text(text) => Some(text.trim().chars().count()),
        _ => None,
      })
      .sum()
  }

  fn descendants(&self) -> impl Iterator<Item = NodeRef<'_, Node>> {
    self.root().into_iter().flat_map(|root| root.descendants().skip(1))
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn counts_element_nodes_below_root() {
    let document = Document::parse(
      r#"
      <div>
        <p>One</p>
        <span>Two</span>
      </div>
      <img src="image.png" />
      "#,
    )
    .unwrap();

    assert_eq!(document.element_count(), 4);
    assert_eq!(document.image_count(), 1);
  }

  #[test]
  fn empty_input_parses_to_empty_root() {
    let document = Document::parse("").unwrap();

    assert_eq!(document.element_count(), 0);
    assert_eq!(document.depth(), 0);
    assert_eq!(document.serialize(), "");
  }

  #[test]
  fn document_wrappers_are_dropped() {
    let document = Document::parse(
      "<html><head></head><body><p>Hi</p></body></html>",
    )
    .unwrap();

    assert_eq!(document.serialize(), "<p>Hi</p>");
  }

  #[test]
  fn measures_depth_below_root() {
    let document =
      Document::parse("<div><p><b>deep</b></p></div><img src=\"a.jpg\">")
        .unwrap();

    assert_eq!(document.depth(), 4);
  }

  #[test]
  fn counts_trimmed_text() {
    let document = Document::parse("<p>  Hello </p>\n<p>world</p>").unwrap();

    assert_eq!(document.text_chars(), 10);
  }

  #[test]
  fn noscript_body_is_not_text() {
    let document =
      Document::parse("<p>Hi</p><noscript><img src=\"a.jpg\"></noscript>")
        .unwrap();

    assert_eq!(document.text_chars(), 2);
    assert_eq!(document.image_count(), 0);
  }

  #[test]
  fn appends_fragment_nodes_in_order() {
    let mut document = Document::parse("<div></div>").unwrap();

    let div = document.post_order(|_| true)[0];

    document.append_fragment(
      div,
      &Html::parse_fragment("<a href=\"/x\"><img src=\"a.jpg\"></a>text"),
    );

    assert_eq!(
      document.serialize(),
      "<div><a href=\"/x\"><img src=\"a.jpg\"></a>text</div>"
    );
  }

  #[test]
  fn post_order_lists_children_before_parents() {
    let document =
      Document::parse("<div><p>a</p><img src=\"x.jpg\"></div>").unwrap();

    let names: Vec<String> = document
      .post_order(|_| true)
      .into_iter()
      .filter_map(|id| document.get(id))
      .map(|node| match node.value() {
        Node::Element(element) => element.name().to_string(),
        Node::Text(text) => format!("#{}", &**text),
        _ => String::from("?"),
      })
      .collect();

    assert_eq!(names, vec!["#a", "p", "img", "div"]);
  }

  #[test]
  fn post_order_skips_subtrees_it_does_not_descend() {
    let document =
      Document::parse("<div><p>a</p></div><span>b</span>").unwrap();

    let visited = document
      .post_order(|node| media::element_name(&node) != Some("div"))
      .len();

    assert_eq!(visited, 3);
  }

  #[test]
  fn detached_nodes_leave_the_tree() {
    let mut document =
      Document::parse("<div><p>text</p><img src=\"x.jpg\"></div>").unwrap();

    let paragraph = document
      .post_order(|_| true)
      .into_iter()
      .find(|id| {
        document
          .get(*id)
          .is_some_and(|node| media::element_name(&node) == Some("p"))
      })
      .unwrap();

    document.detach(&[paragraph]);

    assert_eq!(document.serialize(), "<div><img src=\"x.jpg\"></div>");
  }
}
