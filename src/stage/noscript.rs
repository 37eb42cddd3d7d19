use super::*;

/// Turns the raw body of `noscript` fallbacks back into markup when it holds
/// an image.
///
/// Lazy-loading plugins ship the real image inside `noscript`, which the
/// parser keeps as text. Left alone it would be stripped with the rest of
/// the text and the only loadable source would be lost.
pub(crate) struct NoscriptStage;

impl Stage for NoscriptStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let document = context.document();

    let mut recovered = 0;

    for (id, markup) in Self::fallbacks(document) {
      let fragment = Html::parse_fragment(&markup);

      let images = fragment
        .tree
        .root()
        .descendants()
        .filter(|node| media::element_name(node) == Some("img"))
        .count();

      if images == 0 {
        continue;
      }

      let text: Vec<NodeId> = document
        .get(id)
        .map(|node| node.children().map(|child| child.id()).collect())
        .unwrap_or_default();

      document.detach(&text);
      document.append_fragment(id, &fragment);

      recovered += images;
    }

    debug!(recovered, "unwrapped noscript fallbacks");

    context.set_recovered_images(recovered);

    Ok(())
  }
}

impl NoscriptStage {
  /// `noscript` elements holding only text, with that text.
  fn fallbacks(document: &Document) -> Vec<(NodeId, String)> {
    document
      .post_order(|_| true)
      .into_iter()
      .filter_map(|id| document.get(id))
      .filter(|node| media::element_name(node) == Some("noscript"))
      .filter_map(|node| {
        let markup = node
          .children()
          .map(|child| child.value().as_text().map(|text| &**text))
          .collect::<Option<String>>()?;

        (!markup.trim().is_empty()).then(|| (node.id(), markup))
      })
      .collect()
  }
}
