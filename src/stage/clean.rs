use super::*;

/// Removes containers left empty after stripping.
///
/// Each pass is a post-order fold, so a node is judged only after all of its
/// children, and emptied parents fall out in the same pass. A second pass
/// confirms the fixed point. Passes are bounded by the tree depth plus one;
/// running past that bound means the fold is broken and the transform fails.
pub(crate) struct CleanStage;

impl Stage for CleanStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let options = context.options();

    let verbatim = context.verbatim().clone();

    let document = context.document();

    let limit = document.depth() + 1;

    let passes = Self::converge(document, &verbatim, options, limit)?;

    context.set_cleanup_passes(passes);

    Ok(())
  }
}

impl CleanStage {
  /// Runs cleanup passes until one removes nothing, returning the number of
  /// passes taken.
  fn converge(
    document: &mut Document,
    verbatim: &HashSet<NodeId>,
    options: &TransformOptions,
    limit: usize,
  ) -> Result<usize> {
    let mut passes = 0;

    loop {
      if passes == limit {
        return Err(Error::InvariantViolation { passes, limit });
      }

      passes += 1;

      let removals = Self::plan(document, verbatim, options);

      trace!(pass = passes, removed = removals.len(), "cleanup pass");

      if removals.is_empty() {
        return Ok(passes);
      }

      document.detach(&removals);
    }
  }

  fn is_removable(
    node: NodeRef<'_, Node>,
    removed: &HashSet<NodeId>,
    options: &TransformOptions,
  ) -> bool {
    let Node::Element(element) = node.value() else {
      return true;
    };

    if media::is_standalone(element.name()) || media::is_attached_caption(node)
    {
      return false;
    }

    let has_content = node
      .children()
      .filter(|child| !removed.contains(&child.id()))
      .any(|child| {
        !media::is_attached_caption(child) || media::contains_image(child)
      });

    if has_content {
      return false;
    }

    // Attributes hold media elements only; a wrapper needs a child.
    !(media::is_intrinsic(node) && options.has_meaningful_attribute(element))
  }

  /// Topmost nodes to detach in one pass.
  fn plan(
    document: &Document,
    verbatim: &HashSet<NodeId>,
    options: &TransformOptions,
  ) -> Vec<NodeId> {
    let mut removed = HashSet::new();

    for id in document.post_order(|node| !verbatim.contains(&node.id())) {
      if verbatim.contains(&id) {
        continue;
      }

      let Some(node) = document.get(id) else {
        continue;
      };

      if Self::is_removable(node, &removed, options) {
        removed.insert(id);
      }
    }

    document
      .post_order(|node| !removed.contains(&node.id()))
      .into_iter()
      .filter(|id| removed.contains(id))
      .collect()
  }
}
