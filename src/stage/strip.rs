use super::*;

/// Removes every text node and every element that holds no media.
///
/// Preserved elements keep their tag and attributes; only their children are
/// examined. Under [`CaptionPolicy::Keep`] an attached caption is left alone
/// entirely and recorded as verbatim so the cleaner skips it too.
pub(crate) struct StripStage;

impl Stage for StripStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let classification = context.classification();

    let policy = context.options().caption_policy;

    let (removals, verbatim) =
      Self::plan(context.document(), &classification, policy);

    debug!(
      removed = removals.len(),
      verbatim = verbatim.len(),
      "stripping text"
    );

    context.document().detach(&removals);
    context.set_verbatim(verbatim);

    Ok(())
  }
}

impl StripStage {
  fn plan(
    document: &Document,
    classification: &Classification,
    policy: CaptionPolicy,
  ) -> (Vec<NodeId>, HashSet<NodeId>) {
    let mut removals = Vec::new();
    let mut verbatim = HashSet::new();

    let Some(root) = document.root() else {
      return (removals, verbatim);
    };

    let mut pending = vec![root];

    while let Some(node) = pending.pop() {
      for child in node.children() {
        if !classification.contains(child.id()) {
          removals.push(child.id());
        } else if policy == CaptionPolicy::Keep
          && media::is_attached_caption(child)
        {
          verbatim.insert(child.id());
        } else {
          pending.push(child);
        }
      }
    }

    (removals, verbatim)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  test! {
    name: removes_text_only_branches,
    stages: [ClassifyStage, StripStage],
    content: "<div><p>Hello <b>world</b></p></div>",
    expected: "",
  }

  test! {
    name: keeps_images_between_paragraphs,
    stages: [ClassifyStage, StripStage],
    content: "<div><p>Some text</p><img src=\"x.jpg\"><p>More text</p></div>",
    expected: "<div><img src=\"x.jpg\"></div>",
  }

  test! {
    name: removes_whitespace_and_comments,
    stages: [ClassifyStage, StripStage],
    content: "<div>\n  <!-- hero -->\n  <img src=\"x.jpg\">\n</div>\n",
    expected: "<div><img src=\"x.jpg\"></div>",
  }

  test! {
    name: removes_stray_text_inside_figure,
    stages: [ClassifyStage, StripStage],
    content: "<figure>Loose <img src=\"a.jpg\"><p>Not a caption</p></figure>",
    expected: "<figure><img src=\"a.jpg\"></figure>",
  }

  test! {
    name: strips_caption_text_by_default,
    stages: [ClassifyStage, StripStage],
    content: "<figure><img src=\"a.jpg\"><figcaption>Caption <em>text</em></figcaption></figure>",
    expected: "<figure><img src=\"a.jpg\"><figcaption></figcaption></figure>",
  }

  test! {
    name: keeps_caption_verbatim_when_asked,
    options: TransformOptions::builder()
      .caption_policy(CaptionPolicy::Keep)
      .build(),
    stages: [ClassifyStage, StripStage],
    content: "<figure><img src=\"a.jpg\"><figcaption>Caption <em>text</em></figcaption></figure>",
    expected: "<figure><img src=\"a.jpg\"><figcaption>Caption <em>text</em></figcaption></figure>",
  }

  test! {
    name: keeps_attributes_verbatim,
    stages: [ClassifyStage, StripStage],
    content: "<p class=\"wp-block-image\"><a href=\"full.jpg\"><img src=\"a.jpg\" srcset=\"a-300.jpg 300w, a-600.jpg 600w\" sizes=\"(max-width: 600px) 100vw\" width=\"600\" height=\"400\" alt=\"A\"></a> caption</p>",
    expected: "<p class=\"wp-block-image\"><a href=\"full.jpg\"><img src=\"a.jpg\" srcset=\"a-300.jpg 300w, a-600.jpg 600w\" sizes=\"(max-width: 600px) 100vw\" width=\"600\" height=\"400\" alt=\"A\"></a></p>",
  }

  test! {
    name: keeps_sibling_order,
    stages: [ClassifyStage, StripStage],
    content: "<img src=\"1.jpg\"><p>a</p><picture><img src=\"2.jpg\"></picture><p>b</p><img src=\"3.jpg\">",
    expected: "<img src=\"1.jpg\"><picture><img src=\"2.jpg\"></picture><img src=\"3.jpg\">",
  }

  test! {
    name: leaves_empty_figures_for_the_cleaner,
    stages: [ClassifyStage, StripStage],
    content: "<div><figure>Only words</figure></div>",
    expected: "<div><figure></figure></div>",
  }
}
