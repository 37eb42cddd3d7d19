//! Removes the text from an HTML post body while keeping its images.
//!
//! Standalone `img` elements, `figure`/`figcaption` groupings and responsive
//! `picture`/`source` sets survive with their attributes untouched. Every
//! text node goes, and so does every container left empty afterwards.
//!
//! ```
//! let html = r#"<div><p>Some text</p><img src="x.jpg"><p>More text</p></div>"#;
//!
//! assert_eq!(
//!   keep_images::transform(html).unwrap(),
//!   r#"<div><img src="x.jpg"></div>"#
//! );
//! ```

use {
  classification::Classification,
  context::Context,
  document::Document,
  ego_tree::{NodeId, NodeRef, iter::Edge},
  pipeline::Pipeline,
  scraper::{ElementRef, Html, Node, node::Element},
  serde::{Deserialize, Serialize},
  stage::{ClassifyStage, CleanStage, ElementLimitStage, NoscriptStage, Stage, StripStage},
  std::{collections::HashSet, mem},
  tracing::{debug, trace},
  url::Url,
};

pub use crate::{
  error::Error,
  inspect::{ImageInfo, ImageValidation, images, validate_images},
  options::{CaptionPolicy, TransformOptions, TransformOptionsBuilder},
  report::Report,
  transformer::{Transformation, Transformer},
};

mod classification;
mod context;
mod document;
mod error;
mod inspect;
mod media;
mod options;
mod pipeline;
mod report;
mod stage;
mod transformer;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

/// Transforms `html` with the default [`TransformOptions`].
pub fn transform(html: &str) -> Result<String> {
  Ok(Transformer::default().transform(html)?.html)
}
