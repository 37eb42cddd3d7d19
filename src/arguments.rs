use super::*;

#[derive(Debug, Parser)]
#[command(name = "keep-images")]
#[command(
  about = "Remove the text from HTML post bodies while keeping their images",
  version
)]
pub(crate) struct Arguments {
  #[arg(
    long,
    value_enum,
    default_value_t = CaptionPolicy::Strip,
    help = "What to do with the text of captions attached to figures"
  )]
  caption_policy: CaptionPolicy,
  #[arg(long, help = "Report what would change without writing anything")]
  dry_run: bool,
  #[arg(
    short,
    long,
    conflicts_with = "output",
    help = "Rewrite each input file with its transformed content"
  )]
  in_place: bool,
  #[arg(
    long,
    conflicts_with_all = ["dry_run", "in_place", "output"],
    help = "Print content length and image details without transforming"
  )]
  info: bool,
  #[arg(
    value_name = "FILE",
    help = "HTML files or directories to process, `-` for stdin"
  )]
  inputs: Vec<PathBuf>,
  #[arg(long, help = "Print reports as JSON")]
  json: bool,
  #[arg(
    long = "keep-attribute",
    value_name = "NAME",
    help = "Attribute that keeps an empty element alive; replaces the defaults"
  )]
  keep_attributes: Vec<String>,
  #[arg(
    short,
    long = "list",
    value_name = "FILE",
    help = "File listing one input path per line"
  )]
  lists: Vec<PathBuf>,
  #[arg(
    long,
    value_name = "N",
    help = "Refuse documents with more than N elements"
  )]
  max_elements: Option<usize>,
  #[arg(
    short,
    long,
    value_name = "PATH",
    help = "Write the transformed document to PATH instead of stdout"
  )]
  output: Option<PathBuf>,
  #[arg(
    short,
    long,
    action = clap::ArgAction::Count,
    help = "Log more detail; repeat for more"
  )]
  verbose: u8,
}

#[derive(Debug, Default)]
struct Summary {
  failed: usize,
  succeeded: usize,
}

#[derive(Serialize)]
struct InputReport<'a> {
  input: String,
  report: &'a Report,
}

#[derive(Serialize)]
struct InputInfo {
  content_length: usize,
  image_count: usize,
  images: Vec<ImageInfo>,
  input: String,
  invalid_images: usize,
  valid_images: usize,
}

impl Arguments {
  fn info(&self, input: &Input, out: &mut impl Write) -> Result {
    let html = input.read()?;

    let validation = validate_images(&html);

    let info = InputInfo {
      content_length: html.chars().count(),
      image_count: validation.total,
      images: images(&html),
      input: input.to_string(),
      invalid_images: validation.invalid,
      valid_images: validation.valid,
    };

    if self.json {
      writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
      return Ok(());
    }

    writeln!(out, "{}:", info.input)?;
    writeln!(out, "  content length: {} characters", info.content_length)?;
    writeln!(
      out,
      "  images: {} ({} valid, {} invalid)",
      info.image_count, info.valid_images, info.invalid_images
    )?;

    for image in &info.images {
      writeln!(out, "    - {}", image.src)?;
    }

    Ok(())
  }

  pub(crate) fn init_tracing(&self) {
    let level = match self.verbose {
      0 => "info",
      1 => "debug",
      _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_target(false)
      .with_writer(io::stderr)
      .init();
  }

  fn options(&self) -> TransformOptions {
    let builder = TransformOptions::builder()
      .caption_policy(self.caption_policy)
      .max_elems_to_parse(self.max_elements);

    if self.keep_attributes.is_empty() {
      builder.build()
    } else {
      builder
        .meaningful_attributes(self.keep_attributes.iter().cloned())
        .build()
    }
  }

  fn process(
    &self,
    transformer: &Transformer,
    input: &Input,
    out: &mut impl Write,
  ) -> Result {
    let html = input.read()?;

    let transformation = transformer
      .transform(&html)
      .with_context(|| format!("failed to transform `{input}`"))?;

    let report = &transformation.report;

    info!(
      %input,
      images = report.images_after,
      text_chars_removed = report.text_chars_removed(),
      "transformed"
    );

    if report.images_after < report.images_before {
      warn!(
        %input,
        before = report.images_before,
        after = report.images_after,
        "images were lost during transformation"
      );
    }

    if self.dry_run {
      return self.report(input, report, out);
    }

    if self.in_place {
      return input.write(&transformation.html);
    }

    if let Some(path) = &self.output {
      return fs::write(path, &transformation.html).with_context(|| {
        format!("failed to write file to `{}`", path.display())
      });
    }

    writeln!(out, "{}", transformation.html)?;

    Ok(())
  }

  fn report(
    &self,
    input: &Input,
    report: &Report,
    out: &mut impl Write,
  ) -> Result {
    if self.json {
      let report = InputReport {
        input: input.to_string(),
        report,
      };

      writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;

      return Ok(());
    }

    writeln!(out, "{input}:")?;
    writeln!(
      out,
      "  images: {} -> {}",
      report.images_before, report.images_after
    )?;
    writeln!(
      out,
      "  text removed: {} characters",
      report.text_chars_removed()
    )?;
    writeln!(out, "  elements removed: {}", report.elements_removed)?;

    match report.retention_rate() {
      Some(rate) => writeln!(out, "  image retention: {rate:.1}%")?,
      None => writeln!(out, "  image retention: n/a")?,
    }

    Ok(())
  }

  pub(crate) fn run(self) -> Result {
    self.run_with(&mut io::stdout().lock())
  }

  fn run_with(self, out: &mut impl Write) -> Result {
    let inputs = Input::collect(&self.inputs, &self.lists)?;

    ensure!(!inputs.is_empty(), "no input files given");

    if inputs.len() > 1 {
      ensure!(
        self.output.is_none(),
        "--output accepts a single input, got {}",
        inputs.len()
      );

      ensure!(
        self.in_place || self.dry_run || self.info,
        "multiple inputs require --in-place, --dry-run or --info"
      );
    }

    if self.info {
      return self.batch(&inputs, |input| self.info(input, out));
    }

    let transformer = Transformer::new(self.options());

    self.batch(&inputs, |input| self.process(&transformer, input, out))
  }

  fn batch<F>(&self, inputs: &[Input], mut run: F) -> Result
  where
    F: FnMut(&Input) -> Result,
  {
    if let [input] = inputs {
      return run(input);
    }

    let mut summary = Summary::default();

    for input in inputs {
      match run(input) {
        Ok(()) => summary.succeeded += 1,
        Err(error) => {
          error!(%input, "{error:#}");
          summary.failed += 1;
        }
      }
    }

    info!(
      total = inputs.len(),
      succeeded = summary.succeeded,
      failed = summary.failed,
      "batch finished"
    );

    if summary.failed > 0 {
      bail!("{} of {} inputs failed", summary.failed, inputs.len());
    }

    Ok(())
  }
}
