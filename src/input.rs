use super::*;

const HTML_EXTENSIONS: &[&str] = &["htm", "html"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Input {
  File(PathBuf),
  Stdin,
}

impl Input {
  /// Expands positional paths and list files into inputs.
  ///
  /// `-` stands for stdin. Directories are walked for HTML files in file
  /// name order. List files hold one path per line; blank lines and lines
  /// starting with `#` are skipped.
  pub(crate) fn collect(
    paths: &[PathBuf],
    lists: &[PathBuf],
  ) -> Result<Vec<Self>> {
    let mut inputs = Vec::new();

    for path in paths {
      Self::expand(path, &mut inputs)?;
    }

    for list in lists {
      let contents = fs::read_to_string(list).with_context(|| {
        format!("failed to read input list from `{}`", list.display())
      })?;

      for line in Self::list_entries(&contents) {
        Self::expand(Path::new(line), &mut inputs)?;
      }
    }

    Ok(inputs)
  }

  fn expand(path: &Path, inputs: &mut Vec<Self>) -> Result {
    if path == Path::new("-") {
      inputs.push(Self::Stdin);
      return Ok(());
    }

    if !path.is_dir() {
      inputs.push(Self::File(path.to_path_buf()));
      return Ok(());
    }

    for entry in WalkDir::new(path).sort_by_file_name() {
      let entry = entry.with_context(|| {
        format!("failed to walk directory `{}`", path.display())
      })?;

      if entry.file_type().is_file() && Self::is_html(entry.path()) {
        inputs.push(Self::File(entry.into_path()));
      }
    }

    Ok(())
  }

  fn is_html(path: &Path) -> bool {
    path
      .extension()
      .and_then(|extension| extension.to_str())
      .is_some_and(|extension| {
        HTML_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str())
      })
  }

  fn list_entries(contents: &str) -> impl Iterator<Item = &str> {
    contents
      .lines()
      .map(str::trim)
      .filter(|line| !line.is_empty() && !line.starts_with('#'))
  }

  pub(crate) fn read(&self) -> Result<String> {
    match self {
      Self::File(path) => fs::read_to_string(path).with_context(|| {
        format!("failed to read file from `{}`", path.display())
      }),
      Self::Stdin => {
        let mut html = String::new();

        io::stdin()
          .read_to_string(&mut html)
          .context("failed to read from stdin")?;

        Ok(html)
      }
    }
  }

  pub(crate) fn write(&self, html: &str) -> Result {
    match self {
      Self::File(path) => fs::write(path, html).with_context(|| {
        format!("failed to write file to `{}`", path.display())
      }),
      Self::Stdin => bail!("cannot rewrite stdin in place"),
    }
  }
}

impl Display for Input {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::File(path) => write!(f, "{}", path.display()),
      Self::Stdin => write!(f, "<stdin>"),
    }
  }
}
