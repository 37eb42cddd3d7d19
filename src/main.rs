use {
  anyhow::{Context, bail, ensure},
  arguments::Arguments,
  clap::Parser,
  input::Input,
  keep_images::{
    CaptionPolicy, ImageInfo, Report, TransformOptions, Transformer, images,
    validate_images,
  },
  serde::Serialize,
  std::{
    fmt::{self, Display, Formatter},
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
  },
  tracing::{error, info, warn},
  tracing_subscriber::EnvFilter,
  walkdir::WalkDir,
};

mod arguments;
mod input;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  let arguments = Arguments::parse();

  arguments.init_tracing();

  if let Err(error) = arguments.run() {
    eprintln!("error: {error:#}");
    process::exit(1);
  }
}
