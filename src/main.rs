//! Command line entry point for the batch page generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use replacement_pages::{PageBuilder, ProjectConfig};

/// Render module replacement manifests into static documentation pages.
#[derive(Debug, Parser)]
#[command(name = "generate-replacement-pages", version, about)]
struct Cli {
  /// Project root used to discover configuration and resolve relative paths.
  #[arg(long, default_value = ".")]
  project_root: PathBuf,
  /// Override the manifest directory from the configuration.
  #[arg(long)]
  manifests_dir: Option<PathBuf>,
  /// Override the documentation body directory from the configuration.
  #[arg(long)]
  docs_dir: Option<PathBuf>,
  /// Override the generated pages root from the configuration.
  #[arg(long)]
  pages_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let config = ProjectConfig::discover(&cli.project_root);
  let mut context = config.into_context(&cli.project_root);
  if let Some(manifests_dir) = cli.manifests_dir {
    context.manifests_dir = manifests_dir;
  }
  if let Some(docs_dir) = cli.docs_dir {
    context.docs_dir = docs_dir;
  }
  if let Some(pages_dir) = cli.pages_dir {
    context.pages_dir = pages_dir;
  }

  let summary = PageBuilder::new(context).run()?;
  println!(
    "Generated {} pages across {} kinds",
    summary.pages.len(),
    summary.kinds.len()
  );
  Ok(())
}
