//! Output directory preparation and page writes.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::render::page_file_name;
use crate::models::ReplacementGroup;
use crate::project::SiteLayout;

/// Remove and recreate the output directory for every observed kind.
///
/// Kinds without a renderer still get an emptied directory, so stale pages from earlier
/// runs never survive a manifest change.
pub fn prepare_kind_dirs(pages_dir: &Path, kinds: &BTreeSet<String>) -> Result<()> {
  for kind in kinds {
    let kind_dir = pages_dir.join(kind);
    match fs::remove_dir_all(&kind_dir) {
      Ok(()) => {}
      Err(err) if err.kind() == ErrorKind::NotFound => {}
      Err(err) => {
        return Err(err).with_context(|| format!("failed to clear {}", kind_dir.display()));
      }
    }
    fs::create_dir_all(&kind_dir)
      .with_context(|| format!("failed to create {}", kind_dir.display()))?;
  }
  Ok(())
}

/// Write the rendered text for a group into its kind directory, returning the page path.
pub fn write_group_page(
  layout: &SiteLayout,
  pages_dir: &Path,
  group: &ReplacementGroup,
  page_text: &str,
) -> Result<PathBuf> {
  let representative = group
    .representative()
    .with_context(|| format!("no replacements grouped under {}", group.doc_path))?;

  let file_name = format!(
    "{}.{}",
    page_file_name(&representative.module_name),
    layout.page_extension
  );
  let page_path = pages_dir.join(&representative.kind).join(file_name);
  fs::write(&page_path, page_text)
    .with_context(|| format!("failed to write {}", page_path.display()))?;

  Ok(page_path)
}
