//! Layout conventions and resolved paths shared across the generation pipeline.

use std::path::PathBuf;

/// Naming conventions applied while reading manifests and writing pages.
#[derive(Debug, Clone)]
pub struct SiteLayout {
  /// File extension identifying manifest files within the manifest directory.
  pub manifest_extension: String,
  /// Extension appended to a documentation target when locating its body.
  pub doc_extension: String,
  /// Extension used for rendered page files.
  pub page_extension: String,
  /// Layout reference embedded in the header of every rendered page.
  pub page_layout: String,
}

/// Resolved directories and conventions for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorContext {
  /// Directory containing the replacement manifests.
  pub manifests_dir: PathBuf,
  /// Directory containing documentation bodies keyed by doc path.
  pub docs_dir: PathBuf,
  /// Root directory receiving one subdirectory per observed kind.
  pub pages_dir: PathBuf,
  /// Naming conventions for the run.
  pub layout: SiteLayout,
}
