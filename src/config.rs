//! Project configuration loader describing where manifests, docs and pages live.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::project::{GeneratorContext, SiteLayout};

const DEFAULT_CONFIG_FILE: &str = "pages.config.json";

/// Discoverable project configuration describing filesystem layout and output paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
  /// Relative path from the project root to the replacement manifests.
  pub manifests_dir: String,
  /// Relative path from the project root to the documentation bodies.
  pub docs_dir: String,
  /// Relative path from the project root to the generated pages root.
  pub pages_dir: String,
  /// File extension identifying manifest files.
  pub manifest_extension: String,
  /// Extension appended to doc paths when locating documentation bodies.
  pub doc_extension: String,
  /// Extension used for rendered page files.
  pub page_extension: String,
  /// Layout reference embedded in every rendered page header.
  pub page_layout: String,
}

impl Default for ProjectConfig {
  fn default() -> Self {
    Self {
      manifests_dir: "../module-replacements/manifests".into(),
      docs_dir: "../module-replacements/docs/modules".into(),
      pages_dir: "src/pages".into(),
      manifest_extension: "json".into(),
      doc_extension: "md".into(),
      page_extension: "md".into(),
      page_layout: "../../layouts/Layout.astro".into(),
    }
  }
}

impl ProjectConfig {
  /// Attempt to load configuration from the provided project root.
  ///
  /// When the configuration file does not exist or fails to parse we fall back to default
  /// values so downstream callers can continue operating with sensible assumptions.
  pub fn discover(project_root: &Path) -> Self {
    let candidate = project_root.join(DEFAULT_CONFIG_FILE);
    Self::from_path(&candidate).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Option<Self> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
  }

  /// Resolve the configuration against a project root into an owned run context.
  pub fn into_context(self, project_root: &Path) -> GeneratorContext {
    GeneratorContext {
      manifests_dir: project_root.join(&self.manifests_dir),
      docs_dir: project_root.join(&self.docs_dir),
      pages_dir: project_root.join(&self.pages_dir),
      layout: SiteLayout {
        manifest_extension: self.manifest_extension,
        doc_extension: self.doc_extension,
        page_extension: self.page_extension,
        page_layout: self.page_layout,
      },
    }
  }
}
