//! Directory scanning and parsing for replacement manifests.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{ManifestFile, ManifestScanResult};
use crate::project::SiteLayout;

/// Collect every replacement record declared by the manifests in a directory.
///
/// Entries are enumerated in file-name order so the first-seen ordering relied on by
/// later stages is deterministic across platforms. Files without the manifest extension
/// are skipped; a manifest that fails to parse aborts the scan.
pub fn scan_manifest_dir(layout: &SiteLayout, manifests_dir: &Path) -> Result<ManifestScanResult> {
  let entries = fs::read_dir(manifests_dir).with_context(|| {
    format!(
      "failed to read manifest directory {}",
      manifests_dir.display()
    )
  })?;

  let mut manifest_paths = Vec::new();
  for entry in entries {
    let entry =
      entry.with_context(|| format!("failed to enumerate {}", manifests_dir.display()))?;
    if !entry.file_type().is_ok_and(|ft| ft.is_file()) {
      continue;
    }

    let path = entry.path();
    if path
      .extension()
      .is_some_and(|ext| ext == layout.manifest_extension.as_str())
    {
      manifest_paths.push(path);
    }
  }
  manifest_paths.sort();

  let mut result = ManifestScanResult::default();
  for path in manifest_paths {
    let content = fs::read_to_string(&path)
      .with_context(|| format!("failed to read manifest {}", path.display()))?;
    let manifest: ManifestFile = serde_json::from_str(&content)
      .with_context(|| format!("failed to parse manifest {}", path.display()))?;

    for record in manifest.module_replacements {
      result.kinds.insert(record.kind.clone());
      result.replacements.push(record);
    }
  }

  Ok(result)
}
