//! Data structures flowing through the page generation pipeline.

use std::collections::BTreeSet;

use serde::Deserialize;

/// Kind tag of replacement records backed by a shared documentation body.
pub const DOCUMENTED_KIND: &str = "documented";

/// One module replacement recommendation parsed from a manifest.
///
/// The kind stays an open string so manifests may declare kinds this generator does not
/// render yet; such records still claim an output directory for their kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplacementRecord {
  /// Kind tag declared by the manifest.
  #[serde(rename = "type")]
  pub kind: String,
  /// Name of the module being replaced.
  pub module_name: String,
  /// Documentation target shared by documented records.
  #[serde(default)]
  pub doc_path: Option<String>,
}

/// Parsed representation of a single manifest file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestFile {
  /// Replacement records declared by the manifest.
  pub module_replacements: Vec<ReplacementRecord>,
}

/// Flat collection of records harvested from every manifest in a directory.
///
/// Records are kept in enumeration order; structurally equal records parsed from
/// different manifests remain distinct entries.
#[derive(Debug, Default)]
pub struct ManifestScanResult {
  /// All replacement records across the manifests, in first-seen order.
  pub replacements: Vec<ReplacementRecord>,
  /// Every kind tag observed across the manifests.
  pub kinds: BTreeSet<String>,
}

/// All replacement records sharing one documentation target.
#[derive(Debug)]
pub struct ReplacementGroup {
  /// Documentation target the members point at.
  pub doc_path: String,
  /// Member records in first-seen order across manifests.
  pub members: Vec<ReplacementRecord>,
}

impl ReplacementGroup {
  /// First-inserted member, used to pick the output location for the group.
  pub fn representative(&self) -> Option<&ReplacementRecord> {
    self.members.first()
  }
}
