//! Grouping of documented replacement records by their documentation target.

use std::collections::BTreeMap;

use anyhow::{Result, bail};

use crate::models::{DOCUMENTED_KIND, ReplacementGroup, ReplacementRecord};

/// Group documented records by doc path, preserving first-seen order of members and keys.
///
/// Records of any other kind are dropped here; they only participate in output directory
/// preparation. A documented record without a doc path aborts the run.
pub fn group_by_doc_path(records: &[ReplacementRecord]) -> Result<Vec<ReplacementGroup>> {
  let mut groups: Vec<ReplacementGroup> = Vec::new();
  let mut index: BTreeMap<String, usize> = BTreeMap::new();

  for record in records {
    if record.kind != DOCUMENTED_KIND {
      continue;
    }

    let Some(doc_path) = record.doc_path.as_deref() else {
      bail!(
        "documented replacement for {} is missing a docPath",
        record.module_name
      );
    };

    match index.get(doc_path) {
      Some(&position) => groups[position].members.push(record.clone()),
      None => {
        index.insert(doc_path.to_string(), groups.len());
        groups.push(ReplacementGroup {
          doc_path: doc_path.to_string(),
          members: vec![record.clone()],
        });
      }
    }
  }

  Ok(groups)
}
