//! Title derivation, file naming and page text assembly.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::ReplacementRecord;
use crate::project::SiteLayout;

/// Number of member names spelled out in a group title before eliding the rest.
const TITLE_NAME_LIMIT: usize = 3;

/// Derive the summary title for a group from its members in first-seen order.
pub fn derive_group_title(members: &[ReplacementRecord]) -> String {
  let names: Vec<&str> = members
    .iter()
    .take(TITLE_NAME_LIMIT)
    .map(|record| record.module_name.as_str())
    .collect();

  let mut title = names.join(", ");
  if members.len() > names.len() {
    title.push_str(" and more");
  }
  title
}

/// Convert a module name into a filesystem-safe page file stem.
pub fn page_file_name(module_name: &str) -> String {
  module_name.replace(['@', '/'], "-")
}

/// Read the documentation body for a doc path from the documentation directory.
pub fn load_doc_body(layout: &SiteLayout, docs_dir: &Path, doc_path: &str) -> Result<String> {
  let body_path = docs_dir.join(format!("{}.{}", doc_path, layout.doc_extension));
  fs::read_to_string(&body_path)
    .with_context(|| format!("missing documentation body at {}", body_path.display()))
}

/// Assemble the final page text: a front matter header followed by the body verbatim.
pub fn render_page(layout: &SiteLayout, title: &str, body: &str) -> String {
  format!(
    "---\nlayout: '{}'\ntitle: Replacements for {}\n---\n{}",
    layout.page_layout, title, body
  )
}
