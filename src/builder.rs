//! Orchestrator driving one generation run from manifests to written pages.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Result;

use crate::manifest::scan_manifest_dir;
use crate::pages::{
  derive_group_title, group_by_doc_path, load_doc_body, prepare_kind_dirs, render_page,
  write_group_page,
};
use crate::project::GeneratorContext;

/// Summary of a completed generation run.
#[derive(Debug)]
pub struct GenerationSummary {
  /// Every kind observed across the manifests, each with a prepared output directory.
  pub kinds: BTreeSet<String>,
  /// Paths of the written pages, one per documentation target.
  pub pages: Vec<PathBuf>,
}

/// High-level driver that turns a directory of manifests into rendered pages.
pub struct PageBuilder {
  context: GeneratorContext,
}

impl PageBuilder {
  /// Create a builder for the provided run context.
  pub fn new(context: GeneratorContext) -> Self {
    Self { context }
  }

  /// Run the full pipeline: scan manifests, prepare per-kind output directories, group
  /// documented records by their documentation target and render one page per group.
  pub fn run(&self) -> Result<GenerationSummary> {
    let layout = &self.context.layout;
    let scan = scan_manifest_dir(layout, &self.context.manifests_dir)?;

    prepare_kind_dirs(&self.context.pages_dir, &scan.kinds)?;

    let groups = group_by_doc_path(&scan.replacements)?;

    let mut pages = Vec::with_capacity(groups.len());
    for group in &groups {
      let body = load_doc_body(layout, &self.context.docs_dir, &group.doc_path)?;
      let title = derive_group_title(&group.members);
      let page_text = render_page(layout, &title, &body);
      pages.push(write_group_page(
        layout,
        &self.context.pages_dir,
        group,
        &page_text,
      )?);
    }

    Ok(GenerationSummary {
      kinds: scan.kinds,
      pages,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use std::path::Path;

  use gray_matter::{Matter, engine::YAML};
  use serde::Deserialize;
  use tempfile::tempdir;

  use crate::project::SiteLayout;

  fn context(root: &Path) -> GeneratorContext {
    GeneratorContext {
      manifests_dir: root.join("manifests"),
      docs_dir: root.join("docs/modules"),
      pages_dir: root.join("src/pages"),
      layout: SiteLayout {
        manifest_extension: "json".into(),
        doc_extension: "md".into(),
        page_extension: "md".into(),
        page_layout: "../../layouts/Layout.astro".into(),
      },
    }
  }

  fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
  }

  #[test]
  fn renders_one_page_per_documentation_target() {
    let dir = tempdir().unwrap();
    let context = context(dir.path());

    write_file(
      &context.manifests_dir.join("a.json"),
      r#"{"moduleReplacements": [{"type": "documented", "moduleName": "left-pad", "docPath": "pad"}]}"#,
    );
    write_file(
      &context.manifests_dir.join("b.json"),
      r#"{"moduleReplacements": [{"type": "documented", "moduleName": "lodash.pad", "docPath": "pad"}]}"#,
    );
    write_file(&context.docs_dir.join("pad.md"), "Use native padStart.\n");

    let summary = PageBuilder::new(context.clone()).run().unwrap();

    assert_eq!(summary.pages.len(), 1);
    let page_path = context.pages_dir.join("documented/left-pad.md");
    assert_eq!(summary.pages[0], page_path);

    let text = fs::read_to_string(&page_path).unwrap();
    assert_eq!(
      text,
      "---\nlayout: '../../layouts/Layout.astro'\ntitle: Replacements for left-pad, lodash.pad\n---\nUse native padStart.\n"
    );
  }

  #[test]
  fn sanitizes_scoped_module_names_in_page_paths() {
    let dir = tempdir().unwrap();
    let context = context(dir.path());

    write_file(
      &context.manifests_dir.join("scoped.json"),
      r#"{"moduleReplacements": [{"type": "documented", "moduleName": "@scope/pkg", "docPath": "pkg"}]}"#,
    );
    write_file(&context.docs_dir.join("pkg.md"), "Inline it.\n");

    let summary = PageBuilder::new(context.clone()).run().unwrap();
    assert_eq!(
      summary.pages,
      vec![context.pages_dir.join("documented/-scope-pkg.md")]
    );
  }

  #[test]
  fn reruns_regenerate_byte_identical_output() {
    let dir = tempdir().unwrap();
    let context = context(dir.path());

    write_file(
      &context.manifests_dir.join("a.json"),
      r#"{"moduleReplacements": [{"type": "documented", "moduleName": "left-pad", "docPath": "pad"}]}"#,
    );
    write_file(&context.docs_dir.join("pad.md"), "Use native padStart.\n");

    let builder = PageBuilder::new(context.clone());
    builder.run().unwrap();

    let page_path = context.pages_dir.join("documented/left-pad.md");
    let first = fs::read_to_string(&page_path).unwrap();

    write_file(&context.pages_dir.join("documented/stale.md"), "old");
    builder.run().unwrap();

    assert_eq!(fs::read_to_string(&page_path).unwrap(), first);
    assert!(!context.pages_dir.join("documented/stale.md").exists());
  }

  #[test]
  fn unrendered_kinds_get_an_empty_directory() {
    let dir = tempdir().unwrap();
    let context = context(dir.path());

    write_file(
      &context.manifests_dir.join("native.json"),
      r#"{"moduleReplacements": [{"type": "native", "moduleName": "is-nan"}]}"#,
    );

    let summary = PageBuilder::new(context.clone()).run().unwrap();
    assert!(summary.pages.is_empty());
    assert!(summary.kinds.contains("native"));

    let native_dir = context.pages_dir.join("native");
    assert!(native_dir.is_dir());
    assert_eq!(fs::read_dir(native_dir).unwrap().count(), 0);
  }

  #[test]
  fn missing_documentation_body_aborts_the_run() {
    let dir = tempdir().unwrap();
    let context = context(dir.path());

    write_file(
      &context.manifests_dir.join("a.json"),
      r#"{"moduleReplacements": [{"type": "documented", "moduleName": "left-pad", "docPath": "gone"}]}"#,
    );

    let err = PageBuilder::new(context).run().unwrap_err();
    assert!(err.to_string().contains("gone.md"));
  }

  #[derive(Debug, Deserialize)]
  struct PageHeader {
    layout: String,
    title: String,
  }

  #[test]
  fn generated_front_matter_parses_as_yaml() {
    let dir = tempdir().unwrap();
    let context = context(dir.path());

    write_file(
      &context.manifests_dir.join("a.json"),
      r#"{"moduleReplacements": [
        {"type": "documented", "moduleName": "one", "docPath": "shared"},
        {"type": "documented", "moduleName": "two", "docPath": "shared"}
      ]}"#,
    );
    write_file(
      &context.manifests_dir.join("b.json"),
      r#"{"moduleReplacements": [
        {"type": "documented", "moduleName": "three", "docPath": "shared"},
        {"type": "documented", "moduleName": "four", "docPath": "shared"}
      ]}"#,
    );
    write_file(&context.docs_dir.join("shared.md"), "Prefer the platform.\n");

    PageBuilder::new(context.clone()).run().unwrap();

    let text = fs::read_to_string(context.pages_dir.join("documented/one.md")).unwrap();
    let matter = Matter::<YAML>::new();
    let parsed = matter.parse(&text).unwrap();
    let header: PageHeader = serde_yaml::from_value(parsed.data.unwrap()).unwrap();

    assert_eq!(header.layout, "../../layouts/Layout.astro");
    assert_eq!(header.title, "Replacements for one, two, three and more");
    assert_eq!(parsed.content.trim(), "Prefer the platform.");
  }
}
