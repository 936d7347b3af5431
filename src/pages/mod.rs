//! Aggregation of replacement records and rendering of the resulting pages.

mod aggregate;
mod output;
mod render;

pub use aggregate::group_by_doc_path;
pub use output::{prepare_kind_dirs, write_group_page};
pub use render::{derive_group_title, load_doc_body, page_file_name, render_page};
