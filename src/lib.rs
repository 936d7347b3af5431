#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod builder;
pub mod config;
pub mod manifest;
pub mod models;
pub mod pages;
pub mod project;

pub use builder::{GenerationSummary, PageBuilder};
pub use config::ProjectConfig;
pub use project::{GeneratorContext, SiteLayout};
