//! Adds a table of contents to HTML documents.
//!
//! Every bare `<h2>` heading gets a `title_{index}` anchor and a link in an
//! ordered list prepended to the document.

pub mod builder;
pub mod cli;
pub mod config;
pub mod i18n;
pub mod toc;
pub mod utils;

pub use toc::{build_toc, extract_headings, Extraction, Heading, HeadingCollection, TocRenderer};
