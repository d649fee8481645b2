//! # mushaf-index
//!
//! Prepares the data files of a Quran reader: the verse text, one ayah per
//! line, and a page layout index telling which lines go on which page.
//!
//! The layout index comes with line ranges numbered relative to each surah.
//! This crate rewrites them into absolute line numbers over the whole text,
//! so a page can be rendered by slicing the corpus directly.
//!
//! ## Architecture
//!
//! - [`corpus`] - Verse text loading and glyph cleanup
//! - [`index`] - Page index types, conversion, verification and lookups
//! - [`pipeline`] - The clean, count, convert, write batch run
//! - [`output`] - Console reporting
//! - [`utils`] - Configuration
//!
//! ## Quick Start
//!
//! ```no_run
//! use mushaf_index::corpus::Corpus;
//! use mushaf_index::index::{load_index, to_absolute, write_index};
//! use std::path::Path;
//!
//! let corpus = Corpus::load(Path::new("quran_text.txt")).unwrap();
//! let relative = load_index(Path::new("pages.json")).unwrap();
//!
//! let conversion = to_absolute(&relative, corpus.line_count()).unwrap();
//! write_index(Path::new("pages_absolute.json"), &conversion.index).unwrap();
//!
//! if !conversion.is_consistent() {
//!     eprintln!(
//!         "index covers {} lines, corpus has {}",
//!         conversion.final_line, conversion.expected_lines
//!     );
//! }
//! ```

pub mod corpus;
pub mod index;
pub mod output;
pub mod pipeline;
pub mod utils;
