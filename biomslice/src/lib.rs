//! biomslice - Subsetting of Large JSON BIOM Tables
//!
//! Builds on `biomslice-core` to turn whole table documents into subset
//! documents without decoding the `data` section.
//!
//! ## Architecture
//!
//! - **biomslice-core**: text scanning, id resolution and triple slicing (no I/O)
//! - **biomslice**: document sources, full-document assembly, batch work
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use biomslice::{Axis, TableDocument, TableSubsetter};
//!
//! fn example() -> biomslice::Result<()> {
//!     let document = TableDocument::open("table.biom")?;
//!     let subsetter = TableSubsetter::default();
//!     let subset = subsetter.subset_by_ids(&document, Axis::Sample, &["f2", "f4"])?;
//!     println!("{} -> {}", subset.shape, subset.document.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **mmap** (default): memory-mapped documents via [`TableDocument::open`]
//! - **cli**: dependencies of the `subset_table` example

pub use biomslice_core::{
    // Slicing primitives
    locate, parse_index_list, parse_range, require, resolve_axis_indices, select_axis_records,
    slice_by_ids, slice_by_index_items, slice_by_indices, Fragment, IndexItem, KeepSet,
    // Format definitions
    Axis, ElementType, MatrixType, Shape, TableHeader,
    // Document access and core errors
    DocumentSource, ErrorCategory, SliceError,
};

pub mod batch;
pub mod config;
pub mod document;
pub mod error;
pub mod subsetter;

pub use config::SubsetConfig;
pub use document::TableDocument;
pub use error::{Error, Result};
pub use subsetter::{Subset, SubsetRequest, TableSubsetter};
