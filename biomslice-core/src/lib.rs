#![no_std]

//! biomslice-core - Text-Level Slicing of Sparse BIOM Tables
//!
//! This crate subsets JSON sparse tables (BIOM format) without decoding the
//! `data` section. It provides:
//!
//! - **scanner**: locate a key's value with a byte-level depth scanner
//! - **resolve**: map axis ids to ordinal indices
//! - **slice**: filter and renumber `[row,col,value]` triples as text
//! - **assemble**: render the sliced `"data": ..., "shape": ...` fragment
//!
//! Everything here is a pure function over borrowed text. Reading documents
//! and writing results belong to the `biomslice` crate.

extern crate alloc;

pub mod assemble;
pub mod direct;
pub mod error;
pub mod format;
pub mod resolve;
pub mod scanner;
pub mod slice;
pub mod traits;
pub mod validation;

pub use assemble::assemble;
pub use direct::{
    slice_by_ids, slice_by_index_items, slice_by_indices, slice_data, DataSlice, IdSlice,
};
pub use error::*;
pub use format::{Axis, ElementType, ElementValue, MatrixType, Shape, TableHeader};
pub use resolve::{resolve_axis_indices, select_axis_records, AxisRecord, ResolvedAxis};
pub use scanner::{locate, require, Fragment};
pub use slice::{slice_sparse_data, KeepSet, RemapTable, SlicedData};
pub use traits::DocumentSource;
pub use validation::{parse_index_list, parse_range, validate_keep_bounds, IndexItem};
