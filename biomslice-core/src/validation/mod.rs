//! Request validation utilities
//!
//! Pure checks and parsers applied to slicing requests before any output is
//! produced.

pub mod bounds;
pub mod parsing;

pub use bounds::validate_keep_bounds;
pub use parsing::{parse_index_list, parse_range, IndexItem};
