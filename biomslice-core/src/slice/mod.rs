//! Sparse data slicing on raw text
//!
//! Filters the `[row,col,value]` triples of a sparse `data` value down to a
//! keep-set on one axis and renumbers that axis through a [`RemapTable`].
//! The data section is never decoded structurally; each triple is split on
//! the separator convention described in [`triple`].

pub mod keep_set;
pub mod triple;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

pub use keep_set::{KeepSet, RemapTable};
pub use triple::{split_triples, strip_outer_array, RawTriple};

use crate::format::{Axis, ElementType, Shape};
use crate::validation::validate_keep_bounds;
use crate::Result;

/// Output of slicing one `data` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlicedData {
    /// New `data` value, e.g. `[[0,0,20],[0,1,22]]`
    pub data: String,
    /// Shape after slicing
    pub shape: Shape,
    /// Triples read from the input
    pub triples_in: usize,
    /// Triples written to the output
    pub triples_out: usize,
}

/// Slice a sparse `data` value to the keep-set's axis
///
/// The keep-set is checked against `shape` before any triple is read.
/// Indices that are in range but match no triple are not an error; a
/// selection that matches nothing produces `[]`.
pub fn slice_sparse_data(
    data: &str,
    keep: &KeepSet,
    shape: Shape,
    element_type: ElementType,
) -> Result<SlicedData> {
    let axis = keep.axis();
    validate_keep_bounds(keep, shape.axis_len(axis))?;

    let body = strip_outer_array(data)?;
    let remap = keep.remap_table();

    // Renumbered indices are rendered once, not per triple
    let labels: Vec<String> = (0..keep.len()).map(|i| i.to_string()).collect();

    let mut out = String::with_capacity(body.len() / 2 + 2);
    let mut triples_in = 0;
    let mut triples_out = 0;

    out.push('[');
    for chunk in split_triples(body) {
        triples_in += 1;
        let triple = RawTriple::parse(chunk)?;
        let Some(new_index) = remap.get(triple.index(axis)?) else {
            continue;
        };
        element_type.parse_value(triple.value)?;

        if triples_out > 0 {
            out.push(',');
        }
        let new_label = labels[new_index].as_str();
        match axis {
            Axis::Observation => push_triple(&mut out, new_label, triple.col, triple.value),
            Axis::Sample => push_triple(&mut out, triple.row, new_label, triple.value),
        }
        triples_out += 1;
    }
    out.push(']');

    Ok(SlicedData {
        data: out,
        shape: shape.with_axis_len(axis, keep.len()),
        triples_in,
        triples_out,
    })
}

fn push_triple(out: &mut String, row: &str, col: &str, value: &str) {
    out.push('[');
    out.push_str(row);
    out.push(',');
    out.push_str(col);
    out.push(',');
    out.push_str(value);
    out.push(']');
}
