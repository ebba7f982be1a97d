//! Direct slicing of a whole document
//!
//! Composes the scanner, resolver, slicer and assembler: header keys are
//! located, the request is turned into a keep-set, and the `data` value is
//! sliced and rendered back as a `"data": ..., "shape": ...` fragment.

use alloc::string::{String, ToString};

use crate::assemble::assemble;
use crate::format::constants::keys;
use crate::format::{Axis, MatrixType, Shape, TableHeader};
use crate::resolve::{resolve_axis_indices, ResolvedAxis};
use crate::scanner;
use crate::slice::{slice_sparse_data, KeepSet};
use crate::validation::IndexItem;
use crate::{Result, SliceError};

/// A sliced `data` section ready to be embedded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSlice {
    /// `"data": [...], "shape": [r, c]`
    pub fragment: String,
    pub shape: Shape,
    pub keep: KeepSet,
    pub triples_in: usize,
    pub triples_out: usize,
}

/// A sliced `data` section together with the id resolution behind it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSlice {
    pub data: DataSlice,
    pub resolved: ResolvedAxis,
}

/// Slice the `data` section to a keep-set
pub fn slice_data(document: &str, keep: &KeepSet) -> Result<DataSlice> {
    let header = TableHeader::read(document)?;
    if header.matrix_type != MatrixType::Sparse {
        return Err(SliceError::UnsupportedMatrixType(header.matrix_type.to_string()));
    }

    let data = scanner::require(document, keys::DATA)?;
    let sliced = slice_sparse_data(data.value(), keep, header.shape, header.element_type)?;

    Ok(DataSlice {
        fragment: assemble(&sliced.data, sliced.shape),
        shape: sliced.shape,
        keep: keep.clone(),
        triples_in: sliced.triples_in,
        triples_out: sliced.triples_out,
    })
}

/// Slice the `data` section to the given ordinal indices
///
/// Indices are signed so negative requests fail with
/// [`SliceError::IndexOutOfRange`].
pub fn slice_by_indices(document: &str, axis: Axis, indices: &[i64]) -> Result<DataSlice> {
    let shape = Shape::parse(scanner::require(document, keys::SHAPE)?.value())?;
    let keep = KeepSet::from_signed(axis, indices.iter().copied(), shape.axis_len(axis))?;
    slice_data(document, &keep)
}

/// Slice the `data` section to parsed index-list items
///
/// Ranges are bounded by the axis length from `shape` before expansion.
pub fn slice_by_index_items(
    document: &str,
    axis: Axis,
    items: &[IndexItem],
) -> Result<DataSlice> {
    let shape = Shape::parse(scanner::require(document, keys::SHAPE)?.value())?;
    let keep = KeepSet::from_items(axis, items, shape.axis_len(axis))?;
    slice_data(document, &keep)
}

/// Slice the `data` section to the records carrying the given ids
pub fn slice_by_ids<S: AsRef<str>>(document: &str, axis: Axis, ids: &[S]) -> Result<IdSlice> {
    let resolved = resolve_axis_indices(document, axis, ids)?;
    let keep = KeepSet::new(axis, resolved.indices.iter().copied())?;
    let data = slice_data(document, &keep)?;
    Ok(IdSlice { data, resolved })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    const TABLE: &str = include_str!("../../testdata/otu_table_14x9.biom");

    #[test]
    fn test_slice_by_ids_scenario() {
        let slice = slice_by_ids(TABLE, Axis::Sample, &["f4", "f2"]).unwrap();
        assert_eq!(slice.resolved.indices, vec![0, 3]);
        assert_eq!(
            slice.data.fragment,
            r#""data": [[0,0,20],[0,1,22],[2,0,1],[13,0,1]], "shape": [14, 2]"#
        );
        assert_eq!(slice.data.shape, Shape::new(14, 2));
    }

    #[test]
    fn test_ids_and_indices_agree() {
        let by_ids = slice_by_ids(TABLE, Axis::Observation, &["None2", "879972"]).unwrap();
        let indices: Vec<i64> = by_ids.resolved.indices.iter().map(|&i| i as i64).collect();
        let by_indices = slice_by_indices(TABLE, Axis::Observation, &indices).unwrap();
        assert_eq!(by_ids.data, by_indices);

        let reversed = slice_by_indices(TABLE, Axis::Observation, &[11, 9]).unwrap();
        assert_eq!(reversed.fragment, by_indices.fragment);
    }

    #[test]
    fn test_unknown_id() {
        assert!(matches!(
            slice_by_ids(TABLE, Axis::Sample, &["f2", "zz"]),
            Err(SliceError::IdNotFound { .. })
        ));
    }

    #[test]
    fn test_out_of_range_indices() {
        assert_eq!(
            slice_by_indices(TABLE, Axis::Sample, &[0, 9]),
            Err(SliceError::IndexOutOfRange {
                axis: Axis::Sample,
                index: 9,
                len: 9
            })
        );
        assert_eq!(
            slice_by_indices(TABLE, Axis::Observation, &[-1, 2]),
            Err(SliceError::IndexOutOfRange {
                axis: Axis::Observation,
                index: -1,
                len: 14
            })
        );
        assert_eq!(
            slice_by_indices(TABLE, Axis::Observation, &[]),
            Err(SliceError::EmptySelection(Axis::Observation))
        );
    }

    #[test]
    fn test_index_items() {
        let items = crate::parse_index_list("0:2,3").unwrap();
        let by_items = slice_by_index_items(TABLE, Axis::Sample, &items).unwrap();
        assert_eq!(by_items, slice_by_indices(TABLE, Axis::Sample, &[0, 1, 3]).unwrap());

        let far = crate::parse_index_list("0:4000000000").unwrap();
        assert_eq!(
            slice_by_index_items(TABLE, Axis::Sample, &far),
            Err(SliceError::IndexOutOfRange {
                axis: Axis::Sample,
                index: 3_999_999_999,
                len: 9
            })
        );
    }

    #[test]
    fn test_required_keys() {
        let no_data = TABLE.replace("\"data\":", "\"dat\":");
        assert_eq!(
            slice_by_indices(&no_data, Axis::Sample, &[0]),
            Err(SliceError::MissingKey("data"))
        );

        let no_type = TABLE.replace("\"matrix_type\":", "\"matrix_kind\":");
        assert_eq!(
            slice_by_indices(&no_type, Axis::Sample, &[0]),
            Err(SliceError::MissingKey("matrix_type"))
        );
    }

    #[test]
    fn test_dense_tables_are_rejected() {
        let dense = TABLE.replace("\"sparse\"", "\"dense\"");
        assert_eq!(
            slice_by_indices(&dense, Axis::Sample, &[0]),
            Err(SliceError::UnsupportedMatrixType("dense".to_string()))
        );
    }
}
