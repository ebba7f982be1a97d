//! Keep-sets and the remap tables derived from them

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::format::Axis;
use crate::validation::IndexItem;
use crate::{Result, SliceError};

/// Ordinal indices to retain on one axis
///
/// Stored sorted and de-duplicated, so the order a caller listed indices in
/// never affects the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeepSet {
    axis: Axis,
    indices: Vec<usize>,
}

impl KeepSet {
    /// Build a keep-set, failing if it would be empty
    pub fn new<I: IntoIterator<Item = usize>>(axis: Axis, indices: I) -> Result<Self> {
        let mut indices: Vec<usize> = indices.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();

        if indices.is_empty() {
            return Err(SliceError::EmptySelection(axis));
        }

        Ok(Self { axis, indices })
    }

    /// Build a keep-set from signed input such as parsed command-line text
    ///
    /// Negative indices fail with [`SliceError::IndexOutOfRange`]; `axis_len`
    /// is only reported in that error.
    pub fn from_signed<I: IntoIterator<Item = i64>>(
        axis: Axis,
        indices: I,
        axis_len: usize,
    ) -> Result<Self> {
        let converted = indices
            .into_iter()
            .map(|index| {
                usize::try_from(index).map_err(|_| SliceError::IndexOutOfRange {
                    axis,
                    index,
                    len: axis_len,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(axis, converted)
    }

    /// Build a keep-set from parsed index-list items
    ///
    /// Each range is checked against `axis_len` before it is expanded, so a
    /// range reaching past the axis fails with
    /// [`SliceError::IndexOutOfRange`] without allocating its extent.
    pub fn from_items(axis: Axis, items: &[IndexItem], axis_len: usize) -> Result<Self> {
        let mut indices = Vec::new();
        for item in items {
            match item {
                &IndexItem::Single(index) => {
                    let out_of_range = |_| SliceError::IndexOutOfRange {
                        axis,
                        index,
                        len: axis_len,
                    };
                    indices.push(usize::try_from(index).map_err(out_of_range)?);
                }
                IndexItem::Range(range) => {
                    if range.end > axis_len {
                        return Err(SliceError::IndexOutOfRange {
                            axis,
                            index: i64::try_from(range.end - 1).unwrap_or(i64::MAX),
                            len: axis_len,
                        });
                    }
                    indices.extend(range.clone());
                }
            }
        }
        Self::new(axis, indices)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always `false`; construction rejects empty sets
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn min(&self) -> usize {
        self.indices[0]
    }

    pub fn max(&self) -> usize {
        self.indices[self.indices.len() - 1]
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// Indices in ascending order
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Map each kept index to its position in ascending order
    pub fn remap_table(&self) -> RemapTable {
        RemapTable {
            lookup: self
                .indices
                .iter()
                .enumerate()
                .map(|(new, &original)| (original, new))
                .collect(),
        }
    }
}

/// Bijection from kept ordinal indices onto `0..len`
#[derive(Debug, Clone)]
pub struct RemapTable {
    lookup: HashMap<usize, usize>,
}

impl RemapTable {
    /// New index for an original one, or `None` if it is not kept
    #[inline]
    pub fn get(&self, original: usize) -> Option<usize> {
        self.lookup.get(&original).copied()
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// True when every kept index maps to itself
    pub fn is_identity(&self) -> bool {
        self.lookup.iter().all(|(original, new)| original == new)
    }
}
