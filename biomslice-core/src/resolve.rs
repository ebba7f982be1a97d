//! Axis index resolution
//!
//! Maps requested identifiers onto ordinal positions in the `rows` or
//! `columns` records. Unlike the data section, the record array is small
//! enough to decode with `serde_json`; each record's metadata is kept as raw
//! text so that re-serialising a subset reproduces it byte for byte.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::format::Axis;
use crate::scanner::{self, Fragment};
use crate::slice::KeepSet;
use crate::{Result, SliceError};

/// One entry of the `rows` or `columns` array
#[derive(Debug, Serialize, Deserialize)]
pub struct AxisRecord<'a> {
    #[serde(borrow)]
    pub id: Cow<'a, str>,
    #[serde(borrow, default)]
    pub metadata: Option<&'a RawValue>,
}

/// Ordinal indices for a set of ids, with the matching records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAxis {
    pub axis: Axis,
    /// Ordinal positions of the requested ids, ascending
    pub indices: Vec<usize>,
    /// `"rows": [...]` or `"columns": [...]` holding only the kept records
    pub fragment: String,
}

/// Decode the records of one axis
pub fn axis_records<'a>(document: &'a str, axis: Axis) -> Result<Vec<AxisRecord<'a>>> {
    let fragment = scanner::require(document, axis.record_key())?;
    decode_records(&fragment, axis)
}

/// Resolve `requested` ids on `axis` to ordinal indices
///
/// Every requested id must exist; otherwise the error lists the missing ids
/// in request order. Records are kept in their original order regardless of
/// the order ids were requested in.
pub fn resolve_axis_indices<S: AsRef<str>>(
    document: &str,
    axis: Axis,
    requested: &[S],
) -> Result<ResolvedAxis> {
    let records = axis_records(document, axis)?;

    let present: HashSet<&str> = records.iter().map(|r| r.id.as_ref()).collect();
    let mut wanted: HashSet<&str> = HashSet::with_capacity(requested.len());
    let mut missing = Vec::new();
    for id in requested.iter().map(AsRef::as_ref) {
        if wanted.insert(id) && !present.contains(id) {
            missing.push(id.to_string());
        }
    }
    if !missing.is_empty() {
        return Err(SliceError::IdNotFound { axis, missing });
    }
    if wanted.is_empty() {
        return Err(SliceError::EmptySelection(axis));
    }

    let (indices, kept): (Vec<usize>, Vec<&AxisRecord<'_>>) = records
        .iter()
        .enumerate()
        .filter(|(_, record)| wanted.contains(record.id.as_ref()))
        .unzip();

    Ok(ResolvedAxis {
        axis,
        indices,
        fragment: encode_records(axis, &kept)?,
    })
}

/// Keep the records at the keep-set's ordinal indices
///
/// Used when slicing by raw index; fails if the keep-set reaches past the
/// number of records.
pub fn select_axis_records(document: &str, keep: &KeepSet) -> Result<String> {
    let axis = keep.axis();
    let records = axis_records(document, axis)?;
    if keep.max() >= records.len() {
        return Err(SliceError::IndexOutOfRange {
            axis,
            index: i64::try_from(keep.max()).unwrap_or(i64::MAX),
            len: records.len(),
        });
    }

    let kept: Vec<&AxisRecord<'_>> = keep.iter().map(|i| &records[i]).collect();
    encode_records(axis, &kept)
}

fn decode_records<'a>(fragment: &Fragment<'a>, axis: Axis) -> Result<Vec<AxisRecord<'a>>> {
    serde_json::from_str(fragment.value())
        .map_err(|e| SliceError::malformed(axis.record_key(), e.to_string()))
}

fn encode_records(axis: Axis, records: &[&AxisRecord<'_>]) -> Result<String> {
    let body = serde_json::to_string(records)
        .map_err(|e| SliceError::malformed(axis.record_key(), e.to_string()))?;
    Ok(format!("\"{}\": {}", axis.record_key(), body))
}
