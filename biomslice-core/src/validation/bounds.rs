//! Keep-set bounds validation

use crate::slice::KeepSet;
use crate::{Result, SliceError};

/// Check a keep-set against the length of its axis
///
/// Only the extremes are compared. `KeepSet` holds unsigned indices, so the
/// lower bound is enforced when one is built from signed input; the maximum
/// must stay below `axis_len`.
pub fn validate_keep_bounds(keep: &KeepSet, axis_len: usize) -> Result<()> {
    let max = keep.max();
    if max >= axis_len {
        return Err(SliceError::IndexOutOfRange {
            axis: keep.axis(),
            index: i64::try_from(max).unwrap_or(i64::MAX),
            len: axis_len,
        });
    }
    Ok(())
}
