//! Table axes and the record arrays that describe them

use alloc::string::ToString;
use core::str::FromStr;

use super::constants::keys;
use crate::{Result, SliceError};

/// One of the two dimensions of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Rows, described by the `rows` records
    Observation,
    /// Columns, described by the `columns` records
    Sample,
}

impl Axis {
    /// Name used on the command line and in messages
    pub const fn as_str(self) -> &'static str {
        match self {
            Axis::Observation => "observation",
            Axis::Sample => "sample",
        }
    }

    /// Document key holding this axis' records
    pub const fn record_key(self) -> &'static str {
        match self {
            Axis::Observation => keys::ROWS,
            Axis::Sample => keys::COLUMNS,
        }
    }

    /// The opposite axis
    pub const fn other(self) -> Axis {
        match self {
            Axis::Observation => Axis::Sample,
            Axis::Sample => Axis::Observation,
        }
    }
}

impl FromStr for Axis {
    type Err = SliceError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "observation" => Ok(Axis::Observation),
            "sample" => Ok(Axis::Sample),
            other => Err(SliceError::UnknownAxis(other.to_string())),
        }
    }
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
