//! Slice assembly

use alloc::format;
use alloc::string::String;

use crate::format::constants::keys;
use crate::format::Shape;

/// Render `"data": <data>, "shape": [r, c]`
///
/// The result is a fragment for splicing into a document, not a document.
pub fn assemble(data: &str, shape: Shape) -> String {
    format!("\"{}\": {data}, \"{}\": {shape}", keys::DATA, keys::SHAPE)
}
