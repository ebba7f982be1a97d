//! Key names and scanner limits for JSON BIOM tables

/// Maximum container nesting the fragment scanner tracks
pub const MAX_NESTING_DEPTH: usize = 64;

/// Literal text separating consecutive `[row,col,value]` triples
///
/// The data array is split on this sequence rather than parsed, so triples
/// must not contain nested arrays or this exact sequence.
pub const TRIPLE_SEPARATOR: &str = "],";

/// Characters stripped from both ends of a triple and of each triple token
pub const TRIPLE_TRIM: &[char] = &['[', ']', ' ', '\n', '\t', '\r'];

/// Top-level document keys
pub mod keys {
    pub const ID: &str = "id";
    pub const FORMAT: &str = "format";
    pub const FORMAT_URL: &str = "format_url";
    pub const TYPE: &str = "type";
    pub const GENERATED_BY: &str = "generated_by";
    pub const DATE: &str = "date";
    pub const MATRIX_TYPE: &str = "matrix_type";
    pub const MATRIX_ELEMENT_TYPE: &str = "matrix_element_type";
    pub const SHAPE: &str = "shape";
    pub const DATA: &str = "data";
    pub const ROWS: &str = "rows";
    pub const COLUMNS: &str = "columns";

    /// Keys copied verbatim into a subset document, in output order
    pub const HEADER: [&str; 8] = [
        ID,
        FORMAT,
        FORMAT_URL,
        TYPE,
        GENERATED_BY,
        DATE,
        MATRIX_TYPE,
        MATRIX_ELEMENT_TYPE,
    ];
}
