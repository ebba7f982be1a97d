//! Full-document subsetting
//!
//! [`TableSubsetter`] slices one axis of a table and re-embeds the result in a
//! complete document: the header pairs are copied verbatim, the `data` and
//! `shape` values are replaced, the sliced axis keeps only the selected
//! records and the opposite axis is copied unchanged.

use biomslice_core::format::constants::keys;
use biomslice_core::{
    require, select_axis_records, slice_by_ids, slice_by_index_items, Axis, DataSlice,
    DocumentSource, IndexItem, Shape,
};

use crate::{Result, SubsetConfig};

/// What to keep on one axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubsetRequest {
    /// Keep the records with these ids
    Ids { axis: Axis, ids: Vec<String> },
    /// Keep the records at these ordinal positions and ranges
    Indices { axis: Axis, items: Vec<IndexItem> },
}

impl SubsetRequest {
    pub fn ids<I, S>(axis: Axis, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SubsetRequest::Ids {
            axis,
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn indices<I: IntoIterator<Item = i64>>(axis: Axis, indices: I) -> Self {
        SubsetRequest::Indices {
            axis,
            items: indices.into_iter().map(IndexItem::Single).collect(),
        }
    }

    /// Request from parsed index-list items, e.g. the output of
    /// [`parse_index_list`](crate::parse_index_list)
    pub fn index_items(axis: Axis, items: Vec<IndexItem>) -> Self {
        SubsetRequest::Indices { axis, items }
    }

    /// The axis being sliced
    pub fn axis(&self) -> Axis {
        match self {
            SubsetRequest::Ids { axis, .. } | SubsetRequest::Indices { axis, .. } => *axis,
        }
    }

    /// Number of requested ids or index-list items, before de-duplication
    pub fn len(&self) -> usize {
        match self {
            SubsetRequest::Ids { ids, .. } => ids.len(),
            SubsetRequest::Indices { items, .. } => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A subset document and what went into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subset {
    /// The complete subset document
    pub document: String,
    pub axis: Axis,
    pub shape: Shape,
    /// Kept ordinal positions on the sliced axis, ascending
    pub kept: Vec<usize>,
    pub triples_in: usize,
    pub triples_out: usize,
}

/// Produces subset documents from whole table documents
#[derive(Debug, Clone, Default)]
pub struct TableSubsetter {
    config: SubsetConfig,
}

impl TableSubsetter {
    pub fn new(config: SubsetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SubsetConfig {
        &self.config
    }

    /// Subset `document` to the records with the given ids
    pub fn subset_by_ids<D, S>(&self, document: &D, axis: Axis, ids: &[S]) -> Result<Subset>
    where
        D: DocumentSource + ?Sized,
        S: AsRef<str>,
    {
        let ids = ids.iter().map(|id| id.as_ref().to_owned());
        self.subset(document, &SubsetRequest::ids(axis, ids))
    }

    /// Subset `document` to the given ordinal indices
    pub fn subset_by_indices<D>(&self, document: &D, axis: Axis, indices: &[i64]) -> Result<Subset>
    where
        D: DocumentSource + ?Sized,
    {
        self.subset(document, &SubsetRequest::indices(axis, indices.iter().copied()))
    }

    /// Subset `document` as described by `request`
    ///
    /// Any failure aborts the request; no partial document is returned.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(axis = %request.axis(), requested = request.len(), bytes = document.size())
    )]
    pub fn subset<D>(&self, document: &D, request: &SubsetRequest) -> Result<Subset>
    where
        D: DocumentSource + ?Sized,
    {
        self.config.check_document_size(document.size())?;
        let text = document.document_text();
        let axis = request.axis();

        let mut header = Vec::with_capacity(keys::HEADER.len());
        for key in keys::HEADER {
            header.push(require(text, key)?.as_pair());
        }
        let other_axis = require(text, axis.other().record_key())?.as_pair();

        let (data, axis_pair) = match request {
            SubsetRequest::Ids { ids, .. } => {
                let slice = slice_by_ids(text, axis, ids)?;
                (slice.data, slice.resolved.fragment)
            }
            SubsetRequest::Indices { items, .. } => {
                let data = slice_by_index_items(text, axis, items)?;
                let records = select_axis_records(text, &data.keep)?;
                (data, records)
            }
        };

        log_slice(&data);

        let mut out = String::with_capacity(
            header.iter().map(|pair| pair.len() + 2).sum::<usize>()
                + data.fragment.len()
                + axis_pair.len()
                + other_axis.len()
                + 8,
        );
        out.push('{');
        for pair in &header {
            out.push_str(pair);
            out.push_str(", ");
        }
        out.push_str(&data.fragment);
        out.push_str(", ");
        // Rows before columns, whichever was sliced
        let (rows, columns) = match axis {
            Axis::Observation => (axis_pair.as_str(), other_axis),
            Axis::Sample => (other_axis, axis_pair.as_str()),
        };
        out.push_str(rows);
        out.push_str(", ");
        out.push_str(columns);
        out.push('}');

        Ok(Subset {
            document: out,
            axis,
            shape: data.shape,
            kept: data.keep.as_slice().to_vec(),
            triples_in: data.triples_in,
            triples_out: data.triples_out,
        })
    }
}

fn log_slice(data: &DataSlice) {
    tracing::debug!(
        kept = data.keep.len(),
        triples_in = data.triples_in,
        triples_out = data.triples_out,
        shape = %data.shape,
        "sliced data section"
    );
    if data.triples_out == 0 {
        tracing::warn!(
            axis = %data.keep.axis(),
            kept = data.keep.len(),
            "selection matched no stored values, subset data is empty"
        );
    }
}
