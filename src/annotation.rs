//! The in-memory annotation value: per-vertex labels plus the color table.
//!
//! An [`Annotation`] is a plain value with no background mutation and no
//! shared ownership. [`decode`](crate::decoder::decode) constructs one, or a
//! caller builds one before [`encode`](crate::encoder::encode); afterwards
//! it only hands out read-only views. Validating the vertex count against a
//! mesh's point count is the consumer's job, the codec knows nothing about
//! geometry.

use crate::color_table::{ColorEntry, ColorTable};
use crate::{Error, Result};

/// Per-vertex labels for a surface, with the label-to-region color table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    vertex_ids: Vec<i32>,
    labels: Vec<i32>,
    color_table: ColorTable,
}

impl Annotation {
    /// Builds an annotation from its parts.
    ///
    /// `vertex_ids` and `labels` are positionally aligned and must have the
    /// same length; [`Error::VertexCountMismatch`] otherwise. The ids are
    /// conventionally `0..n`, but the format stores them explicitly and they
    /// need not be contiguous, so they are kept verbatim.
    pub fn new(vertex_ids: Vec<i32>, labels: Vec<i32>, color_table: ColorTable) -> Result<Self> {
        if vertex_ids.len() != labels.len() {
            return Err(Error::VertexCountMismatch {
                vertex_ids: vertex_ids.len(),
                labels: labels.len(),
            });
        }
        Ok(Self { vertex_ids, labels, color_table })
    }

    /// Number of vertices covered.
    pub fn vertex_count(&self) -> usize {
        self.vertex_ids.len()
    }

    /// The stored vertex index for each entry.
    pub fn vertex_ids(&self) -> &[i32] {
        &self.vertex_ids
    }

    /// One encoded label value per vertex, aligned with [`vertex_ids`].
    ///
    /// [`vertex_ids`]: Self::vertex_ids
    pub fn labels(&self) -> &[i32] {
        &self.labels
    }

    /// The label-to-region color table.
    pub fn color_table(&self) -> &ColorTable {
        &self.color_table
    }

    /// Resolves the region for the `index`-th entry, `None` when the index
    /// is out of range or the label has no table entry (an unknown-region
    /// vertex; the codec tolerates those, the placeholder is the caller's).
    pub fn entry_for_vertex(&self, index: usize) -> Option<&ColorEntry> {
        self.labels
            .get(index)
            .and_then(|label| self.color_table.get(*label))
    }

    /// Decomposes the annotation into its parts.
    pub fn into_parts(self) -> (Vec<i32>, Vec<i32>, ColorTable) {
        (self.vertex_ids, self.labels, self.color_table)
    }
}
