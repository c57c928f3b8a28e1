//! Color table: named, colored anatomical regions keyed by label value.
//!
//! A `.annot` file never stores the label of a region directly. Every reader
//! since FreeSurfer's `read_annotation.m` derives it from the four color
//! channels, and every entry is looked up by that derived value. The table
//! here preserves exactly that contract: insertion computes the label,
//! lookups take it, and iteration is in ascending label order so encoded
//! output is deterministic.
//!
//! Lifecycle: one table per annotation, owned by the caller; no shared or
//! static state between decode calls.

use std::collections::BTreeMap;

/// One region of a color table: a structure name plus the RGBT channels.
///
/// Channels are stored exactly as they appear on the wire (`i32`); the
/// format's convention is `[0, 255]` per channel, with `t` (transparency)
/// almost always zero in shipped atlases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    /// Structure name, e.g. `"precentral"`.
    pub name: String,
    /// Red channel.
    pub r: i32,
    /// Green channel.
    pub g: i32,
    /// Blue channel.
    pub b: i32,
    /// Transparency channel.
    pub t: i32,
}

impl ColorEntry {
    /// Creates an entry from a name and its four color channels.
    pub fn new(name: impl Into<String>, r: i32, g: i32, b: i32, t: i32) -> Self {
        Self { name: name.into(), r, g, b, t }
    }

    /// The label value derived from the channels:
    /// `r + g*256 + b*65536 + t*16777216`.
    ///
    /// Wrapping 32-Bit-Arithmetik, identisch zu den historischen Readern:
    /// für Kanäle außerhalb von `[0, 255]` (korrupte Datei) entsteht
    /// derselbe Wert, den ein 32-Bit-int-Reader berechnen würde.
    pub fn label(&self) -> i32 {
        self.r
            .wrapping_add(self.g.wrapping_mul(1 << 8))
            .wrapping_add(self.b.wrapping_mul(1 << 16))
            .wrapping_add(self.t.wrapping_mul(1 << 24))
    }
}

/// Mapping from label value to [`ColorEntry`], iterated in ascending label
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTable {
    entries: BTreeMap<i32, ColorEntry>,
}

impl ColorTable {
    /// Creates a new empty color table.
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Inserts an entry under its derived label.
    ///
    /// A later entry with the same derived label replaces the earlier one
    /// (last-write-wins, the map-insert semantics both wire layouts share);
    /// the displaced entry is returned.
    pub fn insert(&mut self, entry: ColorEntry) -> Option<ColorEntry> {
        self.entries.insert(entry.label(), entry)
    }

    /// Looks up the entry for a label value, `None` when the label is
    /// unmapped (an unknown-region vertex; resolving that to a placeholder
    /// is the consumer's decision).
    pub fn get(&self, label: i32) -> Option<&ColorEntry> {
        self.entries.get(&label)
    }

    /// Returns `true` when `label` has an entry.
    pub fn contains_label(&self, label: i32) -> bool {
        self.entries.contains_key(&label)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(label, entry)` pairs in ascending label order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &ColorEntry)> {
        self.entries.iter().map(|(label, entry)| (*label, entry))
    }
}

impl FromIterator<ColorEntry> for ColorTable {
    fn from_iter<I: IntoIterator<Item = ColorEntry>>(iter: I) -> Self {
        let mut table = Self::new();
        for entry in iter {
            table.insert(entry);
        }
        table
    }
}
