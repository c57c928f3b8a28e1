//! Decoding `.annot` streams into [`Annotation`] values.
//!
//! Both historical color-table layouts are handled by one decode path with a
//! branch on the sign of the entry-count field, the same discriminator
//! FreeSurfer's `CTABreadFromBinary` uses: a positive count is the original
//! inline table, a non-positive count is the negated version number of the
//! indexed table. Either way the result is the same format-agnostic
//! [`Annotation`]; a consumer cannot tell which layout a file used.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::annotation::Annotation;
use crate::bytestream::ByteReader;
use crate::color_table::{ColorEntry, ColorTable};
use crate::{Error, FastHashSet, Result};

/// Non-fatal conditions observed during a successful decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Warning {
    /// The stream ended after the vertex data, before any color table. The
    /// annotation is valid with an empty table; this is how some early
    /// FreeSurfer files were written.
    NoColorTable,
}

impl core::fmt::Display for Warning {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoColorTable => write!(f, "annotation carries no color table"),
        }
    }
}

/// Decodes one `.annot` stream.
///
/// Returns: (annotation, warnings)
///
/// The vertex-id sequence is retained exactly as stored even though most
/// consumers only use the labels. Trailing bytes after a complete color
/// table are ignored, as FreeSurfer's readers ignore them.
pub fn decode(data: &[u8]) -> Result<(Annotation, Vec<Warning>)> {
    let mut reader = ByteReader::new(data);

    let vertex_count = reader.read_i32()?;
    if vertex_count < 0 {
        return Err(Error::InvalidVertexCount(vertex_count));
    }
    let count = vertex_count as usize;

    // Upfront-Check statt per-Paar: 8 Bytes pro (vertex_id, label), sonst
    // wäre die Allokation unten durch einen korrupten Count steuerbar.
    if reader.remaining() / 8 < count {
        return Err(Error::TruncatedStream);
    }
    let mut vertex_ids = Vec::with_capacity(count);
    let mut labels = Vec::with_capacity(count);
    for _ in 0..count {
        vertex_ids.push(reader.read_i32()?);
        labels.push(reader.read_i32()?);
    }

    if reader.is_empty() {
        log::warn!("annotation stream ends after vertex data, no color table");
        let annotation = Annotation::new(vertex_ids, labels, ColorTable::new())?;
        return Ok((annotation, vec![Warning::NoColorTable]));
    }

    // Tag "color table follows"; the value itself was never validated by
    // any reader and is not here either.
    let _tag = reader.read_i32()?;
    let num_entries = reader.read_i32()?;

    let table = if num_entries > 0 {
        decode_legacy_table(&mut reader, num_entries)?
    } else {
        decode_indexed_table(&mut reader, num_entries)?
    };

    let annotation = Annotation::new(vertex_ids, labels, table)?;
    Ok((annotation, Vec::new()))
}

/// Original inline layout: entry records follow directly, the entry count
/// was already read as the (positive) `num_entries` field.
fn decode_legacy_table(reader: &mut ByteReader<'_>, num_entries: i32) -> Result<ColorTable> {
    log::debug!("legacy inline color table, {num_entries} entries");
    // Source filename of the table; informational only.
    let _source = reader.read_string()?;

    let mut table = ColorTable::new();
    for _ in 0..num_entries {
        let name = reader.read_string()?;
        let r = reader.read_i32()?;
        let g = reader.read_i32()?;
        let b = reader.read_i32()?;
        let t = reader.read_i32()?;
        // Später gelesene Einträge mit gleichem abgeleiteten Label
        // überschreiben frühere (map-insert Semantik).
        table.insert(ColorEntry { name, r, g, b, t });
    }
    Ok(table)
}

/// Indexed layout: `num_entries <= 0` is the negated format version, and
/// only version 2 exists. Structure ids gate integrity (non-negative,
/// unique per decode) but the map key stays the derived label, so both
/// layouts produce identically keyed tables.
fn decode_indexed_table(reader: &mut ByteReader<'_>, num_entries: i32) -> Result<ColorTable> {
    let version = num_entries.wrapping_neg();
    if version != 2 {
        return Err(Error::UnsupportedVersion(version));
    }
    log::debug!("indexed color table, version {version}");

    // Real entry count; informational, the record loop is driven by the
    // entries-to-read field below.
    let _real_count = reader.read_i32()?;
    let _source = reader.read_string()?;
    let entries_to_read = reader.read_i32()?;

    // Duplikat-Erkennung ist auf diesen einen Decode-Aufruf beschränkt.
    let mut seen_ids: FastHashSet<i32> = FastHashSet::default();
    let mut table = ColorTable::new();
    for _ in 0..entries_to_read {
        let structure_id = reader.read_i32()?;
        if structure_id < 0 {
            return Err(Error::NegativeStructureId(structure_id));
        }
        if !seen_ids.insert(structure_id) {
            return Err(Error::DuplicateStructureId(structure_id));
        }
        let name = reader.read_string()?;
        let r = reader.read_i32()?;
        let g = reader.read_i32()?;
        let b = reader.read_i32()?;
        let t = reader.read_i32()?;
        table.insert(ColorEntry { name, r, g, b, t });
    }
    Ok(table)
}

/// Reads and decodes one `.annot` file.
///
/// The file handle is held for the duration of the read and released on
/// every exit path, including errors.
pub fn decode_file(path: impl AsRef<Path>) -> Result<(Annotation, Vec<Warning>)> {
    let path = path.as_ref();
    let mut file = File::open(path)
        .map_err(|e| Error::FileOpen(format!("{}: {e}", path.display())))?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)
        .map_err(|e| Error::FileRead(format!("{}: {e}", path.display())))?;
    decode(&data)
}
