//! Encoding [`Annotation`] values into `.annot` streams.
//!
//! The writer always produces the indexed version-2 layout, whatever layout
//! a decoded source file used; round-tripping upgrades the container while
//! preserving the semantic content. This matches FreeSurfer's own
//! `CTABwriteIntoBinary`, which has emitted only version 2 for two decades.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::annotation::Annotation;
use crate::bytestream::ByteWriter;
use crate::{Error, Result};

/// Encodes an annotation into the indexed version-2 wire layout.
///
/// `file_name` is embedded in the stream as the color table's source name;
/// by convention it is the destination file's own name or path. Structure
/// ids are assigned fresh, sequentially from 0 in ascending-label order;
/// ids seen at decode time are not preserved. Labels are never written,
/// they are re-derived from the channels by every reader.
pub fn encode(annotation: &Annotation, file_name: &str) -> Vec<u8> {
    let mut w = ByteWriter::new();

    w.write_i32(annotation.vertex_count() as i32);
    for (vertex_id, label) in annotation.vertex_ids().iter().zip(annotation.labels()) {
        w.write_i32(*vertex_id);
        w.write_i32(*label);
    }

    // Tag "color table follows", then the negated version number.
    w.write_i32(0);
    w.write_i32(-2);

    // Derselbe Wert für "real count" und "entries to read"; die beiden
    // Felder unterscheiden sich nur in handgeschriebenen Altdateien.
    let entry_count = annotation.color_table().len() as i32;
    w.write_i32(entry_count);
    w.write_string(file_name);
    w.write_i32(entry_count);

    for (structure_id, (_, entry)) in annotation.color_table().iter().enumerate() {
        w.write_i32(structure_id as i32);
        w.write_string(&entry.name);
        w.write_i32(entry.r);
        w.write_i32(entry.g);
        w.write_i32(entry.b);
        w.write_i32(entry.t);
    }

    w.into_vec()
}

/// Encodes an annotation and writes it to `path` in one pass.
///
/// The path's display form is what gets embedded as the stream's file name.
/// Open failures map to [`Error::FileOpen`], write failures to
/// [`Error::FileWrite`]; on failure no partial output is reported as
/// success. The handle is released on every exit path.
pub fn encode_file(annotation: &Annotation, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let data = encode(annotation, &path.display().to_string());

    let mut file = File::create(path)
        .map_err(|e| Error::FileOpen(format!("{}: {e}", path.display())))?;
    file.write_all(&data)
        .map_err(|e| Error::FileWrite(format!("{}: {e}", path.display())))?;
    Ok(())
}
