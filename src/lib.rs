//! fsannot – reader and writer for FreeSurfer `.annot` surface annotations
//!
//! A `.annot` file maps each vertex of a cortical surface to a named,
//! colored anatomical region: a sequence of `(vertex id, label)` pairs
//! followed by a color table that keys region names and RGBT colors by the
//! label value. Two historical color-table layouts exist on disk (the
//! original inline table and the indexed version-2 table); both decode into
//! the same [`Annotation`] value, and encoding always produces the indexed
//! version-2 layout.
//!
//! # Beispiel
//!
//! ```
//! use fsannot::{Annotation, ColorEntry, ColorTable};
//!
//! // Two regions; labels derive from the color channels
//! let mut table = ColorTable::new();
//! table.insert(ColorEntry::new("precentral", 60, 20, 220, 0));
//! table.insert(ColorEntry::new("postcentral", 220, 20, 20, 0));
//!
//! let annot = Annotation::new(
//!     vec![0, 1, 2],
//!     vec![14_423_100, 1_316_060, 14_423_100],
//!     table,
//! )
//! .unwrap();
//!
//! // Encode
//! let bytes = fsannot::encoder::encode(&annot, "lh.aparc.annot");
//!
//! // Decode
//! let (decoded, warnings) = fsannot::decoder::decode(&bytes).unwrap();
//! assert!(warnings.is_empty());
//! assert_eq!(decoded, annot);
//! assert_eq!(decoded.entry_for_vertex(0).unwrap().name, "precentral");
//! ```

pub mod annotation;
pub mod bytestream;
pub mod color_table;
pub mod decoder;
pub mod encoder;
pub mod error;

pub use error::{Error, Result};

/// HashSet mit ahash (schneller, nicht DoS-resistent; nur für interne,
/// pro-Aufruf kurzlebige Mengen wie die Duplikat-Erkennung).
pub(crate) type FastHashSet<K> = hashbrown::HashSet<K, ahash::RandomState>;

// Public API: data model
pub use annotation::Annotation;
pub use color_table::{ColorEntry, ColorTable};

// Public API: codec
pub use decoder::{decode, decode_file, Warning};
pub use encoder::{encode, encode_file};
