//! End-to-end tests over hand-built `.annot` wire fixtures.
//!
//! Fixtures are assembled byte by byte (big-endian `i32` fields) so the
//! tests pin the wire layout itself, not just the codec against its own
//! output.

use fsannot::{decode, decode_file, encode, encode_file, Annotation, ColorEntry, ColorTable, Error, Warning};

fn push_i32(buf: &mut Vec<u8>, value: i32) {
    buf.extend_from_slice(&value.to_be_bytes());
}

fn push_string(buf: &mut Vec<u8>, value: &str) {
    push_i32(buf, value.len() as i32);
    buf.extend_from_slice(value.as_bytes());
}

/// The documented two-vertex scenario: pairs `(0, 16711680)` and
/// `(1, 65280)`, indexed table with records `("red", 255,0,0,0)` and
/// `("green", 0,255,0,0)`.
fn two_vertex_fixture() -> Vec<u8> {
    let mut buf = Vec::new();
    push_i32(&mut buf, 2); // vertex count
    push_i32(&mut buf, 0);
    push_i32(&mut buf, 16_711_680);
    push_i32(&mut buf, 1);
    push_i32(&mut buf, 65_280);
    push_i32(&mut buf, 0); // tag
    push_i32(&mut buf, -2); // indexed layout, version 2
    push_i32(&mut buf, 2); // real entry count
    push_string(&mut buf, "x");
    push_i32(&mut buf, 2); // entries to read
    push_i32(&mut buf, 0);
    push_string(&mut buf, "red");
    for channel in [255, 0, 0, 0] {
        push_i32(&mut buf, channel);
    }
    push_i32(&mut buf, 1);
    push_string(&mut buf, "green");
    for channel in [0, 255, 0, 0] {
        push_i32(&mut buf, channel);
    }
    buf
}

/// Labels come back positionally aligned, and every table entry keys by the
/// channel-derived label: `255 + 0*256 + 0*65536 + 0*16777216 = 255` for
/// "red", `65280` for "green".
#[test]
fn concrete_two_vertex_scenario() {
    let (annot, warnings) = decode(&two_vertex_fixture()).unwrap();
    assert!(warnings.is_empty());

    assert_eq!(annot.vertex_count(), 2);
    assert_eq!(annot.vertex_ids(), &[0, 1]);
    assert_eq!(annot.labels(), &[16_711_680, 65_280]);

    let table = annot.color_table();
    assert_eq!(table.len(), 2);
    let red = table.get(255).unwrap();
    assert_eq!((red.name.as_str(), red.r, red.g, red.b, red.t), ("red", 255, 0, 0, 0));
    let green = table.get(65_280).unwrap();
    assert_eq!(
        (green.name.as_str(), green.r, green.g, green.b, green.t),
        ("green", 0, 255, 0, 0)
    );

    // vertex 1 resolves to a region; vertex 0 carries an unmapped label,
    // which the codec tolerates
    assert_eq!(annot.entry_for_vertex(1).unwrap().name, "green");
    assert!(annot.entry_for_vertex(0).is_none());
}

/// Decode → encode → decode must preserve vertex ids, labels and the
/// `{label -> (name, r, g, b, t)}` set; structure ids and the source layout
/// need not survive.
#[test]
fn round_trip_is_idempotent() {
    let (first, _) = decode(&two_vertex_fixture()).unwrap();
    let re_encoded = encode(&first, "copy.annot");
    let (second, warnings) = decode(&re_encoded).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(second, first);

    // and once more: a second round-trip is byte-stable
    assert_eq!(encode(&second, "copy.annot"), re_encoded);
}

/// A legacy-layout file round-trips through the version-2 writer with the
/// same semantic content.
#[test]
fn legacy_layout_round_trips_as_v2() {
    let mut buf = Vec::new();
    push_i32(&mut buf, 1);
    push_i32(&mut buf, 0);
    push_i32(&mut buf, 255);
    push_i32(&mut buf, 1); // tag, value arbitrary
    push_i32(&mut buf, 1); // positive: legacy layout, one entry
    push_string(&mut buf, "colortable.txt");
    push_string(&mut buf, "red");
    for channel in [255, 0, 0, 0] {
        push_i32(&mut buf, channel);
    }

    let (legacy, warnings) = decode(&buf).unwrap();
    assert!(warnings.is_empty());
    let (again, _) = decode(&encode(&legacy, "upgraded.annot")).unwrap();
    assert_eq!(again, legacy);
    assert_eq!(again.color_table().get(255).unwrap().name, "red");
}

/// `label == r + g*256 + b*65536 + t*16777216` for every decoded entry.
#[test]
fn decoded_entries_satisfy_label_derivation() {
    let (annot, _) = decode(&two_vertex_fixture()).unwrap();
    for (label, entry) in annot.color_table().iter() {
        assert_eq!(
            label,
            entry.r + entry.g * 256 + entry.b * 65_536 + entry.t * 16_777_216
        );
        assert_eq!(label, entry.label());
    }
}

/// A stream that ends right after the vertex pairs is a valid annotation
/// with an empty table and the no-color-table warning raised.
#[test]
fn empty_table_tolerance() {
    let mut buf = Vec::new();
    push_i32(&mut buf, 2);
    push_i32(&mut buf, 0);
    push_i32(&mut buf, 11);
    push_i32(&mut buf, 1);
    push_i32(&mut buf, 22);

    let (annot, warnings) = decode(&buf).unwrap();
    assert_eq!(warnings, vec![Warning::NoColorTable]);
    assert!(annot.color_table().is_empty());
    assert_eq!(annot.labels(), &[11, 22]);
}

/// Two indexed records sharing a structure id are a hard decode error.
#[test]
fn duplicate_structure_id_rejection() {
    let mut buf = Vec::new();
    push_i32(&mut buf, 0); // no vertices
    push_i32(&mut buf, 0); // tag
    push_i32(&mut buf, -2);
    push_i32(&mut buf, 2);
    push_string(&mut buf, "x");
    push_i32(&mut buf, 2);
    for name in ["a", "b"] {
        push_i32(&mut buf, 7); // same id twice
        push_string(&mut buf, name);
        for channel in [1, 2, 3, 0] {
            push_i32(&mut buf, channel);
        }
    }
    assert_eq!(decode(&buf).unwrap_err(), Error::DuplicateStructureId(7));
}

/// A record with structure id -1 is rejected.
#[test]
fn negative_structure_id_rejection() {
    let mut buf = Vec::new();
    push_i32(&mut buf, 0);
    push_i32(&mut buf, 0);
    push_i32(&mut buf, -2);
    push_i32(&mut buf, 1);
    push_string(&mut buf, "x");
    push_i32(&mut buf, 1);
    push_i32(&mut buf, -1);
    push_string(&mut buf, "broken");
    for channel in [1, 2, 3, 0] {
        push_i32(&mut buf, channel);
    }
    assert_eq!(decode(&buf).unwrap_err(), Error::NegativeStructureId(-1));
}

/// `num_entries = -3` selects indexed version 3, which does not exist.
#[test]
fn version_gate() {
    let mut buf = Vec::new();
    push_i32(&mut buf, 0);
    push_i32(&mut buf, 0);
    push_i32(&mut buf, -3);
    assert_eq!(decode(&buf).unwrap_err(), Error::UnsupportedVersion(3));
}

/// A zero-length name decodes as an empty string without error.
#[test]
fn zero_length_string() {
    let mut buf = Vec::new();
    push_i32(&mut buf, 0);
    push_i32(&mut buf, 0);
    push_i32(&mut buf, -2);
    push_i32(&mut buf, 1);
    push_string(&mut buf, ""); // empty source file name
    push_i32(&mut buf, 1);
    push_i32(&mut buf, 0);
    push_string(&mut buf, ""); // empty structure name
    for channel in [4, 0, 0, 0] {
        push_i32(&mut buf, channel);
    }
    let (annot, _) = decode(&buf).unwrap();
    assert_eq!(annot.color_table().get(4).unwrap().name, "");
}

/// Truncation inside the pair sequence reports a broken stream.
#[test]
fn truncated_vertex_section() {
    let mut buf = Vec::new();
    push_i32(&mut buf, 4);
    push_i32(&mut buf, 0);
    push_i32(&mut buf, 1); // only one of four pairs
    assert_eq!(decode(&buf).unwrap_err(), Error::TruncatedStream);
}

/// Truncation inside a color-table record reports a broken stream.
#[test]
fn truncated_record() {
    let mut buf = Vec::new();
    push_i32(&mut buf, 0);
    push_i32(&mut buf, 0);
    push_i32(&mut buf, -2);
    push_i32(&mut buf, 1);
    push_string(&mut buf, "x");
    push_i32(&mut buf, 1);
    push_i32(&mut buf, 0);
    push_string(&mut buf, "red");
    push_i32(&mut buf, 255); // r only, stream ends before g/b/t
    assert_eq!(decode(&buf).unwrap_err(), Error::TruncatedStream);
}

/// File-level encode and decode, including the open-failure path.
#[test]
fn file_round_trip() {
    let mut table = ColorTable::new();
    table.insert(ColorEntry::new("precentral", 60, 20, 220, 0));
    let annot = Annotation::new(vec![0, 1], vec![14_423_100, 0], table).unwrap();

    let path = std::env::temp_dir().join(format!("fsannot-rtt-{}.annot", std::process::id()));
    encode_file(&annot, &path).unwrap();
    let (decoded, warnings) = decode_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(warnings.is_empty());
    assert_eq!(decoded, annot);
}

#[test]
fn decode_missing_file_is_open_error() {
    let err = decode_file("/nonexistent/fsannot/missing.annot").unwrap_err();
    assert!(matches!(err, Error::FileOpen(_)), "{err:?}");
}
