//! Byte-level stream reader and writer for the `.annot` wire format.
//!
//! Every integer field in the format is a 32-bit big-endian two's-complement
//! value, including counts and string lengths; there is no variable-width
//! encoding. Strings are length-prefixed: an `i32` byte length followed by
//! exactly that many raw bytes, with no terminator on the wire.

use crate::{Error, Result};

/// Reads big-endian fields from a borrowed byte slice.
///
/// Alle Bounds-Checks des Formats leben hier: ein fehlgeschlagener Read
/// lässt die Leseposition unverändert, damit der Fehlerpfad keinen
/// halb konsumierten Zustand hinterlässt.
#[derive(Clone, Copy)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` over the given byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Reads one big-endian `i32` field.
    pub fn read_i32(&mut self) -> Result<i32> {
        let bytes = self
            .data
            .get(self.pos..self.pos + 4)
            .ok_or(Error::TruncatedStream)?;
        self.pos += 4;
        Ok(i32::from_be_bytes(bytes.try_into().expect("slice has length 4")))
    }

    /// Reads exactly `len` raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let bytes = self
            .data
            .get(self.pos..self.pos.checked_add(len).ok_or(Error::TruncatedStream)?)
            .ok_or(Error::TruncatedStream)?;
        self.pos += len;
        Ok(bytes)
    }

    /// Reads one length-prefixed string field.
    ///
    /// The declared length is untrusted input: a negative length is
    /// [`Error::InvalidStringLength`], and a length beyond the remaining
    /// stream is [`Error::StringLengthExceeded`] before any allocation
    /// happens. A zero-length field yields an empty string.
    ///
    /// The format carries null-free ASCII names; conversion is lossy so a
    /// corrupt byte degrades one name instead of failing the whole decode.
    pub fn read_string(&mut self) -> Result<String> {
        let declared = self.read_i32()?;
        if declared < 0 {
            return Err(Error::InvalidStringLength(declared));
        }
        let len = declared as usize;
        if len > self.remaining() {
            return Err(Error::StringLengthExceeded {
                length: declared,
                remaining: self.remaining(),
            });
        }
        let bytes = self.read_bytes(len)?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    /// Returns the number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns `true` when the stream is fully consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Returns the current byte position.
    pub fn position(&self) -> usize {
        self.pos
    }
}

/// Writes big-endian fields into a growable byte buffer.
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    /// Creates a new empty `ByteWriter`.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Writes one big-endian `i32` field.
    pub fn write_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes raw bytes without a length prefix.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes one length-prefixed string field: the byte length as `i32`,
    /// then the complete byte sequence.
    ///
    /// Die deklarierte Feldlänge und die tatsächlich emittierten Bytes
    /// müssen exakt übereinstimmen, sonst liest jeder Reader den Rest des
    /// Streams versetzt.
    pub fn write_string(&mut self, value: &str) {
        let bytes = value.as_bytes();
        debug_assert!(
            i32::try_from(bytes.len()).is_ok(),
            "string of {} bytes does not fit an i32 length field",
            bytes.len()
        );
        self.write_i32(bytes.len() as i32);
        let before = self.buf.len();
        self.buf.extend_from_slice(bytes);
        debug_assert_eq!(
            self.buf.len() - before,
            bytes.len(),
            "declared length and emitted bytes must match"
        );
    }

    /// Returns the number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` when nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Finalises the writer and returns the buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for ByteWriter {
    fn default() -> Self {
        Self::new()
    }
}
