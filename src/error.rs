//! Central error types for the `.annot` codec.
//!
//! Every failure is terminal for the operation that produced it; the format
//! is a static file layout, so nothing here is transient or retryable.

use core::fmt;

/// All error conditions raised while decoding or encoding an annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The annotation file could not be opened for the requested mode.
    FileOpen(String),
    /// The annotation file was opened but reading it failed.
    FileRead(String),
    /// The sink rejected a write; output must not be treated as complete.
    FileWrite(String),
    /// The stream ended while more fixed-size fields were expected.
    TruncatedStream,
    /// A length-prefixed string declared a negative byte length.
    InvalidStringLength(i32),
    /// A declared string length exceeds what the stream can still provide.
    ///
    /// Schutz gegen pathologische Allokationen aus korrupten Dateien: die
    /// Länge ist untrusted Input und wird vor dem Lesen gegen den Rest des
    /// Streams geprüft.
    StringLengthExceeded { length: i32, remaining: usize },
    /// An indexed color table with a version other than 2 (the only indexed
    /// version FreeSurfer ever shipped for `.annot`).
    UnsupportedVersion(i32),
    /// An indexed-layout record carried a negative structure id.
    NegativeStructureId(i32),
    /// The same structure id appeared twice within one indexed color table.
    DuplicateStructureId(i32),
    /// The stream declared a negative vertex count.
    InvalidVertexCount(i32),
    /// An [`Annotation`](crate::Annotation) was constructed from vertex-id
    /// and label sequences of different lengths.
    VertexCountMismatch { vertex_ids: usize, labels: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileOpen(msg) => write!(f, "cannot open annotation file: {msg}"),
            Self::FileRead(msg) => write!(f, "cannot read annotation file: {msg}"),
            Self::FileWrite(msg) => write!(f, "cannot write annotation file: {msg}"),
            Self::TruncatedStream => write!(f, "annotation stream ended mid-record"),
            Self::InvalidStringLength(len) => write!(f, "negative string length {len}"),
            Self::StringLengthExceeded { length, remaining } => write!(
                f,
                "declared string length {length} exceeds the {remaining} bytes remaining"
            ),
            Self::UnsupportedVersion(version) => {
                write!(f, "color table version {version} is not supported (only version 2)")
            }
            Self::NegativeStructureId(id) => write!(f, "negative structure id {id}"),
            Self::DuplicateStructureId(id) => write!(f, "duplicated structure id {id}"),
            Self::InvalidVertexCount(count) => write!(f, "negative vertex count {count}"),
            Self::VertexCountMismatch { vertex_ids, labels } => write!(
                f,
                "vertex id count {vertex_ids} does not match label count {labels}"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// A convenience `Result` type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
