//! Contains the Error and Result type used by the decoder and printer.

/// An error from decoding or printing NBT data.
#[derive(Debug, Clone)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Malformed or truncated binary input: an unknown tag byte, a negative
    /// declared element count, string data that is not CESU-8, or the stream
    /// ending while bytes are still required for the current tag.
    InvalidInput,

    /// An I/O failure other than end of input, such as a failing read or a
    /// failing output sink. Not caused by the content of the data.
    Runtime,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidInput)
    }

    pub(crate) fn invalid_tag(t: u8) -> Self {
        Self {
            msg: format!("invalid tag byte: {}", t),
            kind: ErrorKind::InvalidInput,
        }
    }

    pub(crate) fn negative_size(n: i32) -> Self {
        Self {
            msg: format!("negative declared size: {}", n),
            kind: ErrorKind::InvalidInput,
        }
    }

    pub(crate) fn nonunicode(data: &[u8]) -> Self {
        Self {
            msg: format!(
                "invalid string, not CESU-8: {}",
                String::from_utf8_lossy(data)
            ),
            kind: ErrorKind::InvalidInput,
        }
    }

    pub(crate) fn unterminated_compound() -> Self {
        Self {
            msg: "eof: compound missing its end tag".into(),
            kind: ErrorKind::InvalidInput,
        }
    }

    pub(crate) fn bespoke(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::Runtime,
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            // Running out of bytes mid-tag means the input is truncated.
            std::io::ErrorKind::UnexpectedEof => Self {
                msg: format!("eof: {}", e),
                kind: ErrorKind::InvalidInput,
            },
            _ => Self {
                msg: format!("io error: {}", e),
                kind: ErrorKind::Runtime,
            },
        }
    }
}
