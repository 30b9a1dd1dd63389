use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum CodecError {
    /// Compression was requested on zero bytes; a degenerate artifact is
    /// never produced.
    EmptyInput,
    /// An artifact could not be mapped back onto a code tree: structurally
    /// invalid header, or a payload that ends mid-descent.
    MalformedStream(&'static str),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::EmptyInput =>
                write!(f, "cannot compress empty input"),
            CodecError::MalformedStream(detail) =>
                write!(f, "malformed compressed stream: {}", detail),
        }
    }
}

impl std::error::Error for CodecError {}
