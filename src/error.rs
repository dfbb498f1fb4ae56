use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodecError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("truncated input: need {needed} bytes, have {available}")]
    TruncatedInput { needed: usize, available: usize },

    #[error("failed to allocate {0} bytes")]
    AllocationFailure(usize),

    #[error("unsupported label byte 0x{value:02X} at offset {offset}")]
    UnsupportedLabel { offset: usize, value: u8 },
}

impl CodecError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        CodecError::InvalidArgument(msg.into())
    }

    /// True when the error was caused by the bytes being decoded rather than
    /// by the caller's arguments or buffers.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            CodecError::TruncatedInput { .. } | CodecError::UnsupportedLabel { .. }
        )
    }
}
