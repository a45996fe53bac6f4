//! Error type shared by the codec, the facade, and the CLI.

use thiserror::Error;

/// Stable error codes (safe to match on from tooling and test vectors).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Token is not valid Base64 or exceeds the length limit.
    Format,
    /// Header byte has no registered codec.
    UnknownVariant,
    /// Buffer shorter than the case requires.
    Truncated,
    /// Constructor argument outside its documented range.
    Range,
    /// Surplus bytes rejected by `TrailingBytes::Reject`.
    TrailingData,
    /// Header registered twice in one table.
    DuplicateHeader,
    /// Invalid configuration.
    Config,
}

impl ErrorCode {
    /// String representation used in vectors and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Format => "FORMAT",
            ErrorCode::UnknownVariant => "UNKNOWN_VARIANT",
            ErrorCode::Truncated => "TRUNCATED",
            ErrorCode::Range => "RANGE",
            ErrorCode::TrailingData => "TRAILING_DATA",
            ErrorCode::DuplicateHeader => "DUPLICATE_HEADER",
            ErrorCode::Config => "CONFIG",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ChatLinkError>;

/// Unified error type for decoding, encoding, and configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatLinkError {
    #[error("invalid chat link format: {0}")]
    Format(String),
    #[error("unknown chat link header: {0:#04x}")]
    UnknownVariant(u8),
    #[error("truncated {kind} link: need {need} bytes, got {got}")]
    Truncated {
        kind: &'static str,
        need: usize,
        got: usize,
    },
    #[error("{field} out of range: {value} (expected {min}..={max})")]
    Range {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("{extra} trailing bytes after {kind} link")]
    TrailingData { kind: &'static str, extra: usize },
    #[error("header {0:#04x} registered twice")]
    DuplicateHeader(u8),
    #[error("invalid config: {0}")]
    Config(String),
}

impl ChatLinkError {
    /// Map to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ChatLinkError::Format(_) => ErrorCode::Format,
            ChatLinkError::UnknownVariant(_) => ErrorCode::UnknownVariant,
            ChatLinkError::Truncated { .. } => ErrorCode::Truncated,
            ChatLinkError::Range { .. } => ErrorCode::Range,
            ChatLinkError::TrailingData { .. } => ErrorCode::TrailingData,
            ChatLinkError::DuplicateHeader(_) => ErrorCode::DuplicateHeader,
            ChatLinkError::Config(_) => ErrorCode::Config,
        }
    }

    pub(crate) fn range(field: &'static str, value: i64, min: i64, max: i64) -> Self {
        ChatLinkError::Range {
            field,
            value,
            min,
            max,
        }
    }
}
