//! Decode policy knobs (strict parsing, validated before use).

use serde::Deserialize;

use crate::error::{ChatLinkError, Result};

/// What to do with bytes left over after a case's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingBytes {
    /// Accept and drop surplus bytes.
    #[default]
    Ignore,
    /// Fail with `ChatLinkError::TrailingData`.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecodeOptions {
    #[serde(default)]
    pub trailing_bytes: TrailingBytes,

    /// Upper bound on token length in bytes (UTF-8), envelope included.
    #[serde(default = "default_max_token_len")]
    pub max_token_len: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            trailing_bytes: TrailingBytes::default(),
            max_token_len: default_max_token_len(),
        }
    }
}

impl DecodeOptions {
    pub fn validate(&self) -> Result<()> {
        if !(16..=4096).contains(&self.max_token_len) {
            return Err(ChatLinkError::Config(
                "decode.max_token_len must be between 16 and 4096".into(),
            ));
        }
        Ok(())
    }

    pub fn with_trailing_bytes(mut self, policy: TrailingBytes) -> Self {
        self.trailing_bytes = policy;
        self
    }
}

fn default_max_token_len() -> usize {
    256
}
