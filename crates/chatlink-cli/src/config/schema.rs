use serde::Deserialize;

use chatlink_core::{ChatLinkError, DecodeOptions, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    pub version: u32,

    #[serde(default)]
    pub decode: DecodeOptions,

    #[serde(default)]
    pub output: OutputSection,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            version: 1,
            decode: DecodeOptions::default(),
            output: OutputSection::default(),
        }
    }
}

impl CliConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ChatLinkError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }
        self.decode.validate()?;
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Pretty-print JSON output.
    #[serde(default)]
    pub pretty: bool,
}
