use std::{fs::read_to_string, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::NoteGroomError;

/// Whether generated reference targets keep their file extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkReferenceStyle {
    WithExtensions,
    #[default]
    WithoutExtensions,
}

/// Synthesis settings, loadable from a TOML document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub link_reference_style: LinkReferenceStyle,
}

impl Settings {
    /// The flag handed to
    /// [`synthesize_reference_block`](crate::synthesize::synthesize_reference_block).
    pub fn include_extensions(&self) -> bool {
        self.link_reference_style == LinkReferenceStyle::WithExtensions
    }

    pub fn from_toml_str(content: &str) -> Result<Self, NoteGroomError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_str(&self) -> Result<String, NoteGroomError> {
        Ok(toml::to_string(self)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, NoteGroomError> {
        tracing::debug!("Reading settings from: {:?}", path.as_ref());
        if !path.as_ref().exists() {
            tracing::debug!("Settings file not found, using defaults.");
            return Ok(Settings::default());
        }
        Settings::from_toml_str(&read_to_string(path)?)
    }
}
