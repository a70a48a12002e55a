// Configuration type definitions

use serde::Deserialize;

/// Shot-list export configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ExportConfig {
    /// Add one frame to Out timecodes, EDL-style.
    #[serde(default)]
    pub edl_style_timecodes: bool,
    /// Write full media paths instead of basenames.
    #[serde(default)]
    pub absolute_paths: bool,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub export: ExportConfig,
}
