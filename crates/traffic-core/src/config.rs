//! Output configuration.

use std::path::PathBuf;

/// Settings for the tabular output layer.
///
/// Typically loaded from a JSON/TOML document by the application crate
/// (enable the `serde` feature) and passed to the backend at construction.
/// Every field has a default, so a partial document is valid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OutputConfig {
    /// Extend existing output files instead of truncating them on
    /// initialization.  Default: `true`.
    pub csv_append_mode: bool,

    /// Directory the output tables are written into, created if missing.
    /// Default: `output_data`.
    pub output_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_append_mode: true,
            output_dir: PathBuf::from("output_data"),
        }
    }
}
