//! Configuration error types.

/// Errors that can occur when loading, saving, parsing, or validating
/// configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    Read(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    Write(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    Parse(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] ron::Error),

    /// A numeric knob is outside its documented range.
    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        /// Dotted path of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
        /// Lower bound of the documented range.
        min: f32,
        /// Upper bound of the documented range.
        max: f32,
    },

    /// A color channel is negative.
    #[error("{field} has a negative channel: {value}")]
    NegativeColor {
        /// Dotted path of the offending field.
        field: &'static str,
        /// The rejected channel value.
        value: f32,
    },

    /// Unknown preset name given on the command line.
    #[error("unknown preset '{0}' (expected lite, no-wave, no-wave-no-fog, simple-clouds, box-clouds, realistic-clouds)")]
    UnknownPreset(String),
}
