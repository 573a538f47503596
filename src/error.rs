//! Error types for RangeSeekBar
//!
//! Range validation is the only failure the widget itself can produce;
//! the remaining variants come from configuration persistence.

use thiserror::Error;

/// Main error type for RangeSeekBar operations
#[derive(Error, Debug)]
pub enum SeekBarError {
    /// Supplied range has its maximum below its minimum
    #[error("Invalid range: max {max} is less than min {min}")]
    InvalidRange { min: i32, max: i32 },

    /// File I/O error while reading or writing a configuration
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for RangeSeekBar operations
pub type Result<T> = std::result::Result<T, SeekBarError>;

/// UI-friendly error message formatting
impl SeekBarError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            SeekBarError::InvalidRange { min, max } => {
                format!("Maximum ({}%) must not be below minimum ({}%)", max, min)
            }
            SeekBarError::FileIo(e) => format!("File error: {}", e),
            SeekBarError::Json(e) => format!("Config error: {}", e),
        }
    }

    /// Get a short title for the error (for toast notifications)
    pub fn title(&self) -> &'static str {
        match self {
            SeekBarError::InvalidRange { .. } => "Invalid Range",
            SeekBarError::FileIo(_) => "File Error",
            SeekBarError::Json(_) => "Configuration Error",
        }
    }
}
