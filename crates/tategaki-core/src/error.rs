//! Error types for Tategaki

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TategakiError>;

/// Main error type for Tategaki
///
/// [`TategakiError::InvalidParameter`] is the only recoverable, user-facing
/// category. It is raised while validating options, before any canvas
/// exists. Everything else aborts the render that produced it.
#[derive(Debug, Error)]
pub enum TategakiError {
    #[error("invalid {field}: {value}")]
    InvalidParameter { field: String, value: String },

    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl TategakiError {
    /// Build an `InvalidParameter` for `field` carrying the offending value
    pub fn invalid(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// The option key that failed validation, if this is a validation error
    pub fn invalid_field(&self) -> Option<&str> {
        match self {
            Self::InvalidParameter { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data: {0}")]
    InvalidData(String),

    #[error("Outline extraction failed for U+{0:04X}")]
    OutlineFailed(u32),
}

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u64, height: u64 },

    #[error("Surface allocation failed: {width}x{height}")]
    SurfaceAllocation { width: u32, height: u32 },

    #[error("Resampling failed: {0}")]
    Resample(String),
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Format not supported: {0}")]
    FormatNotSupported(String),

    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}
