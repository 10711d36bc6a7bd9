use thiserror::Error;

/// Result type for viewer operations
pub type Result<T> = std::result::Result<T, ViewerError>;

/// Error types for viewer operations
#[derive(Error, Debug)]
pub enum ViewerError {
    /// DICOM reading error
    #[error("DICOM error: {0}")]
    Dicom(String),

    /// Requested series index does not exist in the loaded batch
    #[error("Series index {index} out of range ({count} series loaded)")]
    SeriesOutOfRange { index: usize, count: usize },

    /// Operation needs a current series but none is selected
    #[error("No series selected")]
    NoSeriesSelected,

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for ViewerError {
    fn from(e: dicom_object::ReadError) -> Self {
        ViewerError::Dicom(format!("{}", e))
    }
}
