pub mod cli;
pub mod error;
pub mod extraction;
pub mod loader;
pub mod measurement;
pub mod series;
pub mod session;
pub mod types;
pub mod windowing;

#[cfg(test)]
mod test_utils;

pub use cli::report::{MetadataReportText, SeriesListText};
pub use error::{Result, ViewerError};
pub use extraction::{MetadataExtractor, MetadataReport, MetadataTable, TagLookup};
pub use loader::{load_batch, load_directory, DicomFileDecoder, ImageDecoder, LoadOutcome};
pub use measurement::{Measurement, MeasurementExport, MeasurementLog};
pub use series::{DecodedImage, SeriesDescriptor, SeriesOrganizer};
pub use session::{KeyAction, ViewerSession, Viewport};
pub use types::*;
pub use windowing::{WindowLevel, WindowPreset};
