//! Series organization
//!
//! Groups decoded images by Series Instance UID and orders each group's
//! slices by Instance Number:
//! - [`DecodedImage`]: an identified, parsed DICOM data set
//! - [`SeriesDescriptor`]: one series with its ordered slices
//! - [`SeriesOrganizer`]: the grouping and ordering pass

mod descriptor;
mod image;
mod organizer;

pub use descriptor::{SeriesDescriptor, DEFAULT_MODALITY, DEFAULT_SERIES_DESCRIPTION};
pub use image::DecodedImage;
pub use organizer::{default_selection, SeriesOrganizer};
