//! Core type definitions for the viewer
//!
//! - [`ToolKind`]: Interaction tools (pan, zoom, window/level, length, angle)
//! - [`MeasurementKind`]: Kinds of completed measurements
//! - [`MetadataCategory`]: Sections of the metadata panel
//! - [`UnidentifiedSeriesPolicy`]: Grouping of images without a series UID
//! - [`PixelSpacing`]: Parsed Pixel Spacing values
//! - [`ViewerConfig`]: Session configuration

mod config;
mod enums;
mod pixel_spacing;

pub use config::ViewerConfig;
pub use enums::{MeasurementKind, MetadataCategory, ToolKind, UnidentifiedSeriesPolicy};
pub use pixel_spacing::PixelSpacing;
