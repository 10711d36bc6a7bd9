use serde::{Deserialize, Serialize};
use std::fmt;

/// Grouping of images that carry no Series Instance UID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnidentifiedSeriesPolicy {
    /// All unidentified images share one series keyed by the empty string
    #[default]
    SharedGroup,

    /// Each unidentified image becomes its own single-image series
    PerFile,
}

/// Interaction tool driven by the primary mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    #[default]
    Pan,
    Zoom,
    WindowLevel,
    Length,
    Angle,
}

impl ToolKind {
    /// All tools, in toolbar order
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Pan,
        ToolKind::Zoom,
        ToolKind::WindowLevel,
        ToolKind::Length,
        ToolKind::Angle,
    ];

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            ToolKind::Pan => "pan",
            ToolKind::Zoom => "zoom",
            ToolKind::WindowLevel => "wwwl",
            ToolKind::Length => "length",
            ToolKind::Angle => "angle",
        }
    }

    /// Measurement produced when an interaction with this tool completes
    pub fn measurement_kind(&self) -> Option<MeasurementKind> {
        match self {
            ToolKind::Length => Some(MeasurementKind::Length),
            ToolKind::Angle => Some(MeasurementKind::Angle),
            _ => None,
        }
    }

    /// Parses tool from string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pan" => Some(ToolKind::Pan),
            "zoom" => Some(ToolKind::Zoom),
            "wwwl" | "wwwc" | "window-level" => Some(ToolKind::WindowLevel),
            "length" | "measurelength" => Some(ToolKind::Length),
            "angle" | "measureangle" => Some(ToolKind::Angle),
            _ => None,
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Kind of a completed measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementKind {
    /// Distance in millimeters
    Length,
    /// Angle in degrees
    Angle,
}

impl MeasurementKind {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            MeasurementKind::Length => "Length",
            MeasurementKind::Angle => "Angle",
        }
    }

    /// Tool that produces this measurement
    pub fn tool(&self) -> ToolKind {
        match self {
            MeasurementKind::Length => ToolKind::Length,
            MeasurementKind::Angle => ToolKind::Angle,
        }
    }

    /// Parses measurement kind from string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "length" => Some(MeasurementKind::Length),
            "angle" => Some(MeasurementKind::Angle),
            _ => None,
        }
    }
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Metadata panel section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataCategory {
    Patient,
    Study,
    Series,
    Acquisition,
    Image,
}

impl MetadataCategory {
    /// All categories, in display order
    pub const ALL: [MetadataCategory; 5] = [
        MetadataCategory::Patient,
        MetadataCategory::Study,
        MetadataCategory::Series,
        MetadataCategory::Acquisition,
        MetadataCategory::Image,
    ];

    /// Section heading
    pub fn title(&self) -> &'static str {
        match self {
            MetadataCategory::Patient => "Patient",
            MetadataCategory::Study => "Study",
            MetadataCategory::Series => "Series",
            MetadataCategory::Acquisition => "Acquisition",
            MetadataCategory::Image => "Image",
        }
    }
}

impl fmt::Display for MetadataCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
