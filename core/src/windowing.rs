//! Window/level values and the named preset table

use crate::extraction::tags::{TagLookup, WINDOW_CENTER, WINDOW_WIDTH};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display window applied to modality values
///
/// Integers, matching the window and level sliders the renderer exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowLevel {
    pub width: i32,
    pub center: i32,
}

impl WindowLevel {
    pub const fn new(width: i32, center: i32) -> Self {
        Self { width, center }
    }

    /// Window stored in the image's Window Width / Window Center tags
    ///
    /// Only the first value of multi-valued elements is used.
    pub fn from_image(image: &impl TagLookup) -> Option<Self> {
        let width = image.float(WINDOW_WIDTH)?;
        let center = image.float(WINDOW_CENTER)?;
        Some(Self::new(width.round() as i32, center.round() as i32))
    }
}

impl fmt::Display for WindowLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W {} / L {}", self.width, self.center)
    }
}

/// Named window/level preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowPreset {
    Lung,
    Brain,
    Bone,
    Abdomen,
    Liver,
}

impl WindowPreset {
    /// All presets, in menu order
    pub const ALL: [WindowPreset; 5] = [
        WindowPreset::Lung,
        WindowPreset::Brain,
        WindowPreset::Bone,
        WindowPreset::Abdomen,
        WindowPreset::Liver,
    ];

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            WindowPreset::Lung => "lung",
            WindowPreset::Brain => "brain",
            WindowPreset::Bone => "bone",
            WindowPreset::Abdomen => "abdomen",
            WindowPreset::Liver => "liver",
        }
    }

    /// Window width and center of the preset
    pub fn window_level(&self) -> WindowLevel {
        match self {
            WindowPreset::Lung => WindowLevel::new(1500, -600),
            WindowPreset::Brain => WindowLevel::new(80, 40),
            WindowPreset::Bone => WindowLevel::new(2000, 300),
            WindowPreset::Abdomen => WindowLevel::new(400, 40),
            WindowPreset::Liver => WindowLevel::new(150, 30),
        }
    }

    /// Parses preset from its name, ignoring case and surrounding whitespace
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|preset| preset.simple_name().eq_ignore_ascii_case(name))
    }

    /// Preset bound to a number key of the keyboard shortcuts
    pub fn from_shortcut(key: &str) -> Option<Self> {
        match key {
            "1" => Some(WindowPreset::Lung),
            "2" => Some(WindowPreset::Brain),
            "3" => Some(WindowPreset::Bone),
            _ => None,
        }
    }
}

impl fmt::Display for WindowPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Looks up the window of a named preset
///
/// Unknown names yield `None`; nothing else happens.
///
/// ```
/// use dicomview_core::windowing::apply;
///
/// let brain = apply("brain").unwrap();
/// assert_eq!((brain.width, brain.center), (80, 40));
/// assert!(apply("unknown").is_none());
/// ```
pub fn apply(preset_name: &str) -> Option<WindowLevel> {
    WindowPreset::from_str(preset_name).map(|preset| preset.window_level())
}
