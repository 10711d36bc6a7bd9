use crate::error::{Result, ViewerError};
use crate::types::UnidentifiedSeriesPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for a viewer session
///
/// Every field has a default, so a configuration file only needs to name
/// the values it changes.
///
/// # Example
///
/// ```
/// use dicomview_core::{UnidentifiedSeriesPolicy, ViewerConfig};
///
/// let config = ViewerConfig::default()
///     .with_thumbnail_limit(8)
///     .with_unidentified_series(UnidentifiedSeriesPolicy::PerFile);
///
/// assert_eq!(config.thumbnail_limit, 8);
/// assert_eq!(config.playback_interval_ms, 200);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Delay between slices during cine playback, in milliseconds
    pub playback_interval_ms: u64,

    /// Maximum number of slice thumbnails offered for a series
    pub thumbnail_limit: usize,

    /// Scale multiplier applied by a zoom-in step
    pub zoom_in_factor: f64,

    /// Scale multiplier applied by a zoom-out step
    pub zoom_out_factor: f64,

    /// Grouping of images that carry no Series Instance UID
    pub unidentified_series: UnidentifiedSeriesPolicy,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            playback_interval_ms: 200, // 5 frames per second
            thumbnail_limit: 20,
            zoom_in_factor: 1.2,
            zoom_out_factor: 0.8,
            unidentified_series: UnidentifiedSeriesPolicy::SharedGroup,
        }
    }
}

impl ViewerConfig {
    /// Loads a configuration from a JSON file and validates it
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds values rejected by [`ViewerConfig::validate`]
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: ViewerConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that all values are usable
    pub fn validate(&self) -> Result<()> {
        if self.playback_interval_ms == 0 {
            return Err(ViewerError::InvalidConfig(
                "playback_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.thumbnail_limit == 0 {
            return Err(ViewerError::InvalidConfig(
                "thumbnail_limit must be greater than zero".to_string(),
            ));
        }
        if !(self.zoom_in_factor > 0.0) || !(self.zoom_out_factor > 0.0) {
            return Err(ViewerError::InvalidConfig(
                "zoom factors must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Playback interval as a [`Duration`]
    pub fn playback_interval(&self) -> Duration {
        Duration::from_millis(self.playback_interval_ms)
    }

    /// Builder: Set the playback interval in milliseconds
    pub fn with_playback_interval_ms(mut self, interval_ms: u64) -> Self {
        self.playback_interval_ms = interval_ms;
        self
    }

    /// Builder: Set the thumbnail limit
    pub fn with_thumbnail_limit(mut self, limit: usize) -> Self {
        self.thumbnail_limit = limit;
        self
    }

    /// Builder: Set the zoom step factors
    pub fn with_zoom_factors(mut self, zoom_in: f64, zoom_out: f64) -> Self {
        self.zoom_in_factor = zoom_in;
        self.zoom_out_factor = zoom_out;
        self
    }

    /// Builder: Set the policy for images without a Series Instance UID
    pub fn with_unidentified_series(mut self, policy: UnidentifiedSeriesPolicy) -> Self {
        self.unidentified_series = policy;
        self
    }
}
