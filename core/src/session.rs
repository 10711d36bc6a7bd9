//! Viewer session state
//!
//! [`ViewerSession`] holds everything the viewer shows: the loaded series,
//! the current series and slice, the viewport window and zoom, the active
//! tool, cine playback, the measurement log and the metadata of the current
//! slice. Loading and selection replace state wholesale; nothing is patched
//! incrementally.

use crate::error::{Result, ViewerError};
use crate::extraction::metadata::{MetadataExtractor, MetadataReport};
use crate::extraction::tags::{
    TagLookup, IMAGE_POSITION_PATIENT, INSTANCE_NUMBER, SLICE_THICKNESS,
};
use crate::measurement::{file_name_patient, Measurement, MeasurementExport, MeasurementLog};
use crate::series::{default_selection, DecodedImage, SeriesDescriptor};
use crate::types::{MeasurementKind, PixelSpacing, ToolKind, ViewerConfig};
use crate::windowing::{self, WindowLevel, WindowPreset};
use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Window and zoom the renderer applies to the current slice
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    /// `None` until an image or preset provides a window
    pub window: Option<WindowLevel>,
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            window: None,
            scale: 1.0,
        }
    }
}

impl Viewport {
    /// Initial viewport of an image: its stored window at unit scale
    pub fn for_image(image: &DecodedImage) -> Self {
        Self {
            window: WindowLevel::from_image(image),
            scale: 1.0,
        }
    }
}

/// Action bound to a keyboard shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    PreviousImage,
    NextImage,
    TogglePlayback,
    ResetView,
    ApplyPreset(WindowPreset),
}

impl KeyAction {
    /// Action bound to a key name as reported by the UI
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(KeyAction::PreviousImage),
            "ArrowRight" => Some(KeyAction::NextImage),
            " " => Some(KeyAction::TogglePlayback),
            "r" => Some(KeyAction::ResetView),
            _ => WindowPreset::from_shortcut(key).map(KeyAction::ApplyPreset),
        }
    }
}

/// Entry of the series list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesItem {
    pub index: usize,
    pub modality: String,
    pub description: String,
    pub image_count: usize,
    pub active: bool,
}

/// Slice thumbnail of the current series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    pub index: usize,
    pub label: String,
    pub active: bool,
}

/// Bounds and position of the slice slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SliderRange {
    pub min: usize,
    pub max: usize,
    pub value: usize,
}

/// Short description of the current slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageInfo {
    pub instance_number: Option<i32>,
    pub position: Option<String>,
    pub slice_thickness: Option<String>,
    pub pixel_spacing: Option<PixelSpacing>,
}

impl ImageInfo {
    fn from_image(image: &DecodedImage) -> Self {
        Self {
            instance_number: image.int(INSTANCE_NUMBER),
            position: image.string(IMAGE_POSITION_PATIENT).filter(|s| !s.is_empty()),
            slice_thickness: image.string(SLICE_THICKNESS).filter(|s| !s.is_empty()),
            pixel_spacing: PixelSpacing::from_image(image),
        }
    }
}

impl fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.instance_number {
            Some(n) => writeln!(f, "Instance: {}", n)?,
            None => writeln!(f, "Instance: N/A")?,
        }
        writeln!(f, "Position: {}", self.position.as_deref().unwrap_or("N/A"))?;
        match &self.slice_thickness {
            Some(thickness) => writeln!(f, "Thickness: {} mm", thickness)?,
            None => writeln!(f, "Thickness: N/A")?,
        }
        match &self.pixel_spacing {
            Some(spacing) => write!(f, "Spacing: {}", spacing),
            None => write!(f, "Spacing: N/A"),
        }
    }
}

/// State of one viewer session
#[derive(Debug, Default)]
pub struct ViewerSession {
    config: ViewerConfig,
    series: Vec<SeriesDescriptor>,
    current_series: Option<usize>,
    current_image: usize,
    viewport: Viewport,
    active_tool: ToolKind,
    playing: bool,
    measurements: MeasurementLog,
    metadata: Option<MetadataReport>,
}

impl ViewerSession {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Replaces the loaded series and selects the default one
    ///
    /// Returns the selected index, `None` for an empty batch. The
    /// measurement log is kept for the whole session.
    pub fn load(&mut self, series: Vec<SeriesDescriptor>) -> Option<usize> {
        self.series = series;
        self.current_series = None;
        self.current_image = 0;
        self.viewport = Viewport::default();
        self.playing = false;
        self.metadata = None;

        let selected = default_selection(&self.series);
        if let Some(index) = selected {
            self.activate_series(index);
        }
        selected
    }

    /// All loaded series
    pub fn series(&self) -> &[SeriesDescriptor] {
        &self.series
    }

    pub fn current_series_index(&self) -> Option<usize> {
        self.current_series
    }

    pub fn current_series(&self) -> Option<&SeriesDescriptor> {
        self.current_series.and_then(|index| self.series.get(index))
    }

    /// Index of the current slice within the current series
    pub fn current_image_index(&self) -> usize {
        self.current_image
    }

    pub fn current_image(&self) -> Option<&DecodedImage> {
        self.current_series()
            .and_then(|series| series.image(self.current_image))
    }

    /// Makes series `index` current and shows its first slice
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::SeriesOutOfRange`] if no such series is loaded
    pub fn select_series(&mut self, index: usize) -> Result<()> {
        if index >= self.series.len() {
            return Err(ViewerError::SeriesOutOfRange {
                index,
                count: self.series.len(),
            });
        }
        self.activate_series(index);
        Ok(())
    }

    fn activate_series(&mut self, index: usize) {
        self.current_series = Some(index);
        self.current_image = 0;
        self.playing = false;
        self.viewport = self
            .current_image()
            .map(Viewport::for_image)
            .unwrap_or_default();
        self.refresh_metadata();
        debug!("Selected series {}", index);
    }

    /// Shows slice `index` of the current series
    ///
    /// Out-of-range indices are ignored and return `false`. The window is
    /// kept across slices once set.
    pub fn display_image(&mut self, index: usize) -> bool {
        let Some(series) = self.current_series() else {
            return false;
        };
        if index >= series.len() {
            return false;
        }

        self.current_image = index;
        if self.viewport.window.is_none() {
            self.viewport.window = self.current_image().and_then(WindowLevel::from_image);
        }
        self.refresh_metadata();
        true
    }

    /// Steps one slice forward, stopping at the last slice
    pub fn next_image(&mut self) -> bool {
        let last = self.image_count().saturating_sub(1);
        self.display_image((self.current_image + 1).min(last))
    }

    /// Steps one slice back, stopping at the first slice
    pub fn previous_image(&mut self) -> bool {
        self.display_image(self.current_image.saturating_sub(1))
    }

    fn image_count(&self) -> usize {
        self.current_series().map_or(0, SeriesDescriptor::len)
    }

    fn refresh_metadata(&mut self) {
        self.metadata = self.current_image().map(MetadataExtractor::extract);
    }

    /// Metadata of the current slice
    pub fn metadata(&self) -> Option<&MetadataReport> {
        self.metadata.as_ref()
    }

    /// Starts or stops cine playback; returns whether playback is on
    ///
    /// Playback never starts without a series to play.
    pub fn toggle_playback(&mut self) -> bool {
        self.playing = !self.playing && self.image_count() > 0;
        self.playing
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Delay between two [`ViewerSession::playback_tick`] calls
    pub fn playback_interval(&self) -> Duration {
        self.config.playback_interval()
    }

    /// Advances playback by one slice, wrapping to the first slice
    ///
    /// Returns the new slice index, or `None` when playback is off.
    pub fn playback_tick(&mut self) -> Option<usize> {
        let count = self.image_count();
        if !self.playing || count == 0 {
            return None;
        }
        let next = (self.current_image + 1) % count;
        self.display_image(next);
        Some(next)
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.active_tool = tool;
    }

    pub fn active_tool(&self) -> ToolKind {
        self.active_tool
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Multiplies the viewport scale by `factor`
    pub fn zoom(&mut self, factor: f64) {
        self.viewport.scale *= factor;
    }

    pub fn zoom_in(&mut self) {
        self.zoom(self.config.zoom_in_factor);
    }

    pub fn zoom_out(&mut self) {
        self.zoom(self.config.zoom_out_factor);
    }

    /// Restores the current slice's own window at unit scale
    pub fn reset_view(&mut self) {
        self.viewport = self
            .current_image()
            .map(Viewport::for_image)
            .unwrap_or_default();
    }

    /// Sets the window by hand, as the window/level sliders do
    pub fn set_window_level(&mut self, window: WindowLevel) {
        self.viewport.window = Some(window);
    }

    /// Applies a named preset to the viewport
    ///
    /// Unknown names change nothing and return `None`.
    pub fn apply_preset(&mut self, preset_name: &str) -> Option<WindowLevel> {
        let window = windowing::apply(preset_name)?;
        self.set_window_level(window);
        Some(window)
    }

    /// Runs the action bound to `key`
    ///
    /// Keys do nothing until a series is selected. Returns the action run.
    pub fn handle_key(&mut self, key: &str) -> Option<KeyAction> {
        self.current_series()?;
        let action = KeyAction::from_key(key)?;
        match action {
            KeyAction::PreviousImage => {
                self.previous_image();
            }
            KeyAction::NextImage => {
                self.next_image();
            }
            KeyAction::TogglePlayback => {
                self.toggle_playback();
            }
            KeyAction::ResetView => self.reset_view(),
            KeyAction::ApplyPreset(preset) => self.set_window_level(preset.window_level()),
        }
        Some(action)
    }

    /// Records a measurement completed on the current slice
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::NoSeriesSelected`] if no slice is shown
    pub fn record_measurement(&mut self, kind: MeasurementKind, value: f64) -> Result<()> {
        let image_id = self
            .current_image()
            .map(|image| image.image_id().to_string())
            .ok_or(ViewerError::NoSeriesSelected)?;
        self.measurements
            .append(Measurement::new(kind, value, image_id, self.current_image));
        Ok(())
    }

    /// Records a measurement finished with the active tool
    ///
    /// Returns the kind recorded, or `None` when the active tool does not
    /// measure (pan, zoom, window/level).
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::NoSeriesSelected`] if no slice is shown
    pub fn complete_measurement(&mut self, value: f64) -> Result<Option<MeasurementKind>> {
        let Some(kind) = self.active_tool.measurement_kind() else {
            debug!("{} tool does not record measurements", self.active_tool);
            return Ok(None);
        };
        self.record_measurement(kind, value)?;
        Ok(Some(kind))
    }

    pub fn measurements(&self) -> &MeasurementLog {
        &self.measurements
    }

    /// Snapshot of the measurement log tagged with the current series
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::NoSeriesSelected`] if no series is selected
    pub fn export_measurements(&self, captured_at: DateTime<Utc>) -> Result<MeasurementExport> {
        let series = self.current_series().ok_or(ViewerError::NoSeriesSelected)?;
        Ok(self.measurements.export(Some(series), captured_at))
    }

    /// Download name of a screenshot of the current slice:
    /// `screenshot_<patientName>_<sliceNumber>.png`
    pub fn screenshot_file_name(&self) -> Result<String> {
        let series = self.current_series().ok_or(ViewerError::NoSeriesSelected)?;
        Ok(format!(
            "screenshot_{}_{}.png",
            file_name_patient(series.patient_name.as_deref()),
            self.current_image + 1
        ))
    }

    /// Series list entries, marking the current series
    pub fn series_items(&self) -> Vec<SeriesItem> {
        self.series
            .iter()
            .enumerate()
            .map(|(index, series)| SeriesItem {
                index,
                modality: series.modality.clone(),
                description: series.description.clone(),
                image_count: series.len(),
                active: self.current_series == Some(index),
            })
            .collect()
    }

    /// Thumbnails for the first slices of the current series
    pub fn thumbnails(&self) -> Vec<Thumbnail> {
        let count = self.image_count().min(self.config.thumbnail_limit);
        (0..count)
            .map(|index| Thumbnail {
                index,
                label: format!("Slice {}", index + 1),
                active: index == self.current_image,
            })
            .collect()
    }

    /// Slider bounds for the current series
    pub fn slider_range(&self) -> Option<SliderRange> {
        let count = self.image_count();
        if count == 0 {
            return None;
        }
        Some(SliderRange {
            min: 0,
            max: count - 1,
            value: self.current_image,
        })
    }

    /// Position text such as "Slice: 3/40"
    pub fn frame_info(&self) -> Option<String> {
        let count = self.image_count();
        if count == 0 {
            return None;
        }
        Some(format!("Slice: {}/{}", self.current_image + 1, count))
    }

    /// Instance, position, thickness and spacing of the current slice
    pub fn image_info(&self) -> Option<ImageInfo> {
        self.current_image().map(ImageInfo::from_image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::tags::{
        PATIENT_NAME, SERIES_INSTANCE_UID, WINDOW_CENTER, WINDOW_WIDTH,
    };
    use crate::series::SeriesOrganizer;
    use crate::test_utils::{dicom_with, image};
    use chrono::TimeZone;
    use dicom_core::VR;
    use rstest::rstest;

    fn ct_slice(id: &str, uid: &str, instance: &str) -> DecodedImage {
        DecodedImage::new(
            id,
            dicom_with(&[
                (SERIES_INSTANCE_UID, VR::UI, uid),
                (INSTANCE_NUMBER, VR::IS, instance),
                (PATIENT_NAME, VR::PN, "DOE^JOHN"),
                (WINDOW_WIDTH, VR::DS, "400"),
                (WINDOW_CENTER, VR::DS, "40"),
                (SLICE_THICKNESS, VR::DS, "2.5"),
            ]),
        )
    }

    fn loaded_session(slices: usize) -> ViewerSession {
        let mut records: Vec<_> = (1..=slices)
            .map(|n| ct_slice(&format!("ct{n}"), "CT", &n.to_string()))
            .collect();
        records.push(image("mr1", Some("MR"), Some(1)));

        let mut session = ViewerSession::new(ViewerConfig::default());
        session.load(SeriesOrganizer::organize(records));
        session
    }

    #[test]
    fn test_load_selects_first_series() {
        let session = loaded_session(3);

        assert_eq!(session.current_series_index(), Some(0));
        assert_eq!(session.current_image_index(), 0);
        assert_eq!(session.current_image().unwrap().image_id(), "ct1");
        assert_eq!(session.viewport().window, Some(WindowLevel::new(400, 40)));
        let metadata = session.metadata().unwrap();
        assert_eq!(metadata.patient.get("Patient Name"), Some("DOE^JOHN"));
    }

    #[test]
    fn test_load_empty_batch() {
        let mut session = loaded_session(2);
        assert_eq!(session.load(Vec::new()), None);

        assert!(session.current_series().is_none());
        assert!(session.metadata().is_none());
        assert!(session.slider_range().is_none());
        assert!(session.frame_info().is_none());
        assert!(session.thumbnails().is_empty());
    }

    #[test]
    fn test_select_series() {
        let mut session = loaded_session(3);

        session.select_series(1).unwrap();
        assert_eq!(session.current_image().unwrap().image_id(), "mr1");
        assert_eq!(session.viewport().window, None);

        let err = session.select_series(5).unwrap_err();
        assert!(matches!(
            err,
            ViewerError::SeriesOutOfRange { index: 5, count: 2 }
        ));
        assert_eq!(session.current_series_index(), Some(1));
    }

    #[test]
    fn test_display_image_bounds() {
        let mut session = loaded_session(3);

        assert!(session.display_image(2));
        assert_eq!(session.current_image().unwrap().image_id(), "ct3");
        assert!(!session.display_image(3));
        assert_eq!(session.current_image_index(), 2);
    }

    #[test]
    fn test_navigation_clamps() {
        let mut session = loaded_session(2);

        session.previous_image();
        assert_eq!(session.current_image_index(), 0);
        session.next_image();
        session.next_image();
        session.next_image();
        assert_eq!(session.current_image_index(), 1);
        assert_eq!(session.frame_info().as_deref(), Some("Slice: 2/2"));
    }

    #[test]
    fn test_metadata_follows_selection() {
        let mut session = loaded_session(2);
        session.display_image(1);

        let metadata = session.metadata().unwrap();
        assert_eq!(metadata.image.get("Instance Number"), Some("2"));
    }

    #[test]
    fn test_playback_wraps() {
        let mut session = loaded_session(3);

        assert_eq!(session.playback_tick(), None);
        assert!(session.toggle_playback());
        assert_eq!(session.playback_tick(), Some(1));
        assert_eq!(session.playback_tick(), Some(2));
        assert_eq!(session.playback_tick(), Some(0));
        assert!(!session.toggle_playback());
        assert_eq!(session.playback_tick(), None);
        assert_eq!(session.playback_interval(), Duration::from_millis(200));
    }

    #[test]
    fn test_playback_needs_series() {
        let mut session = ViewerSession::new(ViewerConfig::default());
        assert!(!session.toggle_playback());
        assert!(!session.is_playing());
    }

    #[test]
    fn test_zoom_and_reset() {
        let mut session = loaded_session(1);

        session.zoom_in();
        session.zoom_in();
        session.zoom_out();
        assert!((session.viewport().scale - 1.2 * 1.2 * 0.8).abs() < 1e-9);

        session.apply_preset("lung");
        session.reset_view();
        assert_eq!(session.viewport().scale, 1.0);
        assert_eq!(session.viewport().window, Some(WindowLevel::new(400, 40)));
    }

    #[test]
    fn test_apply_preset() {
        let mut session = loaded_session(1);

        assert_eq!(
            session.apply_preset("brain"),
            Some(WindowLevel::new(80, 40))
        );
        assert_eq!(session.viewport().window, Some(WindowLevel::new(80, 40)));

        assert_eq!(session.apply_preset("unknown"), None);
        assert_eq!(session.viewport().window, Some(WindowLevel::new(80, 40)));
    }

    #[test]
    fn test_window_kept_across_slices() {
        let mut session = loaded_session(3);
        session.set_window_level(WindowLevel::new(1000, 100));
        session.next_image();
        assert_eq!(session.viewport().window, Some(WindowLevel::new(1000, 100)));
    }

    #[rstest]
    #[case("ArrowRight", Some(KeyAction::NextImage), 1)]
    #[case("ArrowLeft", Some(KeyAction::PreviousImage), 0)]
    #[case("x", None, 0)]
    fn test_navigation_keys(
        #[case] key: &str,
        #[case] expected: Option<KeyAction>,
        #[case] index: usize,
    ) {
        let mut session = loaded_session(3);
        assert_eq!(session.handle_key(key), expected);
        assert_eq!(session.current_image_index(), index);
    }

    #[rstest]
    #[case("1", WindowLevel::new(1500, -600))]
    #[case("2", WindowLevel::new(80, 40))]
    #[case("3", WindowLevel::new(2000, 300))]
    fn test_preset_keys(#[case] key: &str, #[case] window: WindowLevel) {
        let mut session = loaded_session(1);
        assert!(matches!(
            session.handle_key(key),
            Some(KeyAction::ApplyPreset(_))
        ));
        assert_eq!(session.viewport().window, Some(window));
    }

    #[test]
    fn test_space_and_reset_keys() {
        let mut session = loaded_session(2);

        assert_eq!(session.handle_key(" "), Some(KeyAction::TogglePlayback));
        assert!(session.is_playing());

        session.zoom_in();
        assert_eq!(session.handle_key("r"), Some(KeyAction::ResetView));
        assert_eq!(session.viewport().scale, 1.0);
    }

    #[test]
    fn test_keys_inert_without_series() {
        let mut session = ViewerSession::new(ViewerConfig::default());
        assert_eq!(session.handle_key("ArrowRight"), None);
        assert_eq!(session.handle_key("1"), None);
        assert_eq!(session.viewport().window, None);
    }

    #[test]
    fn test_tools() {
        let mut session = ViewerSession::new(ViewerConfig::default());
        assert_eq!(session.active_tool(), ToolKind::Pan);
        session.set_tool(ToolKind::Length);
        assert_eq!(session.active_tool(), ToolKind::Length);
    }

    #[test]
    fn test_record_and_export_measurements() {
        let mut session = loaded_session(3);
        session.display_image(2);
        session.record_measurement(MeasurementKind::Length, 31.5).unwrap();
        session.record_measurement(MeasurementKind::Angle, 92.0).unwrap();

        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let export = session.export_measurements(at).unwrap();

        assert_eq!(export.measurements.len(), 2);
        assert_eq!(export.measurements[0].image_id, "ct3");
        assert_eq!(export.measurements[0].slice_index, 2);
        assert_eq!(export.measurements[1].tool_type, MeasurementKind::Angle);
        assert_eq!(export.patient.as_deref(), Some("DOE^JOHN"));
    }

    #[test]
    fn test_complete_measurement_uses_active_tool() {
        let mut session = loaded_session(2);

        assert_eq!(session.complete_measurement(10.0).unwrap(), None);
        assert!(session.measurements().is_empty());

        session.set_tool(ToolKind::Angle);
        assert_eq!(
            session.complete_measurement(45.0).unwrap(),
            Some(MeasurementKind::Angle)
        );
        session.set_tool(MeasurementKind::Length.tool());
        session.display_image(1);
        assert_eq!(
            session.complete_measurement(12.0).unwrap(),
            Some(MeasurementKind::Length)
        );

        let kinds: Vec<_> = session
            .measurements()
            .all()
            .iter()
            .map(|m| (m.tool_type, m.slice_index))
            .collect();
        assert_eq!(
            kinds,
            vec![(MeasurementKind::Angle, 0), (MeasurementKind::Length, 1)]
        );
    }

    #[test]
    fn test_measurements_need_a_slice() {
        let mut session = ViewerSession::new(ViewerConfig::default());
        assert!(matches!(
            session.record_measurement(MeasurementKind::Length, 1.0),
            Err(ViewerError::NoSeriesSelected)
        ));
        assert!(session.export_measurements(Utc::now()).is_err());
        assert!(session.measurements().is_empty());
    }

    #[test]
    fn test_measurements_survive_reload() {
        let mut session = loaded_session(1);
        session.record_measurement(MeasurementKind::Length, 5.0).unwrap();
        session.load(SeriesOrganizer::organize(vec![image("x", Some("X"), None)]));
        assert_eq!(session.measurements().len(), 1);
    }

    #[test]
    fn test_series_items() {
        let mut session = loaded_session(2);
        session.select_series(1).unwrap();

        let items = session.series_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].image_count, 2);
        assert!(!items[0].active);
        assert!(items[1].active);
        assert_eq!(items[1].modality, "CT");
    }

    #[test]
    fn test_thumbnails_are_limited() {
        let records: Vec<_> = (1..=30)
            .map(|n| ct_slice(&format!("ct{n}"), "CT", &n.to_string()))
            .collect();
        let mut session = ViewerSession::new(ViewerConfig::default().with_thumbnail_limit(20));
        session.load(SeriesOrganizer::organize(records));
        session.display_image(1);

        let thumbnails = session.thumbnails();
        assert_eq!(thumbnails.len(), 20);
        assert_eq!(thumbnails[0].label, "Slice 1");
        assert!(thumbnails[1].active);
        assert_eq!(
            session.slider_range(),
            Some(SliderRange {
                min: 0,
                max: 29,
                value: 1
            })
        );
    }

    #[test]
    fn test_image_info() {
        let mut session = loaded_session(2);
        session.display_image(1);

        let info = session.image_info().unwrap();
        assert_eq!(info.instance_number, Some(2));
        assert_eq!(
            info.to_string(),
            "Instance: 2\nPosition: N/A\nThickness: 2.5 mm\nSpacing: N/A"
        );
    }

    #[test]
    fn test_screenshot_file_name_replaces_separators() {
        let mut series = SeriesOrganizer::organize(vec![ct_slice("ct1", "CT", "1")]);
        series[0].patient_name = Some("DOE/JOHN".to_string());
        let mut session = ViewerSession::new(ViewerConfig::default());
        session.load(series);

        assert_eq!(
            session.screenshot_file_name().unwrap(),
            "screenshot_DOE_JOHN_1.png"
        );
    }

    #[test]
    fn test_screenshot_file_name() {
        let mut session = loaded_session(3);
        session.display_image(2);
        assert_eq!(
            session.screenshot_file_name().unwrap(),
            "screenshot_DOE^JOHN_3.png"
        );
    }
}
