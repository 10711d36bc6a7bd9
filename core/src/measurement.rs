//! Append-only log of completed measurements and its JSON export

use crate::error::Result;
use crate::series::SeriesDescriptor;
use crate::types::MeasurementKind;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Patient name used in file names when the series carries none
const UNKNOWN_PATIENT: &str = "unknown";

/// Patient name as it may appear inside a download file name
///
/// Path separators and other characters not allowed in file names map to `_`.
pub(crate) fn file_name_patient(patient: Option<&str>) -> String {
    patient
        .unwrap_or(UNKNOWN_PATIENT)
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// A measurement completed in the interaction layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// Tool that produced the measurement
    pub tool_type: MeasurementKind,

    /// Millimeters for lengths, degrees for angles
    pub value: f64,

    /// Identifier of the image the measurement was drawn on
    pub image_id: String,

    /// Zero-based slice index within the series
    pub slice_index: usize,
}

impl Measurement {
    pub fn new(
        tool_type: MeasurementKind,
        value: f64,
        image_id: impl Into<String>,
        slice_index: usize,
    ) -> Self {
        Self {
            tool_type,
            value,
            image_id: image_id.into(),
            slice_index,
        }
    }

    pub fn length(length_mm: f64, image_id: impl Into<String>, slice_index: usize) -> Self {
        Self::new(MeasurementKind::Length, length_mm, image_id, slice_index)
    }

    pub fn angle(degrees: f64, image_id: impl Into<String>, slice_index: usize) -> Self {
        Self::new(MeasurementKind::Angle, degrees, image_id, slice_index)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tool_type {
            MeasurementKind::Length => write!(f, "Length: {:.2} mm", self.value),
            MeasurementKind::Angle => write!(f, "Angle: {:.1}°", self.value),
        }
    }
}

/// Ordered, append-only record of measurements for a session
#[derive(Debug, Clone, Default)]
pub struct MeasurementLog {
    entries: Vec<Measurement>,
}

impl MeasurementLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a measurement after all earlier ones
    pub fn append(&mut self, measurement: Measurement) {
        self.entries.push(measurement);
    }

    /// All measurements in arrival order
    pub fn all(&self) -> &[Measurement] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the log for saving
    ///
    /// Patient, study and series come from `series` when one is given.
    pub fn export(
        &self,
        series: Option<&SeriesDescriptor>,
        captured_at: DateTime<Utc>,
    ) -> MeasurementExport {
        MeasurementExport {
            patient: series.and_then(|s| s.patient_name.clone()),
            study: series.and_then(|s| s.study_date.clone()),
            series: series.map(|s| s.description.clone()),
            measurements: self.entries.clone(),
            timestamp: captured_at,
        }
    }
}

/// Serializable snapshot of a [`MeasurementLog`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementExport {
    /// Patient Name of the current series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient: Option<String>,

    /// Study Date of the current series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub study: Option<String>,

    /// Description of the current series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,

    pub measurements: Vec<Measurement>,

    #[serde(serialize_with = "serialize_rfc3339")]
    pub timestamp: DateTime<Utc>,
}

impl MeasurementExport {
    /// Pretty-printed JSON document
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Download name: `measurements_<patientName>_<epochMillis>.json`
    pub fn file_name(&self) -> String {
        format!(
            "measurements_{}_{}.json",
            file_name_patient(self.patient.as_deref()),
            self.timestamp.timestamp_millis()
        )
    }
}

fn serialize_rfc3339<S>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::tags::{
        PATIENT_NAME, SERIES_DESCRIPTION, SERIES_INSTANCE_UID, STUDY_DATE,
    };
    use crate::series::{DecodedImage, SeriesOrganizer};
    use crate::test_utils::dicom_with;
    use chrono::TimeZone;
    use dicom_core::VR;

    fn series() -> SeriesDescriptor {
        let dcm = dicom_with(&[
            (SERIES_INSTANCE_UID, VR::UI, "1.2.3"),
            (SERIES_DESCRIPTION, VR::LO, "Chest CT"),
            (PATIENT_NAME, VR::PN, "DOE^JANE"),
            (STUDY_DATE, VR::DA, "20240315"),
        ]);
        SeriesOrganizer::organize(vec![DecodedImage::new("img", dcm)]).remove(0)
    }

    fn captured_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_append_preserves_order() {
        let mut log = MeasurementLog::new();
        for i in 0..5 {
            log.append(Measurement::length(i as f64, format!("img{i}"), i));
        }
        // Duplicates are kept
        log.append(Measurement::length(0.0, "img0", 0));

        assert_eq!(log.len(), 6);
        let values: Vec<_> = log.all().iter().map(|m| m.value).collect();
        assert_eq!(values, vec![0.0, 1.0, 2.0, 3.0, 4.0, 0.0]);
    }

    #[test]
    fn test_export_contains_all_in_order() {
        let mut log = MeasurementLog::new();
        log.append(Measurement::length(12.345, "a", 0));
        log.append(Measurement::angle(45.0, "b", 1));
        log.append(Measurement::length(3.0, "c", 2));

        let export = log.export(Some(&series()), captured_at());

        assert_eq!(export.measurements.len(), 3);
        assert_eq!(export.measurements, log.all());
        assert_eq!(export.patient.as_deref(), Some("DOE^JANE"));
        assert_eq!(export.study.as_deref(), Some("20240315"));
        assert_eq!(export.series.as_deref(), Some("Chest CT"));
    }

    #[test]
    fn test_export_json_shape() {
        let mut log = MeasurementLog::new();
        log.append(Measurement::angle(90.0, "b", 1));

        let json = log.export(Some(&series()), captured_at()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["patient"], "DOE^JANE");
        assert_eq!(value["timestamp"], "2024-03-15T10:30:00.000Z");
        assert_eq!(value["measurements"][0]["toolType"], "angle");
        assert_eq!(value["measurements"][0]["imageId"], "b");
        assert_eq!(value["measurements"][0]["sliceIndex"], 1);
    }

    #[test]
    fn test_export_without_series() {
        let export = MeasurementLog::new().export(None, captured_at());
        assert_eq!(export.patient, None);
        assert!(export.measurements.is_empty());
        assert_eq!(export.file_name(), "measurements_unknown_1710498600000.json");
    }

    #[test]
    fn test_file_name() {
        let export = MeasurementLog::new().export(Some(&series()), captured_at());
        assert_eq!(export.file_name(), "measurements_DOE^JANE_1710498600000.json");
    }

    #[test]
    fn test_file_name_replaces_path_separators() {
        let mut export = MeasurementLog::new().export(Some(&series()), captured_at());
        export.patient = Some("DOE/JOHN\\JR:II".to_string());

        let name = export.file_name();
        assert_eq!(name, "measurements_DOE_JOHN_JR_II_1710498600000.json");

        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join(&name);
        std::fs::write(&path, export.to_json().unwrap()).unwrap();
        assert_eq!(path.parent(), Some(temp_dir.path()));
    }

    #[test]
    fn test_export_json_omits_absent_fields() {
        let json = MeasurementLog::new()
            .export(None, captured_at())
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("patient"));
        assert!(!object.contains_key("study"));
        assert!(!object.contains_key("series"));
        assert_eq!(value["measurements"], serde_json::json!([]));

        let parsed: MeasurementExport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.patient, None);
    }

    #[test]
    fn test_display_lines() {
        assert_eq!(
            Measurement::length(12.346, "a", 0).to_string(),
            "Length: 12.35 mm"
        );
        assert_eq!(Measurement::angle(45.04, "a", 0).to_string(), "Angle: 45.0°");
    }
}
