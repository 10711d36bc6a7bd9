use dicom_core::Tag;
use dicom_object::InMemDicomObject;

// Patient Tags
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);

// Study Tags
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);

// Series Tags
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);

// Acquisition Tags
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
pub const KVP: Tag = Tag(0x0018, 0x0060);
pub const EXPOSURE_TIME: Tag = Tag(0x0018, 0x1150);
pub const XRAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
pub const EXPOSURE: Tag = Tag(0x0018, 0x1152);
pub const FILTER_TYPE: Tag = Tag(0x0018, 0x1160);
pub const CONVOLUTION_KERNEL: Tag = Tag(0x0018, 0x1210);
pub const ROTATION_DIRECTION: Tag = Tag(0x0018, 0x1140);

// Image Tags
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);

/// Tag value lookup over a parsed DICOM data set
///
/// Absent tags and values that cannot be converted are reported as `None`,
/// never as errors.
pub trait TagLookup {
    /// Text form of the tag value, trimmed of DICOM padding
    fn string(&self, tag: Tag) -> Option<String>;

    /// Integer form of the tag value
    fn int(&self, tag: Tag) -> Option<i32>;

    /// Floating point form of the first value of the tag
    fn float(&self, tag: Tag) -> Option<f64>;
}

impl TagLookup for InMemDicomObject {
    fn string(&self, tag: Tag) -> Option<String> {
        get_string_value(self, tag)
    }

    fn int(&self, tag: Tag) -> Option<i32> {
        get_int_value(self, tag)
    }

    fn float(&self, tag: Tag) -> Option<f64> {
        get_float_value(self, tag)
    }
}

/// Helper to get string value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to string
pub fn get_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<String> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_str().ok())
        .map(|s| s.trim_matches(|c: char| c.is_whitespace() || c == '\0').to_string())
}

/// Helper to get integer value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to i32
pub fn get_int_value(dcm: &InMemDicomObject, tag: Tag) -> Option<i32> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_int::<i32>().ok())
}

/// Helper to get the first floating point value from DICOM tag
///
/// Decimal strings holding several values ("40\\400") yield the first one
pub fn get_float_value(dcm: &InMemDicomObject, tag: Tag) -> Option<f64> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_float64().ok())
}
