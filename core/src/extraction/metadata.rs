use super::tags::*;
use crate::types::MetadataCategory;
use dicom_core::Tag;
use serde::Serialize;

/// Placeholder shown for a category without any values
pub const EMPTY_METADATA_MESSAGE: &str = "No metadata available";

/// Text some upstream toolkits produce for a missing value
const UNDEFINED: &str = "undefined";

/// One labelled tag of the metadata panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataField {
    pub label: &'static str,
    pub tag: Tag,
    /// Physical unit appended to present values
    pub unit: Option<&'static str>,
}

const fn field(label: &'static str, tag: Tag) -> MetadataField {
    MetadataField {
        label,
        tag,
        unit: None,
    }
}

const fn with_unit(label: &'static str, tag: Tag, unit: &'static str) -> MetadataField {
    MetadataField {
        label,
        tag,
        unit: Some(unit),
    }
}

pub const PATIENT_FIELDS: &[MetadataField] = &[
    field("Patient Name", PATIENT_NAME),
    field("Patient ID", PATIENT_ID),
    field("Birth Date", PATIENT_BIRTH_DATE),
    field("Sex", PATIENT_SEX),
    field("Age", PATIENT_AGE),
    with_unit("Weight", PATIENT_WEIGHT, "kg"),
];

pub const STUDY_FIELDS: &[MetadataField] = &[
    field("Study Date", STUDY_DATE),
    field("Study Time", STUDY_TIME),
    field("Study Description", STUDY_DESCRIPTION),
    field("Study ID", STUDY_ID),
    field("Accession Number", ACCESSION_NUMBER),
    field("Referring Physician", REFERRING_PHYSICIAN_NAME),
];

pub const SERIES_FIELDS: &[MetadataField] = &[
    field("Series Description", SERIES_DESCRIPTION),
    field("Series Number", SERIES_NUMBER),
    field("Modality", MODALITY),
    field("Body Part", BODY_PART_EXAMINED),
    field("Patient Position", PATIENT_POSITION),
    field("Protocol Name", PROTOCOL_NAME),
];

pub const ACQUISITION_FIELDS: &[MetadataField] = &[
    with_unit("Slice Thickness", SLICE_THICKNESS, "mm"),
    with_unit("KVp", KVP, "kV"),
    with_unit("Exposure Time", EXPOSURE_TIME, "ms"),
    with_unit("X-Ray Tube Current", XRAY_TUBE_CURRENT, "mA"),
    with_unit("Exposure", EXPOSURE, "μAs"),
    field("Filter Type", FILTER_TYPE),
    field("Convolution Kernel", CONVOLUTION_KERNEL),
    field("Rotation Direction", ROTATION_DIRECTION),
];

pub const IMAGE_FIELDS: &[MetadataField] = &[
    field("Instance Number", INSTANCE_NUMBER),
    field("Image Position", IMAGE_POSITION_PATIENT),
    field("Image Orientation", IMAGE_ORIENTATION_PATIENT),
    with_unit("Pixel Spacing", PIXEL_SPACING, "mm"),
    field("Window Center", WINDOW_CENTER),
    field("Window Width", WINDOW_WIDTH),
    field("Rescale Intercept", RESCALE_INTERCEPT),
    field("Rescale Slope", RESCALE_SLOPE),
    field("Bits Stored", BITS_STORED),
    field("Bits Allocated", BITS_ALLOCATED),
    field("High Bit", HIGH_BIT),
];

impl MetadataCategory {
    /// Fields shown in this category, in display order
    pub fn fields(&self) -> &'static [MetadataField] {
        match self {
            MetadataCategory::Patient => PATIENT_FIELDS,
            MetadataCategory::Study => STUDY_FIELDS,
            MetadataCategory::Series => SERIES_FIELDS,
            MetadataCategory::Acquisition => ACQUISITION_FIELDS,
            MetadataCategory::Image => IMAGE_FIELDS,
        }
    }
}

/// A displayed `label: value` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataEntry {
    pub label: &'static str,
    pub value: String,
}

/// Rows of one metadata category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "entries", rename_all = "lowercase")]
pub enum MetadataTable {
    /// At least one row
    Populated(Vec<MetadataEntry>),
    /// No field of the category had a value
    Empty,
}

impl MetadataTable {
    fn from_entries(entries: Vec<MetadataEntry>) -> Self {
        if entries.is_empty() {
            MetadataTable::Empty
        } else {
            MetadataTable::Populated(entries)
        }
    }

    /// Rows of the table; empty for [`MetadataTable::Empty`]
    pub fn entries(&self) -> &[MetadataEntry] {
        match self {
            MetadataTable::Populated(entries) => entries,
            MetadataTable::Empty => &[],
        }
    }

    /// Value shown for `label`, if the row is present
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries()
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, MetadataTable::Empty)
    }
}

/// Metadata of one image, by category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataReport {
    pub patient: MetadataTable,
    pub study: MetadataTable,
    pub series: MetadataTable,
    pub acquisition: MetadataTable,
    pub image: MetadataTable,
}

impl MetadataReport {
    /// Table of `category`
    pub fn table(&self, category: MetadataCategory) -> &MetadataTable {
        match category {
            MetadataCategory::Patient => &self.patient,
            MetadataCategory::Study => &self.study,
            MetadataCategory::Series => &self.series,
            MetadataCategory::Acquisition => &self.acquisition,
            MetadataCategory::Image => &self.image,
        }
    }

    /// All tables in display order
    pub fn tables(&self) -> impl Iterator<Item = (MetadataCategory, &MetadataTable)> {
        MetadataCategory::ALL
            .into_iter()
            .map(move |category| (category, self.table(category)))
    }
}

/// Builds the categorized metadata tables of an image
///
/// # Example
///
/// ```
/// use dicomview_core::{MetadataExtractor, MetadataCategory};
/// use dicom_object::InMemDicomObject;
/// use dicom_core::{DataElement, PrimitiveValue, VR, Tag};
///
/// let mut dcm = InMemDicomObject::new_empty();
/// dcm.put(DataElement::new(Tag(0x0010, 0x0010), VR::PN, PrimitiveValue::from("DOE^JOHN")));
/// dcm.put(DataElement::new(Tag(0x0018, 0x0050), VR::DS, PrimitiveValue::from("2.5")));
///
/// let report = MetadataExtractor::extract(&dcm);
///
/// assert_eq!(report.patient.get("Patient Name"), Some("DOE^JOHN"));
/// assert_eq!(report.acquisition.get("Slice Thickness"), Some("2.5 mm"));
/// assert!(report.table(MetadataCategory::Study).is_empty());
/// ```
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Extracts every category
    ///
    /// Never fails: fields without a usable value are left out.
    pub fn extract(image: &impl TagLookup) -> MetadataReport {
        MetadataReport {
            patient: Self::extract_category(image, MetadataCategory::Patient),
            study: Self::extract_category(image, MetadataCategory::Study),
            series: Self::extract_category(image, MetadataCategory::Series),
            acquisition: Self::extract_category(image, MetadataCategory::Acquisition),
            image: Self::extract_category(image, MetadataCategory::Image),
        }
    }

    /// Extracts a single category
    pub fn extract_category(image: &impl TagLookup, category: MetadataCategory) -> MetadataTable {
        let entries = category
            .fields()
            .iter()
            .filter_map(|field| Self::extract_field(image, field))
            .collect();
        MetadataTable::from_entries(entries)
    }

    fn extract_field(image: &impl TagLookup, field: &MetadataField) -> Option<MetadataEntry> {
        let value = image
            .string(field.tag)
            .filter(|value| !value.is_empty() && value != UNDEFINED)?;

        // Units only decorate values that exist
        let value = match field.unit {
            Some(unit) => format!("{} {}", value, unit),
            None => value,
        };

        Some(MetadataEntry {
            label: field.label,
            value,
        })
    }
}
