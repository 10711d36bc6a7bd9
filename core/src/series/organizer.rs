use super::descriptor::{DEFAULT_MODALITY, DEFAULT_SERIES_DESCRIPTION};
use super::{DecodedImage, SeriesDescriptor};
use crate::extraction::tags::{TagLookup, MODALITY, PATIENT_NAME, SERIES_DESCRIPTION, STUDY_DATE};
use crate::types::UnidentifiedSeriesPolicy;
use log::debug;
use std::collections::HashMap;

/// Groups decoded images into series
///
/// # Example
///
/// ```
/// use dicomview_core::{DecodedImage, SeriesOrganizer};
/// use dicom_object::InMemDicomObject;
/// use dicom_core::{DataElement, PrimitiveValue, VR, Tag};
///
/// let slice = |uid: &str, instance: &str| {
///     let mut dcm = InMemDicomObject::new_empty();
///     dcm.put(DataElement::new(Tag(0x0020, 0x000E), VR::UI, PrimitiveValue::from(uid)));
///     dcm.put(DataElement::new(Tag(0x0020, 0x0013), VR::IS, PrimitiveValue::from(instance)));
///     DecodedImage::new(format!("{uid}-{instance}"), dcm)
/// };
///
/// let series = SeriesOrganizer::organize(vec![slice("A", "2"), slice("A", "1"), slice("B", "1")]);
///
/// assert_eq!(series.len(), 2);
/// assert_eq!(series[0].uid, "A");
/// assert_eq!(series[0].images[0].image_id(), "A-1");
/// assert_eq!(series[1].description, "Unknown Series");
/// ```
pub struct SeriesOrganizer;

impl SeriesOrganizer {
    /// Groups images by Series Instance UID
    ///
    /// Images without a UID share a single series keyed by the empty string.
    pub fn organize(records: impl IntoIterator<Item = DecodedImage>) -> Vec<SeriesDescriptor> {
        Self::organize_with_policy(records, UnidentifiedSeriesPolicy::default())
    }

    /// Groups images by Series Instance UID with an explicit policy for
    /// images that carry no UID
    ///
    /// Series appear in the order their first image was encountered. Never
    /// fails: every input image lands in exactly one series.
    pub fn organize_with_policy(
        records: impl IntoIterator<Item = DecodedImage>,
        policy: UnidentifiedSeriesPolicy,
    ) -> Vec<SeriesDescriptor> {
        let mut groups: Vec<(String, Vec<DecodedImage>)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for record in records {
            let uid = record.series_uid();
            if uid.is_none() && policy == UnidentifiedSeriesPolicy::PerFile {
                groups.push((String::new(), vec![record]));
                continue;
            }

            let key = uid.unwrap_or_default();
            match positions.get(&key) {
                Some(&position) => groups[position].1.push(record),
                None => {
                    positions.insert(key.clone(), groups.len());
                    groups.push((key, vec![record]));
                }
            }
        }

        groups
            .into_iter()
            .map(|(uid, images)| Self::describe(uid, images))
            .collect()
    }

    /// Builds the descriptor for one non-empty group
    fn describe(uid: String, mut images: Vec<DecodedImage>) -> SeriesDescriptor {
        // Series-level attributes come from the first image loaded, not the
        // first image after sorting
        let first = &images[0];
        let description = non_empty(first.string(SERIES_DESCRIPTION))
            .unwrap_or_else(|| DEFAULT_SERIES_DESCRIPTION.to_string());
        let modality =
            non_empty(first.string(MODALITY)).unwrap_or_else(|| DEFAULT_MODALITY.to_string());
        let patient_name = non_empty(first.string(PATIENT_NAME));
        let study_date = non_empty(first.string(STUDY_DATE));

        // sort_by_key is stable
        images.sort_by_key(DecodedImage::instance_number);

        debug!(
            "Series {:?}: {} ({}) with {} images",
            uid,
            description,
            modality,
            images.len()
        );

        SeriesDescriptor {
            uid,
            description,
            modality,
            images,
            patient_name,
            study_date,
        }
    }
}

/// Index of the series to select after a load: the first one, if any
pub fn default_selection(series: &[SeriesDescriptor]) -> Option<usize> {
    if series.is_empty() {
        None
    } else {
        Some(0)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
