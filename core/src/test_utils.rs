//! In-memory DICOM fixtures shared by the unit tests

use crate::extraction::tags::{INSTANCE_NUMBER, MODALITY, SERIES_DESCRIPTION, SERIES_INSTANCE_UID};
use crate::series::DecodedImage;
use dicom_core::{DataElement, PrimitiveValue, Tag, VR};
use dicom_object::InMemDicomObject;

/// Builds a data set from `(tag, vr, value)` triples
///
/// Values containing a backslash become multi-valued elements.
pub fn dicom_with(elements: &[(Tag, VR, &str)]) -> InMemDicomObject {
    let mut dcm = InMemDicomObject::new_empty();
    for (tag, vr, value) in elements {
        let value = if value.contains('\\') {
            PrimitiveValue::Strs(value.split('\\').map(str::to_string).collect())
        } else {
            PrimitiveValue::from(*value)
        };
        dcm.put(DataElement::new(*tag, *vr, value));
    }
    dcm
}

/// Builds a decoded image with an optional series UID and instance number
pub fn image(id: &str, series_uid: Option<&str>, instance: Option<i32>) -> DecodedImage {
    let instance = instance.map(|n| n.to_string());
    let mut elements = vec![(MODALITY, VR::CS, "CT"), (SERIES_DESCRIPTION, VR::LO, "Axial")];
    if let Some(uid) = series_uid {
        elements.push((SERIES_INSTANCE_UID, VR::UI, uid));
    }
    if let Some(n) = instance.as_deref() {
        elements.push((INSTANCE_NUMBER, VR::IS, n));
    }
    DecodedImage::new(id, dicom_with(&elements))
}
