use crate::extraction::tags::{TagLookup, INSTANCE_NUMBER, SERIES_INSTANCE_UID};
use dicom_core::Tag;
use dicom_object::InMemDicomObject;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A decoded DICOM image together with the identifier it was loaded under
///
/// The parsed data set is shared, so cloning a `DecodedImage` is cheap and
/// never copies element data.
#[derive(Clone)]
pub struct DecodedImage {
    image_id: String,
    source: Option<PathBuf>,
    object: Arc<InMemDicomObject>,
}

impl DecodedImage {
    /// Creates an image from an in-memory data set
    pub fn new(image_id: impl Into<String>, object: InMemDicomObject) -> Self {
        Self {
            image_id: image_id.into(),
            source: None,
            object: Arc::new(object),
        }
    }

    /// Creates an image read from `path`, identified by its display form
    pub fn from_path(path: &Path, object: InMemDicomObject) -> Self {
        Self {
            image_id: path.display().to_string(),
            source: Some(path.to_path_buf()),
            object: Arc::new(object),
        }
    }

    /// Identifier the image was loaded under
    pub fn image_id(&self) -> &str {
        &self.image_id
    }

    /// File the image was read from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Underlying parsed data set
    pub fn object(&self) -> &InMemDicomObject {
        &self.object
    }

    /// Series Instance UID, if present and non-empty
    pub fn series_uid(&self) -> Option<String> {
        self.string(SERIES_INSTANCE_UID).filter(|uid| !uid.is_empty())
    }

    /// Instance Number used for slice ordering; absent or non-numeric is 0
    pub fn instance_number(&self) -> i32 {
        self.int(INSTANCE_NUMBER).unwrap_or(0)
    }
}

impl TagLookup for DecodedImage {
    fn string(&self, tag: Tag) -> Option<String> {
        self.object.string(tag)
    }

    fn int(&self, tag: Tag) -> Option<i32> {
        self.object.int(tag)
    }

    fn float(&self, tag: Tag) -> Option<f64> {
        self.object.float(tag)
    }
}

impl fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedImage")
            .field("image_id", &self.image_id)
            .field("instance_number", &self.instance_number())
            .finish()
    }
}
