use super::DecodedImage;

/// Description used when the first image carries no Series Description
pub const DEFAULT_SERIES_DESCRIPTION: &str = "Unknown Series";

/// Modality used when the first image carries no Modality ("other")
pub const DEFAULT_MODALITY: &str = "OT";

/// One series of a load batch with its slices in display order
///
/// Images are sorted ascending by Instance Number; images sharing a number
/// keep the order in which they were loaded.
#[derive(Debug, Clone)]
pub struct SeriesDescriptor {
    /// Series Instance UID (empty when the images carried none)
    pub uid: String,

    /// Series Description of the first image loaded for the series
    pub description: String,

    /// Modality of the first image loaded for the series
    pub modality: String,

    /// Slices in display order
    pub images: Vec<DecodedImage>,

    /// Patient Name of the first image loaded for the series
    pub patient_name: Option<String>,

    /// Study Date of the first image loaded for the series
    pub study_date: Option<String>,
}

impl SeriesDescriptor {
    /// Number of slices in the series
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the series holds no slices
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Slice at `index`
    pub fn image(&self, index: usize) -> Option<&DecodedImage> {
        self.images.get(index)
    }
}
