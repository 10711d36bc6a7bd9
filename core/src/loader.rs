//! Batch loading of DICOM files into series

use crate::error::Result;
use crate::series::{DecodedImage, SeriesDescriptor, SeriesOrganizer};
use crate::types::UnidentifiedSeriesPolicy;
use dicom_object::open_file;
use log::{info, warn};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Decodes one file into an image
///
/// Pixel decoding and rendering stay with the implementation; the loader
/// only needs the parsed attributes.
pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedImage>;
}

/// Decoder reading DICOM Part 10 files with `dicom-object`
#[derive(Debug, Clone, Copy, Default)]
pub struct DicomFileDecoder;

impl ImageDecoder for DicomFileDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedImage> {
        let dcm = open_file(path)?;
        // Keep the data set, drop the file meta group
        Ok(DecodedImage::from_path(path, dcm.into_inner()))
    }
}

/// Progress of a batch, reported before each file and once at the end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadProgress {
    pub current: usize,
    pub total: usize,
    pub status: String,
}

impl LoadProgress {
    /// Completed share of the batch in percent
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.current as f64 / self.total as f64 * 100.0
        }
    }
}

/// Result of loading a batch of files
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Series built from every file that decoded
    pub series: Vec<SeriesDescriptor>,

    /// Files that failed to decode, with the reason
    pub failures: Vec<(PathBuf, String)>,
}

impl LoadOutcome {
    /// Number of images across all series
    pub fn image_count(&self) -> usize {
        self.series.iter().map(SeriesDescriptor::len).sum()
    }

    /// Status line describing the loaded batch
    pub fn status(&self) -> String {
        match self.series.first() {
            Some(first) => format!(
                "Patient: {} | Study: {}",
                first.patient_name.as_deref().unwrap_or("Unknown"),
                first.study_date.as_deref().unwrap_or("Unknown")
            ),
            None => "No DICOM series loaded".to_string(),
        }
    }
}

/// Status line shown while a batch of `count` files loads
pub fn loading_status(count: usize) -> String {
    format!("Loading {} DICOM files...", count)
}

/// Decodes every file and groups the results into series
///
/// Files that fail to decode are logged and reported in
/// [`LoadOutcome::failures`]; the rest of the batch continues. Grouping
/// starts only after every file has been attempted.
pub fn load_batch<D, P, F>(
    decoder: &D,
    paths: &[P],
    policy: UnidentifiedSeriesPolicy,
    mut progress: F,
) -> LoadOutcome
where
    D: ImageDecoder + ?Sized,
    P: AsRef<Path>,
    F: FnMut(&LoadProgress),
{
    let total = paths.len();
    let mut images = Vec::with_capacity(total);
    let mut failures = Vec::new();

    for (index, path) in paths.iter().enumerate() {
        let path = path.as_ref();
        progress(&LoadProgress {
            current: index,
            total,
            status: format!("Loading {}", display_name(path)),
        });

        match decoder.decode(path) {
            Ok(image) => images.push(image),
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
                failures.push((path.to_path_buf(), e.to_string()));
            }
        }
    }

    progress(&LoadProgress {
        current: total,
        total,
        status: "Complete!".to_string(),
    });

    let series = SeriesOrganizer::organize_with_policy(images, policy);
    info!(
        "Loaded {} series from {} files ({} failed)",
        series.len(),
        total,
        failures.len()
    );

    LoadOutcome { series, failures }
}

/// Collects the DICOM files of `directory` and loads them as one batch
///
/// # Errors
///
/// Returns an error only if the directory itself cannot be read
pub fn load_directory<D, F>(
    decoder: &D,
    directory: &Path,
    policy: UnidentifiedSeriesPolicy,
    progress: F,
) -> Result<LoadOutcome>
where
    D: ImageDecoder + ?Sized,
    F: FnMut(&LoadProgress),
{
    let files = collect_dicom_files(directory)?;
    info!(
        "Found {} DICOM files in {}",
        files.len(),
        directory.display()
    );
    Ok(load_batch(decoder, &files, policy, progress))
}

/// Lists the DICOM files directly inside `directory`, sorted by path
///
/// Files ending in `.dcm` or `.dicom` (any case) are taken as is; files
/// without an extension are taken when they carry the Part 10 header.
pub fn collect_dicom_files(directory: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        match path.extension() {
            Some(ext) => {
                if ext.eq_ignore_ascii_case("dcm") || ext.eq_ignore_ascii_case("dicom") {
                    files.push(path);
                }
            }
            None => {
                if is_dicom_file(&path) {
                    info!("Found headerless DICOM file: {}", path.display());
                    files.push(path);
                }
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Checks for the Part 10 header: a 128-byte preamble followed by "DICM"
pub fn is_dicom_file(path: &Path) -> bool {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return false,
    };

    let mut buffer = [0u8; 132];
    match file.read_exact(&mut buffer) {
        Ok(()) => &buffer[128..132] == b"DICM",
        Err(_) => false,
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
