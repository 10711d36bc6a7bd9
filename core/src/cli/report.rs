use crate::extraction::{MetadataReport, MetadataTable, EMPTY_METADATA_MESSAGE};
use crate::session::SeriesItem;
use std::fmt;

/// Text listing of the loaded series
pub struct SeriesListText<'a> {
    items: &'a [SeriesItem],
}

impl<'a> SeriesListText<'a> {
    /// Creates a new series listing
    pub fn new(items: &'a [SeriesItem]) -> Self {
        Self { items }
    }
}

impl<'a> fmt::Display for SeriesListText<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Series")?;
        writeln!(f, "======")?;

        if self.items.is_empty() {
            return writeln!(f, "No DICOM series loaded");
        }

        for item in self.items {
            let marker = if item.active { '*' } else { ' ' };
            let suffix = if item.image_count == 1 { "" } else { "s" };
            writeln!(
                f,
                "{} [{}] {:<4} {} ({} image{})",
                marker, item.index, item.modality, item.description, item.image_count, suffix
            )?;
        }

        Ok(())
    }
}

/// Text rendering of the metadata panel
pub struct MetadataReportText<'a> {
    report: &'a MetadataReport,
}

impl<'a> MetadataReportText<'a> {
    /// Creates a new metadata report
    pub fn new(report: &'a MetadataReport) -> Self {
        Self { report }
    }
}

impl<'a> fmt::Display for MetadataReportText<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (category, table) in self.report.tables() {
            writeln!(f)?;
            writeln!(f, "{}", category.title())?;
            writeln!(f, "{}", "-".repeat(category.title().len()))?;

            match table {
                MetadataTable::Populated(entries) => {
                    for entry in entries {
                        writeln!(f, "{:<20} {}", format!("{}:", entry.label), entry.value)?;
                    }
                }
                MetadataTable::Empty => writeln!(f, "{}", EMPTY_METADATA_MESSAGE)?,
            }
        }

        Ok(())
    }
}
