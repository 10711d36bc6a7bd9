pub mod metadata;
pub mod tags;

pub use metadata::{
    MetadataEntry, MetadataExtractor, MetadataField, MetadataReport, MetadataTable,
    EMPTY_METADATA_MESSAGE,
};
pub use tags::TagLookup;
