pub mod report;

use crate::types::MeasurementKind;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for dicomview
#[derive(Parser, Debug)]
#[command(name = "dicomview")]
#[command(about = "Group DICOM files into series and inspect slices and metadata")]
#[command(version)]
pub struct Cli {
    /// Directory containing DICOM files
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Series to select (zero-based, in load order)
    #[arg(short, long)]
    pub series: Option<usize>,

    /// Slice number to show (one-based)
    #[arg(long)]
    pub slice: Option<usize>,

    /// Window preset to apply (lung, brain, bone, abdomen, liver)
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Measurement to record on the shown slice, as KIND:VALUE (e.g. length:12.5)
    #[arg(short, long = "measure", value_parser = parse_measurement)]
    pub measurements: Vec<(MeasurementKind, f64)>,

    /// Directory to write the measurement export to
    #[arg(short, long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

/// Parses a `KIND:VALUE` measurement argument
pub fn parse_measurement(s: &str) -> Result<(MeasurementKind, f64), String> {
    let (kind, value) = s
        .split_once(':')
        .ok_or_else(|| format!("expected KIND:VALUE, got '{}'", s))?;
    let kind = MeasurementKind::from_str(kind)
        .ok_or_else(|| format!("unknown measurement kind '{}'", kind))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid measurement value '{}': {}", value, e))?;
    if !value.is_finite() {
        return Err(format!("measurement value must be finite, got '{}'", s));
    }
    Ok((kind, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("length:12.5", MeasurementKind::Length, 12.5)]
    #[case("Angle: 90", MeasurementKind::Angle, 90.0)]
    fn test_parse_measurement(
        #[case] input: &str,
        #[case] kind: MeasurementKind,
        #[case] value: f64,
    ) {
        assert_eq!(parse_measurement(input), Ok((kind, value)));
    }

    #[rstest]
    #[case("12.5")]
    #[case("area:3")]
    #[case("length:abc")]
    #[case("length:inf")]
    fn test_parse_measurement_invalid(#[case] input: &str) {
        assert!(parse_measurement(input).is_err());
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "dicomview",
            "/data/ct",
            "--series",
            "1",
            "--slice",
            "4",
            "--preset",
            "lung",
            "-m",
            "length:10",
            "-m",
            "angle:45",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.directory, PathBuf::from("/data/ct"));
        assert_eq!(cli.series, Some(1));
        assert_eq!(cli.slice, Some(4));
        assert_eq!(cli.preset.as_deref(), Some("lung"));
        assert_eq!(cli.measurements.len(), 2);
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
