use chrono::Utc;
use clap::Parser;
use dicomview_core::cli::{Cli, OutputFormat};
use dicomview_core::loader::{load_directory, loading_status, DicomFileDecoder, LoadOutcome};
use dicomview_core::session::{ImageInfo, SeriesItem, Viewport};
use dicomview_core::{
    MeasurementExport, MetadataReport, MetadataReportText, Result, SeriesListText, ViewerConfig,
    ViewerError, ViewerSession,
};
use log::{error, info, warn};
use serde::Serialize;
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ViewerConfig::from_json_file(path)?,
        None => ViewerConfig::default(),
    };

    if !cli.directory.is_dir() {
        return Err(ViewerError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} is not a directory", cli.directory.display()),
        )));
    }

    info!("Processing directory: {}", cli.directory.display());
    let outcome = load_directory(
        &DicomFileDecoder,
        &cli.directory,
        config.unidentified_series,
        |progress| {
            if progress.current == 0 {
                info!("{}", loading_status(progress.total));
            }
            info!("[{:>3.0}%] {}", progress.percent(), progress.status);
        },
    )?;
    report_failures(&outcome);
    info!("{}", outcome.status());

    let mut session = ViewerSession::new(config);
    session.load(outcome.series);

    if let Some(index) = cli.series {
        session.select_series(index)?;
    }
    if let Some(slice) = cli.slice {
        if slice == 0 || !session.display_image(slice - 1) {
            warn!("Slice {} does not exist in the selected series", slice);
        }
    }
    if let Some(name) = cli.preset.as_deref() {
        if session.apply_preset(name).is_none() {
            warn!("Unknown window preset: {}", name);
        }
    }
    for (kind, value) in &cli.measurements {
        session.set_tool(kind.tool());
        session.complete_measurement(*value)?;
    }

    let export = match &cli.export {
        Some(directory) => {
            let export = session.export_measurements(Utc::now())?;
            let path = directory.join(export.file_name());
            std::fs::write(&path, export.to_json()?)?;
            info!("Wrote {}", path.display());
            Some(export)
        }
        None => None,
    };

    match cli.format {
        OutputFormat::Text => print_text(&session),
        OutputFormat::Json => println!("{}", render_json(&session, export.as_ref())?),
    }

    Ok(())
}

fn report_failures(outcome: &LoadOutcome) {
    if !outcome.failures.is_empty() {
        warn!(
            "{} of {} files could not be loaded",
            outcome.failures.len(),
            outcome.failures.len() + outcome.image_count()
        );
    }
}

fn print_text(session: &ViewerSession) {
    let items = session.series_items();
    println!("{}", SeriesListText::new(&items));

    if let Some(frame) = session.frame_info() {
        println!("{}", frame);
    }
    if let Some(info) = session.image_info() {
        println!("{}", info);
    }
    if let Some(window) = session.viewport().window {
        println!("Window: {}", window);
    }
    if let Some(metadata) = session.metadata() {
        println!("{}", MetadataReportText::new(metadata));
    }

    let measurements = session.measurements();
    if !measurements.is_empty() {
        println!("Measurements:");
        for measurement in measurements.all() {
            println!("  {}", measurement);
        }
    }
}

fn render_json(session: &ViewerSession, export: Option<&MeasurementExport>) -> Result<String> {
    #[derive(Serialize)]
    struct SessionJson<'a> {
        series: Vec<SeriesItem>,
        current_series: Option<usize>,
        current_slice: Option<usize>,
        image: Option<ImageInfo>,
        viewport: &'a Viewport,
        metadata: Option<&'a MetadataReport>,
        measurements: Option<&'a MeasurementExport>,
    }

    let output = SessionJson {
        series: session.series_items(),
        current_series: session.current_series_index(),
        current_slice: session
            .current_image()
            .map(|_| session.current_image_index() + 1),
        image: session.image_info(),
        viewport: session.viewport(),
        metadata: session.metadata(),
        measurements: export,
    };

    Ok(serde_json::to_string_pretty(&output)?)
}
