use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dicom_series_filter::{
    ApplyMode, DicomSeries, Filter, FilterRegistry, LogLogger, SeriesLoader,
    filter::modifier::SLICE_THICKNESS, helper::apply_filters,
};

/// Split and sort the DICOM series of a directory into consistent volumes
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Directory holding the .dcm files
    #[arg(required_unless_present = "list")]
    directory: Option<PathBuf>,

    /// Filter to apply, as `Name` or `Name=Tag` (repeatable, applied in order)
    #[arg(short, long = "filter", value_name = "FILTER", default_value = "DefaultDicomFilter")]
    filters: Vec<String>,

    /// Keep a series unchanged when a filter fails on it instead of stopping
    #[arg(long)]
    forced: bool,

    /// List the available filters and exit
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let registry = FilterRegistry::with_default_filters();

    if args.list {
        for key in registry.keys() {
            if let Ok(filter) = registry.make(key) {
                println!(
                    "{key:<32} {:<10} {}",
                    filter.filter_type().to_string(),
                    filter.description()
                );
            }
        }
        return ExitCode::SUCCESS;
    }

    let filters: Result<Vec<Box<dyn Filter>>, _> = args
        .filters
        .iter()
        .map(|definition| registry.make_configured(definition))
        .collect();
    let filters = match filters {
        Ok(filters) => filters,
        Err(error) => {
            log::error!("{error}");
            return ExitCode::FAILURE;
        }
    };

    let Some(directory) = args.directory else {
        log::error!("No directory given");
        return ExitCode::FAILURE;
    };
    let mut series_list = match SeriesLoader::load_from_directory(&directory) {
        Ok(series_list) => series_list,
        Err(error) => {
            log::error!("Unable to read {}: {error}", directory.display());
            return ExitCode::FAILURE;
        }
    };

    let mode = if args.forced {
        ApplyMode::Tolerant
    } else {
        ApplyMode::Strict
    };
    if let Err(error) = apply_filters(&mut series_list, &filters, mode, &LogLogger) {
        log::error!("{error}");
        return ExitCode::FAILURE;
    }

    for (index, series) in series_list.iter().enumerate() {
        print_summary(index, series);
    }
    ExitCode::SUCCESS
}

fn print_summary(index: usize, series: &DicomSeries) {
    let thickness = series
        .computed_tag_value(SLICE_THICKNESS)
        .map(|value| format!(", computed slice thickness {value}"))
        .unwrap_or_default();
    println!(
        "#{index} {} [{}] {} instance(s){thickness}",
        series.instance_uid().unwrap_or("?"),
        series.modality().unwrap_or("?"),
        series.number_of_instances(),
    );
}
