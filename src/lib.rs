//! # DICOM-series-filter library
//!
//! This crate turns a collection of DICOM instances that claim to be one
//! series into one or more geometrically and semantically consistent
//! series.

//!
//! This library is part of the dicom-rs ecosystem and reads instances through
//! its [`InMemDicomObject`]. Series can be built from in-memory objects or
//! loaded from a directory where each ".dcm" file is read from. If the
//! environment supports it the DICOM files are read in parallel using rayon.
//! A series is then run through filters of four kinds:
//!  - Splitters (one series in, several out)
//!  - Sorters (reorder the instances)
//!  - Modifiers (annotate series-level metadata)
//!  - Composites (chains of the above)
//!
//!  The [`DefaultDicomFilter`](filter::custom::DefaultDicomFilter) splits a
//!  series by SOP class and runs CT, MR and secondary capture images through
//!  the default chain: image type, acquisition, temporal position and
//!  dimensions splitting, instance number and image position sorting,
//!  splitting where the slice spacing changes, and slice thickness check.
//!  Filters never log errors, failures are returned as
//!  [`FilterError`](error::FilterError).
//!
//! # Examples
//!
//! ## Filtering every series of a directory
//!
//! To read all DICOM files from the dicom/ directory, group them by
//! Series Instance UID and run the default filter on each series.
//!
//! ```no_run
//! # use dicom_series_filter::{SeriesLoader, DefaultDicomFilter, Filter, LogLogger};
//! let series_list = SeriesLoader::load_from_directory("dicom")
//!     .expect("should have loaded files from directory");
//! let filter = DefaultDicomFilter::new();
//! for series in &series_list {
//!     let volumes = filter
//!         .apply(series, &LogLogger)
//!         .expect("should have split the series by SOP class");
//!     println!("{} volume(s)", volumes.len());
//! }
//! ```
//!
//! [`InMemDicomObject`]: https://docs.rs/dicom-object/latest/dicom_object/mem/struct.InMemDicomObject.html

pub mod dictionary;
pub mod enums;
pub mod error;
pub mod filter;
pub mod helper;
pub mod logger;
mod projection;
pub mod registry;
pub mod series;
pub mod series_loader;

pub use enums::{ApplyMode, FilterType};
pub use error::FilterError;
pub use filter::{Filter, composite::CompositeFilter, custom::DefaultDicomFilter};
pub use logger::{FilterLogger, LogLogger, RecordingLogger};
pub use registry::FilterRegistry;
pub use series::{DicomInstance, DicomSeries};
pub use series_loader::{SeriesLoader, SeriesLoaderError};
