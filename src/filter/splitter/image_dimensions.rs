use super::split_by_tags;
use crate::{
    enums::FilterType, error::FilterError, filter::Filter, logger::FilterLogger,
    series::DicomSeries,
};

use dicom_dictionary_std::tags;

/// Keeps images of different matrix sizes apart
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageDimensionsSplitter;

impl Filter for ImageDimensionsSplitter {
    fn name(&self) -> &'static str {
        "Image dimensions splitter"
    }

    fn description(&self) -> &'static str {
        "Split instances according to their Rows and Columns tags."
    }

    fn filter_type(&self) -> FilterType {
        FilterType::Splitter
    }

    fn apply(
        &self,
        series: &DicomSeries,
        logger: &dyn FilterLogger,
    ) -> Result<Vec<DicomSeries>, FilterError> {
        Ok(split_by_tags(series, &[tags::ROWS, tags::COLUMNS], logger))
    }
}
