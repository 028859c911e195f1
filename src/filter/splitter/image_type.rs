use super::split_by_tags;
use crate::{
    enums::FilterType, error::FilterError, filter::Filter, logger::FilterLogger,
    series::DicomSeries,
};

use dicom_dictionary_std::tags;

/// Separates original, derived, localizer... images.
///
/// The whole multi-valued Image Type is compared, so `ORIGINAL\PRIMARY\AXIAL`
/// and `ORIGINAL\PRIMARY\LOCALIZER` end up in different series.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageTypeSplitter;

impl Filter for ImageTypeSplitter {
    fn name(&self) -> &'static str {
        "Image type splitter"
    }

    fn description(&self) -> &'static str {
        "Split instances according to their Image Type tag."
    }

    fn filter_type(&self) -> FilterType {
        FilterType::Splitter
    }

    fn apply(
        &self,
        series: &DicomSeries,
        logger: &dyn FilterLogger,
    ) -> Result<Vec<DicomSeries>, FilterError> {
        Ok(split_by_tags(series, &[tags::IMAGE_TYPE], logger))
    }
}
