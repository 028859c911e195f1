use super::split_by_tags;
use crate::{
    enums::FilterType, error::FilterError, filter::Filter, logger::FilterLogger,
    series::DicomSeries,
};

use dicom_dictionary_std::tags;

/// Separates stacks acquired in different planes
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageOrientationSplitter;

impl Filter for ImageOrientationSplitter {
    fn name(&self) -> &'static str {
        "Image orientation splitter"
    }

    fn description(&self) -> &'static str {
        "Split instances according to their Image Orientation (Patient) tag."
    }

    fn filter_type(&self) -> FilterType {
        FilterType::Splitter
    }

    fn apply(
        &self,
        series: &DicomSeries,
        logger: &dyn FilterLogger,
    ) -> Result<Vec<DicomSeries>, FilterError> {
        Ok(split_by_tags(
            series,
            &[tags::IMAGE_ORIENTATION_PATIENT],
            logger,
        ))
    }
}
