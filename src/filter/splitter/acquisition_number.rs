use super::split_by_tags;
use crate::{
    enums::FilterType, error::FilterError, filter::Filter, logger::FilterLogger,
    series::DicomSeries,
};

use dicom_dictionary_std::tags;

/// Separates instances acquired in different acquisitions
#[derive(Debug, Default, Clone, Copy)]
pub struct AcquisitionNumberSplitter;

impl Filter for AcquisitionNumberSplitter {
    fn name(&self) -> &'static str {
        "Acquisition number splitter"
    }

    fn description(&self) -> &'static str {
        "Split instances according to their Acquisition Number tag."
    }

    fn filter_type(&self) -> FilterType {
        FilterType::Splitter
    }

    fn apply(
        &self,
        series: &DicomSeries,
        logger: &dyn FilterLogger,
    ) -> Result<Vec<DicomSeries>, FilterError> {
        Ok(split_by_tags(series, &[tags::ACQUISITION_NUMBER], logger))
    }
}
