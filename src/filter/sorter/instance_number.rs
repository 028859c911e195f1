use super::sort_by_integer_tag;
use crate::{
    enums::FilterType, error::FilterError, filter::Filter, logger::FilterLogger,
    series::DicomSeries,
};

use dicom_dictionary_std::tags;

#[derive(Debug, Default, Clone, Copy)]
pub struct InstanceNumberSorter;

impl Filter for InstanceNumberSorter {
    fn name(&self) -> &'static str {
        "Instance number sorter"
    }

    fn description(&self) -> &'static str {
        "Sort instances using their Instance Number tag."
    }

    fn filter_type(&self) -> FilterType {
        FilterType::Sorter
    }

    fn apply(
        &self,
        series: &DicomSeries,
        _logger: &dyn FilterLogger,
    ) -> Result<Vec<DicomSeries>, FilterError> {
        Ok(vec![sort_by_integer_tag(
            series,
            tags::INSTANCE_NUMBER,
            self.name(),
        )?])
    }
}
