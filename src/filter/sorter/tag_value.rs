use super::sort_by_integer_tag;
use crate::{
    enums::FilterType, error::FilterError, filter::Filter, logger::FilterLogger,
    series::DicomSeries,
};

use dicom::core::Tag;

/// Sorts instances on the integer value of a tag chosen by the caller
#[derive(Debug, Default, Clone, Copy)]
pub struct TagValueSorter {
    tag: Option<Tag>,
}

impl TagValueSorter {
    pub fn new(tag: Tag) -> Self {
        Self { tag: Some(tag) }
    }

    pub fn tag(&self) -> Option<Tag> {
        self.tag
    }

    pub fn set_tag(&mut self, tag: Tag) {
        self.tag = Some(tag);
    }
}

impl Filter for TagValueSorter {
    fn name(&self) -> &'static str {
        "Tag value sorter"
    }

    fn description(&self) -> &'static str {
        "Sort instances using the value of a tag."
    }

    fn filter_type(&self) -> FilterType {
        FilterType::Sorter
    }

    fn is_configuration_required(&self) -> bool {
        true
    }

    fn is_configurable_with_gui(&self) -> bool {
        true
    }

    fn apply(
        &self,
        series: &DicomSeries,
        _logger: &dyn FilterLogger,
    ) -> Result<Vec<DicomSeries>, FilterError> {
        let tag = self
            .tag
            .ok_or_else(|| FilterError::configuration(self.name()))?;
        Ok(vec![sort_by_integer_tag(series, tag, self.name())?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::test_utils::InstanceBuilder;
    use crate::logger::RecordingLogger;
    use dicom_dictionary_std::tags;

    fn series_numbered(numbers: &[i32]) -> DicomSeries {
        DicomSeries::from_instances(
            numbers
                .iter()
                .map(|n| InstanceBuilder::new().integer(tags::ACQUISITION_NUMBER, *n).build()),
        )
    }

    fn numbers(series: &DicomSeries) -> Vec<i32> {
        series
            .instances()
            .map(|i| i.int_value(tags::ACQUISITION_NUMBER).unwrap())
            .collect()
    }

    #[test]
    fn sorts_on_configured_tag() {
        let sorter = TagValueSorter::new(tags::ACQUISITION_NUMBER);
        let logger = RecordingLogger::new();

        let result = sorter.apply(&series_numbered(&[30, -2, 7]), &logger).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(numbers(&result[0]), [-2, 7, 30]);
        assert!(result[0].is_renumbered());
        assert_eq!(result[0].number_of_instances(), 3);

        let again = sorter.apply(&result[0], &logger).unwrap();
        assert_eq!(numbers(&again[0]), numbers(&result[0]));
    }

    #[test]
    fn duplicate_values_are_ambiguous() {
        let error = TagValueSorter::new(tags::ACQUISITION_NUMBER)
            .apply(&series_numbered(&[4, 1, 4]), &RecordingLogger::new())
            .unwrap_err();

        assert!(matches!(error, FilterError::AmbiguousOrder { .. }));
    }

    #[test]
    fn requires_a_tag() {
        let sorter = TagValueSorter::default();
        assert!(sorter.is_configuration_required());

        let error = sorter
            .apply(&series_numbered(&[1]), &RecordingLogger::new())
            .unwrap_err();
        assert!(matches!(error, FilterError::Configuration { .. }));
    }
}
