use super::split_by_tags;
use crate::{
    enums::FilterType, error::FilterError, filter::Filter, logger::FilterLogger,
    series::DicomSeries,
};

use dicom_dictionary_std::tags;

/// Separates the time points of a dynamic acquisition
#[derive(Debug, Default, Clone, Copy)]
pub struct TemporalPositionSplitter;

impl Filter for TemporalPositionSplitter {
    fn name(&self) -> &'static str {
        "Temporal position splitter"
    }

    fn description(&self) -> &'static str {
        "Split instances according to their Temporal Position Identifier tag."
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
            &[tags::TEMPORAL_POSITION_IDENTIFIER],
            logger,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::test_utils::InstanceBuilder;
    use crate::logger::RecordingLogger;

    #[test]
    fn groups_by_temporal_position() {
        let series = DicomSeries::from_instances([(1, 7), (1, 8), (2, 7), (3, 8)].map(
            |(temporal_position, acquisition)| {
                InstanceBuilder::new()
                    .integer(tags::TEMPORAL_POSITION_IDENTIFIER, temporal_position)
                    .integer(tags::ACQUISITION_NUMBER, acquisition)
                    .build()
            },
        ));
        let logger = RecordingLogger::new();

        let result = TemporalPositionSplitter.apply(&series, &logger).unwrap();

        assert_eq!(
            result.iter().map(DicomSeries::len).collect::<Vec<_>>(),
            [2, 1, 1]
        );
        assert!(logger.warnings()[0].contains("TemporalPositionIdentifier"));
    }
}
