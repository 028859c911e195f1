use crate::{
    enums::FilterType,
    error::FilterError,
    filter::Filter,
    logger::FilterLogger,
    projection::{EPSILON, Projection},
    series::{DicomInstance, DicomSeries},
};

use std::sync::Arc;

/// Splits a stack of slices wherever the distance between two neighbouring
/// slices changes, e.g. several volumes stored in one series.
///
/// Instances must already be sorted along the slice normal, see
/// [`ImagePositionPatientSorter`](crate::filter::sorter::ImagePositionPatientSorter).
/// The reference spacing of a volume is the first gap measured inside it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImagePositionPatientSplitter;

impl Filter for ImagePositionPatientSplitter {
    fn name(&self) -> &'static str {
        "Image position patient splitter"
    }

    fn description(&self) -> &'static str {
        "Split instances according to the spacing between their Image Position (Patient) \
         projected on the slice normal."
    }

    fn filter_type(&self) -> FilterType {
        FilterType::Splitter
    }

    fn apply(
        &self,
        series: &DicomSeries,
        logger: &dyn FilterLogger,
    ) -> Result<Vec<DicomSeries>, FilterError> {
        if series.is_empty() {
            return Ok(vec![series.clone()]);
        }

        let indexed = series
            .instances()
            .map(|instance| {
                Projection::slice_index(instance, self.name()).map(|index| (index, instance))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut volumes: Vec<Vec<&Arc<DicomInstance>>> = Vec::new();
        let mut current: Option<Vec<&Arc<DicomInstance>>> = None;
        let mut previous_index = 0.0;
        let mut spacing_between_slices: f64 = 0.0;

        for (index, instance) in indexed {
            let spacing = index - previous_index;
            let has_reference = spacing_between_slices.abs() >= EPSILON;

            let starts_volume = current.is_none()
                || (has_reference && (spacing - spacing_between_slices).abs() > EPSILON);

            if starts_volume {
                volumes.extend(current.take());
                current = Some(vec![instance]);
                spacing_between_slices = 0.0;
            } else {
                if !has_reference {
                    spacing_between_slices = spacing;
                }
                if let Some(volume) = current.as_mut() {
                    volume.push(instance);
                }
            }
            previous_index = index;
        }
        volumes.extend(current);

        if volumes.len() > 1 {
            logger.warning(&format!(
                "The series has been split in {} volumes because the spacing between its slices \
                 is not constant.",
                volumes.len()
            ));
        }

        Ok(volumes
            .into_iter()
            .map(|instances| series.renumbered_with(instances))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::test_utils::{InstanceBuilder, axial_series, z_positions};
    use crate::logger::RecordingLogger;

    #[test]
    fn splits_on_a_gap() {
        let series = axial_series(&[0.0, 1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 13.0, 14.0]);
        let logger = RecordingLogger::new();

        let result = ImagePositionPatientSplitter.apply(&series, &logger).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(z_positions(&result[0]), [0.0, 1.0, 2.0, 3.0]);
        assert_eq!(z_positions(&result[1]), [10.0, 11.0, 12.0, 13.0, 14.0]);
        assert_eq!(result[0].number_of_instances(), 4);
        assert_eq!(result[1].number_of_instances(), 5);
        assert!(result.iter().all(DicomSeries::is_renumbered));
        assert_eq!(logger.warnings().len(), 1);
    }

    #[test]
    fn constant_spacing_within_tolerance_is_one_volume() {
        let series = axial_series(&[0.0, 2.5, 5.004, 7.5, 9.995]);
        let logger = RecordingLogger::new();

        let result = ImagePositionPatientSplitter.apply(&series, &logger).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].len(), 5);
        assert!(logger.is_empty());
    }

    #[test]
    fn reference_spacing_comes_from_the_first_gap() {
        // a noisy first pair sets the reference: the regular remainder is split off
        let series = axial_series(&[0.0, 1.2, 2.2, 3.2]);

        let result = ImagePositionPatientSplitter
            .apply(&series, &RecordingLogger::new())
            .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(z_positions(&result[0]), [0.0, 1.2]);
        assert_eq!(z_positions(&result[1]), [2.2, 3.2]);
    }

    #[test]
    fn missing_orientation_fails() {
        let mut series = axial_series(&[0.0, 1.0]);
        series.append_instance(Arc::new(InstanceBuilder::new().build()));

        let error = ImagePositionPatientSplitter
            .apply(&series, &RecordingLogger::new())
            .unwrap_err();

        assert!(matches!(error, FilterError::MissingTag { .. }));
    }
}
