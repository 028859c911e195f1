use crate::{
    enums::FilterType,
    error::FilterError,
    filter::Filter,
    logger::FilterLogger,
    projection::Projection,
    series::DicomSeries,
};

/// Sorts slices along the normal of their image plane.
///
/// Each instance is ordered by its Image Position (Patient) projected on
/// the cross product of the two Image Orientation (Patient) vectors.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImagePositionPatientSorter;

impl Filter for ImagePositionPatientSorter {
    fn name(&self) -> &'static str {
        "Image position patient sorter"
    }

    fn description(&self) -> &'static str {
        "Sort instances by computing the image position using Image Position (Patient) and \
         Image Orientation (Patient) tags."
    }

    fn filter_type(&self) -> FilterType {
        FilterType::Sorter
    }

    fn apply(
        &self,
        series: &DicomSeries,
        _logger: &dyn FilterLogger,
    ) -> Result<Vec<DicomSeries>, FilterError> {
        let mut indexed = series
            .instances()
            .map(|instance| {
                Projection::slice_index(instance, self.name()).map(|index| (index, instance))
            })
            .collect::<Result<Vec<_>, _>>()?;

        indexed.sort_by(|a, b| a.0.total_cmp(&b.0));

        if indexed.windows(2).any(|pair| pair[0].0 == pair[1].0) {
            return Err(FilterError::ambiguous_order(
                self.name(),
                "several instances share the same position, the series may hold multiple \
                 volumes: try a different splitter",
            ));
        }

        Ok(vec![
            series.renumbered_with(indexed.into_iter().map(|(_, instance)| instance)),
        ])
    }
}
