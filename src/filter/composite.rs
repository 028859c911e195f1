use crate::{
    enums::FilterType,
    error::FilterError,
    filter::{
        Filter,
        modifier::SliceThicknessModifier,
        sorter::{ImagePositionPatientSorter, InstanceNumberSorter},
        splitter::{
            AcquisitionNumberSplitter, ImageDimensionsSplitter, ImagePositionPatientSplitter,
            ImageTypeSplitter, TemporalPositionSplitter,
        },
    },
    logger::FilterLogger,
    series::DicomSeries,
};

/// Ordered chain of filters.
///
/// Each child is applied to every series produced by the previous one and
/// the results are concatenated in order.
#[derive(Debug)]
pub struct CompositeFilter {
    name: &'static str,
    description: &'static str,
    children: Vec<Box<dyn Filter>>,
}

impl CompositeFilter {
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            children: Vec::new(),
        }
    }

    /// Append a child at the end of the chain
    pub fn with_child(mut self, filter: impl Filter + 'static) -> Self {
        self.children.push(Box::new(filter));
        self
    }

    pub fn with_boxed_child(mut self, filter: Box<dyn Filter>) -> Self {
        self.children.push(filter);
        self
    }

    pub fn children(&self) -> &[Box<dyn Filter>] {
        &self.children
    }

    /// Default chain for CT, MR and secondary capture image series: split
    /// everything that cannot share a volume, order the slices, cut the
    /// stack where the spacing changes and fix the slice thickness.
    pub fn ct_image_storage_default() -> Self {
        Self::new(
            "CT image storage default composite",
            "Composite filter applying the default filters on CT and MR image series.",
        )
        .with_child(ImageTypeSplitter)
        .with_child(AcquisitionNumberSplitter)
        .with_child(TemporalPositionSplitter)
        .with_child(ImageDimensionsSplitter)
        .with_child(InstanceNumberSorter)
        .with_child(ImagePositionPatientSorter)
        .with_child(ImagePositionPatientSplitter)
        .with_child(ImagePositionPatientSorter)
        .with_child(SliceThicknessModifier)
    }

    /// Apply the chain, skipping a child for the series it fails on.
    ///
    /// The failure is logged as information and the series goes on to the
    /// next child unchanged. Configuration errors still abort the chain.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Configuration`] if a child is not configured.
    pub fn forced_apply(
        &self,
        series: &DicomSeries,
        logger: &dyn FilterLogger,
    ) -> Result<Vec<DicomSeries>, FilterError> {
        let mut results = vec![series.clone()];
        for child in &self.children {
            let mut next = Vec::with_capacity(results.len());
            for current in results {
                match child.apply(&current, logger) {
                    Ok(produced) => next.extend(produced),
                    Err(error @ FilterError::Configuration { .. }) => return Err(error),
                    Err(error) => {
                        logger.information(&format!(
                            "Filter \"{}\" has been skipped: {error}",
                            child.name()
                        ));
                        next.push(current);
                    }
                }
            }
            results = next;
        }
        Ok(results)
    }
}

impl Filter for CompositeFilter {
    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn filter_type(&self) -> FilterType {
        FilterType::Composite
    }

    fn is_configuration_required(&self) -> bool {
        self.children
            .iter()
            .any(|child| child.is_configuration_required())
    }

    fn apply(
        &self,
        series: &DicomSeries,
        logger: &dyn FilterLogger,
    ) -> Result<Vec<DicomSeries>, FilterError> {
        let mut results = vec![series.clone()];
        for child in &self.children {
            let mut next = Vec::with_capacity(results.len());
            for current in &results {
                next.extend(child.apply(current, logger)?);
            }
            results = next;
        }
        Ok(results)
    }
}
