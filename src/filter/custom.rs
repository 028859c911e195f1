use crate::{
    dictionary::sop_class_label,
    enums::FilterType,
    error::FilterError,
    filter::{Filter, composite::CompositeFilter, splitter::SopClassUidSplitter},
    logger::FilterLogger,
    series::DicomSeries,
};

/// SOP classes the default image chain knows how to handle
const IMAGE_STORAGE_LABELS: &[&str] = &[
    "CTImageStorage",
    "EnhancedCTImageStorage",
    "MRImageStorage",
    "EnhancedMRImageStorage",
    "SecondaryCaptureImageStorage",
];

/// Entry point used when reading DICOM data.
///
/// The series is first split by SOP class (a failure there is fatal). Image
/// series of a known kind then go through
/// [`CompositeFilter::ct_image_storage_default`] in forced mode, other
/// series are returned untouched.
#[derive(Debug)]
pub struct DefaultDicomFilter {
    image_storage: CompositeFilter,
}

impl Default for DefaultDicomFilter {
    fn default() -> Self {
        Self {
            image_storage: CompositeFilter::ct_image_storage_default(),
        }
    }
}

impl DefaultDicomFilter {
    pub fn new() -> Self {
        Self::default()
    }

    fn modality_label(series: &DicomSeries) -> Option<String> {
        let uid = series.sop_class_uids().iter().next()?;
        Some(
            sop_class_label(uid)
                .map(str::to_owned)
                .unwrap_or_else(|| uid.clone()),
        )
    }
}

impl Filter for DefaultDicomFilter {
    fn name(&self) -> &'static str {
        "Default DICOM filter"
    }

    fn description(&self) -> &'static str {
        "Default filter applied when reading DICOM series."
    }

    fn filter_type(&self) -> FilterType {
        FilterType::Custom
    }

    fn apply(
        &self,
        series: &DicomSeries,
        logger: &dyn FilterLogger,
    ) -> Result<Vec<DicomSeries>, FilterError> {
        let mut result = Vec::new();

        for split in SopClassUidSplitter.apply(series, logger)? {
            match Self::modality_label(&split) {
                Some(label) if IMAGE_STORAGE_LABELS.contains(&label.as_str()) => {
                    result.extend(self.image_storage.forced_apply(&split, logger)?);
                }
                label => {
                    logger.information(&format!(
                        "SOP class \"{}\" is not handled by the \"{}\", the series is kept as is.",
                        label.as_deref().unwrap_or("unknown"),
                        self.name()
                    ));
                    result.push(split);
                }
            }
        }

        Ok(result)
    }
}

/// Leaves the series as it is
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFilter;

impl Filter for NoFilter {
    fn name(&self) -> &'static str {
        "No filter"
    }

    fn description(&self) -> &'static str {
        "Keep the series without applying any filter."
    }

    fn filter_type(&self) -> FilterType {
        FilterType::Custom
    }

    fn apply(
        &self,
        series: &DicomSeries,
        _logger: &dyn FilterLogger,
    ) -> Result<Vec<DicomSeries>, FilterError> {
        Ok(vec![series.clone()])
    }
}
