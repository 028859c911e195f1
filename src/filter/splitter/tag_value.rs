use super::split_by_tags;
use crate::{
    enums::FilterType, error::FilterError, filter::Filter, logger::FilterLogger,
    series::DicomSeries,
};

use dicom::core::Tag;

/// Splits on the value of a tag chosen by the caller
#[derive(Debug, Default, Clone, Copy)]
pub struct TagValueSplitter {
    tag: Option<Tag>,
}

impl TagValueSplitter {
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

impl Filter for TagValueSplitter {
    fn name(&self) -> &'static str {
        "Tag value splitter"
    }

    fn description(&self) -> &'static str {
        "Split instances according to the value of a tag."
    }

    fn filter_type(&self) -> FilterType {
        FilterType::Splitter
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
        logger: &dyn FilterLogger,
    ) -> Result<Vec<DicomSeries>, FilterError> {
        let tag = self
            .tag
            .ok_or_else(|| FilterError::configuration(self.name()))?;
        Ok(split_by_tags(series, &[tag], logger))
    }
}
