use super::split_by_tags;
use crate::{
    enums::FilterType, error::FilterError, filter::Filter, logger::FilterLogger,
    series::DicomSeries,
};

use dicom_dictionary_std::tags;
use std::collections::BTreeSet;

/// Separates instances of different kinds (CT images, structured reports...)
/// and records on each resulting series the SOP classes it holds.
#[derive(Debug, Default, Clone, Copy)]
pub struct SopClassUidSplitter;

impl Filter for SopClassUidSplitter {
    fn name(&self) -> &'static str {
        "SOPClassUID splitter"
    }

    fn description(&self) -> &'static str {
        "Split instances according to their SOP Class UID tag."
    }

    fn filter_type(&self) -> FilterType {
        FilterType::Splitter
    }

    fn apply(
        &self,
        series: &DicomSeries,
        logger: &dyn FilterLogger,
    ) -> Result<Vec<DicomSeries>, FilterError> {
        let mut result = split_by_tags(series, &[tags::SOP_CLASS_UID], logger);
        for split in &mut result {
            let uids: BTreeSet<String> = split
                .instances()
                .filter_map(|instance| instance.string_value(tags::SOP_CLASS_UID))
                .filter(|uid| !uid.is_empty())
                .collect();
            split.set_sop_class_uids(uids);
        }
        Ok(result)
    }
}
