//! Splitters partition a series into several series sharing its metadata.
//!
//! Apart from [`ImagePositionPatientSplitter`], every splitter groups
//! instances by the value of one or more tags. Groups are emitted in the
//! order their value is first met and their slots are renumbered from 0.

use crate::{
    dictionary::tag_name,
    logger::FilterLogger,
    series::{DicomInstance, DicomSeries},
};

use dicom::core::Tag;
use std::{collections::HashMap, sync::Arc};

mod acquisition_number;
mod image_dimensions;
mod image_orientation;
mod image_position_patient;
mod image_type;
mod sop_class_uid;
mod tag_value;
mod temporal_position;

pub use acquisition_number::AcquisitionNumberSplitter;
pub use image_dimensions::ImageDimensionsSplitter;
pub use image_orientation::ImageOrientationSplitter;
pub use image_position_patient::ImagePositionPatientSplitter;
pub use image_type::ImageTypeSplitter;
pub use sop_class_uid::SopClassUidSplitter;
pub use tag_value::TagValueSplitter;
pub use temporal_position::TemporalPositionSplitter;

/// Split `series` by the values of `split_tags`.
///
/// An absent tag counts as an empty value. An empty series is returned as is.
pub(crate) fn split_by_tags(
    series: &DicomSeries,
    split_tags: &[Tag],
    logger: &dyn FilterLogger,
) -> Vec<DicomSeries> {
    if series.is_empty() {
        return vec![series.clone()];
    }

    let mut positions: HashMap<Vec<String>, usize> = HashMap::new();
    let mut groups: Vec<Vec<&Arc<DicomInstance>>> = Vec::new();

    for instance in series.instances() {
        let key: Vec<String> = split_tags
            .iter()
            .map(|tag| instance.string_value(*tag).unwrap_or_default())
            .collect();
        let position = *positions.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[position].push(instance);
    }

    if groups.len() > 1 {
        let names: Vec<String> = split_tags.iter().map(|tag| tag_name(*tag)).collect();
        logger.warning(&format!(
            "The series has been split in {} series because its instances have different {} values.",
            groups.len(),
            names.join(" and ")
        ));
    }

    groups
        .into_iter()
        .map(|instances| series.renumbered_with(instances))
        .collect()
}
