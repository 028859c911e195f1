//! Sorters reorder the instances of a series and renumber their slots.
//!
//! The order must be strict: two instances sharing a sort key make the
//! sorter fail instead of returning an arbitrary order.

use crate::{
    error::FilterError,
    series::{DicomInstance, DicomSeries},
};

use dicom::core::Tag;
use std::{collections::BTreeMap, sync::Arc};

mod image_position_patient;
mod instance_number;
mod tag_value;

pub use image_position_patient::ImagePositionPatientSorter;
pub use instance_number::InstanceNumberSorter;
pub use tag_value::TagValueSorter;

/// Sort `series` by the integer value of `tag`, an absent tag counting as 0.
pub(crate) fn sort_by_integer_tag(
    series: &DicomSeries,
    tag: Tag,
    filter: &str,
) -> Result<DicomSeries, FilterError> {
    let sorted: BTreeMap<i32, &Arc<DicomInstance>> = series
        .instances()
        .map(|instance| (instance.int_value(tag).unwrap_or(0), instance))
        .collect();

    if sorted.len() != series.len() {
        return Err(FilterError::ambiguous_order(
            filter,
            "the tag may be missing in some instances or several instances may have the same value",
        ));
    }

    Ok(series.renumbered_with(sorted.into_values()))
}
