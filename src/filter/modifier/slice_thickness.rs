use crate::{
    enums::FilterType,
    error::FilterError,
    filter::Filter,
    logger::FilterLogger,
    projection::{EPSILON, Projection},
    series::DicomSeries,
};

use dicom_dictionary_std::tags;

/// Key of the computed tag value written by [`SliceThicknessModifier`]
pub const SLICE_THICKNESS: &str = "SliceThickness";

/// Longest value a DS (Decimal String) element may hold
const DECIMAL_STRING_LENGTH: usize = 16;

/// Format a length as a Decimal String: at most six decimals and no
/// trailing zeros, dropping decimals until it fits in 16 characters.
fn decimal_string(value: f64) -> String {
    let mut formatted = String::new();
    for precision in (0..=6_usize).rev() {
        formatted = format!("{value:.precision$}");
        if formatted.contains('.') {
            formatted = formatted
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_owned();
        }
        if formatted.len() <= DECIMAL_STRING_LENGTH {
            break;
        }
    }
    formatted
}

/// Checks the Slice Thickness of a sorted volume against the distance
/// between its first two slices.
///
/// When they disagree the measured distance is stored as a computed tag
/// value on the series; the instances are left untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct SliceThicknessModifier;

impl Filter for SliceThicknessModifier {
    fn name(&self) -> &'static str {
        "Slice thickness modifier"
    }

    fn description(&self) -> &'static str {
        "Compute the slice thickness from the Image Position (Patient) of the first two \
         instances when the Slice Thickness tag is wrong."
    }

    fn filter_type(&self) -> FilterType {
        FilterType::Modifier
    }

    fn apply(
        &self,
        series: &DicomSeries,
        logger: &dyn FilterLogger,
    ) -> Result<Vec<DicomSeries>, FilterError> {
        let mut instances = series.instances();
        let (Some(first), Some(second)) = (instances.next(), instances.next()) else {
            logger.warning(
                "Unable to compute the slice thickness of a series holding less than two instances.",
            );
            return Ok(vec![series.clone()]);
        };

        let first_index = Projection::slice_index(first, self.name())?;
        let second_index = Projection::slice_index(second, self.name())?;
        let computed = (second_index - first_index).abs();
        let existing = first.float_value(tags::SLICE_THICKNESS).unwrap_or(0.0);

        let mut result = series.clone();
        if (computed - existing).abs() > EPSILON {
            let computed = decimal_string(computed);
            logger.information(&format!(
                "Slice thickness {existing} does not match the spacing between slices, \
                 {computed} is used instead."
            ));
            result.add_computed_tag_value(SLICE_THICKNESS, computed);
        }
        Ok(vec![result])
    }
}
