use crate::{dictionary::tag_name, error::FilterError, series::DicomInstance};

use dicom::core::Tag;
use dicom_dictionary_std::tags;

/// Tolerance used when two inter-slice distances or thicknesses are compared
pub(crate) const EPSILON: f64 = 1e-2;

pub(crate) struct Projection;

impl Projection {
    /// Position of an instance along the normal of its image plane.
    ///
    /// Fails with a missing tag error if Image Position (Patient) or
    /// Image Orientation (Patient) is absent or empty, and with a
    /// collaborator error if either holds something other than 3 (resp. 6)
    /// decimal values.
    pub(crate) fn slice_index(instance: &DicomInstance, filter: &str) -> Result<f64, FilterError> {
        let position = Self::vector::<3>(instance, tags::IMAGE_POSITION_PATIENT, filter)?;
        let orientation = Self::vector::<6>(instance, tags::IMAGE_ORIENTATION_PATIENT, filter)?;
        Ok(Self::index_from(position, orientation))
    }

    fn vector<const N: usize>(
        instance: &DicomInstance,
        tag: Tag,
        filter: &str,
    ) -> Result<[f64; N], FilterError> {
        if instance.string_value(tag).is_none_or(|value| value.is_empty()) {
            return Err(FilterError::missing_tag(filter, tag));
        }
        instance
            .float_values(tag, N)
            .and_then(|values| values.try_into().ok())
            .ok_or_else(|| {
                FilterError::Collaborator(format!(
                    "{filter}: unable to read {} as {N} decimal values",
                    tag_name(tag)
                ))
            })
    }

    #[inline]
    pub(crate) fn index_from(position: [f64; 3], orientation: [f64; 6]) -> f64 {
        let u = [orientation[0], orientation[1], orientation[2]];
        let v = [orientation[3], orientation[4], orientation[5]];
        let normal = Self::cross(u, v);
        Self::dot(position, normal)
    }

    #[inline]
    fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
        [
            a[1].mul_add(b[2], -a[2] * b[1]),
            a[2].mul_add(b[0], -a[0] * b[2]),
            a[0].mul_add(b[1], -a[1] * b[0]),
        ]
    }

    #[inline]
    fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
        a[0].mul_add(b[0], a[1].mul_add(b[1], a[2] * b[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AXIAL: [f64; 6] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0];

    #[test]
    fn axial_index_is_z() {
        assert_eq!(Projection::index_from([10.0, -4.0, 7.5], AXIAL), 7.5);
    }

    #[test]
    fn absent_and_malformed_geometry_are_told_apart() {
        use crate::filter::test_utils::InstanceBuilder;
        use dicom::core::VR;

        let absent = InstanceBuilder::new().build();
        assert_eq!(
            Projection::slice_index(&absent, "sorter"),
            Err(FilterError::missing_tag("sorter", tags::IMAGE_POSITION_PATIENT))
        );

        let malformed = InstanceBuilder::new()
            .axial_at(0.0)
            .text(tags::IMAGE_POSITION_PATIENT, VR::DS, "abc")
            .build();
        assert!(matches!(
            Projection::slice_index(&malformed, "sorter"),
            Err(FilterError::Collaborator(message)) if message.contains("ImagePositionPatient")
        ));

        let short = InstanceBuilder::new()
            .axial_at(4.0)
            .text(tags::IMAGE_ORIENTATION_PATIENT, VR::DS, "1")
            .build();
        assert!(matches!(
            Projection::slice_index(&short, "sorter"),
            Err(FilterError::Collaborator(message)) if message.contains("ImageOrientationPatient")
        ));
    }

    #[test]
    fn sagittal_index_is_x() {
        // rows along y, columns along -z: normal points towards -x
        let sagittal = [0.0, 1.0, 0.0, 0.0, 0.0, -1.0];
        assert_eq!(Projection::index_from([3.0, 5.0, 9.0], sagittal), -3.0);
    }
}
