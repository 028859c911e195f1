//! Filters turning one DICOM series into one or more consistent series.
//!
//! Every filter implements [`Filter`]. Splitters partition a series,
//! sorters reorder it, modifiers annotate it, composites chain other
//! filters and custom filters pick a chain depending on the series.

use crate::{
    enums::FilterType, error::FilterError, logger::FilterLogger, series::DicomSeries,
};

pub mod composite;
pub mod custom;
pub mod modifier;
pub mod sorter;
pub mod splitter;

pub trait Filter {
    /// Human readable name of the filter
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn filter_type(&self) -> FilterType;

    /// Whether a value must be set before [`Filter::apply`] can run
    fn is_configuration_required(&self) -> bool {
        false
    }

    /// Whether the filter exposes its configuration to an interactive editor
    fn is_configurable_with_gui(&self) -> bool {
        false
    }

    /// Run the filter on a series.
    ///
    /// The input is left untouched; the returned series share its instances.
    ///
    /// # Errors
    ///
    /// Returns a [`FilterError`] if the filter is not configured, a tag it
    /// needs is missing or the instances cannot be ordered. No partial
    /// result is produced on failure.
    fn apply(
        &self,
        series: &DicomSeries,
        logger: &dyn FilterLogger,
    ) -> Result<Vec<DicomSeries>, FilterError>;
}

impl std::fmt::Debug for dyn Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("name", &self.name())
            .field("type", &self.filter_type())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::series::{DicomInstance, DicomSeries};
    use dicom::core::{DataElement, PrimitiveValue, Tag, VR};
    use dicom::object::InMemDicomObject;
    use dicom_dictionary_std::tags;

    pub(crate) const AXIAL: [f64; 6] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0];

    fn decimal_strings(values: &[f64]) -> PrimitiveValue {
        PrimitiveValue::Strs(values.iter().map(|v| v.to_string()).collect())
    }

    /// Builder for in-memory instances used across filter tests
    pub(crate) struct InstanceBuilder {
        object: InMemDicomObject,
    }

    impl InstanceBuilder {
        pub(crate) fn new() -> Self {
            Self {
                object: InMemDicomObject::new_empty(),
            }
        }

        pub(crate) fn text(mut self, tag: Tag, vr: VR, value: &str) -> Self {
            self.object
                .put(DataElement::new(tag, vr, PrimitiveValue::from(value)));
            self
        }

        pub(crate) fn integer(self, tag: Tag, value: i32) -> Self {
            self.text(tag, VR::IS, &value.to_string())
        }

        pub(crate) fn axial_at(self, z: f64) -> Self {
            self.geometry([0.0, 0.0, z], AXIAL)
        }

        pub(crate) fn geometry(mut self, position: [f64; 3], orientation: [f64; 6]) -> Self {
            self.object.put(DataElement::new(
                tags::IMAGE_POSITION_PATIENT,
                VR::DS,
                decimal_strings(&position),
            ));
            self.object.put(DataElement::new(
                tags::IMAGE_ORIENTATION_PATIENT,
                VR::DS,
                decimal_strings(&orientation),
            ));
            self
        }

        pub(crate) fn build(self) -> DicomInstance {
            DicomInstance::new(self.object)
        }
    }

    pub(crate) fn axial_series(positions: &[f64]) -> DicomSeries {
        DicomSeries::from_instances(
            positions
                .iter()
                .map(|z| InstanceBuilder::new().axial_at(*z).build()),
        )
    }

    /// Image Position (Patient) z of every instance, in slot order
    pub(crate) fn z_positions(series: &DicomSeries) -> Vec<f64> {
        series
            .instances()
            .map(|instance| instance.float_values(tags::IMAGE_POSITION_PATIENT, 3).unwrap()[2])
            .collect()
    }
}
