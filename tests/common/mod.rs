#![allow(dead_code)]

use dicom::core::{DataElement, PrimitiveValue, Tag, VR};
use dicom::object::InMemDicomObject;
use dicom_dictionary_std::{tags, uids};
use dicom_series_filter::{DicomInstance, DicomSeries};

pub const AXIAL: [f64; 6] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0];

pub fn decimal_strings(values: &[f64]) -> PrimitiveValue {
    PrimitiveValue::Strs(values.iter().map(|v| v.to_string()).collect())
}

pub fn put_text(object: &mut InMemDicomObject, tag: Tag, vr: VR, value: &str) {
    object.put(DataElement::new(tag, vr, PrimitiveValue::from(value)));
}

/// CT slice lying in an axial plane at height `z`
pub fn ct_slice(z: f64, instance_number: i32) -> InMemDicomObject {
    let mut object = InMemDicomObject::new_empty();
    put_text(&mut object, tags::SOP_CLASS_UID, VR::UI, uids::CT_IMAGE_STORAGE);
    put_text(
        &mut object,
        tags::INSTANCE_NUMBER,
        VR::IS,
        &instance_number.to_string(),
    );
    object.put(DataElement::new(tags::ROWS, VR::US, PrimitiveValue::from(512_u16)));
    object.put(DataElement::new(tags::COLUMNS, VR::US, PrimitiveValue::from(512_u16)));
    object.put(DataElement::new(
        tags::IMAGE_POSITION_PATIENT,
        VR::DS,
        decimal_strings(&[-250.0, -250.0, z]),
    ));
    object.put(DataElement::new(
        tags::IMAGE_ORIENTATION_PATIENT,
        VR::DS,
        decimal_strings(&AXIAL),
    ));
    object
}

/// Series of CT slices at the given heights, numbered in that order
pub fn ct_series(heights: &[f64]) -> DicomSeries {
    DicomSeries::from_instances(
        heights
            .iter()
            .zip(1..)
            .map(|(z, number)| DicomInstance::new(ct_slice(*z, number))),
    )
}

pub fn heights(series: &DicomSeries) -> Vec<f64> {
    series
        .instances()
        .map(|instance| instance.float_values(tags::IMAGE_POSITION_PATIENT, 3).unwrap()[2])
        .collect()
}
