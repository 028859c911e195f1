use dicom::core::Tag;
use dicom::core::dictionary::{DataDictionary, DataDictionaryEntry, UidDictionary};
use dicom_dictionary_std::{StandardDataDictionary, sop_class::StandardSopClassDictionary, uids};

/// Name of a SOP class, e.g. `CTImageStorage` for `1.2.840.10008.5.1.4.1.1.2`
///
/// Comprehensive 3D SR Storage is labelled `Comprehensive3DSR`.
pub fn sop_class_label(uid: &str) -> Option<&'static str> {
    if uid == uids::COMPREHENSIVE3_DSR_STORAGE {
        return Some("Comprehensive3DSR");
    }
    StandardSopClassDictionary
        .by_uid(uid)
        .map(|entry| entry.alias)
}

/// Keyword of a tag when the standard dictionary knows it, its
/// `(gggg,eeee)` form otherwise
pub fn tag_name(tag: Tag) -> String {
    StandardDataDictionary
        .by_tag(tag)
        .map(|entry| entry.alias().to_owned())
        .unwrap_or_else(|| tag.to_string())
}

/// Resolve a keyword (`InstanceNumber`) or a `(gggg,eeee)` string to a tag
pub fn parse_tag(key: &str) -> Option<Tag> {
    StandardDataDictionary.parse_tag(key.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_dictionary_std::tags;

    #[test]
    fn labels_known_sop_classes() {
        assert_eq!(sop_class_label(uids::CT_IMAGE_STORAGE), Some("CTImageStorage"));
        assert_eq!(
            sop_class_label(uids::SECONDARY_CAPTURE_IMAGE_STORAGE),
            Some("SecondaryCaptureImageStorage")
        );
        assert_eq!(
            sop_class_label(uids::COMPREHENSIVE3_DSR_STORAGE),
            Some("Comprehensive3DSR")
        );
        assert_eq!(sop_class_label("1.2.3.4"), None);
    }

    #[test]
    fn labels_any_standard_sop_class() {
        assert_eq!(
            sop_class_label(uids::POSITRON_EMISSION_TOMOGRAPHY_IMAGE_STORAGE),
            Some("PositronEmissionTomographyImageStorage")
        );
        assert_eq!(
            sop_class_label(uids::LEGACY_CONVERTED_ENHANCED_CT_IMAGE_STORAGE),
            Some("LegacyConvertedEnhancedCTImageStorage")
        );
        assert_eq!(
            sop_class_label(uids::MEDIA_STORAGE_DIRECTORY_STORAGE),
            Some("MediaStorageDirectoryStorage")
        );
    }

    #[test]
    fn parses_keywords_and_group_element_pairs() {
        assert_eq!(parse_tag("InstanceNumber"), Some(tags::INSTANCE_NUMBER));
        assert_eq!(parse_tag("(0020,0012)"), Some(tags::ACQUISITION_NUMBER));
        assert_eq!(parse_tag("NotAKeyword"), None);
        assert_eq!(tag_name(tags::SLICE_THICKNESS), "SliceThickness");
    }
}
