use crate::{
    dictionary::parse_tag,
    error::FilterError,
    filter::{
        Filter,
        composite::CompositeFilter,
        custom::{DefaultDicomFilter, NoFilter},
        modifier::SliceThicknessModifier,
        sorter::{ImagePositionPatientSorter, InstanceNumberSorter, TagValueSorter},
        splitter::{
            AcquisitionNumberSplitter, ImageDimensionsSplitter, ImageOrientationSplitter,
            ImagePositionPatientSplitter, ImageTypeSplitter, SopClassUidSplitter,
            TagValueSplitter, TemporalPositionSplitter,
        },
    },
};

use std::collections::BTreeMap;

pub type FilterConstructor = fn() -> Box<dyn Filter>;

/// Lookup table from a filter class name to its constructor.
///
/// Built by the caller, usually once with [`FilterRegistry::with_default_filters`].
#[derive(Debug, Default, Clone)]
pub struct FilterRegistry {
    constructors: BTreeMap<String, FilterConstructor>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every filter of this crate
    pub fn with_default_filters() -> Self {
        let mut registry = Self::new();
        registry.register("SopClassUidSplitter", || Box::new(SopClassUidSplitter));
        registry.register("ImageTypeSplitter", || Box::new(ImageTypeSplitter));
        registry.register("AcquisitionNumberSplitter", || {
            Box::new(AcquisitionNumberSplitter)
        });
        registry.register("TemporalPositionSplitter", || {
            Box::new(TemporalPositionSplitter)
        });
        registry.register("ImageDimensionsSplitter", || {
            Box::new(ImageDimensionsSplitter)
        });
        registry.register("ImageOrientationSplitter", || {
            Box::new(ImageOrientationSplitter)
        });
        registry.register("ImagePositionPatientSplitter", || {
            Box::new(ImagePositionPatientSplitter)
        });
        registry.register("TagValueSplitter", || Box::new(TagValueSplitter::default()));
        registry.register("InstanceNumberSorter", || Box::new(InstanceNumberSorter));
        registry.register("ImagePositionPatientSorter", || {
            Box::new(ImagePositionPatientSorter)
        });
        registry.register("TagValueSorter", || Box::new(TagValueSorter::default()));
        registry.register("SliceThicknessModifier", || Box::new(SliceThicknessModifier));
        registry.register("CTImageStorageDefaultComposite", || {
            Box::new(CompositeFilter::ct_image_storage_default())
        });
        registry.register("DefaultDicomFilter", || Box::new(DefaultDicomFilter::new()));
        registry.register("NoFilter", || Box::new(NoFilter));
        registry
    }

    pub fn register(&mut self, class_name: impl Into<String>, constructor: FilterConstructor) {
        self.constructors.insert(class_name.into(), constructor);
    }

    /// Registered class names, sorted
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.constructors.contains_key(class_name)
    }

    /// Instantiate a filter by class name.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Configuration`] if the name is not registered.
    pub fn make(&self, class_name: &str) -> Result<Box<dyn Filter>, FilterError> {
        self.constructors
            .get(class_name)
            .map(|constructor| constructor())
            .ok_or_else(|| FilterError::configuration(class_name))
    }

    /// Instantiate a filter from `Name` or `Name=Tag`.
    ///
    /// The tag form configures the tag-based filters; the tag is a keyword
    /// such as `SeriesNumber` or a `(gggg,eeee)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Configuration`] if the name is unknown, the
    /// tag cannot be resolved or the filter does not take a tag.
    pub fn make_configured(&self, definition: &str) -> Result<Box<dyn Filter>, FilterError> {
        let Some((class_name, key)) = definition.split_once('=') else {
            return self.make(definition.trim());
        };
        let class_name = class_name.trim();
        let tag = parse_tag(key).ok_or_else(|| FilterError::configuration(class_name))?;

        match class_name {
            "TagValueSplitter" => Ok(Box::new(TagValueSplitter::new(tag))),
            "TagValueSorter" => Ok(Box::new(TagValueSorter::new(tag))),
            _ => Err(FilterError::configuration(class_name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::FilterType;
    use dicom_dictionary_std::tags;

    #[test]
    fn every_default_filter_can_be_built() {
        let registry = FilterRegistry::with_default_filters();

        for key in registry.keys() {
            let filter = registry.make(key).unwrap();
            assert!(!filter.name().is_empty());
            assert!(!filter.description().is_empty());
        }
        assert!(registry.contains("DefaultDicomFilter"));
        assert_eq!(
            registry.make("DefaultDicomFilter").unwrap().filter_type(),
            FilterType::Custom
        );
    }

    #[test]
    fn unknown_names_are_rejected() {
        let registry = FilterRegistry::with_default_filters();
        assert!(matches!(
            registry.make("MagicFilter"),
            Err(FilterError::Configuration { .. })
        ));
        assert!(registry.make_configured("NoFilter=Rows").is_err());
        assert!(registry.make_configured("TagValueSorter=NotATag").is_err());
    }

    #[test]
    fn configures_tag_filters() {
        let registry = FilterRegistry::with_default_filters();

        let sorter = registry.make_configured("TagValueSorter=InstanceNumber").unwrap();
        assert_eq!(sorter.filter_type(), FilterType::Sorter);

        let unconfigured = registry.make("TagValueSplitter").unwrap();
        assert!(unconfigured.is_configuration_required());

        let splitter = TagValueSplitter::new(tags::SERIES_NUMBER);
        assert_eq!(splitter.tag(), Some(tags::SERIES_NUMBER));
    }
}
