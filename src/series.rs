use dicom::core::Tag;
use dicom::object::InMemDicomObject;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A single DICOM object of a series together with the file it came from.
#[derive(Debug, Clone)]
pub struct DicomInstance {
    object: InMemDicomObject,
    source: Option<PathBuf>,
}

impl DicomInstance {
    pub fn new(object: InMemDicomObject) -> Self {
        Self {
            object,
            source: None,
        }
    }

    pub fn with_source(object: InMemDicomObject, source: impl Into<PathBuf>) -> Self {
        Self {
            object,
            source: Some(source.into()),
        }
    }

    /// Get a reference to the underlying data set
    pub fn object(&self) -> &InMemDicomObject {
        &self.object
    }

    /// Path of the file this instance was read from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.object.element(tag).is_ok()
    }

    /// Read a tag as text, with the DICOM padding removed.
    ///
    /// Multi-valued elements are joined with a backslash.
    pub fn string_value(&self, tag: Tag) -> Option<String> {
        let value = self.object.element(tag).ok()?.to_str().ok()?;
        Some(
            value
                .trim_matches(|c: char| c == '\0' || c.is_whitespace())
                .to_owned(),
        )
    }

    /// Read a tag as a signed 32-bit integer.
    ///
    /// Returns `None` if the tag is absent or cannot be parsed.
    pub fn int_value(&self, tag: Tag) -> Option<i32> {
        self.object.element(tag).ok()?.to_int::<i32>().ok()
    }

    pub fn float_value(&self, tag: Tag) -> Option<f64> {
        self.object.element(tag).ok()?.to_float64().ok()
    }

    /// Read the first `count` components of a multi-valued numeric tag.
    ///
    /// Returns `None` if the tag is absent, malformed or holds fewer
    /// than `count` values.
    pub fn float_values(&self, tag: Tag, count: usize) -> Option<Vec<f64>> {
        let mut values = self
            .object
            .element(tag)
            .ok()?
            .to_multi_float64()
            .ok()?;
        if values.len() < count {
            return None;
        }
        values.truncate(count);
        Some(values)
    }
}

/// An ordered collection of instances plus the series-level metadata
/// every filter reads and annotates.
///
/// Instances are reference counted, so cloning a series is a shallow copy:
/// the slot map and metadata are duplicated, the instances are shared.
#[derive(Debug, Clone, Default)]
pub struct DicomSeries {
    instance_uid: Option<String>,
    modality: Option<String>,
    instances: BTreeMap<usize, Arc<DicomInstance>>,
    number_of_instances: usize,
    sop_class_uids: BTreeSet<String>,
    computed_tag_values: BTreeMap<String, String>,
}

impl DicomSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series whose instances occupy slots `0..n` in iteration order.
    pub fn from_instances(instances: impl IntoIterator<Item = DicomInstance>) -> Self {
        let mut series = Self::new();
        for instance in instances {
            series.append_instance(Arc::new(instance));
        }
        series.number_of_instances = series.instances.len();
        series
    }

    /// Empty series carrying a copy of this series' metadata
    pub fn new_empty_from(&self) -> Self {
        Self {
            instance_uid: self.instance_uid.clone(),
            modality: self.modality.clone(),
            instances: BTreeMap::new(),
            number_of_instances: 0,
            sop_class_uids: self.sop_class_uids.clone(),
            computed_tag_values: self.computed_tag_values.clone(),
        }
    }

    /// Copy of the metadata holding `instances` renumbered from slot 0
    pub(crate) fn renumbered_with<'a>(
        &self,
        instances: impl IntoIterator<Item = &'a Arc<DicomInstance>>,
    ) -> Self {
        let mut series = self.new_empty_from();
        for instance in instances {
            series.append_instance(Arc::clone(instance));
        }
        series.number_of_instances = series.instances.len();
        series
    }

    pub fn instance_uid(&self) -> Option<&str> {
        self.instance_uid.as_deref()
    }

    pub fn set_instance_uid(&mut self, uid: impl Into<String>) {
        self.instance_uid = Some(uid.into());
    }

    pub fn modality(&self) -> Option<&str> {
        self.modality.as_deref()
    }

    pub fn set_modality(&mut self, modality: impl Into<String>) {
        self.modality = Some(modality.into());
    }

    /// Put an instance at a given slot, replacing whatever was there
    pub fn add_instance(&mut self, slot: usize, instance: Arc<DicomInstance>) {
        self.instances.insert(slot, instance);
    }

    /// Put an instance right after the last occupied slot
    pub fn append_instance(&mut self, instance: Arc<DicomInstance>) {
        let slot = self
            .instances
            .last_key_value()
            .map_or(0, |(slot, _)| slot + 1);
        self.instances.insert(slot, instance);
    }

    pub fn number_of_instances(&self) -> usize {
        self.number_of_instances
    }

    pub fn set_number_of_instances(&mut self, count: usize) {
        self.number_of_instances = count;
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Instances in slot order
    pub fn instances(&self) -> impl Iterator<Item = &Arc<DicomInstance>> {
        self.instances.values()
    }

    /// `(slot, instance)` pairs in slot order
    pub fn slots(&self) -> impl Iterator<Item = (usize, &Arc<DicomInstance>)> {
        self.instances.iter().map(|(slot, instance)| (*slot, instance))
    }

    pub fn instance(&self, slot: usize) -> Option<&Arc<DicomInstance>> {
        self.instances.get(&slot)
    }

    /// Whether the occupied slots are exactly `0..len`
    pub fn is_renumbered(&self) -> bool {
        self.instances
            .keys()
            .enumerate()
            .all(|(expected, slot)| expected == *slot)
    }

    pub fn sop_class_uids(&self) -> &BTreeSet<String> {
        &self.sop_class_uids
    }

    pub fn set_sop_class_uids(&mut self, uids: BTreeSet<String>) {
        self.sop_class_uids = uids;
    }

    pub fn add_sop_class_uid(&mut self, uid: impl Into<String>) {
        self.sop_class_uids.insert(uid.into());
    }

    pub fn computed_tag_values(&self) -> &BTreeMap<String, String> {
        &self.computed_tag_values
    }

    pub fn computed_tag_value(&self, key: &str) -> Option<&str> {
        self.computed_tag_values.get(key).map(String::as_str)
    }

    /// Record a value inferred by the pipeline rather than read from the files
    pub fn add_computed_tag_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.computed_tag_values.insert(key.into(), value.into());
    }
}
