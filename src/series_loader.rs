use crate::series::{DicomInstance, DicomSeries};

use dicom::object::{FileDicomObject, InMemDicomObject, open_file};
use dicom_dictionary_std::{tags, uids};
use rayon::prelude::*;
use std::{
    collections::{HashMap, HashSet},
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeriesLoaderError {
    #[error("No valid DICOM instances found")]
    NoValidInstances,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("DICOM error: {0}")]
    Dicom(#[from] dicom::object::ReadError),
}

pub struct SeriesLoader;

impl SeriesLoader {
    /// Group instances into series by Series Instance UID
    ///
    /// Series come out in the order their first instance is met. Instances
    /// whose SOP Instance UID was already seen are dropped.
    ///
    /// # Errors
    ///
    /// Returns error if no instance is left
    pub fn load_from_instances(
        instances: impl IntoIterator<Item = DicomInstance>,
    ) -> Result<Vec<DicomSeries>, SeriesLoaderError> {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut series_list: Vec<DicomSeries> = Vec::new();
        let mut seen_instances: HashSet<String> = HashSet::new();

        for instance in instances {
            if let Some(sop_instance_uid) = instance
                .string_value(tags::SOP_INSTANCE_UID)
                .filter(|uid| !uid.is_empty())
            {
                if !seen_instances.insert(sop_instance_uid.clone()) {
                    log::debug!("Skipping duplicate instance {sop_instance_uid}");
                    continue;
                }
            }

            let series_uid = instance
                .string_value(tags::SERIES_INSTANCE_UID)
                .unwrap_or_default();
            let position = *positions.entry(series_uid.clone()).or_insert_with(|| {
                let mut series = DicomSeries::new();
                series.set_instance_uid(series_uid);
                if let Some(modality) = instance.string_value(tags::MODALITY) {
                    series.set_modality(modality);
                }
                series_list.push(series);
                series_list.len() - 1
            });

            let series = &mut series_list[position];
            if let Some(sop_class_uid) = instance.string_value(tags::SOP_CLASS_UID) {
                series.add_sop_class_uid(sop_class_uid);
            }
            series.append_instance(Arc::new(instance));
        }

        if series_list.is_empty() {
            return Err(SeriesLoaderError::NoValidInstances);
        }

        for series in &mut series_list {
            series.set_number_of_instances(series.len());
        }
        Ok(series_list)
    }

    /// Load series from file paths, reading files in parallel
    pub fn load_from_file_paths(
        paths: &[impl AsRef<Path> + Sync],
    ) -> Result<Vec<DicomSeries>, SeriesLoaderError> {
        let objects: Result<Vec<_>, _> = paths
            .par_iter()
            .map(|path| open_file(path.as_ref()).map(|object| (path.as_ref().to_path_buf(), object)))
            .collect();

        let instances = objects?
            .into_iter()
            .filter(|(path, object)| {
                let keep = !Self::is_directory_record(object);
                if !keep {
                    log::debug!("Skipping DICOMDIR {}", path.display());
                }
                keep
            })
            .map(|(path, object)| DicomInstance::with_source(object.into_inner(), path));

        Self::load_from_instances(instances)
    }

    /// Load series from a directory containing .dcm files
    pub fn load_from_directory(
        path: impl AsRef<Path>,
    ) -> Result<Vec<DicomSeries>, SeriesLoaderError> {
        let mut paths: Vec<PathBuf> = fs::read_dir(path.as_ref())?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .and_then(|s| s.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("dcm"))
            })
            .collect();

        if paths.is_empty() {
            return Err(SeriesLoaderError::NoValidInstances);
        }
        paths.sort();

        Self::load_from_file_paths(&paths)
    }

    fn is_directory_record(object: &FileDicomObject<InMemDicomObject>) -> bool {
        object
            .meta()
            .media_storage_sop_class_uid()
            .trim_end_matches('\0')
            == uids::MEDIA_STORAGE_DIRECTORY_STORAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::test_utils::InstanceBuilder;
    use dicom::core::VR;

    fn instance(series_uid: &str, sop_instance_uid: &str) -> DicomInstance {
        InstanceBuilder::new()
            .text(tags::SERIES_INSTANCE_UID, VR::UI, series_uid)
            .text(tags::SOP_INSTANCE_UID, VR::UI, sop_instance_uid)
            .text(tags::SOP_CLASS_UID, VR::UI, uids::CT_IMAGE_STORAGE)
            .text(tags::MODALITY, VR::CS, "CT")
            .build()
    }

    #[test]
    fn groups_by_series_instance_uid() {
        let series_list = SeriesLoader::load_from_instances([
            instance("1.2.1", "1.2.1.1"),
            instance("1.2.2", "1.2.2.1"),
            instance("1.2.1", "1.2.1.2"),
            instance("1.2.1", "1.2.1.1"),
        ])
        .unwrap();

        assert_eq!(series_list.len(), 2);
        assert_eq!(series_list[0].instance_uid(), Some("1.2.1"));
        assert_eq!(series_list[0].number_of_instances(), 2);
        assert_eq!(series_list[0].modality(), Some("CT"));
        assert!(series_list[0].sop_class_uids().contains(uids::CT_IMAGE_STORAGE));
        assert_eq!(series_list[1].len(), 1);
    }

    #[test]
    fn nothing_to_load() {
        assert!(matches!(
            SeriesLoader::load_from_instances(Vec::new()),
            Err(SeriesLoaderError::NoValidInstances)
        ));
    }
}
