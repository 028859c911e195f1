use crate::{
    enums::ApplyMode, error::FilterError, filter::Filter, logger::FilterLogger,
    series::DicomSeries,
};

/// Apply `filter` to every series of `series_list`, replacing the list with
/// the concatenated results.
///
/// In strict mode the first failure is returned and the list is left as it
/// was. In tolerant mode a series the filter fails on is kept unchanged and
/// the failure is logged as information.
///
/// # Errors
///
/// Returns the first [`FilterError`] in strict mode. In tolerant mode only
/// configuration errors are returned.
pub fn apply_filter(
    series_list: &mut Vec<DicomSeries>,
    filter: &dyn Filter,
    mode: ApplyMode,
    logger: &dyn FilterLogger,
) -> Result<(), FilterError> {
    let mut result = Vec::with_capacity(series_list.len());

    for series in series_list.iter() {
        match (filter.apply(series, logger), mode) {
            (Ok(produced), _) => result.extend(produced),
            (Err(error), ApplyMode::Strict) => return Err(error),
            (Err(error @ FilterError::Configuration { .. }), ApplyMode::Tolerant) => {
                return Err(error);
            }
            (Err(error), ApplyMode::Tolerant) => {
                logger.information(&format!(
                    "Filter \"{}\" has been skipped: {error}",
                    filter.name()
                ));
                result.push(series.clone());
            }
        }
    }

    *series_list = result;
    Ok(())
}

/// Apply several filters in order with [`apply_filter`].
///
/// # Errors
///
/// Stops at the first error [`apply_filter`] returns; the filters applied
/// before it have already replaced the list.
pub fn apply_filters(
    series_list: &mut Vec<DicomSeries>,
    filters: &[Box<dyn Filter>],
    mode: ApplyMode,
    logger: &dyn FilterLogger,
) -> Result<(), FilterError> {
    for filter in filters {
        apply_filter(series_list, filter.as_ref(), mode, logger)?;
    }
    Ok(())
}
