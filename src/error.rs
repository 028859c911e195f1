use dicom::core::Tag;
use thiserror::Error;

/// Failure channel shared by every filter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("{filter}: filter requires a configuration before it can be applied")]
    Configuration { filter: String },

    #[error("{filter}: unable to read tag {tag} on every instance")]
    MissingTag { filter: String, tag: Tag },

    #[error("{filter}: unable to sort instances, {reason}")]
    AmbiguousOrder { filter: String, reason: String },

    /// A tag is present but cannot be converted, or a user-defined filter failed
    #[error("{0}")]
    Collaborator(String),
}

impl FilterError {
    pub(crate) fn configuration(filter: &str) -> Self {
        Self::Configuration {
            filter: filter.to_owned(),
        }
    }

    pub(crate) fn missing_tag(filter: &str, tag: Tag) -> Self {
        Self::MissingTag {
            filter: filter.to_owned(),
            tag,
        }
    }

    pub(crate) fn ambiguous_order(filter: &str, reason: &str) -> Self {
        Self::AmbiguousOrder {
            filter: filter.to_owned(),
            reason: reason.to_owned(),
        }
    }
}
