use std::fmt;

/// Family a filter belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterType {
    /// One series in, one or more series out
    Splitter,
    /// Reorders the instances of a series
    Sorter,
    /// Annotates series-level metadata
    Modifier,
    /// Ordered chain of child filters
    Composite,
    /// Dispatching filters with their own policy
    Custom,
}

/// Failure policy used when a chain of filters is applied
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    /// The first failure aborts the whole chain
    #[default]
    Strict,
    /// A failing filter is skipped for the series it failed on
    Tolerant,
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FilterType::Splitter => "splitter",
            FilterType::Sorter => "sorter",
            FilterType::Modifier => "modifier",
            FilterType::Composite => "composite",
            FilterType::Custom => "custom",
        };
        f.write_str(label)
    }
}
