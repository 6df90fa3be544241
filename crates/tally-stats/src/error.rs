/// Errors reported by [`Dataset`](crate::dataset::Dataset) queries and by
/// the parsers of statistical parameters.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum StatsError {
    /// The query needs at least one sample but the dataset is empty.
    #[display("dataset is empty")]
    EmptyDataset,
    /// The query needs more samples than the dataset holds.
    #[display("insufficient data: {required} samples required, {actual} available")]
    InsufficientData { required: usize, actual: usize },
    /// An outlier policy or confidence level that is not recognized.
    #[display("invalid {name}: '{value}'")]
    InvalidArgument { name: &'static str, value: String },
}

impl StatsError {
    pub(crate) fn invalid_argument(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            value: value.into(),
        }
    }
}
