use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalyticsError {
    /// Averages over zero items are meaningless; callers must guard.
    #[error("Not enough data to perform calculation: {0}")]
    EmptyInput(&'static str),
}
