use thiserror::Error;

/// Everything that can reject a knapsack instance or a submitted selection.
///
/// All variants are raised before any table is allocated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KnapsackError {
    #[error("capacity must be non-negative, got {0}")]
    NegativeCapacity(i64),
    #[error("item {code} has negative weight {weight}")]
    NegativeWeight { code: String, weight: i64 },
    #[error("item {code} has negative value {value}")]
    NegativeValue { code: String, value: i64 },
    #[error("item code must not be empty (item #{index})")]
    EmptyCode { index: usize },
    #[error("item code {0} appears more than once")]
    DuplicateCode(String),
    #[error("{what} out of range (max {max})")]
    Overflow { what: &'static str, max: u64 },
    #[error("table of {rows} x {cols} cells exceeds the limit of {max} cells")]
    TableTooLarge { rows: usize, cols: usize, max: usize },
    #[error("exhaustive search supports at most {max} items, got {num_items}")]
    TooManyItems { num_items: usize, max: usize },
    #[error("invalid track: {0}")]
    InvalidTrack(String),
    #[error("item ({0}) is not part of the instance")]
    UnknownItem(String),
    #[error("item ({0}) selected more than once")]
    DuplicateSelection(String),
    #[error("total weight ({total_weight}) exceeded capacity ({capacity})")]
    Overweight { total_weight: u64, capacity: u64 },
}
