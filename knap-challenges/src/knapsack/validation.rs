use serde::{Deserialize, Serialize};

/// True iff the dynamic program and the exhaustive search agree on the
/// optimum.
pub fn validate(dp_value: u64, brute_force_value: u64) -> bool {
    dp_value == brute_force_value
}

/// Outcome of cross-checking the two solvers. A disagreement is reported
/// here, it is never raised as an error.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    pub dp_value: u64,
    pub brute_force_value: u64,
    pub agreed: bool,
}

impl Validation {
    pub fn new(dp_value: u64, brute_force_value: u64) -> Self {
        Self {
            dp_value,
            brute_force_value,
            agreed: validate(dp_value, brute_force_value),
        }
    }
}
