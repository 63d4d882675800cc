use super::KnapsackError;
use serde::{Deserialize, Serialize};

/// A single candidate for the knapsack. Items are never mutated once built.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    code: String,
    name: String,
    weight: u64,
    value: u64,
}

impl Item {
    pub fn new(code: impl Into<String>, name: impl Into<String>, weight: u64, value: u64) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            weight,
            value,
        }
    }

    /// Builds an item from untrusted signed input, rejecting negative numbers
    /// instead of wrapping them.
    pub fn try_new(
        code: impl Into<String>,
        name: impl Into<String>,
        weight: i64,
        value: i64,
    ) -> Result<Self, KnapsackError> {
        let code = code.into();
        let weight = u64::try_from(weight).map_err(|_| KnapsackError::NegativeWeight {
            code: code.clone(),
            weight,
        })?;
        let value = u64::try_from(value).map_err(|_| KnapsackError::NegativeValue {
            code: code.clone(),
            value,
        })?;
        Ok(Self::new(code, name, weight, value))
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Value per unit of weight. Display only, neither solver looks at it.
    pub fn ratio(&self) -> f64 {
        if self.weight == 0 {
            f64::INFINITY
        } else {
            self.value as f64 / self.weight as f64
        }
    }
}
