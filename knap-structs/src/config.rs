use crate::serializable_struct_with_getters;
use knap_challenges::knapsack::{warehouse_challenge, Challenge, Item, KnapsackError};
use serde::{Deserialize, Serialize};

// Numbers are signed so that negative input reaches validation instead of
// failing to parse.
serializable_struct_with_getters! {
    ItemConfig {
        code: String,
        name: String,
        weight: i64,
        value: i64,
    }
}
serializable_struct_with_getters! {
    RunConfig {
        capacity: i64,
        items: Vec<ItemConfig>,
    }
}

impl RunConfig {
    /// The built-in warehouse data set.
    pub fn warehouse() -> Self {
        let challenge = warehouse_challenge();
        Self {
            capacity: challenge.capacity() as i64,
            items: challenge
                .items()
                .iter()
                .map(|item| ItemConfig {
                    code: item.code().to_string(),
                    name: item.name().to_string(),
                    weight: item.weight() as i64,
                    value: item.value() as i64,
                })
                .collect(),
        }
    }

    pub fn from_challenge(challenge: &Challenge) -> Result<Self, KnapsackError> {
        Ok(Self {
            capacity: to_signed(challenge.capacity(), "capacity")?,
            items: challenge
                .items()
                .iter()
                .map(|item| {
                    Ok(ItemConfig {
                        code: item.code().to_string(),
                        name: item.name().to_string(),
                        weight: to_signed(item.weight(), "weights")?,
                        value: to_signed(item.value(), "values")?,
                    })
                })
                .collect::<Result<Vec<_>, KnapsackError>>()?,
        })
    }

    pub fn to_challenge(&self) -> Result<Challenge, KnapsackError> {
        let items = self
            .items
            .iter()
            .map(|item| {
                Item::try_new(
                    item.code.as_str(),
                    item.name.as_str(),
                    item.weight,
                    item.value,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Challenge::new(items, self.capacity)
    }
}

fn to_signed(value: u64, what: &'static str) -> Result<i64, KnapsackError> {
    i64::try_from(value).map_err(|_| KnapsackError::Overflow {
        what,
        max: i64::MAX as u64,
    })
}
