mod dataset;
mod error;
mod item;
mod selection;
mod table;
mod validation;

pub use dataset::*;
pub use error::KnapsackError;
pub use item::Item;
pub use selection::{SelectionResult, TraceEntry};
pub use table::{DpTable, TablePreview};
pub use validation::{validate, Validation};

use log::debug;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::{from_value, Map, Value};
use std::collections::HashSet;

/// Upper bound on `(n + 1) * (capacity + 1)` for the dynamic program.
pub const MAX_TABLE_CELLS: usize = 1 << 26;

/// Parameters for seeded instance generation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub num_items: usize,
    pub max_weight: u64,
    pub max_value: u64,
    /// Capacity as a percentage of the summed weights.
    pub capacity_percent: u32,
}

impl Default for Track {
    fn default() -> Self {
        Self {
            num_items: 10,
            max_weight: 10,
            max_value: 50,
            capacity_percent: 40,
        }
    }
}

/// A submitted selection, by item code.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    pub items: Vec<String>,
}

impl Solution {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl TryFrom<Map<String, Value>> for Solution {
    type Error = serde_json::Error;

    fn try_from(v: Map<String, Value>) -> Result<Self, Self::Error> {
        from_value(Value::Object(v))
    }
}

impl From<&SelectionResult> for Solution {
    fn from(result: &SelectionResult) -> Self {
        Self {
            items: result
                .chosen_items
                .iter()
                .map(|item| item.code().to_string())
                .collect(),
        }
    }
}

/// An ordered item set together with the capacity it is packed under.
/// Only constructible through validating constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub(crate) items: Vec<Item>,
    pub(crate) capacity: u64,
}

impl Challenge {
    pub fn new(items: Vec<Item>, capacity: i64) -> Result<Self, KnapsackError> {
        let capacity =
            u64::try_from(capacity).map_err(|_| KnapsackError::NegativeCapacity(capacity))?;
        Self::with_items(items, capacity)
    }

    pub fn with_items(items: Vec<Item>, capacity: u64) -> Result<Self, KnapsackError> {
        let mut codes = HashSet::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if item.code().is_empty() {
                return Err(KnapsackError::EmptyCode { index });
            }
            if !codes.insert(item.code()) {
                return Err(KnapsackError::DuplicateCode(item.code().to_string()));
            }
        }
        // Every subset sum is bounded by these totals, so no solver can
        // overflow once they fit.
        checked_total(&items, Item::weight, "weights")?;
        checked_total(&items, Item::value, "values")?;
        Ok(Self { items, capacity })
    }

    /// Same items packed under a different capacity.
    pub fn with_capacity(&self, capacity: u64) -> Self {
        Self {
            items: self.items.clone(),
            capacity,
        }
    }

    /// Same capacity with the item at `index` dropped.
    pub fn without_item(&self, index: usize) -> Self {
        let mut items = self.items.clone();
        if index < items.len() {
            items.remove(index);
        }
        Self {
            items,
            capacity: self.capacity,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    pub fn item(&self, code: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.code() == code)
    }

    pub fn total_weight(&self) -> u64 {
        self.items.iter().map(Item::weight).sum()
    }

    pub fn total_value(&self) -> u64 {
        self.items.iter().map(Item::value).sum()
    }

    /// Rows and columns of the dynamic-programming table, checked against
    /// [`MAX_TABLE_CELLS`] before anything is allocated.
    pub fn table_dims(&self) -> Result<(usize, usize), KnapsackError> {
        let rows = self.items.len() + 1;
        let cols = usize::try_from(self.capacity)
            .ok()
            .and_then(|c| c.checked_add(1));
        match cols.and_then(|cols| rows.checked_mul(cols).map(|cells| (cols, cells))) {
            Some((cols, cells)) if cells <= MAX_TABLE_CELLS => Ok((rows, cols)),
            _ => Err(KnapsackError::TableTooLarge {
                rows,
                cols: cols.unwrap_or(usize::MAX),
                max: MAX_TABLE_CELLS,
            }),
        }
    }

    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<Self, KnapsackError> {
        if track.max_weight == 0 || track.max_value == 0 {
            return Err(KnapsackError::InvalidTrack(
                "max_weight and max_value must be at least 1".to_string(),
            ));
        }
        if track.capacity_percent > 100 {
            return Err(KnapsackError::InvalidTrack(format!(
                "capacity_percent ({}) must be at most 100",
                track.capacity_percent
            )));
        }
        let mut rng = SmallRng::from_seed(*seed);

        let items: Vec<Item> = (0..track.num_items)
            .map(|i| {
                let weight = rng.gen_range(1..=track.max_weight);
                let value = rng.gen_range(1..=track.max_value);
                Item::new(format!("K{}", i + 1), format!("Item {}", i + 1), weight, value)
            })
            .collect();

        let total_weight = checked_total(&items, Item::weight, "weights")?;
        let capacity = (total_weight as u128 * track.capacity_percent as u128 / 100) as u64;
        debug!(
            "generated {} items, total weight {}, capacity {}",
            items.len(),
            total_weight,
            capacity
        );

        Self::with_items(items, capacity)
    }

    /// Checks a submitted selection and returns its sums. Items come back in
    /// instance order regardless of the order they were submitted in.
    pub fn verify_solution(&self, solution: &Solution) -> Result<SelectionResult, KnapsackError> {
        let mut selected = HashSet::with_capacity(solution.items.len());
        for code in &solution.items {
            if self.item(code).is_none() {
                return Err(KnapsackError::UnknownItem(code.clone()));
            }
            if !selected.insert(code.as_str()) {
                return Err(KnapsackError::DuplicateSelection(code.clone()));
            }
        }

        let result = SelectionResult::from_items(
            self.items
                .iter()
                .filter(|item| selected.contains(item.code()))
                .cloned()
                .collect(),
        );
        if result.total_weight > self.capacity {
            return Err(KnapsackError::Overweight {
                total_weight: result.total_weight,
                capacity: self.capacity,
            });
        }
        Ok(result)
    }
}

fn checked_total(
    items: &[Item],
    field: fn(&Item) -> u64,
    what: &'static str,
) -> Result<u64, KnapsackError> {
    items
        .iter()
        .try_fold(0u64, |acc, item| acc.checked_add(field(item)))
        .ok_or(KnapsackError::Overflow {
            what,
            max: u64::MAX,
        })
}
