use super::Item;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The items a solver picked, in instance order, with their sums.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionResult {
    pub optimal_value: u64,
    pub chosen_items: Vec<Item>,
    pub total_weight: u64,
}

impl SelectionResult {
    pub fn from_items(chosen_items: Vec<Item>) -> Self {
        let optimal_value = chosen_items.iter().map(Item::value).sum();
        let total_weight = chosen_items.iter().map(Item::weight).sum();
        Self {
            optimal_value,
            chosen_items,
            total_weight,
        }
    }

    pub fn codes(&self) -> Vec<&str> {
        self.chosen_items.iter().map(Item::code).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen_items.is_empty()
    }
}

/// One step of the backtracking walk.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TraceEntry {
    /// The item is in the selection; `remaining_capacity` is what is left
    /// after taking it.
    Take { item: Item, remaining_capacity: u64 },
    /// The item is left out; capacity is unchanged.
    Skip { item: Item, capacity: u64 },
}

impl TraceEntry {
    pub fn item(&self) -> &Item {
        match self {
            TraceEntry::Take { item, .. } | TraceEntry::Skip { item, .. } => item,
        }
    }

    pub fn is_take(&self) -> bool {
        matches!(self, TraceEntry::Take { .. })
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEntry::Take {
                item,
                remaining_capacity,
            } => write!(
                f,
                "take {} (w={}, v={}) -> remaining capacity {}",
                item.code(),
                item.weight(),
                item.value(),
                remaining_capacity
            ),
            TraceEntry::Skip { item, capacity } => write!(
                f,
                "skip {} (w={}, v={}) -> capacity unchanged {}",
                item.code(),
                item.weight(),
                item.value(),
                capacity
            ),
        }
    }
}
