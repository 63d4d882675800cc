//! Exhaustive search over every subset, used to check the dynamic program
//! on small instances.
//!
//! Subsets are enumerated as bitmasks `0..2^n` where bit `i` selects item
//! `i`. A subset only replaces the incumbent when its value is strictly
//! greater, so among tied optima the lowest mask wins.

use knap_challenges::knapsack::*;
use log::{debug, warn};

/// Widest instance the `u64` bitmask can enumerate.
pub const MAX_ITEMS: usize = 63;

/// Past this many items a full enumeration takes noticeably long.
pub const SLOW_ITEMS: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BruteForceSolution {
    pub result: SelectionResult,
    pub subsets_examined: u64,
}

pub fn solve_challenge(challenge: &Challenge) -> Result<BruteForceSolution, KnapsackError> {
    let items = challenge.items();
    let num_items = items.len();
    if num_items > MAX_ITEMS {
        return Err(KnapsackError::TooManyItems {
            num_items,
            max: MAX_ITEMS,
        });
    }
    if num_items > SLOW_ITEMS {
        warn!(
            "exhaustive search over {} items enumerates 2^{} subsets",
            num_items, num_items
        );
    }

    let capacity = challenge.capacity();
    let mut best_value = 0u64;
    let mut best_mask = 0u64;
    let mut subsets_examined = 0u64;

    for mask in 0..(1u64 << num_items) {
        subsets_examined += 1;
        let (weight, value) = subset_totals(items, mask);
        if weight <= capacity && value > best_value {
            best_value = value;
            best_mask = mask;
        }
    }
    debug!(
        "exhaustive search examined {} subsets, best value {}",
        subsets_examined, best_value
    );

    let chosen_items = items
        .iter()
        .enumerate()
        .filter(|&(i, _)| (best_mask >> i) & 1 == 1)
        .map(|(_, item)| item.clone())
        .collect();

    Ok(BruteForceSolution {
        result: SelectionResult::from_items(chosen_items),
        subsets_examined,
    })
}

fn subset_totals(items: &[Item], mask: u64) -> (u64, u64) {
    items
        .iter()
        .enumerate()
        .filter(|&(i, _)| (mask >> i) & 1 == 1)
        .fold((0, 0), |(weight, value), (_, item)| {
            (weight + item.weight(), value + item.value())
        })
}
