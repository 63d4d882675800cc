//! Exact 0/1 knapsack by the classic `(n + 1) x (W + 1)` table.
//!
//! Alongside the value table a decision table records, per cell, whether
//! taking the row's item strictly beat leaving it out. The selection is
//! read back from the decision table, never re-derived from values.

use knap_challenges::knapsack::*;
use log::{debug, trace};
use ndarray::Array2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpSolution {
    pub table: DpTable,
    pub result: SelectionResult,
    /// Backtracking steps in item order.
    pub trace: Vec<TraceEntry>,
}

pub fn solve_challenge(challenge: &Challenge) -> Result<DpSolution, KnapsackError> {
    let (rows, cols) = challenge.table_dims()?;
    debug!("dynamic programming over a {} x {} table", rows, cols);

    let items = challenge.items();
    let mut dp = Array2::<u64>::zeros((rows, cols));
    let mut take = Array2::from_elem((rows, cols), false);

    for i in 1..rows {
        let item = &items[i - 1];
        for cap in 0..cols {
            dp[[i, cap]] = dp[[i - 1, cap]];
            if let Some(rest) = (cap as u64).checked_sub(item.weight()) {
                let candidate = dp[[i - 1, rest as usize]] + item.value();
                // Strictly greater: on a tie the item stays out.
                if candidate > dp[[i, cap]] {
                    dp[[i, cap]] = candidate;
                    take[[i, cap]] = true;
                }
            }
        }
    }

    let table = DpTable::new(dp);
    let (chosen_items, trace) = backtrack(items, &take, cols - 1);
    let total_weight = chosen_items.iter().map(Item::weight).sum();
    let result = SelectionResult {
        optimal_value: table.optimal_value(),
        chosen_items,
        total_weight,
    };
    debug_assert_eq!(
        result.optimal_value,
        result.chosen_items.iter().map(Item::value).sum::<u64>()
    );

    Ok(DpSolution {
        table,
        result,
        trace,
    })
}

fn backtrack(items: &[Item], take: &Array2<bool>, capacity: usize) -> (Vec<Item>, Vec<TraceEntry>) {
    let mut cap = capacity;
    let mut chosen = Vec::new();
    let mut steps = Vec::with_capacity(items.len());

    for i in (1..=items.len()).rev() {
        let item = &items[i - 1];
        let step = if take[[i, cap]] {
            // A set decision implies the weight fit into `cap`.
            cap -= item.weight() as usize;
            chosen.push(item.clone());
            TraceEntry::Take {
                item: item.clone(),
                remaining_capacity: cap as u64,
            }
        } else {
            TraceEntry::Skip {
                item: item.clone(),
                capacity: cap as u64,
            }
        };
        trace!("{}", step);
        steps.push(step);
    }

    // The walk runs from the last item to the first.
    chosen.reverse();
    steps.reverse();
    (chosen, steps)
}
