use crate::serializable_struct_with_getters;
use knap_challenges::knapsack::{Item, SelectionResult, TablePreview, TraceEntry, Validation};
use knap_utils::{jsonify, u64s_from_str};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

serializable_struct_with_getters! {
    SolverReport {
        optimal_value: u64,
        total_weight: u64,
        items: Vec<String>,
        elapsed_ms: f64,
    }
}
impl SolverReport {
    pub fn new(result: &SelectionResult, elapsed: Duration) -> Self {
        Self {
            optimal_value: result.optimal_value,
            total_weight: result.total_weight,
            items: result
                .chosen_items
                .iter()
                .map(|item| item.code().to_string())
                .collect(),
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }
}

serializable_struct_with_getters! {
    TablePreviewReport {
        rows: usize,
        cols: usize,
        preview: Vec<Vec<u64>>,
        truncated: bool,
    }
}
impl TablePreviewReport {
    pub fn new(rows: usize, cols: usize, preview: TablePreview) -> Self {
        Self {
            rows,
            cols,
            preview: preview.rows,
            truncated: preview.truncated,
        }
    }
}

serializable_struct_with_getters! {
    DpReport {
        solver: SolverReport,
        trace: Vec<TraceEntry>,
        table: TablePreviewReport,
    }
}
serializable_struct_with_getters! {
    BruteForceReport {
        solver: SolverReport,
        subsets_examined: u64,
    }
}
serializable_struct_with_getters! {
    OutputData {
        capacity: u64,
        items: Vec<Item>,
        dp: DpReport,
        brute_force: Option<BruteForceReport>,
        validation: Option<Validation>,
    }
}
impl OutputData {
    /// `None` when the exhaustive search was skipped.
    pub fn agreed(&self) -> Option<bool> {
        self.validation.map(|v| v.agreed)
    }

    /// Fingerprint of the solver outcomes. Timings are left out so repeated
    /// runs over the same input give the same signature.
    pub fn calc_result_signature(&self) -> serde_json::Result<u64> {
        let outcome = json!({
            "capacity": self.capacity,
            "items": self.items,
            "dp": {
                "optimal_value": self.dp.solver.optimal_value,
                "items": self.dp.solver.items,
                "trace": self.dp.trace,
            },
            "brute_force_value": self
                .brute_force
                .as_ref()
                .map(|b| b.solver.optimal_value),
        });
        Ok(u64s_from_str(&jsonify(&outcome)?)[0])
    }
}
