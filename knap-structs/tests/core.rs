use knap_challenges::knapsack::{warehouse_challenge, Item, SelectionResult, TablePreview, TraceEntry, Validation};
use knap_structs::core::*;
use knap_utils::{dejsonify, jsonify};
use std::time::Duration;

fn output_data(elapsed: Duration, brute_force_value: Option<u64>) -> OutputData {
    let challenge = warehouse_challenge();
    let chosen: Vec<Item> = ["K3", "K4", "K6", "K9"]
        .iter()
        .filter_map(|code| challenge.item(code).cloned())
        .collect();
    let result = SelectionResult::from_items(chosen);
    OutputData {
        capacity: challenge.capacity(),
        items: challenge.items().to_vec(),
        dp: DpReport {
            solver: SolverReport::new(&result, elapsed),
            trace: vec![TraceEntry::Take {
                item: Item::new("K3", "Cooking Oil 1 L", 2, 13),
                remaining_capacity: 0,
            }],
            table: TablePreviewReport::new(
                11,
                16,
                TablePreview {
                    rows: vec![vec![0; 16]],
                    truncated: true,
                },
            ),
        },
        brute_force: brute_force_value.map(|value| BruteForceReport {
            solver: SolverReport {
                optimal_value: value,
                total_weight: 15,
                items: vec![],
                elapsed_ms: 1.5,
            },
            subsets_examined: 1024,
        }),
        validation: brute_force_value.map(|value| Validation::new(result.optimal_value, value)),
    }
}

#[test]
fn test_solver_report() {
    let result = SelectionResult::from_items(vec![Item::new("K1", "Rice", 1, 7)]);
    let report = SolverReport::new(&result, Duration::from_micros(2500));
    assert_eq!(report.optimal_value, 7);
    assert_eq!(report.total_weight, 1);
    assert_eq!(report.items, vec!["K1"]);
    assert!((report.elapsed_ms - 2.5).abs() < 1e-9);
}

#[test]
fn test_agreed() {
    assert_eq!(output_data(Duration::ZERO, Some(95)).agreed(), Some(true));
    assert_eq!(output_data(Duration::ZERO, Some(90)).agreed(), Some(false));
    assert_eq!(output_data(Duration::ZERO, None).agreed(), None);
}

#[test]
fn test_optional_fields_are_omitted() {
    let data = output_data(Duration::ZERO, None);
    let json = jsonify(&data).unwrap();
    assert!(!json.contains("brute_force"));
    assert!(!json.contains("validation"));
    assert_eq!(data.brute_force(), None);

    let parsed: OutputData = dejsonify(&json).unwrap();
    assert_eq!(parsed, data);
}

#[test]
fn test_trace_is_tagged() {
    let json = jsonify(&output_data(Duration::ZERO, Some(95)).dp.trace).unwrap();
    assert_eq!(
        json,
        r#"[{"action":"take","item":{"code":"K3","name":"Cooking Oil 1 L","value":13,"weight":2},"remaining_capacity":0}]"#
    );
}

#[test]
fn test_result_signature_ignores_timings() {
    let fast = output_data(Duration::from_millis(1), Some(95));
    let slow = output_data(Duration::from_millis(900), Some(95));
    assert_eq!(
        fast.calc_result_signature().unwrap(),
        slow.calc_result_signature().unwrap()
    );

    let disagreeing = output_data(Duration::from_millis(1), Some(90));
    assert_ne!(
        fast.calc_result_signature().unwrap(),
        disagreeing.calc_result_signature().unwrap()
    );
}
