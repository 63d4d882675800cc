use knap_challenges::knapsack::*;
use ndarray::array;
use serde_json::json;

#[test]
fn test_item_try_new_rejects_negative_numbers() {
    assert_eq!(
        Item::try_new("K1", "Rice", -1, 7),
        Err(KnapsackError::NegativeWeight {
            code: "K1".to_string(),
            weight: -1
        })
    );
    assert_eq!(
        Item::try_new("K1", "Rice", 1, -7),
        Err(KnapsackError::NegativeValue {
            code: "K1".to_string(),
            value: -7
        })
    );
    let item = Item::try_new("K1", "Rice", 0, 7).unwrap();
    assert_eq!(item.weight(), 0);
    assert_eq!(item.value(), 7);
}

#[test]
fn test_item_ratio() {
    assert_eq!(Item::new("K2", "Sugar", 4, 24).ratio(), 6.0);
    assert!(Item::new("K0", "Free sample", 0, 3).ratio().is_infinite());
}

#[test]
fn test_challenge_new_validates_input() {
    assert_eq!(
        Challenge::new(warehouse_items(), -1),
        Err(KnapsackError::NegativeCapacity(-1))
    );

    let mut items = warehouse_items();
    items.push(Item::new("K3", "Another oil", 2, 13));
    assert_eq!(
        Challenge::new(items, 15),
        Err(KnapsackError::DuplicateCode("K3".to_string()))
    );

    assert_eq!(
        Challenge::new(vec![Item::new("", "Nameless", 1, 1)], 15),
        Err(KnapsackError::EmptyCode { index: 0 })
    );

    let heavy = vec![
        Item::new("A", "a", u64::MAX, 1),
        Item::new("B", "b", 1, 1),
    ];
    assert!(matches!(
        Challenge::new(heavy, 15),
        Err(KnapsackError::Overflow { what: "weights", .. })
    ));

    let precious = vec![
        Item::new("A", "a", 1, u64::MAX),
        Item::new("B", "b", 1, 1),
    ];
    assert!(matches!(
        Challenge::new(precious, 15),
        Err(KnapsackError::Overflow { what: "values", .. })
    ));
}

#[test]
fn test_warehouse_challenge() {
    let challenge = warehouse_challenge();
    assert_eq!(challenge.num_items(), 10);
    assert_eq!(challenge.capacity(), WAREHOUSE_CAPACITY);
    assert_eq!(challenge.total_weight(), 40);
    assert_eq!(challenge.total_value(), 240);
    assert_eq!(challenge.item("K9").map(Item::value), Some(27));
    assert_eq!(challenge.table_dims(), Ok((11, 16)));
    assert_eq!(
        Challenge::new(warehouse_items(), WAREHOUSE_CAPACITY as i64),
        Ok(challenge)
    );
}

#[test]
fn test_table_dims_limit() {
    let challenge = warehouse_challenge().with_capacity(MAX_TABLE_CELLS as u64);
    assert!(matches!(
        challenge.table_dims(),
        Err(KnapsackError::TableTooLarge { rows: 11, .. })
    ));

    let challenge = warehouse_challenge().with_capacity(u64::MAX);
    assert!(challenge.table_dims().is_err());
}

#[test]
fn test_without_item() {
    let challenge = warehouse_challenge().without_item(0);
    assert_eq!(challenge.num_items(), 9);
    assert_eq!(challenge.items()[0].code(), "K2");
    assert_eq!(warehouse_challenge().without_item(99), warehouse_challenge());
}

#[test]
fn test_generate_instance_is_deterministic() {
    let track = Track {
        num_items: 12,
        max_weight: 20,
        max_value: 100,
        capacity_percent: 50,
    };
    let a = Challenge::generate_instance(&[7u8; 32], &track).unwrap();
    let b = Challenge::generate_instance(&[7u8; 32], &track).unwrap();
    let c = Challenge::generate_instance(&[8u8; 32], &track).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);

    assert_eq!(a.num_items(), 12);
    assert_eq!(a.capacity(), a.total_weight() / 2);
    for (i, item) in a.items().iter().enumerate() {
        assert_eq!(item.code(), format!("K{}", i + 1));
        assert!((1..=20).contains(&item.weight()));
        assert!((1..=100).contains(&item.value()));
    }
}

#[test]
fn test_generate_instance_rejects_bad_track() {
    let track = Track {
        max_weight: 0,
        ..Track::default()
    };
    assert!(matches!(
        Challenge::generate_instance(&[0u8; 32], &track),
        Err(KnapsackError::InvalidTrack(_))
    ));
    let track = Track {
        capacity_percent: 101,
        ..Track::default()
    };
    assert!(Challenge::generate_instance(&[0u8; 32], &track).is_err());
}

#[test]
fn test_verify_solution() {
    let challenge = warehouse_challenge();

    let solution = Solution {
        items: vec!["K9".into(), "K3".into(), "K6".into(), "K4".into()],
    };
    let result = challenge.verify_solution(&solution).unwrap();
    assert_eq!(result.optimal_value, 95);
    assert_eq!(result.total_weight, 15);
    assert_eq!(result.codes(), vec!["K3", "K4", "K6", "K9"]);

    let empty = challenge.verify_solution(&Solution::new()).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.optimal_value, 0);

    assert_eq!(
        challenge.verify_solution(&Solution {
            items: vec!["K11".into()]
        }),
        Err(KnapsackError::UnknownItem("K11".to_string()))
    );
    assert_eq!(
        challenge.verify_solution(&Solution {
            items: vec!["K1".into(), "K1".into()]
        }),
        Err(KnapsackError::DuplicateSelection("K1".to_string()))
    );
    assert_eq!(
        challenge.verify_solution(&Solution {
            items: vec!["K4".into(), "K7".into(), "K10".into()]
        }),
        Err(KnapsackError::Overweight {
            total_weight: 19,
            capacity: 15
        })
    );
}

#[test]
fn test_solution_from_json_map() {
    let map = json!({ "items": ["K1", "K2"] })
        .as_object()
        .unwrap()
        .to_owned();
    let solution = Solution::try_from(map).unwrap();
    assert_eq!(solution.items, vec!["K1", "K2"]);

    let bad = json!({ "items": [1, 2] }).as_object().unwrap().to_owned();
    assert!(Solution::try_from(bad).is_err());
}

#[test]
fn test_selection_result_from_items() {
    let result = SelectionResult::from_items(vec![
        Item::new("K1", "Rice", 1, 7),
        Item::new("K3", "Oil", 2, 13),
    ]);
    assert_eq!(result.optimal_value, 20);
    assert_eq!(result.total_weight, 3);
    assert_eq!(Solution::from(&result).items, vec!["K1", "K3"]);
}

#[test]
fn test_trace_entry_display() {
    let take = TraceEntry::Take {
        item: Item::new("K3", "Oil", 2, 13),
        remaining_capacity: 0,
    };
    let skip = TraceEntry::Skip {
        item: Item::new("K1", "Rice", 1, 7),
        capacity: 0,
    };
    assert!(take.is_take());
    assert!(!skip.is_take());
    assert_eq!(skip.item().code(), "K1");
    assert_eq!(take.to_string(), "take K3 (w=2, v=13) -> remaining capacity 0");
    assert_eq!(skip.to_string(), "skip K1 (w=1, v=7) -> capacity unchanged 0");
}

#[test]
fn test_dp_table_preview() {
    let table = DpTable::new(array![[0, 0, 0], [0, 7, 7], [0, 7, 13]]);
    assert_eq!(table.rows(), 3);
    assert_eq!(table.cols(), 3);
    assert_eq!(table.optimal_value(), 13);
    assert_eq!(table.get(1, 2), Some(7));
    assert_eq!(table.get(3, 0), None);

    let preview = table.preview(2, 5);
    assert_eq!(preview.rows, vec![vec![0, 0, 0], vec![0, 7, 7]]);
    assert!(preview.truncated);
    assert!(!table.preview(3, 3).truncated);
}

#[test]
fn test_validate() {
    assert!(validate(95, 95));
    assert!(!validate(95, 90));

    let validation = Validation::new(0, 0);
    assert!(validation.agreed);
    let validation = Validation::new(95, 94);
    assert!(!validation.agreed);
    assert_eq!(validation.brute_force_value, 94);
}
