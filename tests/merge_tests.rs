use kitledger::models::{History, KitCalculation, UserDatabase, UserRecord};
use kitledger::store::merge::merge;

fn calc(kit_number: &str, timestamp: &str) -> KitCalculation {
    let raw = 10_000_000_000i64 - kit_number.parse::<i64>().unwrap();
    KitCalculation {
        kit_number: kit_number.to_string(),
        raw_result: raw.to_string(),
        padded_result: format!("{:08}", raw),
        timestamp: timestamp.to_string(),
    }
}

fn user(hash: &str, calcs: Vec<KitCalculation>) -> UserRecord {
    UserRecord {
        password_hash: hash.to_string(),
        history: History {
            kit_calculations: calcs,
            phone_generations: Vec::new(),
        },
    }
}

#[test]
fn test_merge_concatenates_baseline_first() {
    let mut baseline = UserDatabase::new();
    baseline.insert(
        "alice".to_string(),
        user(
            "basehash",
            vec![
                calc("9999999999", "2025-01-01 10:00:00"),
                calc("9999999998", "2025-01-01 11:00:00"),
            ],
        ),
    );

    let mut overlay = UserDatabase::new();
    overlay.insert(
        "alice".to_string(),
        user("overlayhash", vec![calc("9999999997", "2025-01-02 09:00:00")]),
    );

    let merged = merge(baseline, overlay);
    let alice = &merged["alice"];

    assert_eq!(alice.history.kit_calculations.len(), 3);
    assert_eq!(alice.history.kit_calculations[0].kit_number, "9999999999");
    assert_eq!(alice.history.kit_calculations[1].kit_number, "9999999998");
    assert_eq!(alice.history.kit_calculations[2].kit_number, "9999999997");
    // the baseline branch keeps its password hash
    assert_eq!(alice.password_hash, "basehash");
}

#[test]
fn test_merge_adopts_overlay_only_user() {
    let baseline = UserDatabase::new();

    let mut overlay = UserDatabase::new();
    overlay.insert(
        "carol".to_string(),
        user("carolhash", vec![calc("9999999999", "2025-01-01 10:00:00")]),
    );

    let merged = merge(baseline, overlay.clone());
    assert_eq!(merged, overlay);
}

#[test]
fn test_merge_drops_exact_duplicates() {
    // overlay holding rows already promoted from the baseline must not
    // double them on the next load
    let shared = calc("9999999999", "2025-01-01 10:00:00");

    let mut baseline = UserDatabase::new();
    baseline.insert("alice".to_string(), user("basehash", vec![shared.clone()]));

    let mut overlay = UserDatabase::new();
    overlay.insert(
        "alice".to_string(),
        user(
            "basehash",
            vec![shared.clone(), calc("9999999998", "2025-01-01 11:00:00")],
        ),
    );

    let merged = merge(baseline, overlay);
    assert_eq!(merged["alice"].history.kit_calculations.len(), 2);
}

#[test]
fn test_merge_is_stable_under_reload() {
    let mut baseline = UserDatabase::new();
    baseline.insert(
        "alice".to_string(),
        user("basehash", vec![calc("9999999999", "2025-01-01 10:00:00")]),
    );

    let mut overlay = UserDatabase::new();
    overlay.insert(
        "alice".to_string(),
        user("basehash", vec![calc("9999999998", "2025-01-01 11:00:00")]),
    );

    // first load, then persist the merged database as the new overlay
    // and load again: nothing may change
    let first = merge(baseline.clone(), overlay);
    let second = merge(baseline, first.clone());
    assert_eq!(first, second);
}
