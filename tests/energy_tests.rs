use goodness::codes;
use goodness::energy::{energy, CollisionEvaluator, FileCodes, Objective};
use goodness::error::GoodnessError;
use goodness::state::ShiftState;
use goodness::table::TableSize;

fn sequential() -> Vec<u32> {
    (1..=1000).collect()
}

fn t1024() -> TableSize {
    TableSize::new(1024).unwrap()
}

#[test]
fn test_states_measurably_differ_on_sequential_codes() {
    let codes = sequential();
    // b = 0 cancels the code against itself, leaving only the high bits.
    let degenerate = ShiftState::new(20, 0, 1, 31);
    let spread = ShiftState::new(5, 10, 2, 23);

    assert_eq!(energy(&codes, &degenerate, t1024()), 999.0);
    assert_eq!(energy(&codes, &spread, t1024()), 0.0);
}

#[test]
fn test_energy_is_deterministic() {
    let codes: Vec<u32> = (0..5000u32).map(|i| i.wrapping_mul(2654435761)).collect();
    let table = TableSize::new(256).unwrap();
    for state in [ShiftState::BASELINE, ShiftState::new(3, 9, 17, 30)] {
        let first = energy(&codes, &state, table);
        for _ in 0..5 {
            assert_eq!(energy(&codes, &state, table), first);
        }
    }
}

#[test]
fn test_empty_codes() {
    for size in [1usize, 2, 1024, 1 << 20] {
        let table = TableSize::new(size).unwrap();
        assert_eq!(energy(&[], &ShiftState::BASELINE, table), 0.0);
        assert_eq!(energy(&[], &ShiftState::new(0, 0, 0, 0), table), 0.0);
    }
}

#[test]
fn test_energy_never_exceeds_code_count() {
    let codes = sequential();
    for size in [1usize, 16, 1024] {
        let e = energy(&codes, &ShiftState::BASELINE, TableSize::new(size).unwrap());
        assert!(e >= (codes.len().saturating_sub(size)) as f64);
        assert!(e <= (codes.len() - 1) as f64);
    }
}

#[test]
fn test_evaluator_does_not_touch_codes() {
    let codes = sequential();
    let eval = CollisionEvaluator::new(codes.clone(), t1024());
    let _ = eval.energy(&ShiftState::BASELINE).unwrap();
    assert_eq!(eval.codes(), codes.as_slice());
    assert_eq!(eval.table_size(), t1024());
}

#[test]
fn test_file_codes_match_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hashed");
    let codes = sequential();
    codes::write_codes_file(&path, &codes).unwrap();

    let from_file = FileCodes::new(&path, t1024());
    let in_memory = CollisionEvaluator::new(codes, t1024());
    for state in [ShiftState::BASELINE, ShiftState::new(20, 0, 1, 31)] {
        assert_eq!(
            from_file.energy(&state).unwrap(),
            in_memory.energy(&state).unwrap()
        );
    }
}

#[test]
fn test_unreadable_source_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does_not_exist");
    let err = FileCodes::new(&missing, t1024())
        .energy(&ShiftState::BASELINE)
        .unwrap_err();
    match err {
        GoodnessError::DataUnavailable { path, .. } => assert_eq!(path, missing),
        other => panic!("expected DataUnavailable, got {}", other),
    }
}
