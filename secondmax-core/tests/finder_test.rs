//! Integration tests: reference behavior of both finders, pinned case by case.

use std::io::Write;

use secondmax_core::{
    second_for, second_largest, second_sort, ConfigError, FinderConfig, FinderError,
    LinearSecondFinder, OracleCheck, SentinelMode, SortSecondFinder, TiePolicy, Verdict,
};

// ── Reference cases ──────────────────────────────────────────────────

#[test]
fn unsorted_distinct_input_agrees() {
    let values = [3, 1, 4, 1, 5, 9, 2, 6];
    assert_eq!(second_for(&values), 6);
    assert_eq!(second_sort(&values), Ok(6));
}

#[test]
fn empty_input() {
    assert_eq!(second_for::<i32>(&[]), -1);
    assert_eq!(
        second_sort::<i32>(&[]),
        Err(FinderError::IndexOutOfRange { len: 0 })
    );
}

#[test]
fn single_element() {
    assert_eq!(second_for(&[7]), -1);
    assert_eq!(
        second_sort(&[7]),
        Err(FinderError::IndexOutOfRange { len: 1 })
    );
}

#[test]
fn tie_divergence_under_distinct_policy() {
    let distinct = LinearSecondFinder::new(FinderConfig::reference().with_ties(TiePolicy::Distinct));
    let linear = distinct.find_or_sentinel(&[5, 5]);
    let oracle = second_sort(&[5, 5]).unwrap();
    assert_eq!(linear, -1);
    assert_eq!(oracle, 5);
    assert_ne!(linear, oracle);
}

#[test]
fn tie_agreement_under_positional_policy() {
    assert_eq!(second_for(&[5, 5]), 5);
    assert_eq!(second_sort(&[5, 5]), Ok(5));
}

#[test]
fn sentinel_corrupts_negative_input() {
    assert_eq!(second_for(&[-5, -3]), -1);
    assert_eq!(second_sort(&[-5, -3]), Ok(-5));
}

#[test]
fn floor_sentinel_fixes_negative_input() {
    let finder = LinearSecondFinder::new(FinderConfig::floor());
    assert_eq!(finder.find_or_sentinel(&[-5, -3]), -5);
    assert_eq!(second_largest(&[-5, -3], TiePolicy::Positional), Some(-5));
}

#[test]
fn float_input() {
    assert_eq!(second_for(&[2.5, -1.5, 9.0]), 2.5);
    assert_eq!(SortSecondFinder::new().find(&[2.5, -1.5, 9.0]), Ok(2.5));
}

// ── Oracle check ─────────────────────────────────────────────────────

#[test]
fn oracle_report_serializes_with_verdict_tag() {
    let check = OracleCheck::new(FinderConfig::reference().with_ties(TiePolicy::Distinct));
    let report = check.run(&[5, 5]);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["len"], 2);
    assert_eq!(json["config"]["ties"], "distinct");
    assert_eq!(json["verdict"]["verdict"], "diverge");
    assert_eq!(json["verdict"]["linear"], -1);
    assert_eq!(json["verdict"]["oracle"], 5);
}

#[test]
fn oracle_failure_carries_error() {
    let report = OracleCheck::default().run::<i64>(&[]);
    match report.verdict {
        Verdict::OracleFailed { linear, error } => {
            assert_eq!(linear, -1);
            assert_eq!(error, FinderError::IndexOutOfRange { len: 0 });
        }
        other => panic!("expected OracleFailed, got {other:?}"),
    }

    let json = serde_json::to_value(OracleCheck::default().run(&[1])).unwrap();
    assert_eq!(json["verdict"]["error"]["kind"], "index_out_of_range");
}

// ── Config loading ───────────────────────────────────────────────────

#[test]
fn config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ties = \"distinct\"").unwrap();
    writeln!(file, "sentinel = \"floor\"").unwrap();

    let config = FinderConfig::from_file(file.path()).unwrap();
    assert_eq!(config.ties, TiePolicy::Distinct);
    assert_eq!(config.sentinel, SentinelMode::Floor);

    let finder = LinearSecondFinder::new(config);
    assert_eq!(finder.find_or_sentinel::<i64>(&[-4, -4]), i64::MIN);
    assert_eq!(finder.find_or_sentinel::<i64>(&[-4, -4, -9]), -9);
}

#[test]
fn config_from_file_rejects_bad_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "sentinel = 3").unwrap();

    let err = FinderConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn config_json_form() {
    let json = serde_json::to_string(&FinderConfig::reference()).unwrap();
    assert_eq!(json, r#"{"ties":"positional","sentinel":"reference"}"#);
}
