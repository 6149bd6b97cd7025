//! Integration tests running the builtin fixture set end to end.

use tamelibc_harness::{
    ConformanceReport, ConformanceSummary, builtin_fixtures, run_set,
};

#[test]
fn builtin_fixture_set_passes_completely() {
    let set = builtin_fixtures();
    let results = run_set(&set);
    assert_eq!(results.len(), set.cases.len());

    let failures: Vec<_> = results.iter().filter(|r| !r.passed).collect();
    assert!(failures.is_empty(), "failed cases: {failures:?}");
}

#[test]
fn builtin_fixture_set_survives_a_serialization_round_trip() {
    let set = builtin_fixtures();
    let json = set.to_json().expect("builtin set should serialize");
    let reparsed =
        tamelibc_harness::FixtureSet::from_json(&json).expect("round trip should parse");

    let summary = ConformanceSummary::from_results(run_set(&reparsed));
    assert!(summary.all_passed());
    assert_eq!(summary.total, set.cases.len());
}

#[test]
fn report_reflects_an_injected_failure() {
    let mut set = builtin_fixtures();
    set.cases[0].expected_output = String::from("<deliberately wrong>");

    let summary = ConformanceSummary::from_results(run_set(&set));
    assert_eq!(summary.failed, 1);
    assert!(!summary.all_passed());

    let report = ConformanceReport {
        title: String::from("injected failure"),
        timestamp: String::from("test"),
        summary,
    };
    assert!(report.to_markdown().contains("FAIL"));
}
