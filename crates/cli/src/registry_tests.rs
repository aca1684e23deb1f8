// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use yare::parameterized;

fn spec(name: &str, suite_type: SuiteType) -> SuiteSpec {
    SuiteSpec::new(name, suite_type, SuiteCommand::parse("true").unwrap())
}

// =============================================================================
// COMMANDS
// =============================================================================

#[test]
fn command_parse_splits_on_whitespace() {
    let cmd = SuiteCommand::parse("go test  ./operator/...   -v").unwrap();
    assert_eq!(cmd.program, "go");
    assert_eq!(cmd.args, vec!["test", "./operator/...", "-v"]);
}

#[test]
fn command_parse_rejects_blank_line() {
    assert!(SuiteCommand::parse("   ").is_none());
}

#[test]
fn command_from_argv_keeps_arguments_verbatim() {
    let cmd = SuiteCommand::from_argv(vec![
        "sh".to_string(),
        "-c".to_string(),
        "echo 'a b'".to_string(),
    ])
    .unwrap();
    assert_eq!(cmd.args, vec!["-c", "echo 'a b'"]);
    assert_eq!(cmd.to_string(), "sh -c echo 'a b'");
}

#[test]
fn command_from_empty_argv_is_none() {
    assert!(SuiteCommand::from_argv(vec![]).is_none());
}

// =============================================================================
// SELECTION
// =============================================================================

#[test]
fn default_selection_is_unit_e2e_system() {
    let selection = SuiteSelection::defaults();
    let types: Vec<_> = selection.types().collect();
    assert_eq!(types, vec![SuiteType::Unit, SuiteType::E2e, SuiteType::System]);
}

#[test]
fn opt_in_types_are_added() {
    let selection = SuiteSelection::defaults().with(SuiteType::Performance);
    assert!(selection.contains(SuiteType::Performance));
    assert!(!selection.contains(SuiteType::Integration));
}

#[test]
fn list_suites_filters_and_keeps_declaration_order() {
    let registry = Registry::new(
        vec![
            spec("c", SuiteType::Unit),
            spec("a", SuiteType::Integration),
            spec("b", SuiteType::Unit),
        ],
        BTreeMap::new(),
    )
    .unwrap();

    let names: Vec<_> = registry
        .list_suites(&SuiteSelection::only(&[SuiteType::Unit]))
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["c", "b"]);
}

#[test]
fn list_suites_with_empty_selection_is_empty() {
    let registry = Registry::builtin();
    assert!(registry.list_suites(&SuiteSelection::only(&[])).is_empty());
}

#[test]
fn duplicate_suite_names_are_rejected() {
    let err = Registry::new(
        vec![spec("same", SuiteType::Unit), spec("same", SuiteType::E2e)],
        BTreeMap::new(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("duplicate suite name: same"));
}

// =============================================================================
// BUILT-IN CATALOGUE
// =============================================================================

#[test]
fn builtin_catalogue_has_every_suite() {
    let registry = Registry::builtin();
    assert_eq!(registry.suites().len(), 19);
    assert_eq!(registry.suites()[0].name, "Backend Unit Tests");
}

#[test]
fn builtin_default_selection_excludes_opt_in_types() {
    let registry = Registry::builtin();
    let selected = registry.list_suites(&SuiteSelection::defaults());
    assert!(selected.iter().all(|s| matches!(
        s.suite_type,
        SuiteType::Unit | SuiteType::E2e | SuiteType::System
    )));
    assert_eq!(selected.len(), 15);
}

#[test]
fn builtin_suites_use_default_timeout() {
    let registry = Registry::builtin();
    assert!(registry.suites().iter().all(|s| s.timeout == DEFAULT_TIMEOUT));
}

// =============================================================================
// BENCHMARKS
// =============================================================================

#[parameterized(
    plain = { "tinyurl", 100.0, 1000.0 },
    spaced = { "Load Balancer", 50.0, 2000.0 },
    hyphenated = { "web-crawler", 500.0, 100.0 },
    shouting = { "  DNS ", 10.0, 10000.0 },
    mixed = { "google  DOCS", 300.0, 200.0 },
)]
fn benchmark_lookup_is_normalized(name: &str, latency: f64, throughput: f64) {
    let bench = Registry::builtin().benchmark_for(name).unwrap();
    assert_eq!(bench, Benchmark::new(latency, throughput));
}

#[test]
fn benchmark_lookup_misses_unknown_system() {
    assert!(Registry::builtin().benchmark_for("payments").is_none());
}

#[test]
fn normalize_collapses_separators() {
    assert_eq!(normalize_system_name(" Web  Crawler-v2_beta "), "web_crawler_v2_beta");
    assert_eq!(normalize_system_name(""), "");
}

// =============================================================================
// FROM CONFIG
// =============================================================================

fn config_from(content: &str) -> Config {
    crate::config::parse(content, Path::new("tally.toml")).unwrap()
}

#[test]
fn config_without_suites_uses_builtin_catalogue() {
    let config = config_from("version = 1\n");
    let registry = Registry::from_config(&config, Path::new("/work")).unwrap();
    assert_eq!(registry.suites().len(), 19);
    assert_eq!(registry.suites()[0].working_dir, PathBuf::from("."));
}

#[test]
fn config_suites_replace_builtin_catalogue() {
    let config = config_from(
        r#"
version = 1

[[suite]]
name = "Api Tests"
type = "unit"
command = "cargo test -p api"
dir = "api"
timeout = "90s"
coverage_threshold = 75.0
"#,
    );
    let registry = Registry::from_config(&config, Path::new("/work")).unwrap();
    assert_eq!(registry.suites().len(), 1);

    let suite = registry.suite("Api Tests").unwrap();
    assert_eq!(suite.command.program, "cargo");
    assert_eq!(suite.working_dir, PathBuf::from("/work/api"));
    assert_eq!(suite.timeout, Duration::from_secs(90));
    assert_eq!(suite.coverage_threshold, 75.0);
}

#[test]
fn config_benchmarks_merge_over_builtin() {
    let config = config_from(
        r#"
version = 1

[benchmark."Payments Gateway"]
max_latency_ms = 250.0
min_throughput_rps = 40.0

[benchmark.dns]
max_latency_ms = 20.0
min_throughput_rps = 5000.0
"#,
    );
    let registry = Registry::from_config(&config, Path::new(".")).unwrap();
    assert_eq!(
        registry.benchmark_for("payments gateway"),
        Some(Benchmark::new(250.0, 40.0))
    );
    assert_eq!(registry.benchmark_for("dns"), Some(Benchmark::new(20.0, 5000.0)));
    assert_eq!(registry.benchmark_for("tinyurl"), Some(Benchmark::new(100.0, 1000.0)));
}

#[test]
fn config_suite_thresholds_require_both_limits() {
    let config = config_from(
        r#"
version = 1

[[suite]]
name = "Load"
type = "performance"
command = ["k6", "run", "load.js"]
max_latency_ms = 100.0
"#,
    );
    let err = Registry::from_config(&config, Path::new(".")).unwrap_err();
    assert!(err.to_string().contains("must be set together"));
}

#[test]
fn config_suite_with_empty_command_is_rejected() {
    let config = config_from(
        r#"
version = 1

[[suite]]
name = "Nothing"
type = "unit"
command = []
"#,
    );
    let err = Registry::from_config(&config, Path::new(".")).unwrap_err();
    assert!(err.to_string().contains("empty command"));
}

#[test]
fn config_suite_coverage_threshold_out_of_range_is_rejected() {
    let config = config_from(
        r#"
version = 1

[[suite]]
name = "Over"
type = "unit"
command = "true"
coverage_threshold = 120.0
"#,
    );
    assert!(Registry::from_config(&config, Path::new(".")).is_err());
}
