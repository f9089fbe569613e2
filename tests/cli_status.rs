mod common;

use common::*;

#[test]
fn status_of_spec_directory() {
    let env = TestEnv::new();
    write_spec_tree(&env.project_path("spx"));

    let result = env.run(&["status"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(result.stdout, FIXTURE_STATUS);
    assert!(result.stderr.is_empty(), "unexpected stderr:\n{}", result.stderr);
}

#[test]
fn status_no_rollup_shows_recorded_states_and_drift() {
    let env = TestEnv::new();
    write_spec_tree(&env.project_path("spx"));

    let result = env.run(&["status", "--no-rollup"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.starts_with("[OK] demo.product.md (valid)\n"));
    assert!(result.stdout.contains("`-- [ ] 32-api.outcome/ (needs work)\n"));
    assert!(result.stdout.ends_with("5 nodes: 3 valid, 1 stale, 1 needs work\n"));
    assert!(result
        .stderr
        .contains("'root' is recorded as valid but its children roll up to stale"));
    assert!(result
        .stderr
        .contains("'32-api.outcome' is recorded as needs-work but its children roll up to stale"));
}

#[test]
fn status_of_sample_tree() {
    let env = TestEnv::new();

    let result = env.run(&["status", "--sample", "full"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.starts_with("[ ] spx-cli.product.md (needs work)\n"));
    assert!(result.stdout.contains("18 nodes: "));
}

#[test]
fn status_json() {
    let env = TestEnv::new();
    write_spec_tree(&env.project_path("spx"));

    let result = env.run(&["status", "--json"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let json = result.json();
    assert_eq!(json["rollup"], true);
    assert_eq!(json["counts"]["valid"], 2);
    assert_eq!(json["counts"]["stale"], 3);
    assert_eq!(json["counts"]["needs-work"], 0);
    assert_eq!(json["tree"]["label"], "demo");
    assert_eq!(json["tree"]["purpose"], "Demo product for tests");
    assert_eq!(json["tree"]["children"][1]["id"], "21-core.enabler");
    assert_eq!(json["tree"]["children"][1]["hasLockFile"], true);
    assert_eq!(json["warnings"], serde_json::json!([]));
}

#[test]
fn status_json_reports_warnings_in_band() {
    let env = TestEnv::new();

    let result = env.run(&["status", "--json", "--no-rollup", "--sample", "simplified"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let json = result.json();
    assert_eq!(json["rollup"], false);
    assert_eq!(
        json["warnings"],
        serde_json::json!([
            "'root' is recorded as valid but its children roll up to needs-work"
        ])
    );
    assert!(result.stderr.is_empty());
}

#[test]
fn status_reads_json_snapshot() {
    let env = TestEnv::new();
    env.write(
        "tree.json",
        &serde_json::to_string(&spec_tree::sample::simplified()).unwrap(),
    );

    let result = env.run(&["status", "--source", "tree.json"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.ends_with("9 nodes: 5 valid, 1 stale, 3 needs work\n"));
}

#[test]
fn status_missing_directory_fails() {
    let env = TestEnv::new();

    let result = env.run(&["status"]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("spec directory not found: spx"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn status_invalid_node_name_fails() {
    let env = TestEnv::new();
    write_spec_tree(&env.project_path("spx"));
    std::fs::create_dir_all(env.project_path("spx/40-broken")).unwrap();

    let result = env.run(&["status"]);

    assert!(!result.success);
    assert!(result.stderr.contains("invalid node name"), "stderr:\n{}", result.stderr);
}

#[test]
fn status_verbose_reports_config_and_source() {
    let env = TestEnv::new();

    let result = env.run(&["status", "--sample", "simplified", "-vv"]);

    assert!(result.success);
    assert!(result.stderr.contains("Config: built-in defaults"));
    assert!(result.stderr.contains("Source: sample tree (simplified)"));
    assert!(result.stderr.contains("Nodes: 9"));
}
