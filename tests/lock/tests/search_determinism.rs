//! Determinism lock tests: repeated search calls, in-process and across
//! processes, produce identical results.

use std::path::Path;
use std::process::Command;

use waypoint_harness::report::report_digest;
use waypoint_harness::runner::run_catalog;
use waypoint_harness::worlds::maze_catalog::all_cases;
use waypoint_search::{SearchPolicyV1, Strategy};

// ---------------------------------------------------------------------------
// In-process
// ---------------------------------------------------------------------------

#[test]
fn search_determinism_inproc_n10() {
    let cases = all_cases().unwrap();
    let policy = SearchPolicyV1::default();
    let first = run_catalog(&cases, &Strategy::ALL, &policy).unwrap();
    let first_digest = report_digest(&first).unwrap();

    for _ in 1..10 {
        let other = run_catalog(&cases, &Strategy::ALL, &policy).unwrap();
        for (a, b) in first.iter().zip(&other) {
            assert_eq!(a.path, b.path, "{} path differs across runs", a.run);
            assert_eq!(a.stats, b.stats, "{} stats differ across runs", a.run);
        }
        assert_eq!(first_digest, report_digest(&other).unwrap());
    }
}

#[test]
fn separate_problem_instances_give_identical_outcomes() {
    let policy = SearchPolicyV1::default();
    for strategy in Strategy::ALL {
        let a = strategy
            .run_with(&all_cases().unwrap()[10].problem, &policy)
            .unwrap();
        let b = strategy
            .run_with(&all_cases().unwrap()[10].problem, &policy)
            .unwrap();
        assert_eq!(a, b, "{strategy}");
    }
}

// ---------------------------------------------------------------------------
// Cross-process
// ---------------------------------------------------------------------------

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_search_fixture");

    let mut command = Command::new(bin);
    command.current_dir(work_dir);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    assert!(
        baseline.contains("report_digest=sha256:"),
        "baseline output missing report_digest"
    );
    assert!(
        baseline.contains("run_count=57"),
        "baseline output missing run_count=57"
    );
    assert!(
        baseline.contains("BFS_1=goal_reached:4:"),
        "baseline output missing BFS_1 line"
    );
    assert!(
        baseline.contains("A*_2=frontier_exhausted:0:"),
        "baseline output missing A*_2 line"
    );
    assert!(
        baseline.contains("A*_puzzle=goal_reached:6:"),
        "baseline output missing A*_puzzle line"
    );

    // Different cwd.
    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };
    let variant_cwd = run_variant(alt_cwd, &[]);
    assert_eq!(
        baseline, variant_cwd,
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    // Different locale env.
    let variant_locale = run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    // Spurious env vars, including a verbose log filter.
    let variant_noise = run_variant(
        &root,
        &[
            ("WAYPOINT_NOISE", "should_not_matter"),
            ("TZ", "America/New_York"),
            ("HOME", "/nonexistent"),
            ("RUST_LOG", "trace"),
        ],
    );
    assert_eq!(baseline, variant_noise, "output differs with spurious env vars");
}
