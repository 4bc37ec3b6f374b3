//! Cross-process determinism for world runs.
//!
//! Spawns the `search_fixture` binary under several environment variants
//! and asserts that all produce identical output, and that the output
//! matches the same runs performed in-process.

use std::path::Path;
use std::process::Command;

use lock_tests::fixture_runs::fixture_lines;

/// Resolve the path to the compiled binary.
///
/// `cargo test` puts test binaries in `target/debug/deps/`; the
/// `search_fixture` binary lives one directory up.
fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("search_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .to_string_lossy()
        .to_string()
}

/// Run the binary with the given cwd and environment overrides.
fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();
    let mut command = Command::new(&bin);
    command
        .current_dir(work_dir)
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
fn crossproc_determinism_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);
    assert!(baseline.contains("river_bfs.digest=sha256:"));

    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };
    assert_eq!(baseline, run_variant(alt_cwd, &[]), "output differs with cwd");
    assert_eq!(
        baseline,
        run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]),
        "output differs with LC_ALL=C LANG=C"
    );
    assert_eq!(
        baseline,
        run_variant(
            &root,
            &[
                ("TRAILHEAD_NOISE", "should_not_matter"),
                ("TZ", "America/New_York"),
                ("RUST_LOG", "trace"),
            ],
        ),
        "output differs with spurious env vars"
    );
}

#[test]
fn crossproc_output_matches_in_process_runs() {
    let output = run_variant(&workspace_root(), &[]);
    let expected = fixture_lines().expect("fixture runs succeed");
    let actual: Vec<&str> = output.lines().collect();
    assert_eq!(actual, expected);
}

#[test]
fn fixture_lines_record_expected_outcomes() {
    let lines = fixture_lines().expect("fixture runs succeed");
    for expected in [
        "river_bfs.action_count=7",
        "river_dfs.action_count=7",
        "knight8_bfs.action_count=6",
        "knight8_dfs.action_count=8",
        "knight5_path_only.action_count=4",
        "knight8_budget.termination=node_budget_exhausted",
        "knight8_budget.action_count=none",
        "knight8_budget.nodes_created=20",
    ] {
        assert!(
            lines.iter().any(|l| l == expected),
            "missing {expected:?} in {lines:#?}"
        );
    }
}
