use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use netdot::view::ViewMode;
use netdot_cli::Args;

/// The `demos/` directory at the workspace root
fn demos_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .expect("crate lives two levels below the workspace root")
        .join("demos")
}

/// Collects all .yaml files from a directory
fn collect_yaml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("yaml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args_for(inputs: &[&Path], output: &Path, view: Option<ViewMode>) -> Args {
    Args {
        inputs: inputs
            .iter()
            .map(|path| path.to_string_lossy().to_string())
            .collect(),
        output: output.to_string_lossy().to_string(),
        view,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let demos = collect_yaml_files(demos_dir());
    assert!(!demos.is_empty(), "No demos found in demos/");

    let mut failed = Vec::new();

    for demo in &demos {
        let output_path = temp_dir.path().join(format!(
            "{}.dot",
            demo.file_stem().unwrap().to_string_lossy()
        ));

        match netdot_cli::run(&args_for(&[demo.as_path()], &output_path, None)) {
            Ok(()) => {
                let dot = fs::read_to_string(&output_path).expect("output was written");
                if !dot.starts_with("digraph G {") || !dot.ends_with("}\n") {
                    failed.push((demo.clone(), "malformed DOT output".to_string()));
                }
            }
            Err(e) => failed.push((demo.clone(), e.to_string())),
        }
    }

    if !failed.is_empty() {
        eprintln!("\nDemos that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo(s) failed unexpectedly", failed.len());
    }

    println!("✅ All {} demos passed", demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_yaml_files(demos_dir().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo in &error_demos {
        let output_path = temp_dir.path().join(format!(
            "error_{}.dot",
            demo.file_stem().unwrap().to_string_lossy()
        ));

        if netdot_cli::run(&args_for(&[demo.as_path()], &output_path, None)).is_ok() {
            unexpectedly_succeeded.push(demo.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error demos failed as expected",
        error_demos.len()
    );
}

#[test]
fn e2e_merged_flat_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let demos = demos_dir();
    let inputs = [
        demos.join("topology.yaml"),
        demos.join("device_spine.yaml"),
        demos.join("device_leaf.yaml"),
        demos.join("links.yaml"),
        demos.join("intent.yaml"),
    ];
    let inputs: Vec<&Path> = inputs.iter().map(PathBuf::as_path).collect();

    for view in ViewMode::ALL {
        let output_path = temp_dir.path().join(format!("merged_{}.dot", view.tag()));
        netdot_cli::run(&args_for(&inputs, &output_path, Some(view)))
            .unwrap_or_else(|e| panic!("merged demos failed in {} view: {e}", view.tag()));

        let dot = fs::read_to_string(&output_path).expect("output was written");
        assert!(dot.starts_with("digraph G {"), "{} view", view.tag());
    }

    let full = fs::read_to_string(temp_dir.path().join("merged_full.dot")).unwrap();
    assert!(full.contains("subgraph cluster_production {"));
    assert!(full.contains("spine_01_et1"));
    assert!(full.contains("spine_01 -> leaf_01"));
}

#[test]
fn e2e_merge_drops_hierarchical_demo() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let demos = demos_dir();
    let topology = demos.join("topology.yaml");
    let sites = demos.join("site_topology.yaml");
    let output_path = temp_dir.path().join("mixed.dot");

    netdot_cli::run(&args_for(
        &[topology.as_path(), sites.as_path()],
        &output_path,
        None,
    ))
    .expect("hierarchical documents are dropped with a warning");

    let dot = fs::read_to_string(&output_path).unwrap();
    assert!(dot.contains("cluster_production"));
    assert!(!dot.contains("site_tokyo"));
}
