use std::{fs, path::PathBuf};

use tempfile::tempdir;

use peloton_cli::{Args, run};

/// Collects all .pel files from a directory
fn collect_pel_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("pel")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Samples live at the workspace root, not in the crate
fn samples_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("samples")
}

fn args_for(input: &PathBuf, output: &PathBuf) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        config: None,
        sequence: 1,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_samples = collect_pel_files(samples_dir());
    assert!(!valid_samples.is_empty(), "No valid samples found in samples/");

    let mut failed_samples = Vec::new();

    for sample_path in &valid_samples {
        let output_filename = format!(
            "{}.toml",
            sample_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        match run(&args_for(sample_path, &output_path)) {
            Ok(()) => {
                let record = fs::read_to_string(&output_path).expect("Missing output record");
                assert!(
                    record.contains("participant_code = "),
                    "{}: record has no code:\n{record}",
                    sample_path.display()
                );
            }
            Err(e) => failed_samples.push((sample_path.clone(), e)),
        }
    }

    if !failed_samples.is_empty() {
        eprintln!("\nValid samples that failed:");
        for (path, err) in &failed_samples {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid sample(s) failed unexpectedly", failed_samples.len());
    }
}

#[test]
fn e2e_smoke_test_error_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_samples = collect_pel_files(samples_dir().join("errors"));
    assert!(
        !error_samples.is_empty(),
        "No error samples found in samples/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for sample_path in &error_samples {
        let output_filename = format!(
            "error_{}.toml",
            sample_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if run(&args_for(sample_path, &output_path)).is_ok() {
            unexpectedly_succeeded.push(sample_path.clone());
        } else {
            assert!(
                !output_path.exists(),
                "{}: failed run wrote output",
                sample_path.display()
            );
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError samples that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error sample(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_record_contents_and_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[registration]\ncode_width = 4\n").unwrap();

    let input = samples_dir().join("juvenil_paid.pel");
    let output_path = temp_dir.path().join("ana.toml");
    let args = Args {
        config: Some(config_path.to_string_lossy().to_string()),
        sequence: 12,
        ..args_for(&input, &output_path)
    };

    run(&args).expect("Registration should succeed");

    let record = fs::read_to_string(&output_path).unwrap();
    assert!(record.contains("participant_code = \"JUV-0012\""), "{record}");
    assert!(record.contains("maternal_surname = \"López\""), "{record}");
    assert!(record.contains("payment_completed = true"), "{record}");
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("absent.pel");
    let output_path = temp_dir.path().join("out.toml");

    let err = run(&args_for(&input, &output_path)).unwrap_err();
    assert!(matches!(err, peloton::PelotonError::Io(_)));
}
