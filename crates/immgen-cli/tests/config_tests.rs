use clap::Parser;
use std::fs;
use tempfile::TempDir;

use crate::args::CliArgs;
use crate::config::{DEFAULT_OUT_DIR, ImmgenConfig, find_config, parse_config, resolve_config};

fn args(argv: &[&str]) -> CliArgs {
    let mut full = vec!["immgen"];
    full.extend_from_slice(argv);
    CliArgs::try_parse_from(full).expect("args should parse")
}

#[test]
fn parses_config_file() {
    let config = parse_config(
        r#"{
            "outDir": "build/generated",
            "processorName": "org.example.Processor",
            "generatedAnnotation": "javax.annotation.Generated",
            "diagnosticTag": "@Value"
        }"#,
    )
    .expect("config should parse");
    assert_eq!(
        config,
        ImmgenConfig {
            out_dir: Some("build/generated".into()),
            processor_name: Some("org.example.Processor".to_string()),
            generated_annotation: Some("javax.annotation.Generated".to_string()),
            diagnostic_tag: Some("@Value".to_string()),
        }
    );
}

#[test]
fn rejects_unknown_config_keys() {
    assert!(parse_config(r#"{"outdir": "x"}"#).is_err());
}

#[test]
fn defaults_without_config_file() {
    let temp = TempDir::new().expect("temp dir");
    let cwd = temp.path();
    assert!(find_config(&args(&[]), cwd).is_none());

    let resolved = resolve_config(&args(&[]), cwd).expect("defaults should resolve");
    assert_eq!(resolved.out_dir, cwd.join(DEFAULT_OUT_DIR));
    assert_eq!(resolved.options.processor_name, "immgen");
    assert_eq!(
        resolved.options.generated_annotation.qualified_name(),
        "javax.annotation.processing.Generated"
    );
    assert_eq!(resolved.options.diagnostic_tag, "@Immutable");
    assert!(resolved.config_path.is_none());
}

#[test]
fn reads_config_from_working_directory() {
    let temp = TempDir::new().expect("temp dir");
    let cwd = temp.path();
    fs::write(
        cwd.join("immgen.json"),
        r#"{"outDir": "out", "processorName": "from-file"}"#,
    )
    .expect("write config");

    let resolved = resolve_config(&args(&[]), cwd).expect("config should resolve");
    assert_eq!(resolved.config_path, Some(cwd.join("immgen.json")));
    assert_eq!(resolved.out_dir, cwd.join("out"));
    assert_eq!(resolved.options.processor_name, "from-file");
}

#[test]
fn flags_override_config_file() {
    let temp = TempDir::new().expect("temp dir");
    let cwd = temp.path();
    fs::create_dir(cwd.join("conf")).expect("create conf dir");
    fs::write(
        cwd.join("conf/custom.json"),
        r#"{"outDir": "out", "processorName": "from-file", "diagnosticTag": "@Value"}"#,
    )
    .expect("write config");

    let resolved = resolve_config(
        &args(&["--config", "conf/custom.json", "--processor-name", "from-flag"]),
        cwd,
    )
    .expect("config should resolve");
    // Relative to the configuration file.
    assert_eq!(resolved.out_dir, cwd.join("conf/out"));
    assert_eq!(resolved.options.processor_name, "from-flag");
    assert_eq!(resolved.options.diagnostic_tag, "@Value");

    let resolved = resolve_config(&args(&["-c", "conf/custom.json", "-o", "flag-out"]), cwd)
        .expect("config should resolve");
    assert_eq!(resolved.out_dir, cwd.join("flag-out"));
}

#[test]
fn rejects_invalid_generated_annotation() {
    let temp = TempDir::new().expect("temp dir");
    let err = resolve_config(&args(&["--generated-annotation", "javax..Generated"]), temp.path())
        .unwrap_err();
    assert!(
        err.to_string().contains("invalid generated annotation"),
        "unexpected error: {err:#}"
    );
}

#[test]
fn missing_explicit_config_is_an_error() {
    let temp = TempDir::new().expect("temp dir");
    assert!(resolve_config(&args(&["--config", "missing.json"]), temp.path()).is_err());
}
