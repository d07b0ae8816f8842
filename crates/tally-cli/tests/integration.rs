use assert_cmd::Command;
use std::fs;
use tally_models::{Greeting, NumericKind, SumReport, SumValue, SumVariant};
use tempfile::tempdir;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn tally() -> Command {
    Command::cargo_bin("tally").expect("binary")
}

fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).expect("utf8 stdout")
}

fn stderr_of_failure(cmd: &mut Command) -> String {
    let out = cmd.assert().failure().code(1).get_output().stderr.clone();
    String::from_utf8(out).expect("utf8 stderr")
}

#[test]
fn cli_demo_prints_classic_listing() {
    let out = stdout_of(tally().arg("demo"));
    assert_eq!(
        out,
        "Non-Generic Sums: 46 and 62.97\n\
         Generic Sums: 46 and 62.97\n\
         Generic Sums, type parameters inferred: 46 and 62.97\n\
         Generic Sums with Constraint: 46 and 62.97\n"
    );
}

#[test]
fn cli_sum_int_and_float_files() {
    let out = stdout_of(tally().args(["sum", "--input", fixture("ints.json").as_str()]));
    assert_eq!(out, "46\n");

    let out = stdout_of(tally().args(["sum", "--input", fixture("floats.json").as_str()]));
    assert_eq!(out, "62.97\n");
}

#[test]
fn cli_sum_all_variants_agree() {
    let out = stdout_of(tally().args(["sum", "-i", fixture("ints.json").as_str(), "--variant", "all"]));
    assert_eq!(
        out,
        "non-generic: 46\ngeneric-explicit: 46\ngeneric-inferred: 46\nconstraint: 46\n"
    );
}

#[test]
fn cli_sum_json_reports() {
    let out = stdout_of(tally().args([
        "sum",
        "-i",
        fixture("floats.json").as_str(),
        "--variant",
        "generic-explicit",
        "--json",
    ]));
    let report: SumReport = serde_json::from_str(out.trim()).expect("report json");
    assert_eq!(report.variant, SumVariant::GenericExplicit);
    assert_eq!(report.kind, NumericKind::Float64);
    assert_eq!(report.entries, 2);
    match report.value {
        SumValue::Float(v) => assert!((v - 62.97).abs() < 1e-9),
        other => panic!("expected float, got {other:?}"),
    }

    let out = stdout_of(tally().args(["sum", "-i", fixture("ints.json").as_str(), "--variant", "all", "--json"]));
    let reports: Vec<SumReport> = serde_json::from_str(out.trim()).expect("reports json");
    assert_eq!(reports.len(), 4);
    assert!(reports.iter().all(|r| r.value == SumValue::Int(46)));
}

#[test]
fn cli_sum_reads_stdin() {
    let out = stdout_of(
        tally()
            .args(["sum", "--input", "-"])
            .write_stdin(r#"{"a": -7, "b": 10, "c": 0}"#),
    );
    assert_eq!(out, "3\n");

    let out = stdout_of(tally().args(["sum", "--input", "-"]).write_stdin("{}"));
    assert_eq!(out, "0\n");
}

#[test]
fn cli_sum_mixed_kinds() {
    let err = stderr_of_failure(tally().args(["sum", "-i", fixture("mixed.json").as_str()]));
    assert!(err.contains("mixed numeric kinds"), "{err}");
    assert!(err.contains("mixed.json"), "{err}");

    let err = stderr_of_failure(tally().args(["sum", "-i", fixture("mixed.json").as_str(), "--kind", "int64"]));
    assert!(err.contains("is not an integer"), "{err}");

    let out = stdout_of(tally().args(["sum", "-i", fixture("mixed.json").as_str(), "--kind", "float64"]));
    let v: f64 = out.trim().parse().expect("float output");
    assert!((v - 60.99).abs() < 1e-9);
}

#[test]
fn cli_sum_rejects_non_numeric_values() {
    let td = tempdir().expect("tempdir");
    let path = td.path().join("bad.json");
    fs::write(&path, r#"{"first": 34, "second": "12"}"#).expect("write json");

    let err = stderr_of_failure(tally().args(["sum", "--input", path.to_str().unwrap()]));
    assert!(err.contains("'second' is a string, not a number"), "{err}");
}

#[test]
fn cli_sum_infinite_total() {
    let td = tempdir().expect("tempdir");
    let path = td.path().join("huge.json");
    fs::write(&path, r#"{"a": 1e308, "b": 1e308}"#).expect("write json");
    let path = path.to_str().unwrap();

    // Plain output prints the IEEE-754 result as is
    assert_eq!(stdout_of(tally().args(["sum", "-i", path])), "inf\n");

    let err = stderr_of_failure(tally().args(["sum", "-i", path, "--json"]));
    assert!(err.contains("JSON cannot represent"), "{err}");

    let err = stderr_of_failure(tally().args(["sum", "-i", path, "--variant", "all", "--json"]));
    assert!(err.contains("JSON cannot represent"), "{err}");
}

#[test]
fn cli_sum_missing_file() {
    let td = tempdir().expect("tempdir");
    let path = td.path().join("absent.json");

    let err = stderr_of_failure(tally().args(["sum", "--input", path.to_str().unwrap()]));
    assert!(err.contains("failed to read"), "{err}");
}

#[test]
fn cli_greet() {
    assert_eq!(stdout_of(tally().args(["greet", "Gladys"])), "Hi, Gladys. Welcome!\n");
    assert_eq!(stdout_of(tally().args(["greet", ""])), "Hi, . Welcome!\n");

    let out = stdout_of(tally().args(["greet", "Gladys", "--json"]));
    let g: Greeting = serde_json::from_str(out.trim()).expect("greeting json");
    assert_eq!(g.name, "Gladys");
    assert_eq!(g.message, "Hi, Gladys. Welcome!");
}

#[test]
fn cli_logs_stay_off_stdout() {
    let out = stdout_of(tally().args(["-vvv", "sum", "-i", fixture("ints.json").as_str()]));
    assert_eq!(out, "46\n");
}
