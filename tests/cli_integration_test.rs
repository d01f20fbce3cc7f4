//! Integration tests driving the plant-datagen binary.

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn plant_datagen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_plant-datagen"))
}

fn line_count(path: &std::path::Path) -> usize {
    fs::read_to_string(path).unwrap().lines().count()
}

#[test]
fn test_generate_with_rows_flag() {
    let temp_dir = TempDir::new().unwrap();

    let output = plant_datagen()
        .args(["generate", "--rows", "10", "--seed", "42"])
        .args(["--today", "2025-01-31", "-o"])
        .arg(temp_dir.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CSV files generated successfully:"));
    assert!(stdout.contains("- ventas.csv"));
    assert!(stdout.contains("- produccion.csv"));
    assert!(stdout.contains("- inventario.csv"));

    assert_eq!(line_count(&temp_dir.path().join("ventas.csv")), 11);
    assert_eq!(line_count(&temp_dir.path().join("produccion.csv")), 157);
    assert_eq!(line_count(&temp_dir.path().join("inventario.csv")), 10);
}

#[test]
fn test_generate_reads_row_count_from_stdin() {
    let temp_dir = TempDir::new().unwrap();

    let mut child = plant_datagen()
        .args(["generate", "--seed", "1", "-o"])
        .arg(temp_dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"25\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(line_count(&temp_dir.path().join("ventas.csv")), 26);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Enter number of sales rows to generate:"), "stderr: {stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Enter number"));
}

#[test]
fn test_invalid_row_count_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();

    let mut child = plant_datagen()
        .args(["generate", "-o"])
        .arg(temp_dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"-3\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid row count"), "stderr: {stderr}");
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_same_seed_same_files() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();

    for dir in [&a, &b] {
        let status = plant_datagen()
            .args(["generate", "-r", "40", "--seed", "7"])
            .args(["--today", "2024-12-01", "-o"])
            .arg(dir.path())
            .status()
            .unwrap();
        assert!(status.success());
    }

    for name in ["ventas.csv", "produccion.csv", "inventario.csv"] {
        assert_eq!(
            fs::read(a.path().join(name)).unwrap(),
            fs::read(b.path().join(name)).unwrap(),
            "{name} differs"
        );
    }
}

#[test]
fn test_generate_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("datagen.yaml");
    let out = temp_dir.path().join("out");
    fs::write(
        &config_path,
        format!(
            r#"
seed: 5
today: 2025-06-30
output_dir: {}
master:
  products: [Vidrio Templado]
  warehouses: [Planta Toluca, Planta Queretaro]
profile:
  weeks: 4
"#,
            out.display()
        ),
    )
    .unwrap();

    let output = plant_datagen()
        .args(["generate", "--rows", "3", "-c"])
        .arg(&config_path)
        .output()
        .unwrap();

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(line_count(&out.join("ventas.csv")), 4);
    assert_eq!(line_count(&out.join("produccion.csv")), 5);
    assert_eq!(line_count(&out.join("inventario.csv")), 3);
}

#[test]
fn test_invalid_config_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.yaml");
    fs::write(&config_path, "profile:\n  quantity: { min: 9, max: 1 }\n").unwrap();

    let output = plant_datagen()
        .args(["generate", "--rows", "3", "-o"])
        .arg(temp_dir.path().join("out"))
        .arg("-c")
        .arg(&config_path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid generation profile"), "stderr: {stderr}");
    assert!(!temp_dir.path().join("out").exists());
}

#[test]
fn test_dry_run() {
    let temp_dir = TempDir::new().unwrap();

    let output = plant_datagen()
        .args(["generate", "--rows", "5", "--dry-run", "-o"])
        .arg(temp_dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("(5 rows)"));
    assert!(stdout.contains("(156 rows)"));
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_check_connection_in_memory() {
    let output = plant_datagen()
        .args(["check-connection", "--host", ":memory:"])
        .args(["--user", "analyst"])
        .output()
        .unwrap();

    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Connection successful. Warehouse version:"));
}

#[test]
fn test_check_connection_custom_query() {
    let output = plant_datagen()
        .args(["check-connection", "--account", ":memory:"])
        .args(["--query", "SELECT 6 * 7"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("version: 42"));
}

#[test]
fn test_check_connection_failure_reported() {
    let output = plant_datagen()
        .args(["check-connection", "--host", ":memory:"])
        .args(["--query", "SELECT * FROM missing_table"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error connecting to warehouse"), "stderr: {stderr}");
}

#[test]
fn test_check_connection_missing_file_not_created() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("typo.duckdb");

    let output = plant_datagen()
        .args(["check-connection", "--host"])
        .arg(&db)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error connecting to warehouse"), "stderr: {stderr}");
    assert!(!db.exists());
}

#[test]
fn test_check_connection_requires_host() {
    let output = plant_datagen().args(["check-connection"]).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing connection setting: host"), "stderr: {stderr}");
}

#[test]
fn test_completions() {
    let output = plant_datagen().args(["completions", "bash"]).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("plant-datagen"));
}
