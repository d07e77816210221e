use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use indoc::indoc;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn readability() -> Command {
    let mut cmd = cargo_bin_cmd!("readability");
    cmd.env("READABILITY_QUIET", "1").env("NO_COLOR", "1");
    cmd
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_no_arguments_prints_usage() {
    let output = readability().output().unwrap();
    assert!(output.status.success());
    assert!(stdout_of(&output).starts_with("Usage: readability"));
}

#[test]
fn test_scores_directory_and_prints_average() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "plain.py", "def f(x):\n  return x\n");
    write(root, "dense.py", "lambda x: [f(i) for i in range(x)]\n");
    write(root, "cache.pyc", "ignored");
    write(root, "node_modules/dep.js", "ignored");
    write(root, ".hidden/secret.py", "ignored");

    let output = readability()
        .arg(root)
        .current_dir(root)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5, "unexpected output:\n{stdout}");

    let mut file_lines = lines[..2].to_vec();
    file_lines.sort();
    assert!(file_lines[0].starts_with("30.50 "));
    assert!(file_lines[0].ends_with("plain.py"));
    assert!(file_lines[1].starts_with("63.40 "));
    assert!(file_lines[1].ends_with("dense.py"));

    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "----");
    assert_eq!(lines[4], "Average score: 46.95");
}

#[test]
fn test_glob_pattern() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "a.txt", "hello world");
    write(root, "b.md", "# title");

    let output = readability()
        .arg("*.txt")
        .current_dir(root)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("19.02 a.txt\n"));
    assert!(!stdout.contains("b.md"));
}

#[test]
fn test_no_files_matched_fails() {
    let temp = TempDir::new().unwrap();
    let output = readability()
        .arg("*.nothing")
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr.clone()).unwrap();
    assert!(stderr.contains("no files matched"));
    assert!(!stdout_of(&output).contains("Average"));
}

#[test]
fn test_unreadable_file_is_skipped() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "ok.txt", "hello world");
    fs::write(root.join("bad.txt"), [0xffu8, 0xfe, 0xfd]).unwrap();

    let output = readability()
        .arg("*.txt")
        .current_dir(root)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Average score: 19.02"));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("skipped"));
    assert!(stderr.contains("bad.txt"));
}

#[test]
fn test_json_output() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "a.txt", "hello world");

    let output = readability()
        .args(["--format", "json", "a.txt"])
        .current_dir(root)
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["files"][0]["path"], "a.txt");
    assert_eq!(value["files"][0]["raw"]["lines_per_block"], 1.0);
    assert!(value["average"].as_f64().unwrap() > 19.0);
}

#[test]
fn test_explain_prints_raw_metrics() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "f.py", "def f(x):\n  return x\n");

    let output = readability()
        .args(["--explain", "f.py"])
        .current_dir(root)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains(
        "30.50 f.py\n  symbol=0.1875 line_len=9.5000 lloc=2.0000 lines_per_block=2.0000\n"
    ));
}

#[test]
fn test_config_file_and_overrides() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(
        root,
        ".readability.toml",
        indoc! {r#"
            [ignore]
            dirs = ["vendor"]

            [parallel]
            jobs = 1
        "#},
    );
    write(root, "src/main.py", "print(1)");
    write(root, "vendor/lib.py", "print(2)");
    write(root, "src/notes.txt", "plain words");

    let output = readability()
        .args([".", "--ignore-ext", "txt"])
        .current_dir(root)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("main.py"));
    assert!(!stdout.contains("vendor"));
    assert!(!stdout.contains("notes.txt"));
}

#[test]
fn test_output_file() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "a.txt", "hello world");

    let output = readability()
        .args(["-o", "report.txt", "a.txt"])
        .current_dir(root)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout_of(&output).is_empty());
    let report = fs::read_to_string(root.join("report.txt")).unwrap();
    assert_eq!(report, "19.02 a.txt\n\n----\nAverage score: 19.02\n");
}
