//! End-to-end runs of the `gosig` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn gosig(workdir: &Path, args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_gosig"));
    command.current_dir(workdir).args(args).env_remove("RUST_LOG");
    for (key, _) in std::env::vars() {
        if key.starts_with("GOSIG_") {
            command.env_remove(key);
        }
    }
    command.output().expect("run gosig")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_lists_current_directory_by_default() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("calc.go"),
        "package calc\n\nfunc Add(a, b int) int { return a + b }\n\nfunc sub(a, b int) int { return a - b }\n",
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("server.go"),
        "package calc\n\ntype Server struct{}\n\nfunc (s *Server) Start() {}\n",
    )
    .unwrap();

    let output = gosig(temp_dir.path(), &[]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "func Add(a, b int) int\nfunc (s *Server) Start() \n"
    );
}

#[test]
fn test_directory_argument_and_flags() {
    let temp_dir = TempDir::new().unwrap();
    let pkg = temp_dir.path().join("pkg");
    fs::create_dir_all(pkg.join("sub")).unwrap();
    fs::write(pkg.join("a.go"), "package pkg\nfunc A() {}\n").unwrap();
    fs::write(pkg.join("a_test.go"), "package pkg\nfunc TestA() {}\n").unwrap();
    fs::write(pkg.join("sub/b.go"), "package sub\nfunc B() {}\n").unwrap();

    let output = gosig(temp_dir.path(), &["pkg"]);
    assert_eq!(stdout(&output), "func A() \nfunc TestA() \n");

    let output = gosig(temp_dir.path(), &["-r", "--no-tests", "pkg"]);
    assert_eq!(stdout(&output), "func A() \nfunc B() \n");
}

#[test]
fn test_syntax_error_prints_nothing_and_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("ok.go"), "package p\nfunc Ok() {}\n").unwrap();
    fs::write(temp_dir.path().join("zz.go"), "package p\nfunc Broken( {\n").unwrap();

    let output = gosig(temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(4));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("zz.go"), "{}", stderr(&output));
}

#[test]
fn test_missing_directory_exit_code() {
    let temp_dir = TempDir::new().unwrap();

    let output = gosig(temp_dir.path(), &["does-not-exist"]);

    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("does not exist"));
}

#[test]
fn test_settings_file_is_honoured() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join(".gosig")).unwrap();
    fs::write(
        temp_dir.path().join(".gosig/settings.toml"),
        "[walk]\ninclude_tests = false\n",
    )
    .unwrap();
    fs::write(temp_dir.path().join("x.go"), "package x\nfunc X() {}\n").unwrap();
    fs::write(temp_dir.path().join("x_test.go"), "package x\nfunc TestX() {}\n").unwrap();

    let output = gosig(temp_dir.path(), &[]);
    assert_eq!(stdout(&output), "func X() \n");

    let output = gosig(temp_dir.path(), &["--print-config"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("include_tests = false"));
}

#[test]
fn test_invalid_settings_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("bad.toml"), "[walk]\nrecursive = [1, 2]\n").unwrap();

    let output = gosig(temp_dir.path(), &["--config", "bad.toml"]);

    assert_eq!(output.status.code(), Some(6));
    assert!(stderr(&output).contains("Invalid configuration"));
}
