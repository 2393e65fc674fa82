//! Standard output of each revision

use crate::common::{Sandbox, loop_lines, stdout_of};

#[test]
fn default_run_is_final_revision() {
    let sandbox = Sandbox::instant();
    let output = sandbox.run();

    assert!(output.status.success());
    insta::assert_snapshot!(stdout_of(&output).trim_end(), @r"
    child process start
    func is 0
    test is 0
    func is 1
    test is 1
    func is 2
    test is 2
    func is 3
    test is 3
    func is 4
    test is 4
    func is 5
    test is 5
    func is 6
    test is 6
    func is 7
    test is 7
    func is 8
    test is 8
    func is 9
    test is 9
    child process end
    destructor: 0xa
    ");
}

#[test]
fn initial_revision_prints_only_the_loop() {
    let sandbox = Sandbox::instant();
    let output = sandbox.run_with_revision("initial");

    assert!(output.status.success());
    let lines: Vec<String> = stdout_of(&output).lines().map(str::to_string).collect();
    assert_eq!(lines, loop_lines());
}

#[test]
fn linked_revision_dumps_count_after_end_banner() {
    let sandbox = Sandbox::instant();
    let output = sandbox.run_with_revision("linked");

    assert!(output.status.success());
    let mut expected = loop_lines();
    expected.push("destructor: 0xa".to_string());
    let lines: Vec<String> = stdout_of(&output).lines().map(str::to_string).collect();
    assert_eq!(lines, expected);
}

#[test]
fn reporter_line_sits_between_loop_and_end_banner() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[run]\ndelay_ms = 0\n\n[reporter]\nmessage = \"print called\"\n");
    let output = sandbox.run();

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 24);
    assert_eq!(
        &lines[20..],
        ["test is 9", "print called", "child process end", "destructor: 0xa"]
    );
    assert_eq!(lines.iter().filter(|l| **l == "print called").count(), 1);
}

#[test]
fn initial_revision_never_calls_reporter() {
    let sandbox = Sandbox::new();
    sandbox.write_config(
        "[run]\nrevision = \"initial\"\ndelay_ms = 0\n\n[reporter]\nmessage = \"print called\"\n",
    );
    let output = sandbox.run();

    assert!(output.status.success());
    assert!(!stdout_of(&output).contains("print called"));
}

#[test]
fn repeated_runs_are_identical() {
    let sandbox = Sandbox::instant();
    let first = sandbox.run();
    let second = sandbox.run();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn logs_never_reach_stdout() {
    let sandbox = Sandbox::instant();
    let output = sandbox.command().env("RUST_LOG", "debug").output().expect("spawn");

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(!stdout.contains("Logging initialized"));
    assert_eq!(stdout.lines().count(), 23);
    assert!(sandbox.log_path().exists());
}

#[test]
fn log_file_goes_under_home_regardless_of_config_location() {
    let sandbox = Sandbox::new();
    let config_dir = sandbox.home().join("etc");
    std::fs::create_dir_all(&config_dir).expect("create config dir");
    let config_path = config_dir.join("tracee.toml");
    std::fs::write(&config_path, "[run]\ndelay_ms = 0\n").expect("write config");

    let output = sandbox
        .command()
        .env("TRACEE_CONFIG", &config_path)
        .output()
        .expect("spawn");

    assert!(output.status.success());
    assert!(sandbox.log_path().exists());
    assert!(!config_dir.join("logs").exists());
    assert!(!sandbox.work_dir().join(".tracee").exists());
}
