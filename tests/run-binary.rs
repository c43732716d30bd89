use assert_cmd::prelude::*;
use std::process::Command;

fn stdout_of(args: &[&str]) -> String {
    let output = Command::main_binary().unwrap().args(args).output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn run_elementary() {
    let output = r"#######
#@ $. #
#######

Solving levels/simplest.txt...
[Right, Right]
astar: 2 actions
States created total: ";

    let stdout = stdout_of(&["levels/simplest.txt"]);
    assert!(stdout.starts_with(output), "{}", stdout);
}

#[test]
fn run_macro_bfs() {
    let output = r"Solving levels/two-boxes.txt...
";

    let stdout = stdout_of(&["--macro", "--method", "bfs", "levels/two-boxes.txt"]);
    assert!(stdout.contains(output), "{}", stdout);
    assert!(stdout.contains("bfs: 4 actions\n"), "{}", stdout);
    assert!(stdout.contains("Unique visited total: "), "{}", stdout);
}

#[test]
fn run_impossible() {
    let stdout = stdout_of(&["--macro", "levels/no-solution.txt"]);
    assert!(stdout.contains("\nImpossible\n"), "{}", stdout);
}

#[test]
fn run_status() {
    let stdout = stdout_of(&["--status", "--method", "bfs", "levels/one-way.txt"]);
    assert!(stdout.contains("Visited new depth: 3\n"), "{}", stdout);
    assert!(stdout.contains("[Up, Up, Up]\n"), "{}", stdout);
}

#[test]
fn run_taboo() {
    let output = "####  \n#X #  \n#  ###\n#   X#\n#   X#\n#XX###\n####  \n";

    Command::main_binary()
        .unwrap()
        .arg("--taboo")
        .arg("levels/warehouse_0001.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_check() {
    let output = "####  \n# .#  \n#  ###\n#*   #\n#  $@#\n#  ###\n####  \n";

    Command::main_binary()
        .unwrap()
        .arg("--check")
        .arg("Right,Right,Down")
        .arg("levels/warehouse_0001.txt")
        .assert()
        .success()
        .stdout(output);

    Command::main_binary()
        .unwrap()
        .arg("--check")
        .arg("Right,Right,Right")
        .arg("levels/warehouse_0001.txt")
        .assert()
        .success()
        .stdout("Failure: action 2 (Right): worker walks into a wall\n");
}

#[test]
fn run_reach() {
    Command::main_binary()
        .unwrap()
        .args(&["--reach", "1,2", "levels/simplest.txt"])
        .assert()
        .success()
        .stdout("true\n");

    Command::main_binary()
        .unwrap()
        .args(&["--reach", "1,5", "levels/simplest.txt"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn run_bad_method() {
    Command::main_binary()
        .unwrap()
        .arg("--method")
        .arg("dfs")
        .arg("levels/simplest.txt")
        .assert()
        .failure()
        .stdout("Unknown search method: dfs (expected astar or bfs)\n");
}

#[test]
fn run_conflicting_args() {
    // clap's message goes to stderr
    Command::main_binary()
        .unwrap()
        .arg("--taboo")
        .arg("--reach")
        .arg("1,2")
        .arg("levels/simplest.txt")
        .assert()
        .failure()
        .stdout("");
}
