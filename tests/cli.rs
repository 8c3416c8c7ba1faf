use assert_cmd::Command;
use ntest::timeout;
use predicates::prelude::*;

fn hello() -> Command {
    let mut cmd = Command::cargo_bin("hello").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
#[timeout(10000)]
fn greet_defaults_to_stranger() {
    hello()
        .arg("greet")
        .assert()
        .success()
        .stdout("Hello stranger\n");
}

#[test]
#[timeout(10000)]
fn greet_with_name() {
    hello()
        .args(["greet", "Ada", "--style", "check"])
        .assert()
        .success()
        .stdout("Hello Ada\n");
}

#[test]
#[timeout(10000)]
fn greet_require_without_name_prints_placeholder() {
    hello()
        .args(["greet", "--style", "require"])
        .assert()
        .success()
        .stdout("Hello undefined\n");
}

#[test]
#[timeout(10000)]
fn greet_rejects_unknown_style() {
    hello()
        .args(["greet", "--style", "shout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
#[timeout(10000)]
fn celsius_fixed_points() {
    for (fahrenheit, celsius) in [("32", "0\n"), ("212", "100\n"), ("-40", "-40\n")] {
        hello()
            .args(["celsius", fahrenheit])
            .assert()
            .success()
            .stdout(celsius);
    }
}

#[test]
#[timeout(10000)]
fn celsius_rejects_non_numeric_input() {
    hello().args(["celsius", "warm"]).assert().failure();
}

#[test]
#[timeout(10000)]
fn print_args_keeps_order() {
    hello()
        .args(["print-args", "1", "a", "true"])
        .assert()
        .success()
        .stdout("1\na\ntrue\n");
}

#[test]
#[timeout(10000)]
fn bite_sample_description() {
    hello()
        .arg("bite")
        .assert()
        .success()
        .stdout("Bite : 1 - sum of numbers - points 2\n");
}

#[test]
#[timeout(10000)]
fn bite_custom_fields() {
    hello()
        .args(["bite", "--number", "3", "--title", "fizzbuzz", "--points", "4"])
        .assert()
        .success()
        .stdout("Bite : 3 - fizzbuzz - points 4\n");
}

#[test]
#[timeout(10000)]
fn tour_starts_with_missing_name_greeting() {
    hello()
        .arg("tour")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Hello undefined\n"))
        .stdout(predicate::str::ends_with(
            "Bite : 1 - sum of numbers - points 2\n",
        ));
}

#[test]
#[timeout(10000)]
fn verbose_logs_go_to_stderr() {
    hello()
        .args(["--verbose", "greet"])
        .assert()
        .success()
        .stdout("Hello stranger\n")
        .stderr(predicate::str::contains("greeting"));
}

#[test]
#[timeout(10000)]
fn missing_subcommand_fails() {
    hello().assert().failure();
}
