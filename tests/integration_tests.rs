mod common;
use common::meantime;

use predicates::prelude::PredicateBooleanExt as _;

#[test]
fn runs_successfully() {
    meantime()
        .arg("--num-runs=2")
        .args(["echo", "cpu time: 1.5 seconds"])
        .assert()
        .success();
}

#[test]
fn reports_mean_and_stdev() {
    meantime()
        .arg("--num-runs=3")
        .args(["echo", "total cpu time: 1.5 seconds"])
        .assert()
        .success()
        .stdout(
            predicates::str::contains("Benchmark> echo 'total cpu time: 1.5 seconds'").and(
                predicates::str::contains("Benchmark Results (n = 3):").and(
                    predicates::str::contains("Mean Execution Time: 1.500000 seconds").and(
                        predicates::str::contains("Standard Deviation:  0.000000 seconds"),
                    ),
                ),
            ),
        );
}

#[test]
fn one_run_is_supported() {
    meantime()
        .arg("--num-runs=1")
        .args(["echo", "cpu time: 2.25 seconds"])
        .assert()
        .success()
        .stdout(
            predicates::str::contains("Benchmark Results (n = 1):")
                .and(predicates::str::contains("Standard Deviation:  0.000000 seconds")),
        );
}

#[test]
fn parses_the_last_output_line() {
    meantime()
        .arg("--num-runs=1")
        .args(["sh", "-c", "echo routing nets; echo total cpu time: 2.5 seconds"])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Mean Execution Time: 2.500000 seconds",
        ));
}

#[test]
fn per_run_progress_is_printed() {
    meantime()
        .arg("--num-runs=2")
        .args(["echo", "cpu time: 1.5 seconds"])
        .assert()
        .success()
        .stdout(
            predicates::str::contains("#1/2: 1.500000 seconds")
                .and(predicates::str::contains("#2/2: 1.500000 seconds")),
        );
}

#[test]
fn silent_command_is_a_parse_failure() {
    meantime()
        .arg("--num-runs=1")
        .arg("true")
        .assert()
        .failure()
        .stderr(predicates::str::contains("without printing anything"));
}

#[test]
fn non_numeric_output_is_a_parse_failure() {
    meantime()
        .arg("--num-runs=1")
        .args(["echo", "status: done"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Could not parse a timing value"));
}

#[test]
fn missing_command_is_reported() {
    meantime()
        .arg("--num-runs=1")
        .arg("/this_will_never_exist")
        .assert()
        .failure()
        .stderr(predicates::str::contains(
            "Could not start `/this_will_never_exist` execution",
        ));
}

#[test]
fn failure_command_is_supported() {
    meantime()
        .arg("--num-runs=2")
        .args(["sh", "-c", "echo cpu time: 2.0; exit 3"])
        .assert()
        .success()
        .stderr(predicates::str::contains(
            "Exit status: Success 0 times. Failure 2 times.",
        ));
}

#[test]
fn all_non_finite_values_is_a_failure() {
    meantime()
        .arg("--num-runs=2")
        .args(["echo", "cpu time: nan"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("non-finite"));
}

#[test]
fn zero_runs_is_rejected() {
    meantime()
        .arg("--num-runs=0")
        .args(["echo", "cpu time: 1.5"])
        .assert()
        .failure();
}
