use assert_cmd::cargo::CommandCargoExt as _;

pub fn meantime_raw_command() -> std::process::Command {
    let mut cmd = std::process::Command::cargo_bin("meantime").unwrap();
    cmd.current_dir("tests/");
    cmd
}

pub fn meantime() -> assert_cmd::Command {
    assert_cmd::Command::from_std(meantime_raw_command())
}
