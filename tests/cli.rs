use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("rift_lookup").unwrap()
}

#[test]
fn missing_api_key_is_a_config_error() {
    cmd()
        .env_remove("RIOT_API_KEY")
        .arg("rotation")
        .assert()
        .failure()
        .stderr(contains("RIOT_API_KEY"));
}

#[test]
fn blank_api_key_is_rejected() {
    cmd()
        .env("RIOT_API_KEY", "   ")
        .arg("rotation")
        .assert()
        .failure()
        .stderr(contains("empty"));
}

#[test]
fn help_lists_both_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("rotation"))
        .stdout(contains("match"));
}

#[test]
fn match_subcommand_requires_an_id() {
    cmd().env("RIOT_API_KEY", "RGAPI-test").arg("match").assert().failure();
}
