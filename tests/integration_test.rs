// Integration tests for the proxyctl CLI surface

use assert_cmd::cargo::cargo_bin_cmd;

#[test]
fn requires_at_least_one_command() {
    let mut cmd = cargo_bin_cmd!("proxyctl");
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Usage"));
}

#[test]
fn help_lists_the_verbs() {
    let mut cmd = cargo_bin_cmd!("proxyctl");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("list"))
        .stdout(predicates::str::contains("show"))
        .stdout(predicates::str::contains("--host"));
}

#[test]
fn list_exposes_every_resource_type() {
    let mut cmd = cargo_bin_cmd!("proxyctl");
    cmd.args(["list", "--help"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("servers"))
        .stdout(predicates::str::contains("services"))
        .stdout(predicates::str::contains("monitors"))
        .stdout(predicates::str::contains("sessions"))
        .stdout(predicates::str::contains("filters"))
        .stdout(predicates::str::contains("modules"));
}

#[test]
fn show_exposes_every_resource_type() {
    let commands = vec![
        "server", "service", "monitor", "session", "filter", "module",
    ];

    for cmd_name in commands {
        let mut cmd = cargo_bin_cmd!("proxyctl");
        cmd.args(["show", cmd_name, "--help"]);
        cmd.assert().success();
    }
}

#[test]
fn show_server_requires_an_identifier() {
    let mut cmd = cargo_bin_cmd!("proxyctl");
    cmd.args(["show", "server"]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("<SERVER>"));
}

#[test]
fn short_h_is_the_host_flag() {
    // -h takes a value; without a following command the parse must fail
    // with a usage error rather than print help.
    let mut cmd = cargo_bin_cmd!("proxyctl");
    cmd.args(["-h", "db.example.com"]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Usage"));
}

#[test]
fn unknown_resource_type_is_a_usage_error() {
    let mut cmd = cargo_bin_cmd!("proxyctl");
    cmd.args(["list", "replicas"]);
    cmd.assert().failure();
}
