use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

fn harvester() -> Command {
    Command::cargo_bin("email-harvester").unwrap()
}

fn reporter() -> Command {
    Command::cargo_bin("show-first-email").unwrap()
}

#[test]
fn test_harvester_help_exits_zero() {
    harvester()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--input"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn test_harvester_missing_input_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.csv");

    harvester()
        .args(["--input", missing.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_harvester_rejects_bad_config() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.csv");
    std::fs::write(&input, "name,website\n").unwrap();

    harvester()
        .args(["--input", input.to_str().unwrap(), "--timeout", "0"])
        .assert()
        .code(1);
}

#[test]
fn test_harvester_dry_run_lists_urls() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.csv");
    let output = temp_dir.path().join("out.csv");
    std::fs::write(&input, "name,website\nAcme HVAC,acme.com\nNo Site,\n").unwrap();

    harvester()
        .args([
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme HVAC\thttps://acme.com"))
        .stdout(predicate::str::contains("No Site\t(no website)"));

    assert!(!output.exists());
}

#[test]
fn test_harvester_writes_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.csv");
    let output = temp_dir.path().join("out.csv");

    let server = MockServer::start();
    let page = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200)
            .body(r#"<body><a href="mailto:owner@cool-air.net">Mail</a></body>"#);
    });

    std::fs::write(
        &input,
        format!("name,website\nCool Air,{}\n", server.url("/")),
    )
    .unwrap();

    harvester()
        .args([
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    page.assert();
    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("name,website,emails\n"));
    assert!(content.contains(",owner@cool-air.net\n"));
}

#[test]
fn test_reporter_without_argument_prints_usage() {
    reporter()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: show-first-email <input-file>"));
}

#[test]
fn test_reporter_missing_file() {
    reporter()
        .arg("does-not-exist.csv")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: File \"does-not-exist.csv\" not found.",
        ));
}

#[test]
fn test_reporter_prints_first_email() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("with-emails.csv");
    std::fs::write(
        &input,
        "id,name,emails\n1,Acme HVAC,\"a@b.com, not-an-email, c@d.org\"\n2,Quiet Co,\n",
    )
    .unwrap();

    reporter()
        .arg(input.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("Looking for emails in column 3 (emails)..."))
        .stdout(predicate::str::contains("1. Business: Acme HVAC"))
        .stdout(predicate::str::contains("   First email: a@b.com"))
        .stdout(predicate::str::contains("   Total valid emails: 2"))
        .stdout(predicate::str::contains("Total businesses with emails: 1"));

    // 報表不應修改輸入檔
    let content = std::fs::read_to_string(&input).unwrap();
    assert!(content.contains("not-an-email"));
}

#[test]
fn test_reporter_missing_column_is_graceful() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("plain.csv");
    std::fs::write(&input, "id,name,website\n1,Acme,acme.com\n").unwrap();

    reporter()
        .arg(input.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("No \"emails\" column found in the CSV file."));
}
