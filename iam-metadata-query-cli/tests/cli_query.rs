use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("iam-metadata-query").expect("binary should build")
}

#[test]
fn action_table_lists_all_actions_line_per_item() {
    cmd()
        .args(["query", "action-table", "--service", "s3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("s3:GetObject\n"))
        .stdout(predicate::str::contains("s3:PutBucketPolicy\n"));
}

#[test]
fn action_table_single_record_is_pretty_json() {
    cmd()
        .args(["query", "action-table", "--service", "s3", "--name", "GetObject"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"action\": \"s3:GetObject\""))
        .stdout(predicate::str::contains("\"access_level\": \"Read\""));
}

#[test]
fn action_table_missing_action_fails_with_typed_message() {
    cmd()
        .args(["query", "action-table", "--service", "s3", "--name", "GetObjekt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("action 'GetObjekt' not found"));
}

#[test]
fn action_table_all_services_lists_prefixes() {
    cmd()
        .args(["query", "action-table", "--service", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cloud9\n"))
        .stdout(predicate::str::contains("ssm\n"));
}

#[test]
fn action_table_all_services_at_level_aggregates() {
    cmd()
        .args([
            "query",
            "action-table",
            "--service",
            "all",
            "--access-level",
            "tagging",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("cloud9:TagResource\n"))
        .stdout(predicate::str::contains("s3:PutBucketTagging\n"));
}

#[test]
fn action_table_rejects_unknown_access_level() {
    // clap validates the choice list before the engine runs.
    cmd()
        .args([
            "query",
            "action-table",
            "--service",
            "s3",
            "--access-level",
            "reed",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'reed'"));
}

#[test]
fn action_table_yaml_output() {
    cmd()
        .args([
            "query",
            "action-table",
            "--service",
            "s3",
            "--wildcard-only",
            "--fmt",
            "yaml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("- s3:ListAllMyBuckets"));
}

#[test]
fn arn_table_lists_raw_arns() {
    cmd()
        .args(["query", "arn-table", "--service", "s3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("arn:${Partition}:s3:::${BucketName}\n"));
}

#[test]
fn arn_table_by_name_returns_the_template() {
    cmd()
        .args([
            "query",
            "arn-table",
            "--service",
            "cloud9",
            "--name",
            "environment",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "arn:${Partition}:cloud9:${Region}:${Account}:environment:${ResourceId}",
        ));
}

#[test]
fn arn_table_list_arn_types_prints_pairs() {
    cmd()
        .args([
            "query",
            "arn-table",
            "--service",
            "s3",
            "--list-arn-types",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"resource_type_name\": \"bucket\""));
}

#[test]
fn condition_table_lists_keys() {
    cmd()
        .args(["query", "condition-table", "--service", "s3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("s3:prefix\n"));
}

#[test]
fn condition_table_by_name_returns_the_record() {
    cmd()
        .args([
            "query",
            "condition-table",
            "--service",
            "s3",
            "--name",
            "s3:prefix",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"condition_value_type\": \"String\""));
}

#[test]
fn unknown_service_is_reported_distinctly() {
    cmd()
        .args(["query", "condition-table", "--service", "nachos"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "service 'nachos' not found in the metadata store",
        ));
}

#[test]
fn database_flag_loads_an_alternate_dataset() {
    let dir = tempfile::tempdir().expect("should create tempdir");
    let path = dir.path().join("definition.json");
    std::fs::write(
        &path,
        r#"{
            "services": {
                "toy": {
                    "actions": [
                        {"name": "Poke", "access_level": "Write", "resource_types": []}
                    ]
                }
            }
        }"#,
    )
    .expect("should write dataset");

    cmd()
        .args(["query", "action-table", "--service", "toy"])
        .arg("--database")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("toy:Poke\n"));
}
