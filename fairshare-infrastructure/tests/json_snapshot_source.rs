use fairshare_application::{LedgerProcessor, MemberPosition, RecordSource, SnapshotError};
use fairshare_domain::{MemberId, Money, Transfer};
use fairshare_infrastructure::JsonSnapshotSource;
use rstest::{fixture, rstest};
use std::{fs, path::PathBuf};
use tempfile::TempDir;

const DINNER_GROUP: &str = r#"{
    "members": [
        { "id": "a", "displayName": "Asha" },
        { "id": "b", "displayName": "Bilal" },
        { "id": "c", "displayName": "Chen" }
    ],
    "expenses": [
        {
            "id": "dinner", "description": "Dinner", "payerId": "a", "amount": 90,
            "splitType": "itemized",
            "items": [
                { "description": "x", "amount": 60, "assignedTo": ["a", "b"] },
                { "description": "y", "amount": 30, "assignedTo": ["c"] }
            ]
        }
    ],
    "settlements": [
        { "id": "s1", "from": "c", "to": "a", "amount": 10, "status": "confirmed" },
        { "id": "s2", "from": "b", "to": "a", "amount": 30 }
    ]
}"#;

fn id(name: &str) -> MemberId {
    MemberId::from(name)
}

#[fixture]
fn workdir() -> TempDir {
    tempfile::tempdir().expect("temp dir")
}

fn write_group(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("group.json");
    fs::write(&path, contents).expect("write group file");
    path
}

#[rstest]
fn evaluates_a_group_file(workdir: TempDir) {
    let source = JsonSnapshotSource::new(write_group(&workdir, DINNER_GROUP));

    let document = source.load_document().expect("document");
    let snapshot = document.snapshot;
    let result = LedgerProcessor::evaluate(&snapshot);

    assert_eq!(result.active_total, Money::from_i64(90));
    assert!(!result.all_settled);
    assert_eq!(
        LedgerProcessor::position_of(&result, &id("a")),
        MemberPosition::IsOwed(Money::from_i64(50))
    );
    assert_eq!(
        result.transfers,
        vec![
            Transfer {
                from: id("b"),
                to: id("a"),
                amount: Money::from_i64(30),
            },
            Transfer {
                from: id("c"),
                to: id("a"),
                amount: Money::from_i64(20),
            },
        ]
    );

    let inbox = LedgerProcessor::pending_for(&snapshot, &id("a"));
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].from, id("b"));

    assert_eq!(document.display_names[&id("c")], "Chen");
    assert_eq!(LedgerProcessor::new(&source).refresh().expect("refresh"), result);
}

#[rstest]
fn latest_write_wins(workdir: TempDir) {
    let path = write_group(&workdir, r#"{ "members": ["a"] }"#);
    let source = JsonSnapshotSource::new(&path);
    assert_eq!(source.snapshot().expect("first").roster, vec![id("a")]);

    fs::write(&path, r#"{ "members": ["a", "b"] }"#).expect("rewrite");

    assert_eq!(
        source.snapshot().expect("second").roster,
        vec![id("a"), id("b")]
    );
}

#[rstest]
fn missing_file_is_an_io_error(workdir: TempDir) {
    let source = JsonSnapshotSource::new(workdir.path().join("absent.json"));

    let err = source.snapshot().expect_err("missing file");

    assert!(matches!(err, SnapshotError::Io(_)));
}

#[rstest]
fn broken_json_is_malformed(workdir: TempDir) {
    let source = JsonSnapshotSource::new(write_group(&workdir, "{ \"members\": [1, "));

    let err = source.snapshot().expect_err("broken json");

    assert!(matches!(err, SnapshotError::Malformed { .. }));
}
