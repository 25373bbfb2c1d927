//! Tests reading batch files from disk and writing the results as json.

use time_calculator::input::Batch;

use pretty_assertions::assert_eq;

mod common;

#[test]
fn test_batch_file() {
    let file = common::make_batch_file(concat!(
        "[[calculation]]\n",
        "start = \"3:00 PM\"\n",
        "duration = \"3:10\"\n",
        "\n",
        "[[calculation]]\n",
        "start = \"11:59 PM\"\n",
        "duration = \"24:05\"\n",
        "\n",
        "[[calculation]]\n",
        "start = \"8:00 AM\"\n",
        "duration = \"1:00\"\n",
        "starting_day = \"Monday\"\n",
    ));

    let batch = Batch::try_from_toml_file(file.path()).expect("batch file should be valid");
    let results = batch.evaluate();

    assert_eq!(
        results
            .iter()
            .map(|result| (result.result(), result.days_later()))
            .collect::<Vec<_>>(),
        vec![
            ("6:10 PM", 0),
            ("12:04 AM (2 days later)", 2),
            ("9:00 AM, Monday", 0),
        ]
    );
}

#[test]
fn test_write_json() {
    let file = common::make_batch_file(concat!(
        "[[calculation]]\n",
        "start = \"2:59 AM\"\n",
        "duration = \"24:00\"\n",
        "starting_day = \"saturDay\"\n",
    ));

    let output = tempfile::tempdir().expect("should be able to create a temporary dir");
    let output = output.path().join("results.json");

    Batch::try_from_toml_file(file.path())
        .expect("batch file should be valid")
        .write_json(&output)
        .expect("should be able to write the results");

    let json: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(&output).expect("results should have been written"),
    )
    .expect("results should be valid json");

    assert_eq!(
        json,
        serde_json::json!([{
            "start": "2:59 AM",
            "duration": "24:00",
            "starting_day": "Saturday",
            "result": "2:59 AM, Sunday (next day)",
            "days_later": 1,
        }])
    );
}

#[test]
fn test_invalid_batch_file() {
    let file = common::make_batch_file(concat!(
        "[[calculation]]\n",
        "start = \"3:00 PM\"\n",
        "duration = \"310\"\n",
    ));

    let error = Batch::try_from_toml_file(file.path()).unwrap_err();
    assert!(
        format!("{:?}", error).contains("expected 2 parts separated by \":\" in \"310\""),
        "{:?}",
        error
    );
}

#[test]
fn test_missing_batch_file() {
    assert!(Batch::try_from_toml_file("does/not/exist.toml").is_err());
}
