use super::{Batch, BatchError, BatchStatus, Report, RowResult, RowValue, BALANCE_MISMATCH};

use std::str::FromStr;

use anyhow::{anyhow, Result};
use csv::StringRecord;
use bigdecimal::BigDecimal;
use serde_json::{json, Map, Value};

use crate::types::{DecodeError, Field};

fn create_record(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
}

fn create_object(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(object) => Ok(object),
        other => Err(anyhow!("Expected an object but got {other}"))
    }
}

fn create_row(start_balance: &str, mutation: &str, end_balance: &str) -> Result<RowValue> {
    Ok(RowValue {
        reference: 1,
        account_number: "NL91RABO0315273637".to_string(),
        description: "Book John Smith".to_string(),
        start_balance: BigDecimal::from_str(start_balance)?,
        mutation: BigDecimal::from_str(mutation)?,
        end_balance: BigDecimal::from_str(end_balance)?
    })
}

#[test]
fn test_csv_record_decodes_all_six_columns() -> Result<()> {
    let record = create_record(&["194261", "NL91RABO0315273637", "Clothes from Jan Bakker", "21.6", "-41.83", "-20.23"]);
    let row = RowValue::from_record(&record)?;

    assert_eq!(row.reference, 194261);
    assert_eq!(row.account_number, "NL91RABO0315273637");
    assert_eq!(row.description, "Clothes from Jan Bakker");
    assert_eq!(row.start_balance, BigDecimal::from_str("21.6")?);
    assert_eq!(row.mutation, BigDecimal::from_str("-41.83")?);
    assert_eq!(row.end_balance, BigDecimal::from_str("-20.23")?);

    Ok(())
}

#[test]
fn test_csv_record_accepts_empty_text_columns() -> Result<()> {
    let row = RowValue::from_record(&create_record(&["1", "", "", "0", "0", "0"]))?;

    assert!(row.account_number.is_empty());
    assert!(row.description.is_empty());

    Ok(())
}

#[test]
fn test_csv_record_with_wrong_column_count_fails() {
    let too_few = create_record(&["1", "NL91", "desc", "1", "2"]);
    let too_many = create_record(&["1", "NL91", "desc", "1", "2", "3", "4"]);

    assert_eq!(RowValue::from_record(&too_few), Err(DecodeError::ColumnCount));
    assert_eq!(RowValue::from_record(&too_many), Err(DecodeError::ColumnCount));
}

#[test]
fn test_csv_record_reports_first_invalid_number() {
    let bad_reference = create_record(&["abc", "NL91", "desc", "1", "2", "3"]);
    let bad_mutation = create_record(&["1", "NL91", "desc", "1", "two", "3"]);

    assert_eq!(RowValue::from_record(&bad_reference), Err(DecodeError::InvalidNumber(Field::Reference)));
    assert_eq!(RowValue::from_record(&bad_mutation), Err(DecodeError::InvalidNumber(Field::Mutation)));
}

#[test]
fn test_json_object_decodes_in_any_key_order() -> Result<()> {
    let object = create_object(json!({
        "endBalance": "16",
        "mutation": 5,
        "description": "Tickets for Rik Theuß",
        "startBalance": "10",
        "accountNumber": "NL69ABNA0433647324",
        "reference": 167875,
        "unknown": true
    }))?;

    let row = RowValue::from_object(&object)?;

    assert_eq!(row.reference, 167875);
    assert_eq!(row.account_number, "NL69ABNA0433647324");
    assert_eq!(row.description, "Tickets for Rik Theuß");
    assert_eq!(row.mutation, BigDecimal::from(5));
    assert_eq!(row.end_balance, BigDecimal::from(16));

    Ok(())
}

#[test]
fn test_json_object_keeps_exact_decimal_numbers() -> Result<()> {
    let object = create_object(serde_json::from_str(
        r#"{"reference":1,"accountNumber":"A","description":"B","startBalance":0.1,"mutation":0.2,"endBalance":0.3}"#
    )?)?;

    let row = RowValue::from_object(&object)?;

    assert_eq!(row.start_balance, BigDecimal::from_str("0.1")?);
    assert!(row.is_balanced());

    Ok(())
}

#[test]
fn test_json_object_treats_missing_and_null_fields_as_missing() -> Result<()> {
    let missing_mutation = create_object(json!({
        "reference": 1, "accountNumber": "A", "description": "B", "startBalance": "1", "endBalance": "1"
    }))?;
    let null_description = create_object(json!({
        "reference": 1, "accountNumber": "A", "description": null, "startBalance": "1", "mutation": "0", "endBalance": "1"
    }))?;

    assert_eq!(RowValue::from_object(&missing_mutation), Err(DecodeError::Missing(Field::Mutation)));
    assert_eq!(RowValue::from_object(&null_description), Err(DecodeError::Missing(Field::Description)));

    Ok(())
}

#[test]
fn test_json_object_accepts_zero_reference() -> Result<()> {
    let object = create_object(json!({
        "reference": 0, "accountNumber": "A", "description": "B", "startBalance": "1", "mutation": "0", "endBalance": "1"
    }))?;

    assert_eq!(RowValue::from_object(&object)?.reference, 0);

    Ok(())
}

#[test]
fn test_json_object_rejects_non_numeric_balances() -> Result<()> {
    let object = create_object(json!({
        "reference": 1, "accountNumber": "A", "description": "B", "startBalance": [1], "mutation": "0", "endBalance": "1"
    }))?;

    assert_eq!(RowValue::from_object(&object), Err(DecodeError::InvalidNumber(Field::StartBalance)));

    Ok(())
}

#[test]
fn test_balance_check_is_exact_and_scale_insensitive() -> Result<()> {
    assert!(create_row("1.0", "2", "3.00")?.is_balanced());
    assert!(create_row("-10", "5.5", "-4.5")?.is_balanced());
    assert!(!create_row("10", "5", "16")?.is_balanced());
    assert!(!create_row("0.1", "0.2", "0.3000000001")?.is_balanced());

    Ok(())
}

#[test]
fn test_balance_check_never_rounds_the_sum() -> Result<()> {
    let row = create_row("10", "0.0000000000000000000000000001", "10")?;

    assert_eq!(row.expected_end_balance(), BigDecimal::from_str("10.0000000000000000000000000001")?);
    assert!(!row.is_balanced());
    assert!(create_row("10", "0.0000000000000000000000000001", "10.0000000000000000000000000001")?.is_balanced());

    Ok(())
}

#[test]
fn test_balance_check_handles_values_beyond_96_bits() -> Result<()> {
    let huge = "79228162514264337593543950335";

    assert!(create_row(huge, huge, "158456325028528675187087900670")?.is_balanced());
    assert!(!create_row(huge, huge, "158456325028528675187087900671")?.is_balanced());

    Ok(())
}

#[test]
fn test_row_result_wraps_decode_errors_with_line_number() {
    let result = RowResult::decoded(Err(DecodeError::InvalidNumber(Field::Reference)), 3);

    assert_eq!(result, RowResult::Invalid { error: "Reference is not a valid number".to_string(), line_number: 3 });
}

#[test]
fn test_report_for_invalid_row_has_no_reference_or_description() {
    let report = Report::invalid_row("Invalid number of columns", 7);

    assert_eq!(report.reference, None);
    assert_eq!(report.description, None);
    assert_eq!(report.error_message, "Invalid number of columns at line 7");
}

#[test]
fn test_report_serializes_with_camel_case_and_nulls() -> Result<()> {
    let row = create_row("10", "5", "16")?;

    let valid = serde_json::to_string(&Report::for_row(&row, BALANCE_MISMATCH))?;
    let invalid = serde_json::to_string(&Report::invalid_row("Mutation is missing", 2))?;

    assert_eq!(valid, r#"{"reference":1,"description":"Book John Smith","errorMessage":"Ending balance did not match"}"#);
    assert_eq!(invalid, r#"{"reference":null,"description":null,"errorMessage":"Mutation is missing at line 2"}"#);

    Ok(())
}

#[test]
fn test_batch_lifecycle_moves_once_to_a_terminal_state() -> Result<()> {
    let mut batch = Batch::new();

    assert_eq!(batch.status, BatchStatus::Running);

    batch.complete()?;

    assert_eq!(batch.status, BatchStatus::Completed);
    assert!(matches!(batch.fail(), Err(BatchError::InvalidTransition { .. })));
    assert_eq!(batch.status, BatchStatus::Completed);

    let mut failed = Batch::new();
    failed.fail()?;

    assert!(matches!(failed.complete(), Err(BatchError::InvalidTransition { to: BatchStatus::Completed, .. })));

    Ok(())
}

#[test]
fn test_batches_receive_unique_identifiers() {
    assert_ne!(Batch::new().id, Batch::new().id);
}
