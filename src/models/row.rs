use csv::StringRecord;
use bigdecimal::BigDecimal;
use serde_json::{Map, Value};

use crate::types::{parse_decimal, parse_reference, DecodeError, Field, LineNumber, Reference};

/// A structurally valid transaction row, identical for every input format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowValue {
    pub reference: Reference,
    pub account_number: String,
    pub description: String,
    pub start_balance: BigDecimal,
    pub mutation: BigDecimal,
    pub end_balance: BigDecimal
}

/// Outcome of decoding one row.
///
/// Line numbers are 1-based and only count data rows, never a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowResult {
    Valid(RowValue),
    Invalid {
        error: String,
        line_number: LineNumber
    }
}

impl RowResult {
    pub fn decoded(result: Result<RowValue, DecodeError>, line_number: LineNumber) -> Self {
        match result {
            Ok(value) => RowResult::Valid(value),
            Err(error) => RowResult::Invalid { error: error.to_string(), line_number }
        }
    }
}

impl RowValue {
    /// Decodes a CSV record holding exactly six columns in fixed order.
    pub fn from_record(record: &StringRecord) -> Result<Self, DecodeError> {
        if record.len() != Field::ALL.len() {
            return Err(DecodeError::ColumnCount)
        }

        Ok(Self {
            reference: parse_reference(&record[0])?,
            account_number: record[1].to_string(),
            description: record[2].to_string(),
            start_balance: parse_decimal(Field::StartBalance, &record[3])?,
            mutation: parse_decimal(Field::Mutation, &record[4])?,
            end_balance: parse_decimal(Field::EndBalance, &record[5])?
        })
    }

    /// Decodes a flat JSON object. Key order is irrelevant and unknown keys are ignored,
    /// but every field must be present and non-null.
    pub fn from_object(object: &Map<String, Value>) -> Result<Self, DecodeError> {
        Ok(Self {
            reference: parse_reference(&number_text(object, Field::Reference)?)?,
            account_number: text(object, Field::AccountNumber)?,
            description: text(object, Field::Description)?,
            start_balance: parse_decimal(Field::StartBalance, &number_text(object, Field::StartBalance)?)?,
            mutation: parse_decimal(Field::Mutation, &number_text(object, Field::Mutation)?)?,
            end_balance: parse_decimal(Field::EndBalance, &number_text(object, Field::EndBalance)?)?
        })
    }

    /// `start_balance + mutation`, computed without rounding at any precision.
    pub fn expected_end_balance(&self) -> BigDecimal {
        &self.start_balance + &self.mutation
    }

    /// Exact reconciliation, insensitive to scale (`3.0 == 3.00`).
    pub fn is_balanced(&self) -> bool {
        self.expected_end_balance() == self.end_balance
    }
}

fn field_value(object: &Map<String, Value>, field: Field) -> Result<&Value, DecodeError> {
    match object.get(field.key()) {
        None | Some(Value::Null) => Err(DecodeError::Missing(field)),
        Some(value) => Ok(value)
    }
}

fn number_text(object: &Map<String, Value>, field: Field) -> Result<String, DecodeError> {
    match field_value(object, field)? {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        _ => Err(DecodeError::InvalidNumber(field))
    }
}

fn text(object: &Map<String, Value>, field: Field) -> Result<String, DecodeError> {
    match field_value(object, field)? {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        _ => Err(DecodeError::InvalidText(field))
    }
}
