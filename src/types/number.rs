use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::types::{DecodeError, Field, Reference};

/// Parses the transaction reference as an exact signed 64-bit integer.
pub fn parse_reference(value: &str) -> Result<Reference, DecodeError> {
    value.parse::<Reference>()
        .map_err(|_| DecodeError::InvalidNumber(Field::Reference))
}

/// Parses a balance or mutation without any rounding or length limit.
///
/// Plain (`-10.25`) and scientific (`1.5E+3`) notation are both accepted.
pub fn parse_decimal(field: Field, value: &str) -> Result<BigDecimal, DecodeError> {
    //NOTE: The digits go through num-bigint, which tolerates '_' as a separator, uploaded files must not
    if value.is_empty() || value.contains('_') {
        return Err(DecodeError::InvalidNumber(field));
    }

    BigDecimal::from_str(value)
        .map_err(|_| DecodeError::InvalidNumber(field))
}
