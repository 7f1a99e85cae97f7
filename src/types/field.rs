use std::fmt;
use std::fmt::{Display, Formatter};

/// The six mandatory columns of an uploaded transaction, in CSV column order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Field {
    Reference,
    AccountNumber,
    Description,
    StartBalance,
    Mutation,
    EndBalance
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Reference,
        Field::AccountNumber,
        Field::Description,
        Field::StartBalance,
        Field::Mutation,
        Field::EndBalance
    ];

    /// Key of the field inside a JSON record.
    pub fn key(self) -> &'static str {
        match self {
            Field::Reference => "reference",
            Field::AccountNumber => "accountNumber",
            Field::Description => "description",
            Field::StartBalance => "startBalance",
            Field::Mutation => "mutation",
            Field::EndBalance => "endBalance"
        }
    }

    /// Human readable name used in decode error messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::Reference => "Reference",
            Field::AccountNumber => "Account number",
            Field::Description => "Description",
            Field::StartBalance => "Start balance",
            Field::Mutation => "Mutation",
            Field::EndBalance => "End balance"
        }
    }
}

impl Display for Field {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}
