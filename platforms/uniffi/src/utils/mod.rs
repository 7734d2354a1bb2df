use std::str::FromStr;

use rust_decimal::Decimal;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::error::BindingError;

pub(crate) mod native_session_storage;

/// Date-time formatting
pub trait TimestampFormat {
    fn format_timestamp(&self) -> String;
}

impl TimestampFormat for OffsetDateTime {
    fn format_timestamp(&self) -> String {
        self.format(&Rfc3339).unwrap_or_default()
    }
}

pub(crate) fn format_timestamp_opt(value: &Option<OffsetDateTime>) -> Option<String> {
    value.as_ref().map(TimestampFormat::format_timestamp)
}

pub(crate) fn format_decimal_opt(value: &Option<Decimal>) -> Option<String> {
    value.as_ref().map(Decimal::to_string)
}

/// Amounts cross the boundary as decimal strings, e.g. `"5000"` or `"1250.50"`.
pub(crate) fn parse_amount(input: &str) -> Result<Decimal, BindingError> {
    Decimal::from_str(input.trim()).map_err(|e| BindingError::InvalidInput {
        reason: format!("Invalid amount `{input}`: {e}"),
    })
}
