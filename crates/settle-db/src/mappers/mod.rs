//! Entity <-> model mappers
//!
//! Mapping is fallible: enum-valued columns are stored as TEXT, so a corrupt
//! row surfaces as a `DomainError::DatabaseError` instead of a panic.

mod profile;
mod resource;
mod scam_assessment;
mod task_template;
mod template_doc;
mod user;
mod user_task;

use settle_core::DomainError;
use settle_core::EnumParseError;
use std::str::FromStr;

/// Parse a TEXT[] column into a typed enum list
pub(crate) fn parse_list<T>(values: Vec<String>) -> Result<Vec<T>, DomainError>
where
    T: FromStr<Err = EnumParseError>,
{
    values
        .into_iter()
        .map(|v| v.parse::<T>().map_err(DomainError::from))
        .collect()
}

/// Serialize a typed enum list into TEXT[] values
pub(crate) fn list_to_strings<T: ToString>(values: &[T]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}
