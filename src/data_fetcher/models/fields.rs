//! Typed field access on loosely-shaped API records

use serde_json::Value;

use super::page::Record;
use crate::error::AppError;

pub fn required<'a>(
    record: &'a Record,
    entity: &'static str,
    field: &str,
) -> Result<&'a Value, AppError> {
    record
        .get(field)
        .filter(|value| !value.is_null())
        .ok_or_else(|| AppError::entity_field(entity, field))
}

pub fn required_str<'a>(
    record: &'a Record,
    entity: &'static str,
    field: &str,
) -> Result<&'a str, AppError> {
    required(record, entity, field)?
        .as_str()
        .ok_or_else(|| AppError::entity_field(entity, field))
}

pub fn required_i64(record: &Record, entity: &'static str, field: &str) -> Result<i64, AppError> {
    required(record, entity, field)?
        .as_i64()
        .ok_or_else(|| AppError::entity_field(entity, field))
}
