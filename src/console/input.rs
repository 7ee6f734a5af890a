/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde_json::Value;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::error::InputError;
use crate::shared::{Direction, Floor};

/***************************************/
/*             Public API              */
/***************************************/

/// Parses a floor number. Whole numbers written as `3.0` or `1e3` are accepted.
pub fn parse_int(input: &str) -> Result<Floor, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::NotAnInteger(input.to_string()));
    }

    if let Ok(floor) = trimmed.parse::<Floor>() {
        return Ok(floor);
    }

    trimmed
        .parse::<f64>()
        .ok()
        .and_then(whole_number)
        .ok_or_else(|| InputError::NotAnInteger(input.to_string()))
}

pub fn parse_direction(input: &str) -> Result<Direction, InputError> {
    input.parse::<Direction>()
}

/// Parses a JSON array of floors, e.g. `[1, 3, 15]`.
pub fn parse_floors(input: &str) -> Result<Vec<Floor>, InputError> {
    let value: Value =
        serde_json::from_str(input).map_err(|_| InputError::MalformedArray(input.to_string()))?;

    let items = match value {
        Value::Array(items) => items,
        _ => return Err(InputError::NotAnArray(input.to_string())),
    };

    items
        .iter()
        .map(|item| floor_from_value(item).ok_or_else(|| InputError::NotAnIntElement(describe(item))))
        .collect()
}

/***************************************/
/*          Private helpers            */
/***************************************/
fn whole_number(value: f64) -> Option<Floor> {
    // i64::MAX as f64 rounds up to 2^63, which is out of range
    if value.is_finite() && value.fract() == 0.0 && value >= Floor::MIN as f64 && value < Floor::MAX as f64 {
        Some(value as Floor)
    } else {
        None
    }
}

fn floor_from_value(value: &Value) -> Option<Floor> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_number)),
        Value::String(s) => parse_int(s).ok(),
        _ => None,
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
