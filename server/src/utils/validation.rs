use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::models::booking::NewBooking;
use crate::utils::error::AppError;

pub const NO_INPUT: &str = "No input data provided.";
pub const MISSING_FIELDS: &str = "Invalid input. Required fields missing.";
pub const INVALID_EVENT_ID: &str = "Invalid event_id.";
pub const INVALID_EMAIL: &str = "Invalid email address.";

/// Turns a raw `POST /bookings` body into a booking to insert.
///
/// Checks run in a fixed order so the caller always gets the first problem:
/// empty or non-object body, missing fields, non-numeric `event_id`, then the
/// email shape. `event_id` may arrive as a JSON number or as a numeric string;
/// either way it is truncated to an integer.
pub fn parse_booking_request(body: &[u8]) -> Result<NewBooking, AppError> {
    let fields = parse_object(body).ok_or_else(|| invalid(NO_INPUT))?;

    let (Some(event_id), Some(user_email)) =
        (present(&fields, "event_id"), present(&fields, "user_email"))
    else {
        return Err(invalid(MISSING_FIELDS));
    };

    let event_id = coerce_event_id(event_id)
        .filter(|id| *id > 0)
        .ok_or_else(|| invalid(INVALID_EVENT_ID))?;

    let user_email = user_email
        .as_str()
        .map(str::trim)
        .filter(|email| is_valid_email(email))
        .ok_or_else(|| invalid(INVALID_EMAIL))?;

    Ok(NewBooking {
        event_id,
        user_email: user_email.to_string(),
    })
}

fn invalid(message: &str) -> AppError {
    AppError::ValidationError(message.to_string())
}

fn parse_object(body: &[u8]) -> Option<Map<String, Value>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    match serde_json::from_slice::<Value>(body).ok()? {
        Value::Object(map) if !map.is_empty() => Some(map),
        _ => None,
    }
}

fn present<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|value| !value.is_null())
}

fn coerce_event_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| truncate(n.as_f64()?)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| truncate(s.parse::<f64>().ok()?))
        }
        _ => None,
    }
}

fn truncate(value: f64) -> Option<i64> {
    // Rejects inf/NaN and anything past the i64 range.
    if value.is_finite() && value.abs() < i64::MAX as f64 {
        Some(value.trunc() as i64)
    } else {
        None
    }
}

/// `local@domain.tld`: letters, digits and `._%+-` before the `@`, a dotted
/// host after it, and a final alphabetic label of at least two letters.
/// Same pattern the browser client checks before posting.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
