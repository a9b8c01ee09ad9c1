pub mod calendar;
pub mod finance;
pub mod folders;
pub mod mood;
pub mod notes;
pub mod profile;
pub mod tasks;
pub mod weather;
pub mod widgets;

use crate::error::HubError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use lifehub_calendar_core::trailing_dates;

/// Unwrap a JSON body extraction, turning any rejection (wrong content type,
/// malformed JSON, shape mismatch) into a field-agnostic 400.
pub(crate) fn require_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, HubError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => Err(HubError::invalid("body", rejection.body_text())),
    }
}

/// IANA timezone from a query parameter, defaulting to UTC.
pub(crate) fn parse_tz(tz: Option<&str>) -> Result<Tz, HubError> {
    match tz {
        None => Ok(chrono_tz::UTC),
        Some(s) => s
            .parse()
            .map_err(|_| HubError::invalid("tz", format!("unknown timezone `{s}`"))),
    }
}

/// Trailing-days analytics window bucketed in the client's timezone; `None`
/// when no window was requested.
pub(crate) fn analytics_range(
    days: Option<u32>,
    tz: Option<&str>,
) -> Result<Option<(NaiveDate, NaiveDate)>, HubError> {
    let Some(days) = days else { return Ok(None) };
    let tz = parse_tz(tz)?;
    Ok(Some(trailing_dates(Utc::now(), days, tz)))
}
