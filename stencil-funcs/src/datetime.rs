use minijinja::value::{Kwargs, Value};
use minijinja::{Error, ErrorKind};
use time::format_description;
use time::OffsetDateTime;

const DATETIME_FORMAT: &str = "[year]-[month]-[day] [hour]:[minute]:[second]";
const DATE_FORMAT: &str = "[year]-[month]-[day]";
const TIME_FORMAT: &str = "[hour]:[minute]:[second]";

/// Returns the current time in UTC as unix timestamp.
///
/// Format it with the `datetimeformat` filter.
pub fn now() -> Value {
    let now = OffsetDateTime::now_utc();
    Value::from(((now.unix_timestamp_nanos() / 1000) as f64) / 1_000_000.0)
}

/// Formats a unix timestamp as date and time in UTC.
///
/// The default format is `YYYY-MM-DD HH:MM:SS`; pass a `time` format
/// description to override it:
///
/// ```jinja
/// {{ now()|datetimeformat }}
/// {{ now()|datetimeformat(format="[day].[month].[year]") }}
/// ```
pub fn datetimeformat(value: Value, kwargs: Kwargs) -> Result<String, Error> {
    format_timestamp(value, kwargs, DATETIME_FORMAT)
}

/// Formats the date part of a unix timestamp in UTC.
pub fn dateformat(value: Value, kwargs: Kwargs) -> Result<String, Error> {
    format_timestamp(value, kwargs, DATE_FORMAT)
}

/// Formats the time part of a unix timestamp in UTC.
pub fn timeformat(value: Value, kwargs: Kwargs) -> Result<String, Error> {
    format_timestamp(value, kwargs, TIME_FORMAT)
}

fn format_timestamp(value: Value, kwargs: Kwargs, default_format: &str) -> Result<String, Error> {
    let datetime = timestamp(&value)?;
    let format: Option<&str> = kwargs.get("format")?;
    kwargs.assert_all_used()?;
    let items = format_description::parse(format.unwrap_or(default_format)).map_err(|err| {
        Error::new(ErrorKind::InvalidOperation, "invalid datetime format description")
            .with_source(err)
    })?;
    datetime.format(&items).map_err(|err| {
        Error::new(ErrorKind::InvalidOperation, "could not format timestamp").with_source(err)
    })
}

fn timestamp(value: &Value) -> Result<OffsetDateTime, Error> {
    let seconds = if let Ok(seconds) = i64::try_from(value.clone()) {
        seconds as f64
    } else if let Ok(seconds) = f64::try_from(value.clone()) {
        seconds
    } else {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("expected a unix timestamp, got {}", value.kind()),
        ));
    };
    OffsetDateTime::from_unix_timestamp_nanos((seconds * 1_000_000_000.0) as i128).map_err(
        |err| {
            Error::new(ErrorKind::InvalidOperation, "timestamp out of range").with_source(err)
        },
    )
}
