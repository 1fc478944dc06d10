use serde::Serializer;
use time::OffsetDateTime;
use time::macros::format_description;

/// Serializes as UTC with millisecond precision, e.g. `2023-06-09T14:19:57.000Z`
pub fn front_time<S>(dt: &OffsetDateTime, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let format =
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

    let formatted = dt
        .to_offset(time::UtcOffset::UTC)
        .format(&format)
        .map_err(serde::ser::Error::custom)?;

    s.serialize_str(&formatted)
}
