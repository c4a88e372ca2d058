//! Rendering helpers for profile table cells.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use octo_client::{Profile, ProfileProxy};

/// Shown for absent values.
pub const PLACEHOLDER: &str = "-";

const DISPLAY_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

/// Human label for an upstream status code.
pub fn status_label(code: i64) -> Option<&'static str> {
    match code {
        0 => Some("inactive"),
        1 => Some("active"),
        2 => Some("suspended"),
        _ => None,
    }
}

/// `mode://host:port`, or the placeholder when the profile has no proxy.
pub fn format_proxy(proxy: Option<&ProfileProxy>) -> String {
    match proxy {
        Some(p) => format!("{}://{}:{}", p.mode, p.host, p.port),
        None => PLACEHOLDER.to_string(),
    }
}

/// Parse an upstream timestamp.
///
/// Accepts RFC 3339 and offset-less `YYYY-MM-DD[T ]HH:MM:SS`, the latter read
/// as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Timestamp in the viewer's local time zone.
pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_in(raw, &Local)
}

/// Timestamp rendered in `tz`. Unparseable input is returned unchanged.
pub fn format_timestamp_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match parse_timestamp(raw) {
        Some(dt) => dt.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRow {
    pub id: String,
    pub title: String,
    pub status: String,
    pub description: String,
    pub proxy: String,
    pub created_at: String,
}

impl From<&Profile> for ProfileRow {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.clone(),
            title: profile.title.clone(),
            status: profile
                .status
                .and_then(status_label)
                .unwrap_or(PLACEHOLDER)
                .to_string(),
            description: profile
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(PLACEHOLDER)
                .to_string(),
            proxy: format_proxy(profile.proxy.as_ref()),
            created_at: format_timestamp(&profile.created_at),
        }
    }
}
