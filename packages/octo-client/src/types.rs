use serde::{Deserialize, Deserializer, Serialize};

/// A browser profile as returned by the Octo Browser API.
///
/// Decoding is lenient: one odd record never fails the whole list. Missing or
/// `null` text fields fall back to empty strings, a non-integer `status` is
/// `None`, a proxy that does not have the expected shape is `None`, and any
/// field the dashboard does not render is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Upstream records carry their identity as `uuid`.
    #[serde(default, alias = "uuid", deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::status")]
    pub status: Option<i64>,
    #[serde(default, deserialize_with = "lenient::proxy")]
    pub proxy: Option<ProfileProxy>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub created_at: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub updated_at: String,
}

/// Proxy attached to a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileProxy {
    pub mode: String,
    pub host: String,
    /// Accepts a JSON number or a numeric string.
    #[serde(deserialize_with = "lenient::port")]
    pub port: u16,
}

/// Wrapper for profile list responses.
///
/// `data` stays optional so a missing key can be reported as its own error
/// instead of a generic decode failure.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub data: Option<T>,
}

mod lenient {
    use super::*;
    use serde::de::Error;
    use serde_json::Value;

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(optional_string(d)?.unwrap_or_default())
    }

    /// Strings pass through, numbers are rendered, anything else is `None`.
    pub fn optional_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    pub fn status<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        Ok(Value::deserialize(d)?.as_i64())
    }

    pub fn proxy<'de, D: Deserializer<'de>>(d: D) -> Result<Option<ProfileProxy>, D::Error> {
        let value = Value::deserialize(d)?;
        if value.is_null() {
            return Ok(None);
        }
        match serde_json::from_value::<ProfileProxy>(value) {
            Ok(proxy) => Ok(Some(proxy)),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring malformed profile proxy");
                Ok(None)
            }
        }
    }

    pub fn port<'de, D: Deserializer<'de>>(d: D) -> Result<u16, D::Error> {
        match Value::deserialize(d)? {
            Value::Number(n) => n
                .as_u64()
                .and_then(|p| u16::try_from(p).ok())
                .ok_or_else(|| D::Error::custom(format!("invalid port: {n}"))),
            Value::String(s) => s
                .trim()
                .parse::<u16>()
                .map_err(|_| D::Error::custom(format!("invalid port: {s:?}"))),
            other => Err(D::Error::custom(format!("invalid port: {other}"))),
        }
    }
}
