//! Strongly-typed value objects used by domain records.
//!
//! Identifiers arrive from two places. URL path segments are validated before
//! they are interpolated into a backend URL; identifiers inside backend
//! payloads are taken as sent.
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Identifier contained characters outside `[A-Za-z0-9_-]`.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
    /// Timestamp matched none of the accepted formats.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

fn validate_id<S: Into<String>>(value: S) -> Result<String, TypeConstraintError> {
    let value = value.into().trim().to_string();
    if value.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    if value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Ok(value)
    } else {
        Err(TypeConstraintError::InvalidId(value))
    }
}

/// Macro to generate lightweight newtypes for backend identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, PartialEq, Eq, Hash)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier ensuring it is a safe path segment.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                validate_id(value).map(Self)
            }

            /// Wraps an identifier reported by the backend without validation.
            pub fn from_backend<S: Into<String>>(value: S) -> Self {
                Self(value.into())
            }

            /// Borrow the identifier as a `&str`.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                String::deserialize(deserializer).map(Self::from_backend)
            }
        }
    };
}

id_newtype!(OrderId, "Unique identifier for an order.");
id_newtype!(ProposalId, "Unique identifier for a proposal.");
id_newtype!(EngagementId, "Unique identifier for an engagement.");
id_newtype!(ProjectId, "Unique identifier for a project.");
id_newtype!(ConversationId, "Unique identifier for a conversation.");

/// Point in time reported by the backend, normalised to UTC.
///
/// The backend emits RFC 3339 values, ISO-8601 values with a `+hhmm` offset
/// or none at all, and bare dates. Values without an offset are read as UTC,
/// bare dates as midnight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

impl Timestamp {
    pub fn parse(value: &str) -> Result<Self, TypeConstraintError> {
        let value = value.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
            return Ok(Self(parsed.with_timezone(&Utc)));
        }
        for format in OFFSET_FORMATS {
            if let Ok(parsed) = DateTime::parse_from_str(value, format) {
                return Ok(Self(parsed.with_timezone(&Utc)));
            }
        }
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
                return Ok(Self(naive.and_utc()));
            }
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Self(naive.and_utc()))
            .ok_or_else(|| TypeConstraintError::InvalidTimestamp(value.to_string()))
    }

    pub const fn from_utc(value: DateTime<Utc>) -> Self {
        Self(value)
    }

    pub fn get(self) -> DateTime<Utc> {
        self.0
    }
}

impl Deref for Timestamp {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Reads an optional backend timestamp. Values that are missing, not strings
/// or in no recognised format become `None` instead of failing the record.
pub fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|value| Timestamp::parse(value).ok()))
}
