use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Developer token passed by value to every EDAM call.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Returns `None` for empty or whitespace-only input.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthToken(<{} chars>)", self.0.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    pub guid: Option<String>,
    pub name: String,
    pub default_notebook: bool,
    pub stack: Option<String>,
}

impl Notebook {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            guid: None,
            name: name.into(),
            default_notebook: false,
            stack: None,
        }
    }
}

/// Locally built note sent to `createNote`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub notebook_guid: Option<String>,
}

/// Note as returned by the service after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub guid: Option<String>,
    pub title: Option<String>,
    pub notebook_guid: Option<String>,
    pub content_length: Option<i32>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
}

/// EDAM timestamps are milliseconds since the Unix epoch.
pub fn timestamp_from_millis(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}

/// Summary of one quickstart run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub version_ok: bool,
    pub note_store_url: String,
    pub notebooks: Vec<Notebook>,
    pub selected_notebook: Option<Notebook>,
    pub created_note: Note,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdamErrorCode {
    Unknown,
    BadDataFormat,
    PermissionDenied,
    InternalError,
    DataRequired,
    LimitReached,
    QuotaReached,
    InvalidAuth,
    AuthExpired,
    DataConflict,
    EnmlValidation,
    ShardUnavailable,
    LenTooShort,
    LenTooLong,
    TooFew,
    TooMany,
    UnsupportedOperation,
    TakenDown,
    RateLimitReached,
    BusinessSecurityLoginRequired,
    DeviceLimitReached,
    Other(i32),
}

impl EdamErrorCode {
    pub fn from_i32(value: i32) -> Self {
        match value {
            1 => Self::Unknown,
            2 => Self::BadDataFormat,
            3 => Self::PermissionDenied,
            4 => Self::InternalError,
            5 => Self::DataRequired,
            6 => Self::LimitReached,
            7 => Self::QuotaReached,
            8 => Self::InvalidAuth,
            9 => Self::AuthExpired,
            10 => Self::DataConflict,
            11 => Self::EnmlValidation,
            12 => Self::ShardUnavailable,
            13 => Self::LenTooShort,
            14 => Self::LenTooLong,
            15 => Self::TooFew,
            16 => Self::TooMany,
            17 => Self::UnsupportedOperation,
            18 => Self::TakenDown,
            19 => Self::RateLimitReached,
            20 => Self::BusinessSecurityLoginRequired,
            21 => Self::DeviceLimitReached,
            other => Self::Other(other),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::BadDataFormat => "BAD_DATA_FORMAT",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::DataRequired => "DATA_REQUIRED",
            Self::LimitReached => "LIMIT_REACHED",
            Self::QuotaReached => "QUOTA_REACHED",
            Self::InvalidAuth => "INVALID_AUTH",
            Self::AuthExpired => "AUTH_EXPIRED",
            Self::DataConflict => "DATA_CONFLICT",
            Self::EnmlValidation => "ENML_VALIDATION",
            Self::ShardUnavailable => "SHARD_UNAVAILABLE",
            Self::LenTooShort => "LEN_TOO_SHORT",
            Self::LenTooLong => "LEN_TOO_LONG",
            Self::TooFew => "TOO_FEW",
            Self::TooMany => "TOO_MANY",
            Self::UnsupportedOperation => "UNSUPPORTED_OPERATION",
            Self::TakenDown => "TAKEN_DOWN",
            Self::RateLimitReached => "RATE_LIMIT_REACHED",
            Self::BusinessSecurityLoginRequired => "BUSINESS_SECURITY_LOGIN_REQUIRED",
            Self::DeviceLimitReached => "DEVICE_LIMIT_REACHED",
            Self::Other(_) => "UNRECOGNIZED",
        }
    }
}

impl fmt::Display for EdamErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other(code) => write!(f, "UNRECOGNIZED({})", code),
            known => f.write_str(known.name()),
        }
    }
}
