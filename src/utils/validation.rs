use crate::utils::error::{QuickstartError, Result};
use url::Url;

/// `EDAM_NOTE_TITLE_LEN_MAX`
pub const NOTE_TITLE_LEN_MAX: usize = 255;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(QuickstartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(QuickstartError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(QuickstartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QuickstartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// EDAM titles are 1..=255 chars with no leading or trailing whitespace and
/// no control characters or line/paragraph separators.
pub fn validate_note_title(field_name: &str, title: &str) -> Result<()> {
    validate_non_empty_string(field_name, title)?;

    if title.trim() != title {
        return Err(QuickstartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: title.to_string(),
            reason: "Title cannot start or end with whitespace".to_string(),
        });
    }

    if let Some(bad) = title
        .chars()
        .find(|c| c.is_control() || matches!(c, '\u{2028}' | '\u{2029}'))
    {
        return Err(QuickstartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: title.escape_debug().to_string(),
            reason: format!("Title cannot contain control character {:?}", bad),
        });
    }

    let length = title.chars().count();
    if length > NOTE_TITLE_LEN_MAX {
        return Err(QuickstartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: title.to_string(),
            reason: format!(
                "Title is {} characters, maximum is {}",
                length, NOTE_TITLE_LEN_MAX
            ),
        });
    }
    Ok(())
}
