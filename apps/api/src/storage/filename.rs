//! Stored file naming.
//!
//! Saved resumes live in one flat directory. Names coming from clients are
//! only ever treated as a single path component inside that directory.

use chrono::{DateTime, TimeZone};

use crate::errors::AppError;

/// Longest name most filesystems accept for a single component.
pub const MAX_NAME_LEN: usize = 255;

pub const EXTENSION: &str = "json";

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Rejects anything that could escape the storage directory or is not a
/// plain file name: empty, `.` or `..`, separators, NUL, or over-long names.
pub fn validate_name(name: &str) -> Result<(), AppError> {
    if name.is_empty() {
        return Err(AppError::Validation("filename cannot be empty".to_string()));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(AppError::Validation(format!(
            "filename exceeds {MAX_NAME_LEN} bytes"
        )));
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(AppError::Validation(
            "filename must not contain path separators".to_string(),
        ));
    }
    // Separators are already excluded, so `.` and `..` are the only
    // directory references left.
    if name == "." || name == ".." {
        return Err(AppError::Validation(
            "filename must not contain parent-directory segments".to_string(),
        ));
    }
    Ok(())
}

/// `{base}_{YYYYMMDD_HHMMSS}.json` on the first attempt,
/// `{base}_{YYYYMMDD_HHMMSS}_{attempt}.json` after a collision.
pub fn stamped_name<Tz>(base: &str, at: &DateTime<Tz>, attempt: u32) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let stamp = at.format(TIMESTAMP_FORMAT);
    match attempt {
        0 => format!("{base}_{stamp}.{EXTENSION}"),
        n => format!("{base}_{stamp}_{n}.{EXTENSION}"),
    }
}

/// `Content-Disposition` value offering `name` as the download name.
///
/// Plain ASCII names go in a quoted `filename`; anything else is sent as an
/// RFC 5987 `filename*` with an ASCII fallback.
pub fn content_disposition(name: &str) -> String {
    let plain = name
        .bytes()
        .all(|b| (0x20..0x7f).contains(&b) && b != b'"' && b != b'\\');
    if plain {
        return format!("attachment; filename=\"{name}\"");
    }

    let mut encoded = String::with_capacity(name.len() * 3);
    for b in name.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'_' | b'~') {
            encoded.push(b as char);
        } else {
            encoded.push_str(&format!("%{b:02X}"));
        }
    }
    format!("attachment; filename=\"resume.{EXTENSION}\"; filename*=UTF-8''{encoded}")
}
