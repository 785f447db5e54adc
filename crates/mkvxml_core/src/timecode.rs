//! Timecode formatting and parsing.
//!
//! Chapter start times travel as display strings of the form `H:MM:SS.mmm`,
//! with the most significant unit unpadded and the lower units zero-padded.
//! This module converts between those strings and seconds.

use thiserror::Error;

/// Error type for timecode operations.
#[derive(Debug, Error)]
pub enum TimecodeError {
    /// The string does not have 1-3 colon-delimited numeric parts.
    #[error("invalid timecode {0:?}: expected [[H:]M:]S[.mmm]")]
    BadFormat(String),

    /// Negative or non-finite seconds cannot be rendered.
    #[error("cannot format {0} seconds as a timecode")]
    InvalidSeconds(f64),
}

/// Type alias for timecode results.
pub type TimecodeResult<T> = Result<T, TimecodeError>;

/// Format seconds as `H:MM:SS.mmm`, dropping leading zero units.
///
/// The hours field is omitted below one hour and the minutes field below one
/// minute; a bare seconds value keeps a literal `0:` prefix so the string
/// always carries a colon. Milliseconds are rounded, not truncated.
/// Negative or non-finite input is rejected.
pub fn format_timecode(seconds: f64) -> TimecodeResult<String> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(TimecodeError::InvalidSeconds(seconds));
    }

    let total_ms = (seconds * 1000.0).round() as u64;
    let millis = total_ms % 1000;
    let secs = (total_ms / 1000) % 60;
    let mins = (total_ms / 60_000) % 60;
    let hours = total_ms / 3_600_000;

    Ok(if hours > 0 {
        format!("{}:{:02}:{:02}.{:03}", hours, mins, secs, millis)
    } else if mins > 0 {
        format!("{}:{:02}.{:03}", mins, secs, millis)
    } else {
        format!("0:{:02}.{:03}", secs, millis)
    })
}

/// Parse `[[H:]M:]S[.mmm]` into seconds.
///
/// One part is plain seconds, two parts minutes and seconds, three parts
/// hours, minutes and seconds. Anything else, or a part that is not a
/// number, is a `BadFormat` error.
pub fn parse_timecode(text: &str) -> TimecodeResult<f64> {
    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() > 3 {
        return Err(TimecodeError::BadFormat(text.to_string()));
    }

    let mut total = 0.0;
    for part in &parts[..parts.len() - 1] {
        let value: u64 = part
            .parse()
            .map_err(|_| TimecodeError::BadFormat(text.to_string()))?;
        total = total * 60.0 + value as f64;
    }

    let seconds = parts[parts.len() - 1]
        .parse::<f64>()
        .ok()
        .filter(|s| s.is_finite() && *s >= 0.0)
        .ok_or_else(|| TimecodeError::BadFormat(text.to_string()))?;

    Ok(total * 60.0 + seconds)
}
