use crate::prelude::{ScapError, ScapResult};
use chrono::{DateTime, Datelike, Timelike, Utc};

const MICROS_PER_SECOND: i64 = 1_000_000;

/// Renders a Unix timestamp in milliseconds as an ISO-8601 UTC string.
///
/// `None` renders the current time. The value is rounded to the nearest
/// microsecond; the `.ffffff` fraction is only printed when non-zero, e.g.
/// `2023-10-27T10:30:00.123000+00:00` or `1970-01-01T00:00:00+00:00`.
pub fn timestamp_to_iso(timestamp_ms: Option<f64>) -> ScapResult<String> {
    let datetime = match timestamp_ms {
        Some(ms) => from_millis(ms)?,
        None => Utc::now(),
    };
    Ok(format_iso(&datetime))
}

fn from_millis(ms: f64) -> ScapResult<DateTime<Utc>> {
    let micros = (ms * 1000.0).round();
    if !micros.is_finite() || micros.abs() >= i64::MAX as f64 {
        return Err(ScapError::TimestampOutOfRange(ms));
    }
    let micros = micros as i64;
    let secs = micros.div_euclid(MICROS_PER_SECOND);
    let nanos = (micros.rem_euclid(MICROS_PER_SECOND) * 1_000) as u32;
    DateTime::<Utc>::from_timestamp(secs, nanos)
        .filter(|datetime| (1..=9999).contains(&datetime.year()))
        .ok_or(ScapError::TimestampOutOfRange(ms))
}

fn format_iso(datetime: &DateTime<Utc>) -> String {
    let micros = datetime.nanosecond() / 1_000;
    let base = datetime.format("%Y-%m-%dT%H:%M:%S");
    if micros == 0 {
        format!("{}+00:00", base)
    } else {
        format!("{}.{:06}+00:00", base, micros)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_has_no_fraction() {
        assert_eq!(
            timestamp_to_iso(Some(0.0)).unwrap(),
            "1970-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn milliseconds_render_as_six_digit_fraction() {
        assert_eq!(
            timestamp_to_iso(Some(1_698_402_600_123.0)).unwrap(),
            "2023-10-27T10:30:00.123000+00:00"
        );
        assert_eq!(
            timestamp_to_iso(Some(1_698_402_600_000.5)).unwrap(),
            "2023-10-27T10:30:00.000500+00:00"
        );
    }

    #[test]
    fn negative_timestamps_precede_epoch() {
        assert_eq!(
            timestamp_to_iso(Some(-1.0)).unwrap(),
            "1969-12-31T23:59:59.999000+00:00"
        );
    }

    #[test]
    fn non_finite_timestamps_are_rejected() {
        assert!(matches!(
            timestamp_to_iso(Some(f64::NAN)),
            Err(ScapError::TimestampOutOfRange(_))
        ));
        assert!(timestamp_to_iso(Some(f64::INFINITY)).is_err());
        assert!(timestamp_to_iso(Some(1.0e300)).is_err());
    }

    #[test]
    fn years_outside_four_digits_are_rejected() {
        assert_eq!(
            timestamp_to_iso(Some(1.0e15)),
            Err(ScapError::TimestampOutOfRange(1.0e15))
        );
        assert_eq!(
            timestamp_to_iso(Some(-1.0e14)),
            Err(ScapError::TimestampOutOfRange(-1.0e14))
        );
        assert_eq!(
            timestamp_to_iso(Some(253_402_300_799_000.0)).unwrap(),
            "9999-12-31T23:59:59+00:00"
        );
        assert_eq!(
            timestamp_to_iso(Some(-62_135_596_800_000.0)).unwrap(),
            "0001-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn missing_timestamp_uses_current_time() {
        let rendered = timestamp_to_iso(None).unwrap();
        assert!(rendered.ends_with("+00:00"));
        assert!(DateTime::parse_from_rfc3339(&rendered).is_ok());
    }
}
