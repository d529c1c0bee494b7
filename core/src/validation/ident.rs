//! Identifier format checks for vehicles and sensors.

use regex::Regex;
use std::sync::LazyLock;

/// 17 characters, letters I, O and Q excluded.
static VIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-HJ-NPR-Z0-9]{17}$").expect("Invalid VIN regex"));

static SENSOR_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("Invalid sensor id regex"));

/// Checks the standard 17-character VIN format. Case-insensitive.
pub fn validate_vin(vin: &str) -> bool {
    VIN_REGEX.is_match(&vin.to_ascii_uppercase())
}

/// Checks a sensor id such as `LIDAR_FRONT_001`: ASCII alphanumerics,
/// underscores and hyphens, at least one character.
pub fn is_valid_sensor_id(sensor_id: &str) -> bool {
    SENSOR_ID_REGEX.is_match(sensor_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vin_accepts_standard_format() {
        assert!(validate_vin("1HGCM82633A004352"));
        assert!(validate_vin("1hgcm82633a004352"));
    }

    #[test]
    fn vin_rejects_bad_length_and_letters() {
        assert!(!validate_vin(""));
        assert!(!validate_vin("1HGCM82633A00435"));
        assert!(!validate_vin("1HGCM82633A0043521"));
        assert!(!validate_vin("1HGCM82633A00435O"));
        assert!(!validate_vin("1HGCM82633A00435Q"));
        assert!(!validate_vin("IHGCM82633A004352"));
        assert!(!validate_vin("1HGCM82633A00435-"));
    }

    #[test]
    fn sensor_id_accepts_naming_convention() {
        assert!(is_valid_sensor_id("LIDAR_FRONT_001"));
        assert!(is_valid_sensor_id("radar-rear-2"));
    }

    #[test]
    fn sensor_id_rejects_empty_and_punctuation() {
        assert!(!is_valid_sensor_id(""));
        assert!(!is_valid_sensor_id("LIDAR FRONT"));
        assert!(!is_valid_sensor_id("cam.01"));
        assert!(!is_valid_sensor_id("LIDAR_FRONT_001\n"));
    }
}
