//! Numeric danger detector for blood-pressure readings.
//!
//! Runs on raw digit runs rather than tokens. Any standalone 3-digit number
//! in the systolic danger band (160-299) or the diastolic danger band
//! (110-199) fires, wherever it appears. That includes numbers that are not
//! readings at all (a room number "180"); the false positive is accepted
//! because narrowing the scan would cost recall on real hypertensive
//! emergencies.

use std::ops::RangeInclusive;

use regex::Regex;

/// Detected-pattern label recorded when a dangerous reading is found.
pub const DANGEROUS_BP: &str = "DANGEROUS_BP";

/// Systolic danger band, mmHg.
pub const SYSTOLIC_DANGER: RangeInclusive<u16> = 160..=299;

/// Diastolic danger band, mmHg.
pub const DIASTOLIC_DANGER: RangeInclusive<u16> = 110..=199;

/// Which band a number fell into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DangerBand {
    Systolic,
    Diastolic,
}

/// A number that fired the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DangerReading {
    pub value: u16,
    pub band: DangerBand,
}

/// Scans text for dangerous blood-pressure numbers.
#[derive(Debug, Clone)]
pub struct BloodPressureDetector {
    digits: Regex,
}

impl BloodPressureDetector {
    pub fn new() -> Self {
        Self {
            digits: Regex::new(r"[0-9]+").unwrap(),
        }
    }

    /// First number in either danger band. Systolic wins when both apply.
    pub fn check(&self, normalized: &str) -> Option<DangerReading> {
        self.digits
            .find_iter(normalized)
            .filter(|m| m.as_str().len() == 3)
            .filter_map(|m| m.as_str().parse::<u16>().ok())
            .find_map(classify_number)
    }
}

impl Default for BloodPressureDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn classify_number(value: u16) -> Option<DangerReading> {
    if SYSTOLIC_DANGER.contains(&value) {
        Some(DangerReading {
            value,
            band: DangerBand::Systolic,
        })
    } else if DIASTOLIC_DANGER.contains(&value) {
        Some(DangerReading {
            value,
            band: DangerBand::Diastolic,
        })
    } else {
        None
    }
}
