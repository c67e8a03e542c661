//! Raw weight readings and the derived display value.
//!
//! The scale plugin pushes each measurement as free text. A payload with a
//! leading numeric prefix is an integer-valued gram count; anything else is
//! a calibration fault. The user-facing display string is a pure function of
//! the reading and the configured spool weight.

use crate::error::ReadingError;

/// Display value shown while a reading cannot be interpreted.
pub const FAULT_DISPLAY: &str = "Calibration Error";

/// Unit suffix appended to the net weight.
pub const UNIT_SUFFIX: &str = "g";

/// One weight measurement pushed from the host message bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reading {
    /// Measured weight in whole grams (fractional part truncated).
    Grams(i64),
    /// The payload carried no numeric value; raw text retained for diagnostics.
    Fault(String),
}

impl Reading {
    /// Parse a raw payload.
    ///
    /// Takes the leading numeric prefix of the payload and truncates it to
    /// whole grams, matching how the original display treated readings.
    /// A payload without a numeric prefix becomes a [`Reading::Fault`].
    pub fn parse(raw: &str) -> Self {
        match numeric_prefix(raw) {
            Some(value) => Reading::Grams(value.trunc() as i64),
            None => Reading::Fault(raw.to_string()),
        }
    }

    /// Whether this reading is a calibration fault.
    pub fn is_fault(&self) -> bool {
        matches!(self, Reading::Fault(_))
    }

    /// The measured grams, or the reading error for a fault.
    pub fn grams(&self) -> Result<i64, ReadingError> {
        match self {
            Reading::Grams(grams) => Ok(*grams),
            Reading::Fault(raw) => Err(ReadingError::NotNumeric { raw: raw.clone() }),
        }
    }

    /// Net weight in grams after subtracting the spool weight.
    ///
    /// Returns `None` for faults; there is no quantity to show.
    pub fn net(&self, spool_weight: f64) -> Option<f64> {
        match self {
            Reading::Grams(grams) => Some(*grams as f64 - spool_weight),
            Reading::Fault(_) => None,
        }
    }

    /// The display string for this reading.
    ///
    /// `"{net}g"` for a measured weight, [`FAULT_DISPLAY`] for a fault.
    /// No other state influences the result.
    pub fn display(&self, spool_weight: f64) -> String {
        match self.net(spool_weight) {
            Some(net) => format!("{}{}", net, UNIT_SUFFIX),
            None => FAULT_DISPLAY.to_string(),
        }
    }
}

impl std::fmt::Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reading::Grams(grams) => write!(f, "{}{}", grams, UNIT_SUFFIX),
            Reading::Fault(raw) => write!(f, "fault({})", raw),
        }
    }
}

/// Extract the leading numeric prefix of a payload, if any.
fn numeric_prefix(s: &str) -> Option<f64> {
    let s = s.trim();
    let mut end = 0usize;
    for (i, ch) in s.char_indices() {
        if ch.is_ascii_digit() || ch == '.' || ch == '-' || ch == '+' {
            end = i + ch.len_utf8();
        } else {
            break;
        }
    }
    if end == 0 {
        None
    } else {
        s[..end].parse::<f64>().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_payload() {
        assert_eq!(Reading::parse("750"), Reading::Grams(750));
        assert_eq!(Reading::parse("  750  "), Reading::Grams(750));
        assert_eq!(Reading::parse("-12"), Reading::Grams(-12));
    }

    #[test]
    fn test_parse_truncates_fraction() {
        assert_eq!(Reading::parse("750.9"), Reading::Grams(750));
        assert_eq!(Reading::parse("0.4"), Reading::Grams(0));
    }

    #[test]
    fn test_parse_numeric_prefix() {
        // Trailing text after the number is ignored, prefix wins.
        assert_eq!(Reading::parse("750g"), Reading::Grams(750));
        assert_eq!(Reading::parse("12.5 grams"), Reading::Grams(12));
    }

    #[test]
    fn test_parse_fault() {
        assert!(Reading::parse("NaN").is_fault());
        assert!(Reading::parse("").is_fault());
        assert!(Reading::parse("error").is_fault());
        assert_eq!(
            Reading::parse("NaN"),
            Reading::Fault("NaN".to_string())
        );
    }

    #[test]
    fn test_grams_accessor() {
        assert_eq!(Reading::parse("750").grams().unwrap(), 750);
        assert!(matches!(
            Reading::parse("NaN").grams(),
            Err(ReadingError::NotNumeric { raw }) if raw == "NaN"
        ));
    }

    #[test]
    fn test_net_weight() {
        assert_eq!(Reading::Grams(750).net(200.0), Some(550.0));
        assert_eq!(Reading::Grams(100).net(200.0), Some(-100.0));
        assert_eq!(Reading::Fault("x".to_string()).net(200.0), None);
    }

    #[test]
    fn test_display_measured() {
        assert_eq!(Reading::parse("750").display(200.0), "550g");
        assert_eq!(Reading::parse("200").display(200.0), "0g");
        assert_eq!(Reading::parse("750").display(200.5), "549.5g");
    }

    #[test]
    fn test_display_fault_ignores_spool_weight() {
        assert_eq!(Reading::parse("NaN").display(200.0), "Calibration Error");
        assert_eq!(Reading::parse("NaN").display(0.0), "Calibration Error");
    }
}
