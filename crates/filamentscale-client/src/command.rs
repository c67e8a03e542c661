//! Commands accepted by the plugin API.

/// Command sent to the scale plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleCommand {
    /// Zero out the scale's reference point.
    Tare,
    /// Set the conversion factor using a known reference weight.
    Calibrate,
    /// Read the current weight.
    Weight,
    /// Read the scale's hardware status.
    Status,
}

impl std::fmt::Display for ScaleCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tare => write!(f, "tare"),
            Self::Calibrate => write!(f, "calibrate"),
            Self::Weight => write!(f, "weight"),
            Self::Status => write!(f, "status"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_wire_names() {
        assert_eq!(ScaleCommand::Tare.to_string(), "tare");
        assert_eq!(ScaleCommand::Calibrate.to_string(), "calibrate");
        assert_eq!(ScaleCommand::Weight.to_string(), "weight");
        assert_eq!(ScaleCommand::Status.to_string(), "status");
    }
}
