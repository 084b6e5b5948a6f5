//! Display labels for a location.
//!
//! Turning coordinates into "Oslo, Norway" is a reverse-geocoding service's job. The
//! report only depends on [`LocationLabeler`], so any such service can be plugged in.

use super::Location;

/// Produces a human readable label for a location.
pub trait LocationLabeler {
    /// Returns `None` when the labeler has nothing to say about this location.
    fn label(&self, location: &Location) -> Option<String>;
}

/// A label chosen by the user, e.g. `location_name` from the configuration.
#[derive(Debug, Clone)]
pub struct FixedLabel(pub String);

impl LocationLabeler for FixedLabel {
    fn label(&self, _location: &Location) -> Option<String> {
        let trimmed = self.0.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

/// Formats the coordinates themselves. Always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateLabel;

impl LocationLabeler for CoordinateLabel {
    fn label(&self, location: &Location) -> Option<String> {
        Some(location.to_string())
    }
}

/// Label with `primary`, falling back to the formatted coordinates.
pub fn label_or_coordinates(primary: &dyn LocationLabeler, location: &Location) -> String {
    primary
        .label(location)
        .unwrap_or_else(|| location.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_label_trims_and_rejects_blank() {
        let oslo = Location::new(59.91, 10.75).unwrap();
        assert_eq!(
            FixedLabel("  Oslo, Norway ".into()).label(&oslo).as_deref(),
            Some("Oslo, Norway")
        );
        assert_eq!(FixedLabel("   ".into()).label(&oslo), None);
    }

    #[test]
    fn test_coordinate_fallback() {
        let rio = Location::new(-22.9068, -43.1729).unwrap();
        assert_eq!(
            label_or_coordinates(&FixedLabel(String::new()), &rio),
            "22.9068°S, 43.1729°W"
        );
        assert_eq!(
            CoordinateLabel.label(&rio).as_deref(),
            Some("22.9068°S, 43.1729°W")
        );
    }
}
