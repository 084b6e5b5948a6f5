//! Application-wide constants.

// # Application

/// Title used for the notification payload
pub const APP_NAME: &str = "Daylight";

pub const EXIT_FAILURE: i32 = 1;

// # Files

pub const CONFIG_DIR_NAME: &str = "daylight";
pub const CONFIG_FILE_NAME: &str = "daylight.toml";
/// Optional message catalog override, read from the config directory
pub const MESSAGES_FILE_NAME: &str = "messages.toml";
pub const LOCATION_CACHE_FILE_NAME: &str = "last_location.toml";

// # Defaults

pub const DEFAULT_NOTIFICATIONS: bool = true;

// # Solar geometry

/// Apparent altitude of the sun's centre at sunrise/sunset (refraction plus solar radius)
pub const SUNRISE_ALTITUDE_DEGREES: f64 = -0.833;
pub const AXIAL_TILT_DEGREES: f64 = 23.44;

#[cfg(test)]
pub mod test_constants {
    pub const TEST_OSLO_LATITUDE: f64 = 59.91;
    pub const TEST_OSLO_LONGITUDE: f64 = 10.75;
    pub const TEST_TROMSO_LATITUDE: f64 = 69.65;
    pub const TEST_TROMSO_LONGITUDE: f64 = 18.96;
    pub const TEST_SINGAPORE_LATITUDE: f64 = 1.3521;
    pub const TEST_SINGAPORE_LONGITUDE: f64 = 103.8198;
}
