#[cfg(test)]
mod solar_tests {
    use crate::constants::test_constants::*;
    use crate::geo::Location;
    use crate::geo::solar::*;
    use crate::phase::{PhaseKind, PolarCondition};
    use chrono::{NaiveDate, TimeDelta};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn location(lat: f64, lon: f64) -> Location {
        Location::new(lat, lon).unwrap()
    }

    /// Test that an ordinary mid-latitude day has every event in order.
    #[test]
    fn test_oslo_equinox_events_are_ordered() {
        let day = day_phases(&location(TEST_OSLO_LATITUDE, TEST_OSLO_LONGITUDE), date(2024, 3, 20));

        assert!(day.polar_condition().is_none());
        let sunrise = day.sunrise().unwrap();
        let sunset = day.sunset().unwrap();
        assert!(sunrise < sunset);

        // Sorted, with one dawn and one dusk per twilight kind
        let times: Vec<_> = day.transitions().iter().map(|t| t.time).collect();
        let mut sorted = times.clone();
        sorted.sort();
        assert_eq!(times, sorted);
        assert_eq!(day.transitions().len(), 8);

        let kinds: Vec<_> = day.transitions().iter().map(|t| t.kind).collect();
        assert_eq!(kinds.first(), Some(&PhaseKind::AstronomicalTwilight));
        assert_eq!(kinds.last(), Some(&PhaseKind::AstronomicalTwilight));
        let rise_index = kinds.iter().position(|k| *k == PhaseKind::Sunrise).unwrap();
        assert_eq!(kinds[rise_index - 1], PhaseKind::CivilTwilight);
    }

    /// Test that the equinox day is roughly twelve hours long everywhere outside the poles.
    #[test]
    fn test_equinox_day_length() {
        for (lat, lon) in [
            (TEST_OSLO_LATITUDE, TEST_OSLO_LONGITUDE),
            (TEST_SINGAPORE_LATITUDE, TEST_SINGAPORE_LONGITUDE),
            (-33.9249, 18.4241),
        ] {
            let day = day_phases(&location(lat, lon), date(2024, 3, 20));
            let length = day.day_length().unwrap();
            assert!(
                length > TimeDelta::hours(11) + TimeDelta::minutes(45)
                    && length < TimeDelta::hours(12) + TimeDelta::minutes(30),
                "{lat},{lon}: {length}"
            );
        }
    }

    /// Test that Singapore days barely change length through the year.
    #[test]
    fn test_equatorial_day_length_is_stable() {
        let singapore = location(TEST_SINGAPORE_LATITUDE, TEST_SINGAPORE_LONGITUDE);
        let june = day_phases(&singapore, date(2024, 6, 21)).day_length().unwrap();
        let december = day_phases(&singapore, date(2024, 12, 21)).day_length().unwrap();

        assert!((june - december).abs() < TimeDelta::minutes(15));
    }

    /// Test that solar noon sits halfway between sunrise and sunset.
    #[test]
    fn test_solar_noon_is_midpoint() {
        let day = day_phases(&location(TEST_OSLO_LATITUDE, TEST_OSLO_LONGITUDE), date(2024, 5, 1));
        let noon = day.solar_noon().unwrap();

        assert_eq!(
            noon - day.sunrise().unwrap(),
            day.sunset().unwrap() - noon
        );
    }

    /// Test that Tromsø around the winter solstice has no sunrise at all.
    #[test]
    fn test_tromso_polar_night() {
        let day = day_phases(&location(TEST_TROMSO_LATITUDE, TEST_TROMSO_LONGITUDE), date(2024, 12, 21));

        assert_eq!(day.polar_condition(), Some(PolarCondition::PolarNight));
        assert!(day.sunrise().is_none());
        assert!(day.sunset().is_none());
        assert!(day.day_length().is_none());
        assert!(
            day.transitions()
                .iter()
                .all(|t| t.kind != PhaseKind::Sunrise && t.kind != PhaseKind::Sunset)
        );
    }

    /// Test that Tromsø around the summer solstice has no sunset at all.
    #[test]
    fn test_tromso_midnight_sun() {
        let day = day_phases(&location(TEST_TROMSO_LATITUDE, TEST_TROMSO_LONGITUDE), date(2024, 6, 21));

        assert_eq!(day.polar_condition(), Some(PolarCondition::MidnightSun));
        assert!(day.sunrise().is_none());
        assert!(day.sunset().is_none());
    }

    /// Test that near the polar circles every day the library gives a sunrise and
    /// sunset for keeps them, including the short days at the edge of polar night.
    #[test]
    fn test_library_crossings_survive_polar_season_edges() {
        use sunrise::{Coordinates, SolarDay, SolarEvent};

        let latitudes = [66.0, 67.5, TEST_TROMSO_LATITUDE, 72.0, -66.0, -67.5, -70.0, -72.0];
        for lat in latitudes {
            let place = location(lat, TEST_TROMSO_LONGITUDE);

            for offset in 0..366 {
                let d = date(2024, 1, 1) + TimeDelta::days(offset);
                let midnight = d.and_hms_opt(0, 0, 0).unwrap().and_utc();
                let in_range = |t: &chrono::DateTime<chrono::Utc>| {
                    *t >= midnight - TimeDelta::days(1) && *t < midnight + TimeDelta::days(2)
                };

                let coordinates = Coordinates::new(lat, TEST_TROMSO_LONGITUDE).unwrap();
                let solar_day = SolarDay::new(coordinates, d);
                let rise = solar_day.event_time(SolarEvent::Sunrise);
                let set = solar_day.event_time(SolarEvent::Sunset);
                if !(in_range(&rise) && in_range(&set) && rise < set) {
                    continue;
                }

                let day = day_phases(&place, d);
                assert_eq!(day.sunrise(), Some(rise), "{lat} {d}");
                assert_eq!(day.sunset(), Some(set), "{lat} {d}");
                assert_eq!(day.polar_condition(), None, "{lat} {d}");
            }
        }
    }

    /// Test that Tromsø keeps a short real day right before polar night sets in.
    #[test]
    fn test_tromso_short_day_before_polar_night() {
        let day = day_phases(
            &location(TEST_TROMSO_LATITUDE, TEST_TROMSO_LONGITUDE),
            date(2024, 11, 25),
        );

        assert!(day.polar_condition().is_none());
        let length = day.day_length().unwrap();
        assert!(length > TimeDelta::zero() && length < TimeDelta::hours(3), "{length}");
    }

    /// Test that timezone detection works for real-world coordinates.
    #[test]
    fn test_timezone_detection() {
        use chrono_tz::{America, Europe, Pacific};

        let tz = determine_timezone_from_coordinates(TEST_OSLO_LATITUDE, TEST_OSLO_LONGITUDE);
        assert_eq!(tz, Europe::Oslo);

        let tz = determine_timezone_from_coordinates(TEST_TROMSO_LATITUDE, TEST_TROMSO_LONGITUDE);
        assert_eq!(tz, Europe::Oslo, "Tromsø shares the Norwegian zone");

        let tz = determine_timezone_from_coordinates(40.7128, -74.0060);
        assert_eq!(tz, America::New_York);

        let tz = determine_timezone_from_coordinates(21.3069, -157.8583);
        assert_eq!(tz, Pacific::Honolulu);
    }

    /// Test the polar classification at the poles and the equator.
    #[test]
    fn test_polar_condition_extremes() {
        let june = date(2024, 6, 21);
        let december = date(2024, 12, 21);

        assert_eq!(polar_condition(90.0, june), Some(PolarCondition::MidnightSun));
        assert_eq!(polar_condition(90.0, december), Some(PolarCondition::PolarNight));
        assert_eq!(polar_condition(-90.0, june), Some(PolarCondition::PolarNight));
        assert_eq!(polar_condition(-90.0, december), Some(PolarCondition::MidnightSun));

        assert_eq!(polar_condition(0.0, june), None);
        assert_eq!(polar_condition(0.0, december), None);
        assert_eq!(polar_condition(TEST_OSLO_LATITUDE, december), None);
    }

    /// Test that the poles always produce a marked day instead of garbage times.
    #[test]
    fn test_pole_days_are_marked() {
        let north = location(90.0, 0.0);
        let south = location(-90.0, 0.0);

        for d in [date(2024, 1, 15), date(2024, 6, 21), date(2024, 12, 21)] {
            let day = day_phases(&north, d);
            assert!(day.polar_condition().is_some(), "{d}");
            assert!(day.sunrise().is_none());

            let day = day_phases(&south, d);
            assert!(day.polar_condition().is_some(), "{d}");
        }
    }

    /// Property-based tests
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = NaiveDate> {
            (0i64..366).prop_map(|offset| date(2024, 1, 1) + TimeDelta::days(offset))
        }

        proptest! {
            /// Outside the polar circles every day has a sunrise before its sunset.
            #[test]
            fn prop_sunrise_before_sunset_outside_polar_circles(
                lat in -60.0f64..=60.0,
                lon in -180.0f64..=180.0,
                date in date_strategy(),
            ) {
                let day = day_phases(&location(lat, lon), date);

                prop_assert!(day.polar_condition().is_none());
                let sunrise = day.sunrise().unwrap();
                let sunset = day.sunset().unwrap();
                prop_assert!(sunrise < sunset);
                prop_assert!(day.day_length().unwrap() < TimeDelta::hours(24));
            }

            /// Every day either has both horizon crossings or a polar marker, never one alone.
            #[test]
            fn prop_day_is_complete_or_marked(
                lat in -89.0f64..=89.0,
                lon in -180.0f64..=180.0,
                date in date_strategy(),
            ) {
                let day = day_phases(&location(lat, lon), date);

                prop_assert_eq!(day.date(), date);
                match (day.sunrise(), day.sunset()) {
                    (Some(rise), Some(set)) => {
                        prop_assert!(rise < set);
                        prop_assert!(day.polar_condition().is_none());
                    }
                    (None, None) => prop_assert!(day.polar_condition().is_some()),
                    _ => prop_assert!(false, "only one horizon crossing on {}", date),
                }
            }

            /// Below about 65 degrees the sun crosses the horizon every day of the year.
            #[test]
            fn prop_no_polar_condition_below_arctic_circle(
                lat in -65.0f64..=65.0,
                date in date_strategy(),
            ) {
                prop_assert!(polar_condition(lat, date).is_none());
            }
        }
    }
}

#[cfg(test)]
mod location_tests {
    use crate::error::SolError;
    use crate::geo::Location;

    #[test]
    fn test_coordinate_validation() {
        assert!(Location::new(40.7128, -74.0060).is_ok());
        assert!(Location::new(90.0, 180.0).is_ok());
        assert!(Location::new(-90.0, -180.0).is_ok());

        assert!(Location::new(91.0, 0.0).is_err());
        assert!(Location::new(-91.0, 0.0).is_err());
        assert!(Location::new(0.0, 181.0).is_err());
        assert!(Location::new(0.0, -360.0).is_err());
        assert!(Location::new(f64::NAN, 0.0).is_err());
        assert!(Location::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_invalid_location_message() {
        let err = Location::new(95.0, 0.0).unwrap_err();
        assert!(matches!(err, SolError::InvalidLocation(_)));
        assert_eq!(
            err.to_string(),
            "Invalid location: latitude must be between -90 and 90 degrees (got 95)"
        );
    }

    #[test]
    fn test_display_uses_hemispheres() {
        let oslo = Location::new(59.91, 10.75).unwrap();
        assert_eq!(oslo.to_string(), "59.9100°N, 10.7500°E");

        let santiago = Location::new(-33.4489, -70.6693).unwrap();
        assert_eq!(santiago.to_string(), "33.4489°S, 70.6693°W");
    }

    #[test]
    fn test_resolve_prefers_current_fix() {
        let current = Location::new(59.91, 10.75).unwrap();
        let cached = Location::new(69.65, 18.96).unwrap();

        assert_eq!(Location::resolve(Some(current), Some(cached)), Ok(current));
        assert_eq!(Location::resolve(None, Some(cached)), Ok(cached));
        assert_eq!(Location::resolve(Some(current), None), Ok(current));
        assert!(matches!(
            Location::resolve(None, None),
            Err(SolError::InvalidLocation(_))
        ));
    }
}
