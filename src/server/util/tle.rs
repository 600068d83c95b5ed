//! Orbital parameter extraction from two-line element sets.
//!
//! Only the four angles are read from the element set. Semi-major axis, eccentricity and
//! period are placeholder constants for every satellite until a propagation model is added.

use std::ops::Range;

use crate::model::satellite::OrbitalParamsDto;

/// Placeholder semi-major axis in kilometres (Earth radius plus a low orbit altitude).
pub const SEMI_MAJOR_AXIS_KM: f64 = 6778.137;
/// Placeholder eccentricity of a near circular orbit.
pub const ECCENTRICITY: f64 = 0.0001;
/// Placeholder period of a typical low Earth orbit in minutes.
pub const PERIOD_MINUTES: f64 = 90.5;
/// Inclination reported when the element set cannot be parsed.
pub const FALLBACK_INCLINATION: f64 = 98.0;

/// Line 2 column range holding the inclination.
const INCLINATION: Range<usize> = 8..16;
/// Line 2 column range holding the right ascension of the ascending node.
const RIGHT_ASCENSION: Range<usize> = 17..25;
/// Line 2 column range holding the argument of perigee.
const ARGUMENT_OF_PERIGEE: Range<usize> = 34..42;
/// Line 2 column range holding the mean anomaly.
const MEAN_ANOMALY: Range<usize> = 43..51;

/// Extracts orbital parameters from a two-line element set.
///
/// Reads inclination, right ascension, argument of perigee and mean anomaly from their fixed
/// columns of `line2`. Element sets are ASCII, so columns are byte offsets. Any failure (a
/// non-ASCII line, a line too short for a column, a column that is not a finite number)
/// yields [`fallback_orbital_params`] as a whole; partial results are never returned.
///
/// # Arguments
/// - `_line1` - First line of the element set, currently unused
/// - `line2` - Second line of the element set
///
/// # Returns
/// - `OrbitalParamsDto` - Always structurally complete
pub fn orbital_params(_line1: &str, line2: &str) -> OrbitalParamsDto {
    parse_angles(line2)
        .map(
            |(inclination, right_ascension, argument_of_perigee, mean_anomaly)| {
                OrbitalParamsDto {
                    semi_major_axis: SEMI_MAJOR_AXIS_KM,
                    eccentricity: ECCENTRICITY,
                    inclination,
                    argument_of_perigee,
                    right_ascension,
                    mean_anomaly,
                    period: PERIOD_MINUTES,
                }
            },
        )
        .unwrap_or_else(fallback_orbital_params)
}

/// The record returned for element sets that cannot be parsed.
pub fn fallback_orbital_params() -> OrbitalParamsDto {
    OrbitalParamsDto {
        semi_major_axis: SEMI_MAJOR_AXIS_KM,
        eccentricity: ECCENTRICITY,
        inclination: FALLBACK_INCLINATION,
        argument_of_perigee: 0.0,
        right_ascension: 0.0,
        mean_anomaly: 0.0,
        period: PERIOD_MINUTES,
    }
}

fn parse_angles(line2: &str) -> Option<(f64, f64, f64, f64)> {
    if !line2.is_ascii() {
        return None;
    }

    Some((
        parse_column(line2, INCLINATION)?,
        parse_column(line2, RIGHT_ASCENSION)?,
        parse_column(line2, ARGUMENT_OF_PERIGEE)?,
        parse_column(line2, MEAN_ANOMALY)?,
    ))
}

fn parse_column(line: &str, columns: Range<usize>) -> Option<f64> {
    let value: f64 = line.get(columns)?.trim().parse().ok()?;

    value.is_finite().then_some(value)
}
