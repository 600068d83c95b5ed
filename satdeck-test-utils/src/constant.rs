//! Two-line element sets used as test fixtures.
//!
//! Real element sets so that column extraction in tests reads the same values an
//! operator would see.

/// Name of the International Space Station fixture.
pub static ISS_NAME: &str = "ISS (ZARYA)";

/// First element line of the International Space Station fixture.
pub static ISS_LINE1: &str =
    "1 25544U 98067A   21001.00000000  .00001264  00000-0  29621-4 0  9993";

/// Second element line of the International Space Station fixture.
///
/// Inclination 51.6442, RAAN 211.0936, argument of perigee 114.4413, mean anomaly 245.7044.
pub static ISS_LINE2: &str =
    "2 25544  51.6442 211.0936 0002412 114.4413 245.7044 15.48919103260342";

/// Name of the Tiangong-2 fixture.
pub static TIANGONG_NAME: &str = "TIANGONG-2";

/// First element line of the Tiangong-2 fixture.
pub static TIANGONG_LINE1: &str =
    "1 41765U 16057A   21001.00000000  .00002182  00000-0  32605-4 0  9992";

/// Second element line of the Tiangong-2 fixture.
///
/// Inclination 42.7845, RAAN 123.4567, argument of perigee 234.5678, mean anomaly 345.6789.
pub static TIANGONG_LINE2: &str =
    "2 41765  42.7845 123.4567 0001234 234.5678 345.6789 15.12345678123456";
