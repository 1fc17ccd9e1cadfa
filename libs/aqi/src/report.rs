//! Text output
//!
//! Formatting shared by the serial telemetry line and the display. Both
//! write into any `core::fmt::Write` sink so the firmware can use
//! fixed-capacity buffers.

use core::fmt::{self, Write};

use crate::index::AirQualityIndex;
use crate::sensor::ConcentrationEstimate;

/// Line terminator expected by the host-side reader.
pub const LINE_END: &str = "\r\n";

/// Write one telemetry record followed by `\r\n`.
///
/// Concentrations use one decimal place. The status label is quoted but
/// not escaped; none of the labels contain a quote.
///
/// Degenerate estimates print the way `core::fmt` prints them: `inf`,
/// `NaN`, and very large values with every digit. The host reader treats
/// such fields as unparseable either way, so they are left as is rather
/// than rewritten to `nan`/`ovf`.
///
/// # Examples
///
/// ```
/// use aqi::index::{AirQualityIndex, Status};
/// use aqi::report::write_telemetry;
/// use aqi::sensor::ConcentrationEstimate;
///
/// let estimate = ConcentrationEstimate {
///     co_ppm: 1.2,
///     air_quality_ppm: 5.6,
///     methane_ppm: 3.4,
/// };
/// let aqi = AirQualityIndex { value: 42, status: Status::Good };
///
/// let mut line = String::new();
/// write_telemetry(&mut line, &estimate, &aqi).unwrap();
/// assert_eq!(
///     line,
///     "{\"co\":1.2,\"ch4\":3.4,\"air_quality\":5.6,\"aqi\":42,\"status\":\"Good\"}\r\n"
/// );
/// ```
pub fn write_telemetry<W: Write>(
    w: &mut W,
    estimate: &ConcentrationEstimate,
    aqi: &AirQualityIndex,
) -> fmt::Result {
    write!(
        w,
        "{{\"co\":{:.1},\"ch4\":{:.1},\"air_quality\":{:.1},\"aqi\":{},\"status\":\"{}\"}}{}",
        estimate.co_ppm,
        estimate.methane_ppm,
        estimate.air_quality_ppm,
        aqi.value,
        aqi.status,
        LINE_END
    )
}

/// Write a display row such as `CO: 12.3 ppm`.
pub fn write_reading<W: Write>(w: &mut W, label: &str, ppm: f32) -> fmt::Result {
    write!(w, "{}: {:.1} ppm", label, ppm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Status;
    use std::string::String;

    #[test]
    fn test_write_telemetry() {
        let estimate = ConcentrationEstimate {
            co_ppm: 1.2,
            air_quality_ppm: 5.6,
            methane_ppm: 3.4,
        };
        let aqi = AirQualityIndex {
            value: 42,
            status: Status::Good,
        };

        let mut line = String::new();
        write_telemetry(&mut line, &estimate, &aqi).unwrap();

        assert_eq!(
            line,
            "{\"co\":1.2,\"ch4\":3.4,\"air_quality\":5.6,\"aqi\":42,\"status\":\"Good\"}\r\n"
        );
    }

    #[test]
    fn test_write_telemetry_alert_label() {
        let estimate = ConcentrationEstimate {
            co_ppm: 12.04,
            air_quality_ppm: 75.0,
            methane_ppm: 250.26,
        };
        let aqi = AirQualityIndex {
            value: 125,
            status: Status::HighCo,
        };

        let mut line = String::new();
        write_telemetry(&mut line, &estimate, &aqi).unwrap();

        assert_eq!(
            line,
            "{\"co\":12.0,\"ch4\":250.3,\"air_quality\":75.0,\"aqi\":125,\"status\":\"Hazardous! High CO\"}\r\n"
        );
    }

    #[test]
    fn test_write_telemetry_negative_index() {
        let estimate = ConcentrationEstimate::default();
        let aqi = AirQualityIndex {
            value: -3,
            status: Status::Good,
        };

        let mut line = String::new();
        write_telemetry(&mut line, &estimate, &aqi).unwrap();

        assert!(line.contains("\"aqi\":-3,"));
        assert!(line.starts_with("{\"co\":0.0,"));
    }

    #[test]
    fn test_write_telemetry_degenerate_values() {
        let estimate = ConcentrationEstimate {
            co_ppm: f32::NAN,
            air_quality_ppm: f32::INFINITY,
            methane_ppm: 1_099_511_627_776.0,
        };
        let aqi = AirQualityIndex {
            value: 500,
            status: Status::Hazardous,
        };

        let mut line = String::new();
        write_telemetry(&mut line, &estimate, &aqi).unwrap();

        assert!(line.starts_with("{\"co\":NaN,\"ch4\":1099511627776.0,"));
        assert!(line.contains("\"air_quality\":inf,"));
    }

    #[test]
    fn test_write_reading() {
        let mut row = String::new();
        write_reading(&mut row, "CH4", 1083.6758).unwrap();
        assert_eq!(row, "CH4: 1083.7 ppm");

        let mut row = String::new();
        write_reading(&mut row, "AQ", f32::INFINITY).unwrap();
        assert_eq!(row, "AQ: inf ppm");
    }
}
