//! AQI library
//!
//! This library provides the decision logic for the gas monitor: converting
//! MQ sensor readings to concentrations, deriving a simplified air quality
//! index, pacing the read and telemetry cycles, and formatting the output
//! text. It supports both std and no_std environments, but is best used on
//! systems with hardware floating point support.

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod config;
pub mod index;
pub mod report;
pub mod schedule;
pub mod sensor;
pub mod state;

pub use index::{calculate_aqi, AirQualityIndex, Alert, Status};
pub use sensor::{ConcentrationEstimate, SensorSample};
pub use state::MonitorState;

/// Color enum provides colors corresponding to EPA AQI levels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    DarkPurple,
}

/// Provides a Color enum variant value based on the
/// specified AQI value. Uses the ranges provided by the
/// EPA for mapping AQI to color.
///
/// # Arguments
///
/// * `aqi` - The calculated AQI
///
/// # Returns
///
/// A Color enum variant. Values outside 0..=300, including negative
/// ones, map to DarkPurple.
///
/// # Examples
///
/// ```
/// use aqi::{get_aqi_color, Color};
///
/// assert_eq!(get_aqi_color(75), Color::Yellow);
/// assert_eq!(get_aqi_color(500), Color::DarkPurple);
/// ```
pub fn get_aqi_color(aqi: i32) -> Color {
    match aqi {
        0..=50 => Color::Green,
        51..=100 => Color::Yellow,
        101..=150 => Color::Orange,
        151..=200 => Color::Red,
        201..=300 => Color::Purple,
        _ => Color::DarkPurple,
    }
}
