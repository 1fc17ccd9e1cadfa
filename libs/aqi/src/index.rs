//! Air quality index
//!
//! A simplified index driven by the MQ-135 reading, then raised when the
//! CO or methane estimates cross fixed alert thresholds.

use core::fmt;

use crate::config::{
    AQI_MAX, CO_ALERT_PPM, CO_AQI_PENALTY, METHANE_ALERT_PPM, METHANE_AQI_PENALTY,
};
use crate::sensor::ConcentrationEstimate;

/// Severity label reported alongside the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
    HighCo,
    HighMethane,
}

impl Status {
    /// Text shown on the display and sent over serial.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Good => "Good",
            Status::Moderate => "Moderate",
            Status::UnhealthySensitive => "Unhealthy (Sensitive)",
            Status::Unhealthy => "Unhealthy",
            Status::VeryUnhealthy => "Very Unhealthy",
            Status::Hazardous => "Hazardous!",
            Status::HighCo => "Hazardous! High CO",
            Status::HighMethane => "Warning! High CH4",
        }
    }

    /// Hazardous labels are never replaced by a later adjustment.
    pub fn is_hazardous(&self) -> bool {
        matches!(self, Status::Hazardous | Status::HighCo)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which secondary gases are above their alert thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    Normal,
    CoAlert,
    MethaneAlert,
    BothAlert,
}

impl Alert {
    pub fn from_concentrations(estimate: &ConcentrationEstimate) -> Self {
        let co = estimate.co_ppm > CO_ALERT_PPM;
        let methane = estimate.methane_ppm > METHANE_ALERT_PPM;
        match (co, methane) {
            (false, false) => Alert::Normal,
            (true, false) => Alert::CoAlert,
            (false, true) => Alert::MethaneAlert,
            (true, true) => Alert::BothAlert,
        }
    }

    pub fn co(&self) -> bool {
        matches!(self, Alert::CoAlert | Alert::BothAlert)
    }

    pub fn methane(&self) -> bool {
        matches!(self, Alert::MethaneAlert | Alert::BothAlert)
    }
}

/// The index value and its label for one read cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AirQualityIndex {
    pub value: i32,
    pub status: Status,
}

impl Default for AirQualityIndex {
    fn default() -> Self {
        Self {
            value: 0,
            status: Status::Good,
        }
    }
}

// Input ranges in ppm. Every band except the last is half-open.
const PPM_BREAKPOINTS: [(i64, i64); 6] = [
    (0, 50),
    (50, 100),
    (100, 150),
    (150, 200),
    (200, 300),
    (300, 500),
];

const AQI_BREAKPOINTS: [(i64, i64); 6] = [
    (0, 50),
    (51, 100),
    (101, 150),
    (151, 200),
    (201, 300),
    (301, 500),
];

const BAND_STATUS: [Status; 6] = [
    Status::Good,
    Status::Moderate,
    Status::UnhealthySensitive,
    Status::Unhealthy,
    Status::VeryUnhealthy,
    Status::Hazardous,
];

/// Integer linear remap. Division truncates toward zero and the result is
/// not constrained to the output range.
///
/// # Examples
///
/// ```
/// use aqi::index::map_range;
///
/// assert_eq!(map_range(75, 50, 100, 51, 100), 75);
/// assert_eq!(map_range(647, 300, 500, 301, 500), 646);
/// ```
pub fn map_range(x: i64, in_lo: i64, in_hi: i64, out_lo: i64, out_hi: i64) -> i64 {
    (x - in_lo) * (out_hi - out_lo) / (in_hi - in_lo) + out_lo
}

/// Band index and label for the air quality reading alone.
///
/// # Arguments
///
/// * `air_quality_ppm` - MQ-135 estimate
///
/// # Returns
///
/// The mapped index with its band label. Readings of 300 ppm and above
/// (and NaN, which fails every band test) land in the last band, where the
/// mapping keeps climbing past 500.
pub fn band_index(air_quality_ppm: f32) -> AirQualityIndex {
    // Truncate first, the mapping works on whole ppm
    let ppm = air_quality_ppm as i32 as i64;

    let last = PPM_BREAKPOINTS.len() - 1;
    let band = PPM_BREAKPOINTS
        .iter()
        .position(|&(_, ppm_high)| air_quality_ppm < ppm_high as f32)
        .unwrap_or(last);

    let (ppm_low, ppm_high) = PPM_BREAKPOINTS[band];
    let (aqi_low, aqi_high) = AQI_BREAKPOINTS[band];
    let value = map_range(ppm, ppm_low, ppm_high, aqi_low, aqi_high);

    AirQualityIndex {
        value: clamp_to_i32(value),
        status: BAND_STATUS[band],
    }
}

/// Calculate the index for a full set of estimates.
///
/// # Arguments
///
/// * `estimate` - Concentrations from the current read cycle
///
/// # Returns
///
/// The band index of the air quality reading, raised by 50 when CO is
/// above 9 ppm and by 20 when methane is above 5000 ppm, capped at 500.
/// CO relabels the result "Hazardous! High CO" and methane relabels it
/// "Warning! High CH4", but neither replaces a hazardous label.
///
/// # Examples
///
/// ```
/// use aqi::index::{calculate_aqi, Status};
/// use aqi::sensor::ConcentrationEstimate;
///
/// let estimate = ConcentrationEstimate {
///     co_ppm: 10.0,
///     air_quality_ppm: 75.0,
///     methane_ppm: 0.0,
/// };
/// let aqi = calculate_aqi(&estimate);
/// assert_eq!(aqi.value, 125);
/// assert_eq!(aqi.status, Status::HighCo);
/// ```
pub fn calculate_aqi(estimate: &ConcentrationEstimate) -> AirQualityIndex {
    let AirQualityIndex { value, mut status } = band_index(estimate.air_quality_ppm);
    let mut value = value as i64;

    let alert = Alert::from_concentrations(estimate);

    if alert.co() {
        value += CO_AQI_PENALTY as i64;
        if !status.is_hazardous() {
            status = Status::HighCo;
        }
    }

    if alert.methane() {
        value += METHANE_AQI_PENALTY as i64;
        if !status.is_hazardous() {
            status = Status::HighMethane;
        }
    }

    AirQualityIndex {
        value: clamp_to_i32(value.min(AQI_MAX as i64)),
        status,
    }
}

fn clamp_to_i32(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
