//! Compile-time configuration
//!
//! Calibration constants for the MQ-series sensors, loop timing, and the
//! thresholds used when adjusting the index for CO and methane.

/// Per-sensor constants for the power-law ppm model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    /// Concentration reported when the resistance ratio equals the
    /// clean-air ratio.
    pub baseline_ppm: f32,
    /// Rs/R0 of the sensor in clean air, taken from the datasheet curve.
    pub clean_air_ratio: f32,
}

/// MQ-7 carbon monoxide sensor
pub const MQ7_CO: Calibration = Calibration {
    baseline_ppm: 100.0,
    clean_air_ratio: 9.83,
};

/// MQ-135 general air quality sensor
pub const MQ135_AIR_QUALITY: Calibration = Calibration {
    baseline_ppm: 400.0,
    clean_air_ratio: 3.6,
};

/// MQ-4 methane sensor
pub const MQ4_METHANE: Calibration = Calibration {
    baseline_ppm: 1000.0,
    clean_air_ratio: 4.4,
};

/// Exponent of the simplified power-law curve shared by all three sensors.
pub const PPM_EXPONENT: f32 = -1.2;

/// Full-scale value of a 10-bit conversion.
pub const ADC_FULL_SCALE: f32 = 1023.0;

// Loop timing, all in milliseconds
pub const SENSOR_READ_INTERVAL_MS: u64 = 2000;
pub const TELEMETRY_INTERVAL_MS: u64 = 5000;

// Startup
pub const WARM_UP_SECS: u64 = 30;
pub const STABILIZE_CYCLES: u8 = 10;
pub const STABILIZE_SPACING_MS: u64 = 1000;

// Index adjustments
pub const CO_ALERT_PPM: f32 = 9.0;
pub const CO_AQI_PENALTY: i32 = 50;
pub const METHANE_ALERT_PPM: f32 = 5000.0;
pub const METHANE_AQI_PENALTY: i32 = 20;

/// Upper bound of the reported index.
pub const AQI_MAX: i32 = 500;
