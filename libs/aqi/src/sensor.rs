//! Sensor conversion
//!
//! Turns raw 10-bit readings from the three MQ gas sensors into
//! approximate concentrations.

use crate::config::{
    Calibration, ADC_FULL_SCALE, MQ135_AIR_QUALITY, MQ4_METHANE, MQ7_CO, PPM_EXPONENT,
};

/// One raw reading per channel, on the 0-1023 scale.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SensorSample {
    pub co: u16,
    pub air_quality: u16,
    pub methane: u16,
}

/// Estimated gas concentrations in ppm.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ConcentrationEstimate {
    pub co_ppm: f32,
    pub air_quality_ppm: f32,
    pub methane_ppm: f32,
}

impl SensorSample {
    /// Converts every channel with its own calibration constants.
    pub fn to_concentrations(&self) -> ConcentrationEstimate {
        ConcentrationEstimate {
            co_ppm: calculate_ppm(self.co, &MQ7_CO),
            air_quality_ppm: calculate_ppm(self.air_quality, &MQ135_AIR_QUALITY),
            methane_ppm: calculate_ppm(self.methane, &MQ4_METHANE),
        }
    }
}

/// Estimate a concentration from a raw reading.
///
/// # Arguments
///
/// * `raw` - 10-bit reading from the sensor's voltage divider
/// * `calibration` - Constants for the sensor on that channel
///
/// # Returns
///
/// `baseline * (Rs / ratio)^-1.2` where `Rs = 1023 / raw - 1`.
/// The result is not clamped: a reading of 0 drives the resistance to
/// infinity and the estimate to 0, while a full-scale reading of 1023
/// drives the resistance to 0 and the estimate to infinity.
///
/// # Examples
///
/// ```
/// use aqi::config::MQ7_CO;
/// use aqi::sensor::calculate_ppm;
///
/// let ppm = calculate_ppm(400, &MQ7_CO);
/// assert!(ppm > 912.0 && ppm < 913.0);
/// ```
pub fn calculate_ppm(raw: u16, calibration: &Calibration) -> f32 {
    let resistance = ADC_FULL_SCALE / raw as f32 - 1.0;
    calibration.baseline_ppm * libm::powf(resistance / calibration.clean_air_ratio, PPM_EXPONENT)
}

/// Reduce a 12-bit conversion to the 10-bit scale the model expects.
pub fn to_ten_bit(raw: u16) -> u16 {
    (raw & 0x0FFF) >> 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f32, expected: f32, tolerance: f32) -> bool {
        libm::fabsf(actual - expected) <= tolerance
    }

    #[test]
    fn test_calculate_ppm() {
        let sample = SensorSample {
            co: 400,
            air_quality: 300,
            methane: 200,
        };
        let estimate = sample.to_concentrations();

        assert!(close(estimate.co_ppm, 912.33, 0.05));
        assert!(close(estimate.air_quality_ppm, 647.44, 0.05));
        assert!(close(estimate.methane_ppm, 1083.68, 0.05));
    }

    #[test]
    fn test_clean_air_reading_returns_baseline() {
        // Rs == ratio when 1023 / raw - 1 == 3.6
        let raw_f = ADC_FULL_SCALE / (MQ135_AIR_QUALITY.clean_air_ratio + 1.0);
        let ppm = calculate_ppm(libm::roundf(raw_f) as u16, &MQ135_AIR_QUALITY);
        assert!(close(ppm, 400.0, 5.0));
    }

    #[test]
    fn test_finite_inside_scale() {
        for raw in 1..1023u16 {
            for calibration in [MQ7_CO, MQ135_AIR_QUALITY, MQ4_METHANE] {
                let ppm = calculate_ppm(raw, &calibration);
                assert!(ppm.is_finite(), "raw {} gave {}", raw, ppm);
                assert!(ppm >= 0.0, "raw {} gave {}", raw, ppm);
            }
        }
    }

    #[test]
    fn test_scale_edges_diverge() {
        assert_eq!(calculate_ppm(0, &MQ7_CO), 0.0);
        assert!(calculate_ppm(1023, &MQ7_CO).is_infinite());
    }

    #[test]
    fn test_monotonic_in_raw() {
        let mut last = calculate_ppm(1, &MQ4_METHANE);
        for raw in 2..1023u16 {
            let ppm = calculate_ppm(raw, &MQ4_METHANE);
            assert!(ppm > last);
            last = ppm;
        }
    }

    #[test]
    fn test_to_ten_bit() {
        assert_eq!(to_ten_bit(0), 0);
        assert_eq!(to_ten_bit(3), 0);
        assert_eq!(to_ten_bit(4), 1);
        assert_eq!(to_ten_bit(2048), 512);
        assert_eq!(to_ten_bit(4095), 1023);
    }
}
