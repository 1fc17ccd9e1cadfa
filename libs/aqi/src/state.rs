//! Loop state
//!
//! Everything the main loop carries between passes. Each read cycle
//! overwrites the previous sample in place; nothing is kept beyond that.

use crate::index::{calculate_aqi, AirQualityIndex};
use crate::schedule::{Scheduler, Tick};
use crate::sensor::{ConcentrationEstimate, SensorSample};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MonitorState {
    pub sample: SensorSample,
    pub concentrations: ConcentrationEstimate,
    pub aqi: AirQualityIndex,
    pub schedule: Scheduler,
}

impl MonitorState {
    pub const fn new() -> Self {
        Self {
            sample: SensorSample {
                co: 0,
                air_quality: 0,
                methane: 0,
            },
            concentrations: ConcentrationEstimate {
                co_ppm: 0.0,
                air_quality_ppm: 0.0,
                methane_ppm: 0.0,
            },
            aqi: AirQualityIndex {
                value: 0,
                status: crate::index::Status::Good,
            },
            schedule: Scheduler::new(),
        }
    }

    /// Forward the current uptime to the scheduler.
    pub fn poll(&mut self, now: u64) -> Option<Tick> {
        self.schedule.poll(now)
    }

    /// Store a new sample and recompute the concentrations from it.
    /// Used on its own during the stabilization reads.
    pub fn record(&mut self, sample: SensorSample) {
        self.sample = sample;
        self.concentrations = sample.to_concentrations();
    }

    /// Store a new sample and derive the index for it.
    pub fn update(&mut self, sample: SensorSample) -> AirQualityIndex {
        self.record(sample);
        self.aqi = calculate_aqi(&self.concentrations);
        self.aqi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Status;

    #[test]
    fn test_update_overwrites() {
        let mut state = MonitorState::new();
        assert_eq!(state, MonitorState::default());

        let aqi = state.update(SensorSample {
            co: 400,
            air_quality: 300,
            methane: 200,
        });
        assert_eq!(aqi.value, 500);
        assert_eq!(aqi.status, Status::Hazardous);
        assert_eq!(state.aqi, aqi);

        // Clean air on every channel
        let aqi = state.update(SensorSample {
            co: 10,
            air_quality: 10,
            methane: 10,
        });
        assert_eq!(state.sample.co, 10);
        assert_eq!(aqi.status, Status::Good);
        assert!(state.concentrations.co_ppm < 9.0);
    }

    #[test]
    fn test_record_leaves_index() {
        let mut state = MonitorState::new();
        state.record(SensorSample {
            co: 400,
            air_quality: 300,
            methane: 200,
        });

        assert!(state.concentrations.co_ppm > 900.0);
        assert_eq!(state.aqi, AirQualityIndex::default());
    }
}
