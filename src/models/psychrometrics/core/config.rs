use crate::support::psychro::{DewPointConfig, WetBulbConfig};

/// Solver configuration for [`MoistAir`](super::MoistAir).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoistAirConfig {
    /// Wet-bulb inversion settings.
    pub wet_bulb: WetBulbConfig,

    /// Dew-point inversion settings, including the method.
    pub dew_point: DewPointConfig,
}

impl MoistAirConfig {
    #[must_use]
    pub fn with_wet_bulb(self, wet_bulb: WetBulbConfig) -> Self {
        Self { wet_bulb, ..self }
    }

    #[must_use]
    pub fn with_dew_point(self, dew_point: DewPointConfig) -> Self {
        Self { dew_point, ..self }
    }
}
