use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    prelude::*,
    quantity::{energy::WattHours, power::Watts},
};

/// Construction inputs of a [`super::BatteryRecord`].
///
/// Unlike the record, the depth-of-discharge values here are **fractions** of the capacity.
/// Missing keys take the defaults.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatterySettings {
    pub current_charge: WattHours,
    pub capacity: WattHours,
    pub charging_power_limit: Watts,
    pub discharging_power_limit: Watts,
    pub charging_efficiency: f64,
    pub discharging_efficiency: f64,
    pub min_depth_of_discharge: f64,
    pub max_depth_of_discharge: f64,
}

impl BatterySettings {
    pub const DEFAULT: Self = Self {
        current_charge: WattHours::ZERO,
        capacity: WattHours::ZERO,
        charging_power_limit: Watts(1.0),
        discharging_power_limit: Watts(1.0),
        charging_efficiency: 0.95,
        discharging_efficiency: 0.95,
        min_depth_of_discharge: 0.1,
        max_depth_of_discharge: 0.97,
    };

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("failed to parse the battery settings")
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let settings = Self::from_toml_str(&text)?;
        info!(capacity = %settings.capacity, "loaded the battery settings");
        Ok(settings)
    }
}

impl Default for BatterySettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}
