//! Battery parameters and instantaneous state.

mod settings;

use std::collections::BTreeMap;

use bon::bon;

pub use self::settings::BatterySettings;
use crate::{
    prelude::*,
    quantity::{energy::WattHours, power::Watts},
};

/// Flat snapshot of the [`BatteryRecord`] fields, keyed by the field names.
pub type Parameters = BTreeMap<&'static str, f64>;

/// Keys of [`Parameters`] in the field declaration order.
pub const PARAMETER_NAMES: [&str; 8] = [
    "current_charge",
    "capacity",
    "charging_power_limit",
    "discharging_power_limit",
    "charging_efficiency",
    "discharging_efficiency",
    "min_depth_of_discharge",
    "max_depth_of_discharge",
];

/// Configuration and instantaneous state of a single battery.
///
/// The fields are plain data: nothing is validated, so physically meaningless values
/// (negative capacity, efficiencies above one, NaN) are stored as is.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BatteryRecord {
    /// Currently stored energy, also known as the state of charge.
    pub current_charge: WattHours,

    /// Nominal energy capacity.
    pub capacity: WattHours,

    pub charging_power_limit: Watts,
    pub discharging_power_limit: Watts,

    /// Charging efficiency, nominally `(0..=1]`.
    pub charging_efficiency: f64,

    /// Discharging efficiency, nominally `(0..=1]`.
    pub discharging_efficiency: f64,

    /// Minimum depth of discharge as **absolute energy**.
    ///
    /// The builder accepts a fraction and multiplies it by the capacity.
    pub min_depth_of_discharge: WattHours,

    /// Maximum depth of discharge as **absolute energy**.
    ///
    /// The builder accepts a fraction and multiplies it by the capacity.
    pub max_depth_of_discharge: WattHours,
}

#[bon]
impl BatteryRecord {
    /// Build the record, converting the depth-of-discharge fractions into energy.
    #[builder]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        #[builder(default = BatterySettings::DEFAULT.current_charge)] current_charge: WattHours,
        #[builder(default = BatterySettings::DEFAULT.capacity)] capacity: WattHours,
        #[builder(default = BatterySettings::DEFAULT.charging_power_limit)]
        charging_power_limit: Watts,
        #[builder(default = BatterySettings::DEFAULT.discharging_power_limit)]
        discharging_power_limit: Watts,
        #[builder(default = BatterySettings::DEFAULT.charging_efficiency)] charging_efficiency: f64,
        #[builder(default = BatterySettings::DEFAULT.discharging_efficiency)]
        discharging_efficiency: f64,
        #[builder(default = BatterySettings::DEFAULT.min_depth_of_discharge)]
        min_depth_of_discharge: f64,
        #[builder(default = BatterySettings::DEFAULT.max_depth_of_discharge)]
        max_depth_of_discharge: f64,
    ) -> Self {
        let min_depth_of_discharge = capacity * min_depth_of_discharge;
        let max_depth_of_discharge = capacity * max_depth_of_discharge;
        debug!(
            ?capacity,
            ?min_depth_of_discharge,
            ?max_depth_of_discharge,
            "built the battery record",
        );
        Self {
            current_charge,
            capacity,
            charging_power_limit,
            discharging_power_limit,
            charging_efficiency,
            discharging_efficiency,
            min_depth_of_discharge,
            max_depth_of_discharge,
        }
    }
}

impl BatteryRecord {
    /// Snapshot the current field values.
    ///
    /// The depth-of-discharge entries hold the absolute energy, not the original fractions.
    pub fn parameters(&self) -> Parameters {
        Parameters::from([
            ("current_charge", self.current_charge.0),
            ("capacity", self.capacity.0),
            ("charging_power_limit", self.charging_power_limit.0),
            ("discharging_power_limit", self.discharging_power_limit.0),
            ("charging_efficiency", self.charging_efficiency),
            ("discharging_efficiency", self.discharging_efficiency),
            ("min_depth_of_discharge", self.min_depth_of_discharge.0),
            ("max_depth_of_discharge", self.max_depth_of_discharge.0),
        ])
    }
}

impl Default for BatteryRecord {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl From<BatterySettings> for BatteryRecord {
    fn from(settings: BatterySettings) -> Self {
        Self::builder()
            .current_charge(settings.current_charge)
            .capacity(settings.capacity)
            .charging_power_limit(settings.charging_power_limit)
            .discharging_power_limit(settings.discharging_power_limit)
            .charging_efficiency(settings.charging_efficiency)
            .discharging_efficiency(settings.discharging_efficiency)
            .min_depth_of_discharge(settings.min_depth_of_discharge)
            .max_depth_of_discharge(settings.max_depth_of_discharge)
            .build()
    }
}
