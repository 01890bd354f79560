use std::path::PathBuf;

use bess_model::{
    battery::BatterySettings,
    prelude::*,
    quantity::{energy::WattHours, power::Watts},
};
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// TOML file with the battery settings, individual options take precedence over it.
    #[clap(long = "config", env = "BESS_CONFIG")]
    pub config: Option<PathBuf>,

    #[clap(flatten)]
    pub battery: BatteryArgs,

    /// Output format.
    #[clap(long = "format", value_enum, default_value = "table", env = "BESS_FORMAT")]
    pub format: OutputFormat,
}

impl Args {
    /// Merge the settings file, if any, with the individual options.
    pub fn settings(&self) -> Result<BatterySettings> {
        let settings = match &self.config {
            Some(path) => BatterySettings::read_from(path)?,
            None => BatterySettings::default(),
        };
        Ok(self.battery.overlay(settings))
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    Table,

    /// JSON object with the raw numbers.
    Json,
}

#[must_use]
#[derive(Copy, Clone, Parser)]
pub struct BatteryArgs {
    /// Currently stored energy in watt-hours.
    #[clap(
        long = "current-charge",
        env = "BATTERY_CURRENT_CHARGE_WATT_HOURS",
        allow_negative_numbers = true
    )]
    pub current_charge: Option<WattHours>,

    /// Nominal capacity in watt-hours.
    #[clap(
        long = "capacity",
        env = "BATTERY_CAPACITY_WATT_HOURS",
        allow_negative_numbers = true
    )]
    pub capacity: Option<WattHours>,

    /// Charging power limit in watts.
    #[clap(
        long = "charging-power-limit",
        env = "BATTERY_CHARGING_POWER_LIMIT_WATTS",
        allow_negative_numbers = true
    )]
    pub charging_power_limit: Option<Watts>,

    /// Discharging power limit in watts.
    #[clap(
        long = "discharging-power-limit",
        env = "BATTERY_DISCHARGING_POWER_LIMIT_WATTS",
        allow_negative_numbers = true
    )]
    pub discharging_power_limit: Option<Watts>,

    /// Charging efficiency, `0..=1`.
    #[clap(
        long = "charging-efficiency",
        env = "BATTERY_CHARGING_EFFICIENCY",
        allow_negative_numbers = true
    )]
    pub charging_efficiency: Option<f64>,

    /// Discharging efficiency, `0..=1`.
    #[clap(
        long = "discharging-efficiency",
        env = "BATTERY_DISCHARGING_EFFICIENCY",
        allow_negative_numbers = true
    )]
    pub discharging_efficiency: Option<f64>,

    /// Minimum depth of discharge as a fraction of the capacity.
    #[clap(
        long = "min-depth-of-discharge",
        env = "BATTERY_MIN_DEPTH_OF_DISCHARGE",
        allow_negative_numbers = true
    )]
    pub min_depth_of_discharge: Option<f64>,

    /// Maximum depth of discharge as a fraction of the capacity.
    #[clap(
        long = "max-depth-of-discharge",
        env = "BATTERY_MAX_DEPTH_OF_DISCHARGE",
        allow_negative_numbers = true
    )]
    pub max_depth_of_discharge: Option<f64>,
}

impl BatteryArgs {
    /// Replace the settings with the options that are explicitly given.
    pub fn overlay(&self, settings: BatterySettings) -> BatterySettings {
        BatterySettings {
            current_charge: self.current_charge.unwrap_or(settings.current_charge),
            capacity: self.capacity.unwrap_or(settings.capacity),
            charging_power_limit: self
                .charging_power_limit
                .unwrap_or(settings.charging_power_limit),
            discharging_power_limit: self
                .discharging_power_limit
                .unwrap_or(settings.discharging_power_limit),
            charging_efficiency: self.charging_efficiency.unwrap_or(settings.charging_efficiency),
            discharging_efficiency: self
                .discharging_efficiency
                .unwrap_or(settings.discharging_efficiency),
            min_depth_of_discharge: self
                .min_depth_of_discharge
                .unwrap_or(settings.min_depth_of_discharge),
            max_depth_of_discharge: self
                .max_depth_of_discharge
                .unwrap_or(settings.max_depth_of_discharge),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_options_ok() -> Result {
        let args = Args::try_parse_from(["bess-model"])?;
        assert_eq!(args.format, OutputFormat::Table);
        assert_eq!(args.settings()?, BatterySettings::default());
        Ok(())
    }

    #[test]
    fn options_ok() -> Result {
        let args = Args::try_parse_from([
            "bess-model",
            "--capacity",
            "100",
            "--charging-power-limit",
            "1200",
            "--min-depth-of-discharge",
            "0.2",
            "--format",
            "json",
        ])?;
        assert_eq!(args.format, OutputFormat::Json);
        let settings = args.settings()?;
        assert_eq!(settings.capacity, WattHours(100.0));
        assert_eq!(settings.charging_power_limit, Watts(1200.0));
        assert_eq!(settings.min_depth_of_discharge, 0.2);
        assert_eq!(settings.max_depth_of_discharge, 0.97);
        Ok(())
    }

    #[test]
    fn negative_options_ok() -> Result {
        let args = Args::try_parse_from([
            "bess-model",
            "--capacity",
            "-200",
            "--min-depth-of-discharge",
            "-0.5",
            "--current-charge",
            "-1",
            "--discharging-power-limit",
            "-800",
            "--charging-efficiency",
            "-0.9",
        ])?;
        let settings = args.settings()?;
        assert_eq!(settings.capacity, WattHours(-200.0));
        assert_eq!(settings.min_depth_of_discharge, -0.5);
        assert_eq!(settings.current_charge, WattHours(-1.0));
        assert_eq!(settings.discharging_power_limit, Watts(-800.0));
        assert_eq!(settings.charging_efficiency, -0.9);
        assert_eq!(settings.max_depth_of_discharge, 0.97);
        Ok(())
    }

    #[test]
    fn non_numeric_option_fails() {
        assert!(Args::try_parse_from(["bess-model", "--capacity", "large"]).is_err());
    }

    #[test]
    fn options_take_precedence() -> Result {
        let file_settings =
            BatterySettings::from_toml_str("capacity = 5000.0\ncurrent_charge = 2500.0")?;
        let args = Args::try_parse_from(["bess-model", "--current-charge", "1000"])?;
        let settings = args.battery.overlay(file_settings);
        assert_eq!(settings.capacity, WattHours(5000.0));
        assert_eq!(settings.current_charge, WattHours(1000.0));
        Ok(())
    }
}
