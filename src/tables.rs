use std::fmt::Display;

use bess_model::{battery::BatteryRecord, prelude::*};
use comfy_table::{Attribute, Cell, CellAlignment, Table, modifiers, presets};

pub fn build_parameters_table(record: &BatteryRecord) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["Parameter", "Value"]);
    add_row(&mut table, "current_charge", record.current_charge);
    add_row(&mut table, "capacity", record.capacity);
    add_row(&mut table, "charging_power_limit", record.charging_power_limit);
    add_row(&mut table, "discharging_power_limit", record.discharging_power_limit);
    add_row(&mut table, "charging_efficiency", format_percentage(record.charging_efficiency));
    add_row(
        &mut table,
        "discharging_efficiency",
        format_percentage(record.discharging_efficiency),
    );
    add_row(&mut table, "min_depth_of_discharge", record.min_depth_of_discharge);
    add_row(&mut table, "max_depth_of_discharge", record.max_depth_of_discharge);
    table
}

/// Pretty-printed JSON object of [`BatteryRecord::parameters`].
pub fn build_parameters_json(record: &BatteryRecord) -> Result<String> {
    serde_json::to_string_pretty(&record.parameters())
        .context("failed to serialize the parameters")
}

fn add_row(table: &mut Table, name: &str, value: impl Display) {
    table.add_row(vec![
        Cell::new(name).add_attribute(Attribute::Dim),
        Cell::new(value).set_alignment(CellAlignment::Right),
    ]);
}

fn format_percentage(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}
