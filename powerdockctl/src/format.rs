//! Output formatting utilities for the CLI
//!
//! Provides table and JSON formatting with colors.

use anyhow::Result;
use colored::*;
use powerdock_core::Config;
use tabled::{settings::Style, Table, Tabled};

/// Output format options
#[derive(Debug, Clone)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Format the full configuration.
pub fn format_config(config: &Config, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        OutputFormat::Table => {
            let mut output = String::new();
            output.push_str(&"Device".bold().to_string());
            output.push('\n');
            output.push_str(&format!("Name: {}", config.device.device_name.cyan()));
            output.push('\n');
            output.push_str(&format!(
                "Friendly Name: {}",
                config.device.friendly_name.cyan()
            ));
            output.push('\n');
            output.push_str(&format!("Static IP: {}", config.device.static_ip.cyan()));
            output.push('\n');
            output.push_str(&format!("Gateway: {}", config.device.gateway.cyan()));
            output.push('\n');
            output.push_str(&format!("Subnet: {}", config.device.subnet.cyan()));
            output.push('\n');
            output.push_str(&format!("DNS: {}", config.device.dns.cyan()));
            output.push('\n');
            output.push('\n');
            output.push_str(&"General".bold().to_string());
            output.push('\n');
            output.push_str(&format!(
                "Active Units: {}",
                config.general.num_pcs.to_string().yellow()
            ));
            output.push('\n');
            output.push_str(&format!(
                "Deployment Path: {}",
                config.general.deployment_path.display().to_string().cyan()
            ));
            output.push('\n');
            output.push('\n');
            output.push_str(&format_units(config)?);
            Ok(output)
        }
    }
}

/// Format the per-unit table. Inert units are listed too, marked
/// inactive.
pub fn format_units(config: &Config) -> Result<String> {
    #[derive(Tabled)]
    struct UnitRow {
        #[tabled(rename = "Unit")]
        unit: String,
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "MAC Address")]
        mac: String,
        #[tabled(rename = "IP Address")]
        ip: String,
        #[tabled(rename = "ON GPIO")]
        on: String,
        #[tabled(rename = "OFF GPIO")]
        off: String,
        #[tabled(rename = "Active")]
        active: String,
    }

    let active_count = config.active_units().len();
    let rows: Vec<UnitRow> = config
        .units
        .iter()
        .enumerate()
        .map(|(i, unit)| UnitRow {
            unit: format!("{}", i + 1),
            name: unit.name.clone(),
            mac: unit.mac_address.clone(),
            ip: unit.ip_address.clone(),
            on: unit.on_button_gpio.clone(),
            off: unit.off_button_gpio.clone(),
            active: if i < active_count {
                "yes".green().to_string()
            } else {
                "no".dimmed().to_string()
            },
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    Ok(format!("{}\n{}", "Units:".bold(), table))
}

/// Format a success message with a checkmark.
pub fn format_success(message: &str) -> String {
    format!("{} {}", "✓".green().bold(), message)
}

/// Format a warning message.
pub fn format_warning(message: &str) -> String {
    format!("{} {}", "!".yellow().bold(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_format_contains_fields() {
        let config = Config::default();
        let json = format_config(&config, &OutputFormat::Json).unwrap();
        assert!(json.contains("\"device_name\""));
        assert!(json.contains("\"num_pcs\": 2"));
    }

    #[test]
    fn test_table_format_lists_all_units() {
        let config = Config::default();
        let table = format_config(&config, &OutputFormat::Table).unwrap();
        assert!(table.contains("pc-controller"));
        assert!(table.contains("AA:BB:CC:DD:EE:01"));
        assert!(table.contains("AA:BB:CC:DD:EE:08"));
    }
}
