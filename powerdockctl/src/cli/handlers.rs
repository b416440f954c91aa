//! Command execution handlers
//!
//! Each CLI invocation is one editor action: load the persisted
//! configuration into a draft, apply the edit, and commit. Failures
//! leave the persisted file as it was.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use powerdock_core::{ApiKey, ConfigEditor, ConfigStore, PowerdockError};

use crate::deploy::{self, TemplateGenerator};
use crate::format::{self, OutputFormat};
use crate::settings::CliSettings;

use super::commands::*;

fn open_editor(config_path: &Path) -> Result<ConfigEditor> {
    ConfigEditor::open(ConfigStore::new(config_path)).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            config_path.display()
        )
    })
}

/// Handle show command
pub fn handle_show(config_path: &Path, format: &OutputFormat) -> Result<()> {
    let editor = open_editor(config_path)?;
    println!("{}", format::format_config(editor.draft(), format)?);
    Ok(())
}

/// Handle set commands
pub fn handle_set(config_path: &Path, target: SetCommands) -> Result<()> {
    let mut editor = open_editor(config_path)?;

    let description = match target {
        SetCommands::Device { field, value } => {
            let device = &mut editor.draft_mut().device;
            let slot = match field {
                DeviceField::DeviceName => &mut device.device_name,
                DeviceField::FriendlyName => &mut device.friendly_name,
                DeviceField::StaticIp => &mut device.static_ip,
                DeviceField::Gateway => &mut device.gateway,
                DeviceField::Subnet => &mut device.subnet,
                DeviceField::Dns => &mut device.dns,
            };
            slot.clone_from(&value);
            format!("device {} = {}", field.key(), value)
        }
        SetCommands::General { field, value } => match field {
            GeneralField::NumPcs => {
                let before = editor.draft().general.num_pcs;
                let after = editor.set_active_units_str(&value);
                if after == before && value.trim().parse::<i64>().is_err() {
                    warn!("Ignoring invalid unit count '{}'", value);
                }
                format!("general num_pcs = {}", after)
            }
            GeneralField::DeploymentPath => {
                editor.draft_mut().general.deployment_path = PathBuf::from(&value);
                format!("general deployment_path = {}", value)
            }
        },
        SetCommands::Unit { unit, field, value } => {
            let unit_config = editor.unit_mut(unit)?;
            let slot = match field {
                UnitField::Name => &mut unit_config.name,
                UnitField::MacAddress => &mut unit_config.mac_address,
                UnitField::IpAddress => &mut unit_config.ip_address,
                UnitField::OnButtonGpio => &mut unit_config.on_button_gpio,
                UnitField::OffButtonGpio => &mut unit_config.off_button_gpio,
            };
            slot.clone_from(&value);
            format!("unit {} {} = {}", unit, field.key(), value)
        }
    };

    editor.save().context("Failed to save configuration")?;
    info!("Configuration saved to {}", config_path.display());
    println!("{}", format::format_success(&format!("Set {}", description)));
    Ok(())
}

/// Handle units command
pub fn handle_units(config_path: &Path, count: i64) -> Result<()> {
    let mut editor = open_editor(config_path)?;
    let applied = editor.set_active_units(count);
    editor.save().context("Failed to save configuration")?;

    if i64::from(applied) != count {
        println!(
            "{}",
            format::format_warning(&format!("Unit count {} clamped to {}", count, applied))
        );
    }
    println!(
        "{}",
        format::format_success(&format!("Active units set to {}", applied))
    );
    Ok(())
}

/// Handle generate command: save first, then run the template generator.
/// A generation failure is reported but the save stands.
pub fn handle_generate(config_path: &Path, settings: &CliSettings) -> Result<()> {
    let editor = open_editor(config_path)?;
    editor.save().context("Failed to save configuration")?;
    info!("Configuration saved to {}", config_path.display());

    let generator = TemplateGenerator::new(&settings.template_command);
    let stdout = generator
        .run(config_path)
        .context("Template generation failed (configuration was saved)")?;

    if !stdout.trim().is_empty() {
        println!("{}", stdout.trim_end());
    }
    println!(
        "{}",
        format::format_success(&format!(
            "Templates generated under {}",
            editor.draft().general.deployment_path.display()
        ))
    );
    Ok(())
}

/// Handle keygen command: in-process key generation, no subprocess hop.
pub fn handle_keygen(output_dir: Option<PathBuf>) -> Result<()> {
    let dir = output_dir.unwrap_or_else(|| PathBuf::from("."));
    let key = ApiKey::generate();
    let path = key.persist(&dir).context("Failed to write key file")?;
    info!("API key written to {}", path.display());

    println!("{}", key.secret_line().trim_end());
    println!(
        "{}",
        format::format_success(&format!("Key saved to {}", path.display()))
    );
    Ok(())
}

/// Handle backup command. Missing config file is a warning, not an error.
pub fn handle_backup(config_path: &Path) -> Result<()> {
    let store = ConfigStore::new(config_path);
    match store.backup() {
        Ok(backup_path) => {
            info!("Configuration backed up to {}", backup_path.display());
            println!(
                "{}",
                format::format_success(&format!("Backed up to {}", backup_path.display()))
            );
            Ok(())
        }
        Err(PowerdockError::MissingConfig(path)) => {
            warn!("No configuration file to back up at {}", path.display());
            println!(
                "{}",
                format::format_warning("No configuration file to back up")
            );
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Handle open command. Missing deployment folder is a warning.
pub fn handle_open(config_path: &Path) -> Result<()> {
    let editor = open_editor(config_path)?;
    let deploy_path = editor.draft().general.deployment_path.clone();

    if !deploy_path.exists() {
        warn!("Deployment folder does not exist: {}", deploy_path.display());
        println!(
            "{}",
            format::format_warning(&format!(
                "Deployment folder does not exist: {}",
                deploy_path.display()
            ))
        );
        return Ok(());
    }

    deploy::open_folder(&deploy_path).context("Failed to open deployment folder")?;
    Ok(())
}

/// Generate shell completion script on stdout
pub fn generate_completion(shell: clap_complete::Shell) {
    use clap::CommandFactory;

    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "powerdockctl", &mut std::io::stdout());
}
