//! CLI command and subcommand definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Powerdock deployment editor CLI
#[derive(Parser, Debug)]
#[command(name = "powerdockctl")]
#[command(version, about = "ESP32 PC power controller deployment editor", long_about = None)]
pub struct Cli {
    /// Configuration file to edit (overrides settings file)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format (overrides settings file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable verbose logging (overrides settings file)
    #[arg(short, long)]
    pub verbose: bool,

    /// Don't load the settings file
    #[arg(long)]
    pub no_settings: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty table output
    Table,
    /// JSON output
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the current configuration
    Show,

    /// Edit a configuration field and save
    Set {
        #[command(subcommand)]
        target: SetCommands,
    },

    /// Set the number of active units (clamped to 1-8) and save
    Units {
        /// Desired active unit count
        count: i64,
    },

    /// Save the configuration and run the template generator
    Generate,

    /// Generate a fresh API encryption key and write api_key.txt
    Keygen {
        /// Directory to write api_key.txt into (defaults to current dir)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Copy the configuration file to a timestamped backup
    Backup,

    /// Open the deployment folder in the system file browser
    Open,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum SetCommands {
    /// Edit a device (ESP32) network field
    Device {
        field: DeviceField,
        value: String,
    },

    /// Edit a general deployment field
    General {
        field: GeneralField,
        value: String,
    },

    /// Edit a per-unit field
    Unit {
        /// Unit number (1-8)
        unit: usize,
        field: UnitField,
        value: String,
    },
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum DeviceField {
    DeviceName,
    FriendlyName,
    StaticIp,
    Gateway,
    Subnet,
    Dns,
}

impl DeviceField {
    /// Configuration file key for this field.
    pub fn key(&self) -> &'static str {
        match self {
            DeviceField::DeviceName => "device_name",
            DeviceField::FriendlyName => "friendly_name",
            DeviceField::StaticIp => "static_ip",
            DeviceField::Gateway => "gateway",
            DeviceField::Subnet => "subnet",
            DeviceField::Dns => "dns",
        }
    }
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum GeneralField {
    NumPcs,
    DeploymentPath,
}

impl GeneralField {
    pub fn key(&self) -> &'static str {
        match self {
            GeneralField::NumPcs => "num_pcs",
            GeneralField::DeploymentPath => "deployment_path",
        }
    }
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum UnitField {
    Name,
    MacAddress,
    IpAddress,
    OnButtonGpio,
    OffButtonGpio,
}

impl UnitField {
    pub fn key(&self) -> &'static str {
        match self {
            UnitField::Name => "name",
            UnitField::MacAddress => "mac_address",
            UnitField::IpAddress => "ip_address",
            UnitField::OnButtonGpio => "on_button_gpio",
            UnitField::OffButtonGpio => "off_button_gpio",
        }
    }
}
