//! Powerdock CLI
//!
//! Command-line editor for ESP32 PC power controller deployment
//! configurations.

use anyhow::Result;
use clap::Parser;

use powerdockctl::cli::{
    generate_completion, handle_backup, handle_generate, handle_keygen, handle_open, handle_set,
    handle_show, handle_units, Cli, Commands, OutputFormat,
};
use powerdockctl::settings::CliSettings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Settings priority chain: defaults → settings file → env → CLI args
    let mut settings = if cli.no_settings {
        CliSettings::default()
    } else {
        CliSettings::load()?
    };
    settings.apply_env_overrides();

    if let Some(ref config) = cli.config {
        settings.config_file = config.clone();
    }
    if let Some(ref format) = cli.format {
        settings.output_format = match format {
            OutputFormat::Table => "table".to_string(),
            OutputFormat::Json => "json".to_string(),
        };
    }
    if cli.verbose {
        settings.verbose = true;
    }

    init_tracing(settings.verbose);

    let output_format = match settings.output_format.as_str() {
        "json" => powerdockctl::format::OutputFormat::Json,
        _ => powerdockctl::format::OutputFormat::Table,
    };

    let result = match cli.command {
        Commands::Show => handle_show(&settings.config_file, &output_format),
        Commands::Set { target } => handle_set(&settings.config_file, target),
        Commands::Units { count } => handle_units(&settings.config_file, count),
        Commands::Generate => handle_generate(&settings.config_file, &settings),
        Commands::Keygen { output_dir } => handle_keygen(output_dir),
        Commands::Backup => handle_backup(&settings.config_file),
        Commands::Open => handle_open(&settings.config_file),
        Commands::Completion { shell } => {
            generate_completion(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if settings.verbose {
            eprintln!("Error details: {:?}", e);
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Initialize tracing subscriber for logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
