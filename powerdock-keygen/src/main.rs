//! Powerdock key generator
//!
//! One-shot generator for the device API encryption key: 32 bytes from
//! the OS CSPRNG, base64-encoded. Prints the secrets line and writes it
//! to `api_key.txt` in the output directory.
//!
//! Exit code is 0 on success and 1 on any generation or write failure,
//! with the reason on stderr.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use powerdock_core::keygen::{ApiKey, KEY_FILE_NAME};

/// API key generator
#[derive(Parser, Debug)]
#[command(name = "powerdock-keygen")]
#[command(version, about = "Generate an API encryption key for the controller device", long_about = None)]
struct Args {
    /// Directory to write the key file into
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Only print the key line, don't write the file
    #[arg(long)]
    print_only: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let key = ApiKey::generate();

    println!("{}", key.secret_line().trim_end());

    if !args.print_only {
        let path = key
            .persist(&args.output_dir)
            .with_context(|| format!("Failed to write {}", KEY_FILE_NAME))?;
        println!();
        println!("Key saved to {}", path.display());
        println!("Add the line above to the device secrets before flashing.");
    }

    Ok(())
}
