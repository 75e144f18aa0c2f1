//! nostress-tips - sponsorship and support information
//!
//! Cosmetic companion to nostress-keys: prints the ways to support the
//! project (Lightning zaps, Nostr follows) and the ASCII logo.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use libnostress::error::NostressError;
use libnostress::output::{confirm_overwrite, format_as_json, write_output};
use libnostress::tips::{SponsorInfo, LOGO};
use libnostress::validation::validate_file_path;
use tracing::error;

#[derive(Parser)]
#[command(name = "nostress-tips")]
#[command(about = "Tips and sponsorship information for supporting Nostr development", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Display tips and sponsorship information
    Show {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Save output to file instead of displaying
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Display the Lightning Network address for zaps
    Lightning {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Display the developer's Nostr public key for following
    Nostr {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Display the Nostress ASCII art logo
    Logo {
        /// Save logo to file instead of displaying
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    libnostress::logging::init_cli(cli.verbose);

    if let Err(e) = run_command(cli.command) {
        error!("{}", e);
        let code = e
            .downcast_ref::<NostressError>()
            .map(NostressError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Show { format, output } => show(&format, output.as_deref()),
        Commands::Lightning { format } => {
            single_field(&format, "lightning_address", SponsorInfo::current().lightning_address)
        }
        Commands::Nostr { format } => {
            single_field(&format, "nostr_pubkey", SponsorInfo::current().nostr_pubkey)
        }
        Commands::Logo { output } => logo(output.as_deref()),
    }
}

fn resolve_output(output: Option<&str>) -> Result<Option<PathBuf>> {
    let Some(path) = output else {
        return Ok(None);
    };
    let path = validate_file_path(path, false, false)?;
    if !confirm_overwrite(&path)? {
        println!("Cancelled");
        std::process::exit(0);
    }
    Ok(Some(path))
}

fn show(format: &str, output: Option<&str>) -> Result<()> {
    let output_path = resolve_output(output)?;
    let info = SponsorInfo::current();

    let content = match format {
        "json" => format_as_json(&info, true)?,
        "text" => info.to_text(),
        other => {
            return Err(NostressError::Validation(format!(
                "Invalid format '{}'. Valid options: text, json",
                other
            ))
            .into());
        }
    };

    write_output(&content, output_path.as_deref())?;
    if let Some(path) = &output_path {
        println!("✓ Support information saved to {}", path.display());
    }

    Ok(())
}

fn single_field(format: &str, field: &str, value: &str) -> Result<()> {
    match format {
        "json" => {
            let rendered = format_as_json(&serde_json::json!({ field: value }), true)?;
            println!("{}", rendered);
        }
        "text" => println!("{}", value),
        other => {
            return Err(NostressError::Validation(format!(
                "Invalid format '{}'. Valid options: text, json",
                other
            ))
            .into());
        }
    }
    Ok(())
}

fn logo(output: Option<&str>) -> Result<()> {
    let output_path = resolve_output(output)?;
    write_output(LOGO, output_path.as_deref())?;
    if let Some(path) = &output_path {
        println!("✓ Logo saved to {}", path.display());
    }
    Ok(())
}
