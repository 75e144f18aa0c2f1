//! nostress-keys - Nostr keypair generation and conversion
//!
//! Generates secp256k1 keypairs and converts them between the hex and the
//! prefixed-base58 ("bech32") textual formats.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use libnostress::config::Config;
use libnostress::error::NostressError;
use libnostress::keys::{
    is_valid_hex_key, is_valid_pseudo_bech32, KeyFormat, Keypair, KeyPrefix, PrivateKey,
    PublicKey,
};
use libnostress::output::{
    confirm_overwrite, format_as_json, format_keypair_json, format_keypair_text, obfuscate,
    write_output,
};
use libnostress::validation::{validate_file_path, validate_key_format};
use tracing::{debug, error, warn};

#[derive(Parser)]
#[command(name = "nostress-keys")]
#[command(about = "Generate, validate, and convert Nostr keypairs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new keypair
    Generate {
        /// Output format: hex, bech32, or both (default from config)
        #[arg(short, long)]
        format: Option<String>,

        /// Save output to file instead of displaying
        #[arg(short, long)]
        output: Option<String>,

        /// Base64-wrap the file content. Reversible obfuscation, NOT
        /// encryption; requires --output
        #[arg(long)]
        obfuscate: bool,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Validate a key string (hex or nsec/npub)
    Validate {
        /// Key to validate
        key: String,

        /// Expected key type: private, public, nsec, npub
        #[arg(short = 't', long = "type")]
        key_type: Option<String>,
    },

    /// Convert a key between hex and bech32 formats
    Convert {
        /// Key to convert
        key: String,

        /// Target format: hex or bech32
        #[arg(long = "to", default_value = "hex")]
        target: String,

        /// Key type if ambiguous (hex input): private or public
        #[arg(short = 't', long = "type")]
        key_type: Option<String>,

        /// Save output to file instead of displaying
        #[arg(short, long)]
        output: Option<String>,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
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
        Commands::Generate {
            format,
            output,
            obfuscate,
            json,
        } => generate(format.as_deref(), output.as_deref(), obfuscate, json),
        Commands::Validate { key, key_type } => validate(&key, key_type.as_deref()),
        Commands::Convert {
            key,
            target,
            key_type,
            output,
            json,
        } => convert(&key, &target, key_type.as_deref(), output.as_deref(), json),
    }
}

/// Input key shape, detectable without external hints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetectedKey {
    Hex,
    Nsec,
    Npub,
}

impl DetectedKey {
    fn as_str(&self) -> &'static str {
        match self {
            DetectedKey::Hex => "hex",
            DetectedKey::Nsec => "nsec",
            DetectedKey::Npub => "npub",
        }
    }
}

fn detect_key_kind(key: &str) -> Result<DetectedKey, NostressError> {
    if key.starts_with("nsec") {
        Ok(DetectedKey::Nsec)
    } else if key.starts_with("npub") {
        Ok(DetectedKey::Npub)
    } else if is_valid_hex_key(key) {
        Ok(DetectedKey::Hex)
    } else {
        Err(NostressError::KeyFormat(
            "could not detect key type; key must be 64-character hex or start with nsec/npub"
                .to_string(),
        ))
    }
}

/// Resolve and vet an output path, including the overwrite prompt
///
/// Bare filenames land in the configured `default_output_dir`, if any.
fn resolve_output(output: Option<&str>, config: &Config) -> Result<Option<PathBuf>> {
    let Some(raw) = output else {
        return Ok(None);
    };

    let raw = match (&config.default_output_dir, Path::new(raw).parent()) {
        (Some(dir), Some(parent)) if parent.as_os_str().is_empty() => {
            Path::new(dir).join(raw).to_string_lossy().into_owned()
        }
        _ => raw.to_string(),
    };

    let path = validate_file_path(&raw, false, false)?;
    if !confirm_overwrite(&path)? {
        println!("Cancelled");
        std::process::exit(0);
    }
    Ok(Some(path))
}

fn generate(
    format: Option<&str>,
    output: Option<&str>,
    use_obfuscation: bool,
    json: bool,
) -> Result<()> {
    let config = Config::load()?;

    let format = match format {
        Some(s) => validate_key_format(s)?,
        None => config.default_key_format,
    };

    if use_obfuscation && output.is_none() {
        anyhow::bail!(
            "--obfuscate requires --output; obfuscated keys are not displayed to the terminal"
        );
    }

    let output_path = resolve_output(output, &config)?;

    debug!("generating keypair with format {}", format);
    let keypair = Keypair::generate()?;
    let formatted = keypair.to_format(format);

    let mut content = if json {
        format_as_json(&format_keypair_json(&formatted), true)?
    } else {
        format_keypair_text(&formatted)
    };

    if use_obfuscation {
        content = obfuscate(&content);
    }

    write_output(&content, output_path.as_deref())?;
    if let Some(path) = &output_path {
        println!("✓ Keypair written to {}", path.display());
    }

    Ok(())
}

fn validate(key: &str, key_type: Option<&str>) -> Result<()> {
    let key = key.trim();
    let detected = detect_key_kind(key)?;

    let (is_valid, purpose) = match detected {
        // A bare hex key could be either half of a pair
        DetectedKey::Hex => (is_valid_hex_key(key), "private or public"),
        DetectedKey::Nsec => (is_valid_pseudo_bech32(key, KeyPrefix::Nsec), "private"),
        DetectedKey::Npub => (is_valid_pseudo_bech32(key, KeyPrefix::Npub), "public"),
    };

    if !is_valid {
        return Err(NostressError::KeyFormat(format!(
            "invalid {} key format",
            detected.as_str()
        ))
        .into());
    }

    if let Some(expected) = key_type {
        let allowed: &[DetectedKey] = match expected.to_lowercase().as_str() {
            "private" => &[DetectedKey::Hex, DetectedKey::Nsec],
            "public" => &[DetectedKey::Hex, DetectedKey::Npub],
            "nsec" => &[DetectedKey::Nsec],
            "npub" => &[DetectedKey::Npub],
            other => {
                return Err(NostressError::Validation(format!(
                    "Invalid key type: {}. Valid types: private, public, nsec, npub",
                    other
                ))
                .into());
            }
        };

        if !allowed.contains(&detected) {
            return Err(NostressError::KeyFormat(format!(
                "expected {} key, got {}",
                expected,
                detected.as_str()
            ))
            .into());
        }
    }

    println!("✓ Valid {} key ({})", detected.as_str(), purpose);
    Ok(())
}

fn convert(
    key: &str,
    target: &str,
    key_type: Option<&str>,
    output: Option<&str>,
    json: bool,
) -> Result<()> {
    let key = key.trim();

    let target = match validate_key_format(target)? {
        KeyFormat::Both => {
            return Err(NostressError::Validation(
                "Invalid target format 'both'. Valid targets: hex, bech32".to_string(),
            )
            .into());
        }
        format => format,
    };

    let config = Config::load()?;
    let output_path = resolve_output(output, &config)?;

    let detected = detect_key_kind(key)?;
    debug!("detected {} input key", detected.as_str());

    // Decode the input into a typed key, asking for --type only when the
    // prefix cannot disambiguate
    let (converted, original_format, original_type) = match detected {
        DetectedKey::Nsec => {
            let private = PrivateKey::from_bech32(key)?;
            let rendered = match target {
                KeyFormat::Hex => private.to_hex(),
                KeyFormat::Bech32 => private.to_bech32(),
                KeyFormat::Both => unreachable!("rejected above"),
            };
            (rendered, KeyFormat::Bech32, "private")
        }
        DetectedKey::Npub => {
            let public = PublicKey::from_bech32(key)?;
            let rendered = match target {
                KeyFormat::Hex => public.to_hex(),
                KeyFormat::Bech32 => public.to_bech32(),
                KeyFormat::Both => unreachable!("rejected above"),
            };
            (rendered, KeyFormat::Bech32, "public")
        }
        DetectedKey::Hex => {
            let key_type = key_type.ok_or_else(|| {
                NostressError::Validation(
                    "Hex keys require --type to specify private or public".to_string(),
                )
            })?;
            match key_type.to_lowercase().as_str() {
                "private" => {
                    let private = PrivateKey::from_hex(key)?;
                    let rendered = match target {
                        KeyFormat::Hex => private.to_hex(),
                        KeyFormat::Bech32 => private.to_bech32(),
                        KeyFormat::Both => unreachable!("rejected above"),
                    };
                    (rendered, KeyFormat::Hex, "private")
                }
                "public" => {
                    let public = PublicKey::from_hex(key)?;
                    let rendered = match target {
                        KeyFormat::Hex => public.to_hex(),
                        KeyFormat::Bech32 => public.to_bech32(),
                        KeyFormat::Both => unreachable!("rejected above"),
                    };
                    (rendered, KeyFormat::Hex, "public")
                }
                other => {
                    return Err(NostressError::Validation(format!(
                        "Invalid key type: {}. Valid types: private, public",
                        other
                    ))
                    .into());
                }
            }
        }
    };

    if original_format == target {
        warn!("key is already in {} format", target);
    }

    if json {
        let value = serde_json::json!({
            "original_key": key,
            "original_format": original_format.as_str(),
            "original_type": original_type,
            "converted_key": converted,
            "target_format": target.as_str(),
        });
        let content = format_as_json(&value, true)?;
        write_output(&content, output_path.as_deref())?;
    } else if let Some(path) = &output_path {
        write_output(&converted, Some(path))?;
        println!("✓ Converted key written to {}", path.display());
    } else {
        println!(
            "✓ Converted {} {} key to {} format",
            original_format.as_str(),
            original_type,
            target.as_str()
        );
        println!("  Result: {}", converted);
    }

    Ok(())
}
