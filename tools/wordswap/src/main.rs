//! Wordswap - Register Payload Inspector
//!
//! Decodes and encodes word-swapped register payloads from the command line
//! using the same transforms the drivers use.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use voltage_transform::{TransformConfig, WordReverseTransform};

use crate::commands::ValueType;

#[derive(Parser)]
#[command(name = "wordswap")]
#[command(about = "Wordswap - decode and encode word-swapped register payloads")]
#[command(long_about = "Wordswap - decode and encode word-swapped register payloads

Commands:
  decode      Decode values from a hex payload
  encode      Encode values into a hex payload
  swap        Run the raw word swap over a hex payload
  config      Show the effective transform configuration

Examples:
  wordswap --byte-order ABCD decode '41 C8 00 00' -t f32
  wordswap --byte-order CDAB encode -t i32 -- -1 42
  wordswap --string-reverse decode 45484c4c -t string
  wordswap swap '12 34 56 78' --reverse")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Transform configuration file (toml, yaml or json)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Device byte order: ABCD or CDAB
    #[arg(long = "byte-order", global = true)]
    byte_order: Option<String>,

    /// Reverse word order of 4- and 8-byte values
    #[arg(long, global = true, num_args = 0..=1, default_missing_value = "true")]
    multi_word_reverse: Option<bool>,

    /// Swap bytes inside each word of string payloads
    #[arg(long, global = true, num_args = 0..=1, default_missing_value = "true")]
    string_reverse: Option<bool>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode values from a hex payload
    Decode {
        /// Payload bytes in hex, separators allowed
        payload: String,

        /// Value type
        #[arg(short = 't', long = "type", value_enum)]
        value_type: ValueType,

        /// Byte offset of the first value
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Number of values (bits for bool)
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// String length in bytes (default: rest of payload)
        #[arg(short, long)]
        length: Option<usize>,

        /// Text encoding label for strings
        #[arg(short, long, default_value = "ascii")]
        encoding: String,
    },

    /// Encode values into a hex payload
    Encode {
        /// Value type
        #[arg(short = 't', long = "type", value_enum)]
        value_type: ValueType,

        /// Text encoding label for strings
        #[arg(short, long, default_value = "ascii")]
        encoding: String,

        /// Values to encode
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Run the raw word swap over a hex payload
    Swap {
        /// Payload bytes in hex, separators allowed
        payload: String,

        /// Also reverse word order (payload must be 4 or 8 bytes)
        #[arg(short, long)]
        reverse: bool,
    },

    /// Show the effective transform configuration
    Config,
}

fn main() {
    let cli = Cli::parse();

    // Configure colored output
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "ERROR".red(), e);
        std::process::exit(1);
    }
}

/// Effective configuration: file and env, then command line overrides
fn effective_config(cli: &Cli) -> Result<TransformConfig> {
    let loaded = TransformConfig::load(cli.config.as_deref())?;
    commands::resolve_config(
        loaded,
        cli.byte_order.as_deref(),
        cli.multi_word_reverse,
        cli.string_reverse,
    )
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Decode {
            payload,
            value_type,
            offset,
            count,
            length,
            encoding,
        } => {
            let codec = WordReverseTransform::new(effective_config(&cli)?);
            let bytes = commands::parse_payload(payload)?;
            let encoding = commands::resolve_encoding(encoding)?;
            let values =
                commands::decode(&codec, &bytes, *value_type, *offset, *count, *length, encoding)?;

            for (i, value) in values.iter().enumerate() {
                println!("{} {}", format!("[{}]", i).bright_black(), value.green());
            }
        },

        Commands::Encode {
            value_type,
            encoding,
            values,
        } => {
            let codec = WordReverseTransform::new(effective_config(&cli)?);
            let encoding = commands::resolve_encoding(encoding)?;
            let bytes = commands::encode(&codec, *value_type, values, encoding)?;
            println!("{}", commands::format_payload(&bytes).green());
        },

        // raw primitive, independent of any configuration
        Commands::Swap { payload, reverse } => {
            let bytes = commands::parse_payload(payload)?;
            let swapped = commands::swap(&bytes, *reverse)?;
            println!("{}", commands::format_payload(&swapped).green());
        },

        Commands::Config => {
            let config = effective_config(&cli)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
            println!("{} {}", "Byte order:".bright_cyan(), config.byte_order());
        },
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_swap_ignores_broken_config() {
        let cli = parse(&[
            "wordswap",
            "-c",
            "/nonexistent/typo.toml",
            "--byte-order",
            "DCBA",
            "swap",
            "12 34 56 78",
            "--reverse",
        ]);
        assert!(run(cli).is_ok());
    }

    #[test]
    fn test_config_commands_report_missing_file() {
        let cli = parse(&["wordswap", "-c", "/nonexistent/typo.toml", "config"]);
        assert!(run(cli).is_err());

        let cli = parse(&[
            "wordswap",
            "-c",
            "/nonexistent/typo.toml",
            "decode",
            "0000",
            "-t",
            "u16",
        ]);
        assert!(run(cli).is_err());
    }

    #[test]
    fn test_byte_order_flag_validated_for_encode() {
        let cli = parse(&["wordswap", "--byte-order", "DCBA", "encode", "-t", "u16", "1"]);
        assert!(run(cli).is_err());

        let cli = parse(&["wordswap", "--byte-order", "ABCD", "encode", "-t", "u16", "1"]);
        assert!(run(cli).is_ok());
    }
}
