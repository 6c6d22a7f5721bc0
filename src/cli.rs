// Command-line arguments - clap definitions for the craneshell commands

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::export::ConfigFormat;

/// Build terminal color themes and export them as Kitty configs.
#[derive(Debug, Parser)]
#[command(name = "craneshell", version)]
pub struct Args {
    /// Path to a TOML settings file (locale, timestamp_format, format).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr (RUST_LOG takes precedence).
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a theme JSON file as a terminal config.
    Export {
        /// Theme JSON file, or "-" for stdin.
        theme: String,

        /// Write to this file instead of stdout.
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,

        /// Output dialect.
        #[arg(short = 'f', long = "format")]
        format: Option<ConfigFormat>,

        /// Locale for the header timestamp (e.g. ru_RU).
        #[arg(long = "locale")]
        locale: Option<String>,

        /// Use this text as the header timestamp instead of the clock.
        #[arg(long = "generated-at", value_name = "TEXT")]
        generated_at: Option<String>,
    },

    /// Show a theme preview in the terminal.
    Preview {
        /// Theme JSON file, or "-" for stdin.
        theme: String,
    },

    /// Print the default (Tango) theme as JSON.
    New {
        #[arg(short = 'n', long = "name", default_value = "My Theme")]
        name: String,
    },

    /// Print a theme with random colors as JSON.
    Random {
        #[arg(short = 'n', long = "name", default_value = "Random Theme")]
        name: String,

        /// Seed for reproducible output.
        #[arg(long = "seed")]
        seed: Option<u64>,
    },

    /// Convert a hex color to "r g b".
    Hex {
        value: String,
    },

    /// Convert channels to a hex color (values are clamped to 0..=255).
    #[command(allow_negative_numbers = true)]
    Rgb {
        r: i32,
        g: i32,
        b: i32,
    },
}
