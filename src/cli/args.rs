//! Command-line argument definitions
//!
//! This module defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Random color generator and palette tool
#[derive(Parser, Debug)]
#[command(name = "color-gen")]
#[command(author = "Vihaan Reddy M")]
#[command(version)]
#[command(about = "Generate random colors, convert between HEX/RGB/HSL, check contrast and build palettes", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the state file (overrides config)
    #[arg(long, global = true)]
    pub state_file: Option<PathBuf>,

    /// Do not read or write the state file for this run
    #[arg(long, global = true)]
    pub no_state: bool,

    /// Log level: error, warn, info, debug, trace (overrides config)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate random colors (the default command)
    Generate {
        /// Number of colors to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Show the colors without recording them as recent colors
        #[arg(long)]
        no_save: bool,

        /// Copy the last generated color to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Show all representations and metrics of a color
    Info {
        /// Hex color, e.g. "#3498DB" or "1A3" (defaults to the current color)
        color: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,

        /// Copy the color in the preferred display format to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Convert a color given as hex, rgb(r, g, b), r,g,b or hsl(h, s%, l%)
    Convert {
        /// Color value to convert
        value: String,
    },

    /// Show the WCAG contrast ratio between two colors
    Contrast {
        /// First hex color
        first: String,

        /// Second hex color
        second: String,
    },

    /// Show color harmonies for a color
    Harmony {
        /// Hex color (defaults to the current color)
        color: Option<String>,

        /// Which harmony to show
        #[arg(short, long, default_value = "all", value_parser = ["complementary", "analogous", "triadic", "all"])]
        kind: String,

        /// Number of analogous colors (overrides config)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Generate colors continuously until Ctrl+C
    Auto {
        /// Seconds between colors (overrides saved setting)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Stop after this many colors (overrides config)
        #[arg(short = 'n', long)]
        count: Option<u64>,
    },

    /// List recently generated colors
    Recent {
        /// Clear the recent colors list
        #[arg(long)]
        clear: bool,
    },

    /// Add a color to favorites, or remove it if already a favorite
    Favorite {
        /// Hex color (defaults to the current color)
        color: Option<String>,
    },

    /// List favorite colors
    Favorites,

    /// Show generation history, or clear recent colors and favorites
    History {
        /// Clear recent colors and favorites
        #[arg(long)]
        clear: bool,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Set the preferred display format
    Format {
        /// Display format
        #[arg(value_parser = ["hex", "rgb", "hsl"])]
        format: String,
    },

    /// Export a palette as JSON or CSS
    Export {
        /// Which colors to export
        #[arg(short, long, default_value = "recent", value_parser = ["recent", "favorites", "presets"])]
        source: String,

        /// Export format (overrides config)
        #[arg(short, long, value_parser = ["json", "css"])]
        format: Option<String>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the built-in preset colors
    Presets,

    /// Open the configuration file in your default editor
    ///
    /// If no config file exists, a default one will be created.
    Config {
        /// Show the config file path without opening it
        #[arg(long)]
        path: bool,

        /// Reset config to defaults (creates a fresh config file)
        #[arg(long)]
        reset: bool,
    },

    /// Generate a configuration file at a specific location
    GenerateConfig {
        /// Output path for the config file (defaults to standard location)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and state file location
    ShowConfig,
}
