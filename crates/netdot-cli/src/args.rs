//! Command-line argument definitions for the netdot CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the view mode,
//! configuration file selection, and logging verbosity.

use clap::Parser;

use netdot::view::ViewMode;

/// Command-line arguments for the netdot transpiler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Network documents to render; several are merged first
    #[arg(required = true, num_args = 1.., help = "Paths to the input documents")]
    pub inputs: Vec<String>,

    /// Path to the output file (.dot, or .svg with the `graphviz` feature)
    #[arg(short, long, default_value = "out.dot")]
    pub output: String,

    /// View mode for flat documents, overriding the configuration
    #[arg(long)]
    pub view: Option<ViewMode>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
