//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--workspace, --json, --color, --verbose) are inherited by all subcommands
//! - Every subcommand works on the workspace found from the current directory
//!   unless --workspace points elsewhere

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// promptweave - pick project files and assemble prompts for AI assistants
#[derive(Parser, Debug)]
#[command(name = "promptweave")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'promptweave init' in a project to get started.")]
pub struct Cli {
    /// Workspace directory (default: ./.promptweave)
    #[arg(short = 'w', long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Machine-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the workspace directory with default documents
    Init {
        /// Source directory to record (default: the project directory)
        #[arg(long)]
        source: Option<PathBuf>,
    },

    /// Show or change the source directory
    Source {
        /// New source directory
        dir: Option<PathBuf>,
    },

    /// Print the filtered file tree with selection marks
    Tree,

    /// Add files or directories to the selection
    Select {
        /// Paths relative to the source directory
        #[arg(required_unless_present = "all")]
        paths: Vec<String>,

        /// Select every file and directory in the tree
        #[arg(long, conflicts_with = "paths")]
        all: bool,
    },

    /// Remove files or directories from the selection
    Deselect {
        /// Paths relative to the source directory
        #[arg(required_unless_present = "all")]
        paths: Vec<String>,

        /// Deselect everything in the tree
        #[arg(long, conflicts_with = "paths")]
        all: bool,
    },

    /// Show the saved selection
    Selection {
        /// Forget every selected path, including ones no longer on disk
        #[arg(long)]
        clear: bool,
    },

    /// Pick files interactively
    Pick,

    /// Print the project outline
    Structure,

    /// List output formats
    Formats,

    /// List config templates
    Templates,

    /// List named configs
    Configs,

    /// Manage named configs
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show or set the final request text
    Request {
        /// New request text
        text: Option<String>,
    },

    /// Write the outline and context bundle, then run the generator
    Generate {
        /// Output format (a file in formats/)
        #[arg(short, long, default_value = "markdown")]
        format: String,
    },

    /// Hand an assistant response to the applier
    Apply {
        /// Response file, or '-' for stdin
        #[arg(default_value = "-")]
        file: PathBuf,
    },

    /// List a directory (default: the project directory)
    Ls {
        dir: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print a named config
    Show { name: String },

    /// Create a named config
    New {
        name: String,

        /// Template to copy (default: an empty document)
        #[arg(short, long)]
        template: Option<String>,
    },

    /// Record which configs the prompt should use
    Use {
        /// Project data config
        #[arg(long)]
        project_data: Option<String>,

        /// User config
        #[arg(long)]
        user_config: Option<String>,
    },
}
