use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "page-toc")]
#[command(about = "Add anchored h2 headings and a table of contents to HTML documents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Custom configuration file (may be repeated; later files win)
    #[arg(short, long = "config", value_name = "CONFIG_FILE", global = true)]
    pub config: Vec<PathBuf>,

    /// Locale of the table of contents caption (e.g. he_IL)
    #[arg(short, long, value_name = "LOCALE", global = true)]
    pub locale: Option<String>,

    /// HTML-escape heading text in the table of contents
    #[arg(long, default_value_t = false, global = true)]
    pub escape_labels: bool,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long, default_value_t = false, global = true)]
    pub quiet: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Add a table of contents to one document (the default command)
    #[command(alias = "r")]
    Render {
        /// Input document (defaults to stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List the headings found in a document
    #[command(alias = "h")]
    Headings {
        /// Input document (defaults to stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Print the headings as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Process every document of a directory
    #[command(alias = "b")]
    Build {
        /// Source directory (defaults to ./)
        #[arg(short, long, value_name = "DIR")]
        source: Option<PathBuf>,

        /// Destination directory (defaults to ./_site)
        #[arg(short, long, value_name = "DIR")]
        destination: Option<PathBuf>,
    },

    /// Remove the destination directory
    Clean {
        /// Destination directory (defaults to ./_site)
        #[arg(short, long, value_name = "DIR")]
        destination: Option<PathBuf>,
    },
}
