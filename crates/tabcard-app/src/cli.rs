//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Convert contact tables to vCard 3.0 and back.
#[derive(Debug, Parser)]
#[command(name = "tabcard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert between a table file (csv/tsv/txt) and a vCard file (vcf).
    Convert {
        /// Source file.
        input: PathBuf,

        /// Target file; the extension pair picks the direction.
        output: PathBuf,

        /// Delimiter override for delimited-text input.
        #[arg(short, long)]
        delimiter: Option<char>,
    },

    /// Split a multi-contact vCard file into one file per contact.
    Split {
        /// Source vCard file.
        input: PathBuf,

        /// Directory receiving the per-contact files.
        out_dir: PathBuf,
    },

    /// Merge several vCard files into one document.
    Merge {
        /// Source vCard files, merged in argument order.
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Target vCard file.
        #[arg(short, long)]
        output: PathBuf,
    },
}
