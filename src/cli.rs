use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eightbim")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and rewrite 8BIM image resource blocks", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every record of a raw resource blob
    Dump {
        file: PathBuf,

        /// Hex dump each payload
        #[arg(long)]
        raw: bool,

        /// Emit the decoded records as JSON
        #[arg(long, conflicts_with = "raw")]
        json: bool,
    },

    /// Check that decoding and re-encoding reproduces the blob exactly
    Verify {
        file: PathBuf,

        /// Stop at the first record that fails to decode
        #[arg(long)]
        strict: bool,
    },

    /// List the identifier catalogue
    Kinds,

    /// Replace (or add) the ID seed record and write the result
    SetSeed {
        file: PathBuf,

        value: u32,

        #[arg(short, long)]
        output: PathBuf,
    },
}

impl Cli {
    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "eightbim=trace"
        } else if self.verbose {
            "eightbim=debug"
        } else {
            "warn"
        }
    }
}
