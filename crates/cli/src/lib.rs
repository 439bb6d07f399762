mod check;
mod generate;
mod manifest;

pub use check::run as run_check;
pub use generate::run as run_generate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hintforge",
    version,
    about = "Generate GraalVM native-image config files from hint manifests",
    long_about = "Hintforge aggregates declarative hint manifests describing JVM types and \
                  emits deterministic native-image configuration artifacts: reflect-config.json, \
                  jni-config.json, resource-config.json, dynamic-proxy-config.json and \
                  native-image.properties."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate config files from hint manifests
    #[command(
        long_about = "Reads the given manifest files (directories are scanned for *.hints.json) \
                      and writes merged config artifacts below the output root, one directory \
                      per origin."
    )]
    Generate {
        /// Manifest files or directories to scan for *.hints.json
        #[arg(value_name = "MANIFEST", required = true)]
        inputs: Vec<PathBuf>,
        /// Root directory config artifacts are written under
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,
        /// Override the origin group for the whole run
        #[arg(long, value_name = "GROUP")]
        group: Option<String>,
        /// Override the origin artifact for the whole run
        #[arg(long, value_name = "ARTIFACT")]
        artifact: Option<String>,
    },
    /// Validate manifests and show what would be generated, writing nothing
    #[command(
        long_about = "Runs the full extraction and aggregation pass against an in-memory sink. \
                      Fatal configuration errors are reported exactly as for generate."
    )]
    Check {
        /// Manifest files or directories to scan for *.hints.json
        #[arg(value_name = "MANIFEST", required = true)]
        inputs: Vec<PathBuf>,
        /// Override the origin group for the whole run
        #[arg(long, value_name = "GROUP")]
        group: Option<String>,
        /// Override the origin artifact for the whole run
        #[arg(long, value_name = "ARTIFACT")]
        artifact: Option<String>,
    },
}
