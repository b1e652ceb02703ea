use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "k8s-validate")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate Kubernetes manifests against per-kind field rules")]
#[command(long_about = "Checks YAML syntax of Kubernetes manifest files, then validates each document for apiVersion, kind and metadata.name and, when a resource type is selected, for the required and recommended fields of that kind.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a manifest file or every manifest in a directory
    Validate {
        /// Manifest file, or a directory whose .yaml/.yml files are checked
        #[arg(short, long, value_name = "PATH")]
        path: PathBuf,

        /// Resource type to validate: a kind (deployment), its alias (deploy) or "all".
        /// Without it only apiVersion, kind and metadata.name are checked.
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        kind: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Do not report recommended-field warnings
        #[arg(long)]
        hide_warnings: bool,
    },

    /// List the supported resource types and their aliases
    Kinds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

impl From<OutputFormat> for crate::validator::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Plain => Self::Plain,
            OutputFormat::Json => Self::Json,
        }
    }
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
