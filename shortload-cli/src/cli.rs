//! CLI argument parsing definitions

use clap::{Args, Parser, Subcommand};
use shortload_config::ShortloadConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Set the log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the load test against the target host
    Run(RunArgs),

    /// Print the request sequence one seeded user would send, as JSON lines
    Plan {
        /// Seed of the random source (defaults to the configured seed, then 0)
        #[arg(long, value_name = "N")]
        seed: Option<u64>,

        /// Number of iterations to print
        #[arg(long, value_name = "N", default_value_t = 1000)]
        count: usize,
    },

    /// Send every enabled task once and report the status codes
    Smoke {
        /// Target host, overrides the configuration
        #[arg(long, value_name = "URL")]
        host: Option<String>,
    },

    /// List the enabled tasks and their weights
    Tasks,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        config_cmd: ConfigCommands,
    },
}

/// Overrides for a load test run
#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Target host, e.g. http://localhost:8080
    #[arg(long, value_name = "URL")]
    pub host: Option<String>,

    /// Number of concurrent users
    #[arg(long, short = 'u', value_name = "N")]
    pub users: Option<usize>,

    /// Users started per second
    #[arg(long, short = 'r', value_name = "RATE")]
    pub hatch_rate: Option<String>,

    /// Stop after this many seconds
    #[arg(long, short = 't', value_name = "SECONDS")]
    pub run_time: Option<u64>,

    /// Base seed for the per-user random sources
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Write a report when the run ends (.html, .json or .md)
    #[arg(long, value_name = "PATH")]
    pub report_file: Option<PathBuf>,
}

impl RunArgs {
    /// Apply the command line values on top of the loaded configuration
    pub fn apply(&self, config: &mut ShortloadConfig) {
        if let Some(host) = &self.host {
            config.target.host = host.clone();
        }
        if let Some(users) = self.users {
            config.load.users = users;
        }
        if let Some(hatch_rate) = &self.hatch_rate {
            config.load.hatch_rate = hatch_rate.clone();
        }
        if let Some(run_time) = self.run_time {
            config.load.run_time = run_time;
        }
        if let Some(seed) = self.seed {
            config.scenario.seed = Some(seed);
        }
        if let Some(report_file) = &self.report_file {
            config.load.report_file = Some(report_file.clone());
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Validate a configuration file
    Validate {
        /// Path to the configuration file
        #[arg(long, value_name = "PATH")]
        config_file: PathBuf,
    },

    /// Generate a sample configuration file
    Generate {
        /// Output file path, stdout when omitted
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Show current configuration in use
    Show {
        /// Output format: yaml, json
        #[arg(long, value_name = "FORMAT", default_value = "yaml")]
        format: String,
    },
}
