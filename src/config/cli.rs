use crate::config::toml_config::TomlConfig;
use crate::config::OutputFormat;
use crate::domain::model::{Number, SumPolicy};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "pairwise-lists")]
#[command(about = "Element-wise list sums with selectable error handling")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Output format, overrides [output].format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add two lists element by element
    Sum {
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        left: Vec<Number>,

        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        right: Vec<Number>,

        /// Overrides [summation].policy
        #[arg(long, value_enum)]
        policy: Option<SumPolicy>,
    },

    /// Largest element of the element-wise sum
    Max {
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        left: Vec<Number>,

        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        right: Vec<Number>,
    },

    /// Append a value, starting from a fresh list unless --into is given
    Append {
        #[arg(long, allow_hyphen_values = true)]
        value: Number,

        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        into: Option<Vec<Number>>,

        /// Number of repeated calls to show
        #[arg(long, default_value = "2")]
        times: usize,
    },
}

impl CliConfig {
    /// 命令列優先，其次是設定檔，最後是預設值
    pub fn effective_format(&self, file: Option<&TomlConfig>) -> Result<OutputFormat> {
        match (self.format, file) {
            (Some(format), _) => Ok(format),
            (None, Some(file)) => file.output_format(),
            (None, None) => Ok(OutputFormat::default()),
        }
    }

    pub fn effective_policy(
        explicit: Option<SumPolicy>,
        file: Option<&TomlConfig>,
    ) -> Result<SumPolicy> {
        match (explicit, file) {
            (Some(policy), _) => Ok(policy),
            (None, Some(file)) => file.policy(),
            (None, None) => Ok(SumPolicy::default()),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
