//! CLI command definitions

use clap::{Parser, ValueEnum};
use dsa_ask_domain::ProviderKind;
use std::path::PathBuf;

/// Provider selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    /// OpenAI Responses API
    Openai,
    /// DeepSeek Chat Completions API
    Deepseek,
}

impl From<ProviderArg> for ProviderKind {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Openai => ProviderKind::OpenAi,
            ProviderArg::Deepseek => ProviderKind::DeepSeek,
        }
    }
}

/// CLI arguments for dsa-ask
#[derive(Parser, Debug)]
#[command(name = "dsa-ask")]
#[command(author, version, about = "Ask an LLM to solve a DSA problem and keep the transcript")]
#[command(long_about = r#"
dsa-ask reads a problem statement from the questions directory, sends it to
a hosted model, prints the answer and writes a timestamped transcript to the
provider's output directory. If the request fails, an error record is
written there instead.

Configuration files are loaded from (in priority order):
1. DSA_ASK_* environment variables (e.g. DSA_ASK_RUN__PROVIDER=openai)
2. --config <path>     Explicit config file
3. ./dsa-ask.toml      Project-level config
4. ~/.config/dsa-ask/config.toml   Global config

API keys are read once at startup from DEEPSEEK_API_KEY / OPEN_AI_API_KEY
(a .env file in the working directory is honoured).

Exit status: 0 answered, 2 question missing or unreadable,
3 request failed (error record written), 1 any other failure.

Example:
  dsa-ask reorder_list.txt
  dsa-ask -p openai -m gpt-4.1-nano two_sum.txt
  dsa-ask --questions-dir problems --temperature 0.2 lru_cache.txt
"#)]
pub struct Cli {
    /// Question file inside the questions directory (defaults to run.question)
    pub question: Option<String>,

    /// Provider to send the question to
    #[arg(short, long, value_enum)]
    pub provider: Option<ProviderArg>,

    /// Model identifier (defaults to the provider's model)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Sampling temperature
    #[arg(short, long, value_name = "TEMP")]
    pub temperature: Option<f32>,

    /// Directory holding question files
    #[arg(long, value_name = "DIR")]
    pub questions_dir: Option<PathBuf>,

    /// Directory transcripts and error records are written to
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip configuration files (DSA_ASK_* variables still apply)
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
