use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use crate::logging::LogDestination;

/// Count word occurrences in a text file and print them alphabetically.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the text file; prompts on stdin when omitted.
    pub file: Option<PathBuf>,

    /// Output format for the report.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Also write logs to ./wordcount.log.
    #[arg(long)]
    pub log_file: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    pub fn log_destination(&self) -> LogDestination {
        if self.log_file {
            LogDestination::Both
        } else {
            LogDestination::Terminal
        }
    }

    /// The file to count: the positional argument, or an interactive prompt.
    pub fn resolve_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = &self.file {
            return Ok(path.clone());
        }

        print!("Enter the path to the text file: ");
        io::stdout().flush().context("flush prompt")?;
        let mut line = String::new();
        io::stdin()
            .read_line(&mut line)
            .context("read path from stdin")?;
        Ok(PathBuf::from(line.trim()))
    }
}
