//! Command line options and logger setup for the binary.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use typefall::types::{DEFAULT_DICTIONARY, MAX_WORD_LEN, TICK_MS};

/// Type the falling words before they reach the floor.
#[derive(Debug, Parser)]
#[command(name = "typefall", version, about)]
pub struct Args {
    /// Word list, one word per line
    #[arg(short, long, default_value = DEFAULT_DICTIONARY)]
    pub dict: PathBuf,

    /// Longest word taken from the list
    #[arg(
        long,
        default_value_t = MAX_WORD_LEN as u8,
        value_parser = clap::value_parser!(u8).range(1..=MAX_WORD_LEN as i64)
    )]
    pub max_len: u8,

    /// Milliseconds between ticks
    #[arg(
        long,
        default_value_t = u64::from(TICK_MS),
        value_parser = clap::value_parser!(u64).range(50..=10_000)
    )]
    pub tick_ms: u64,

    /// Seed for word choice and placement (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub dictionary: PathBuf,
    pub max_word_len: usize,
    pub tick: Duration,
    pub seed: u64,
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn into_config(self) -> GameConfig {
        GameConfig {
            dictionary: self.dict,
            max_word_len: usize::from(self.max_len),
            tick: Duration::from_millis(self.tick_ms),
            seed: self.seed.unwrap_or_else(rand::random),
            log_file: self.log_file,
        }
    }
}

/// Install the global logger.
///
/// `RUST_LOG` wins when set. Without a log file the default is `warn` on
/// stderr, which stays quiet while the alternate screen is up.
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder
                .filter_level(LevelFilter::Info)
                .target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(LevelFilter::Warn);
        }
    }
    builder.parse_default_env().try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Args::parse_from(["typefall", "--seed", "7"]).into_config();
        assert_eq!(config.dictionary, PathBuf::from(DEFAULT_DICTIONARY));
        assert_eq!(config.max_word_len, MAX_WORD_LEN);
        assert_eq!(config.tick, Duration::from_millis(1000));
        assert_eq!(config.seed, 7);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_short_word_variant() {
        let config =
            Args::parse_from(["typefall", "-d", "words.txt", "--max-len", "3"]).into_config();
        assert_eq!(config.dictionary, PathBuf::from("words.txt"));
        assert_eq!(config.max_word_len, 3);
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert!(Args::try_parse_from(["typefall", "--max-len", "0"]).is_err());
        assert!(Args::try_parse_from(["typefall", "--max-len", "13"]).is_err());
        assert!(Args::try_parse_from(["typefall", "--tick-ms", "10"]).is_err());
    }
}
