use std::path::PathBuf;

use tracing::Level;

use crate::domain::Error;

pub const LOG_ENV: &str = "BANK_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Operation script to run; the demo walkthrough runs when absent.
    pub script: Option<PathBuf>,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::new(std::env::args().skip(1), std::env::var(LOG_ENV).ok())
    }

    pub fn new(
        mut args: impl Iterator<Item = String>,
        log_level: Option<String>,
    ) -> Result<Self, Error> {
        let script = args.next().map(PathBuf::from);
        if let Some(extra) = args.next() {
            return Err(Error::Config(format!("Unexpected argument: {}", extra)));
        }

        let log_level = match log_level {
            Some(level) => level
                .trim()
                .parse::<Level>()
                .map_err(|_| {
                    Error::Config(format!("{} must be a log level, got {}", LOG_ENV, level))
                })?,
            None => Level::WARN,
        };

        Ok(Self { script, log_level })
    }
}
