//! Environment-driven configuration.

use anyhow::{anyhow, Context};

use krishi_observability::LogFormat;
use krishi_yield::{EngineConfig, YieldTable};

pub const ENV_YIELD_TABLE: &str = "KRISHI_YIELD_TABLE";
pub const ENV_LOG_FORMAT: &str = "KRISHI_LOG_FORMAT";

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub engine: EngineConfig,
    pub log_format: LogFormat,
}

impl Config {
    /// Read `KRISHI_YIELD_TABLE` and `KRISHI_LOG_FORMAT`; unset means default.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Config::default();

        if let Some(raw) = lookup(ENV_YIELD_TABLE) {
            config.engine.table = raw
                .parse::<YieldTable>()
                .with_context(|| format!("invalid {ENV_YIELD_TABLE}"))?;
        }

        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            config.log_format = raw
                .parse::<LogFormat>()
                .map_err(|e| anyhow!("invalid {ENV_LOG_FORMAT}: {e}"))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variables_use_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.engine.table, YieldTable::Standard);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn reads_both_variables() {
        let config = Config::from_lookup(|key| match key {
            ENV_YIELD_TABLE => Some("LEGACY".to_string()),
            ENV_LOG_FORMAT => Some("pretty".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.engine.table, YieldTable::Legacy);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn rejects_unknown_table() {
        let err = Config::from_lookup(|key| (key == ENV_YIELD_TABLE).then(|| "metric".to_string()))
            .unwrap_err();
        assert!(format!("{err:#}").contains("unknown table 'metric'"));
    }
}
