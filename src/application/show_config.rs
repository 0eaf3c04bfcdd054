//! Show resolved configuration use case

use crate::domain::Interval;
use crate::infrastructure::{ConfigProvider, IntervalConfig};

/// Resolved configuration for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigReport {
    pub vault: Option<String>,
    pub intervals: Vec<(Interval, IntervalConfig)>,
}

/// Service for inspecting the layered configuration
pub struct ConfigService {
    config: ConfigProvider,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(config: ConfigProvider) -> Self {
        ConfigService { config }
    }

    /// Report the vault and either one interval or all of them
    pub fn report(&self, interval: Option<Interval>) -> ConfigReport {
        let intervals = match interval {
            Some(interval) => vec![interval],
            None => Interval::ALL.to_vec(),
        };

        ConfigReport {
            vault: self.config.vault_name(),
            intervals: intervals
                .into_iter()
                .map(|interval| (interval, self.config.interval_config(interval)))
                .collect(),
        }
    }
}
