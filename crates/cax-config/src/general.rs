//! General application configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Directory for downloaded chart images. Empty means current directory.
    #[serde(default)]
    pub chart_dir: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let config = GeneralConfig::default();
        assert!(config.chart_dir.is_empty());
    }
}
