pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "student-roster")]
#[command(about = "Serves a student roster aggregated from a CSV database")]
pub struct CliConfig {
    /// Path to the CSV student database
    pub database: String,

    #[arg(long, default_value = "1245")]
    pub port: u16,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn database_path(&self) -> &str {
        &self.database
    }

    fn port(&self) -> u16 {
        self.port
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("database", &self.database)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["student-roster", "students.csv"]);
        assert_eq!(config.database, "students.csv");
        assert_eq!(config.port, 1245);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_port_zero() {
        let config = CliConfig::parse_from(["student-roster", "students.csv", "--port", "0"]);
        assert!(config.validate().is_err());
    }
}
