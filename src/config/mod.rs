use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "worst-movies-api")]
#[command(about = "Producer win-interval API over the Golden Raspberry nominee list")]
pub struct CliConfig {
    #[arg(long, default_value = "./data/movielist.csv")]
    pub csv_path: String,

    #[arg(long, default_value = "0.0.0.0:3000")]
    pub listen_addr: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn csv_path(&self) -> &str {
        &self.csv_path
    }

    fn listen_addr(&self) -> &str {
        &self.listen_addr
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("csv_path", &self.csv_path)?;
        validation::validate_file_extension("csv_path", &self.csv_path, "csv")?;
        validation::validate_listen_addr("listen_addr", &self.listen_addr)?;
        Ok(())
    }
}
