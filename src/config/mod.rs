pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::core::{ConfigProvider, RecordLayout};
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "antenna-grid")]
    #[command(about = "Load an antenna grid, draw its interference map and export it as binary records")]
    pub struct CliConfig {
        #[arg(long, default_value = ".")]
        pub base_path: String,

        #[arg(long, default_value = "matriz3.txt")]
        pub input: String,

        #[arg(long, default_value = "antenas.bin")]
        pub output: String,

        #[arg(long, value_enum, default_value_t = RecordLayout::Native)]
        pub layout: RecordLayout,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl Default for CliConfig {
        fn default() -> Self {
            Self {
                base_path: ".".to_string(),
                input: "matriz3.txt".to_string(),
                output: "antenas.bin".to_string(),
                layout: RecordLayout::Native,
                verbose: false,
            }
        }
    }

    impl ConfigProvider for CliConfig {
        fn input_file(&self) -> &str {
            &self.input
        }

        fn output_file(&self) -> &str {
            &self.output
        }

        fn record_layout(&self) -> RecordLayout {
            self.layout
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("base_path", &self.base_path)?;
            validate_path("input", &self.input)?;
            validate_path("output", &self.output)?;
            validate_distinct_paths("output", &self.input, &self.output)
        }
    }

}
