pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{engine::GridEngine, pipeline::GridPipeline};
pub use domain::model::{Antenna, GridDimensions, Point};
pub use domain::registry::AntennaRegistry;
pub use utils::error::{GridError, Result};
