pub mod console;
pub mod engine;
pub mod exporter;
pub mod interference;
pub mod loader;
pub mod pipeline;
pub mod renderer;

pub use crate::domain::model::{
    Antenna, GridDimensions, GridReport, LoadedGrid, Point, RenderedGrid,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, RecordLayout, Storage};
pub use crate::domain::registry::{AntennaRegistry, RegistryHandle};
pub use crate::utils::error::Result;
