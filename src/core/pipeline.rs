use crate::core::{exporter, interference, loader, renderer};
use crate::core::{ConfigProvider, GridReport, LoadedGrid, Pipeline, Storage};
use crate::utils::error::Result;

pub struct GridPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> GridPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for GridPipeline<S, C> {
    fn extract(&self) -> Result<LoadedGrid> {
        tracing::debug!("Reading grid from: {}", self.config.input_file());
        loader::load_from_storage(&self.storage, self.config.input_file())
    }

    fn transform(&self, data: LoadedGrid) -> Result<GridReport> {
        let LoadedGrid {
            registry,
            dimensions,
        } = data;

        let interference = interference::compute_interference(&registry, dimensions);
        let grid = renderer::render(&registry, &interference, dimensions);

        tracing::debug!(
            "{} frequencies, {} interference points",
            registry.frequencies().len(),
            interference.len()
        );

        Ok(GridReport {
            registry,
            dimensions,
            interference,
            grid,
        })
    }

    fn load(&self, report: &GridReport) -> Result<String> {
        let output_path = self.config.output_file();
        let layout = self.config.record_layout();

        tracing::debug!("Exporting {} records with {:?} layout", report.registry.len(), layout);
        exporter::export_to_storage(&self.storage, &report.registry, output_path, layout)?;

        Ok(output_path.to_string())
    }
}
