use crate::core::console;
use crate::core::{GridReport, Pipeline};
use crate::utils::error::Result;
use std::io::{self, Write};

pub struct GridEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GridEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// 載入、列出天線、繪製矩陣並匯出，主控台輸出寫到 stdout
    pub fn run(&self) -> Result<String> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out)
    }

    pub fn run_with_output<W: Write>(&self, out: &mut W) -> Result<String> {
        let report = self.report_with_output(out)?;

        // 匯出失敗時，先前印出的清單與矩陣仍然有效
        tracing::info!("💾 Exporting antennas...");
        let output_path = self.pipeline.load(&report)?;
        console::write_export_confirmation(out, &output_path)?;
        out.flush()?;

        Ok(output_path)
    }

    /// 只執行 extract 與 transform，不寫出二進位檔
    pub fn report_with_output<W: Write>(&self, out: &mut W) -> Result<GridReport> {
        tracing::info!("📡 Loading antenna grid...");
        let grid = self.pipeline.extract()?;
        tracing::info!(
            "Loaded {} antennas ({} rows x {} cols)",
            grid.registry.len(),
            grid.dimensions.rows,
            grid.dimensions.cols
        );
        console::write_antenna_listing(out, &grid.registry)?;

        tracing::info!("🧮 Computing interference...");
        let report = self.pipeline.transform(grid)?;
        tracing::info!("Found {} interference points", report.interference.len());
        console::write_grid(out, &report.grid)?;

        Ok(report)
    }
}
