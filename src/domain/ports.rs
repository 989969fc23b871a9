use crate::domain::model::{GridReport, LoadedGrid};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

pub trait Storage {
    type Reader: BufRead;
    type Writer: Write;

    /// 開啟來源檔；失敗時回傳 `SourceUnavailable`
    fn open_reader(&self, path: &str) -> Result<Self::Reader>;

    /// 建立 (或截斷) 目的檔；失敗時回傳 `DestinationUnavailable`
    fn create_writer(&self, path: &str) -> Result<Self::Writer>;
}

/// 二進位記錄的位元組排列
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum RecordLayout {
    /// 1 byte 頻率 + 3 byte 填充 + i32 x + i32 y，共 12 bytes
    #[default]
    Native,
    /// 1 byte 頻率 + i32 x + i32 y，共 9 bytes
    Packed,
}

pub trait ConfigProvider {
    fn input_file(&self) -> &str;
    fn output_file(&self) -> &str;
    fn record_layout(&self) -> RecordLayout;
}

pub trait Pipeline {
    fn extract(&self) -> Result<LoadedGrid>;
    fn transform(&self, data: LoadedGrid) -> Result<GridReport>;
    fn load(&self, report: &GridReport) -> Result<String>;
}
