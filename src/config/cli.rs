use crate::core::Storage;
use crate::utils::error::{GridError, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    type Reader = BufReader<File>;
    type Writer = BufWriter<File>;

    fn open_reader(&self, path: &str) -> Result<Self::Reader> {
        let full_path = self.resolve(path);
        let file = File::open(&full_path).map_err(|source| GridError::SourceUnavailable {
            path: full_path.display().to_string(),
            source,
        })?;
        Ok(BufReader::new(file))
    }

    fn create_writer(&self, path: &str) -> Result<Self::Writer> {
        let full_path = self.resolve(path);
        let unavailable = |source| GridError::DestinationUnavailable {
            path: full_path.display().to_string(),
            source,
        };

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(unavailable)?;
        }

        let file = File::create(&full_path).map_err(unavailable)?;
        Ok(BufWriter::new(file))
    }
}
