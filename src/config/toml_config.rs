use crate::core::{ConfigProvider, RecordLayout};
use crate::utils::error::{GridError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_distinct_paths, validate_non_empty_string, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub grid: GridConfig,
    pub source: SourceConfig,
    pub export: ExportConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub base_path: Option<String>,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub path: String,
    #[serde(default)]
    pub layout: RecordLayout,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub format: LogFormat,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| GridError::ConfigError {
            message: format!("cannot read '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| GridError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GRID_DIR})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("grid.name", &self.grid.name)?;
        if let Some(base_path) = &self.source.base_path {
            validate_path("source.base_path", base_path)?;
        }
        validate_path("source.path", &self.source.path)?;
        validate_path("export.path", &self.export.path)?;
        validate_distinct_paths("export.path", &self.source.path, &self.export.path)
    }

    pub fn base_path(&self) -> &str {
        self.source.base_path.as_deref().unwrap_or(".")
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().map(|l| l.verbose).unwrap_or(false)
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging.as_ref().map(|l| l.format).unwrap_or_default()
    }
}

impl ConfigProvider for TomlConfig {
    fn input_file(&self) -> &str {
        &self.source.path
    }

    fn output_file(&self) -> &str {
        &self.export.path
    }

    fn record_layout(&self) -> RecordLayout {
        self.export.layout
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[grid]
name = "matriz3"

[source]
path = "matriz3.txt"

[export]
path = "antenas.bin"
layout = "packed"

[logging]
verbose = true
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.grid.name, "matriz3");
        assert_eq!(config.input_file(), "matriz3.txt");
        assert_eq!(config.record_layout(), RecordLayout::Packed);
        assert_eq!(config.base_path(), ".");
        assert!(config.verbose());
        assert_eq!(config.log_format(), LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_for_optional_sections() {
        let toml_content = r#"
[grid]
name = "defaults"

[source]
path = "grid.txt"

[export]
path = "grid.bin"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.record_layout(), RecordLayout::Native);
        assert!(!config.verbose());
        assert_eq!(config.log_format(), LogFormat::Compact);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ANTENNA_GRID_TEST_DIR", "/tmp/grids");

        let toml_content = r#"
[grid]
name = "env"

[source]
base_path = "${ANTENNA_GRID_TEST_DIR}"
path = "grid.txt"

[export]
path = "${ANTENNA_GRID_UNSET_VAR}.bin"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_path(), "/tmp/grids");
        assert_eq!(config.output_file(), "${ANTENNA_GRID_UNSET_VAR}.bin");

        std::env::remove_var("ANTENNA_GRID_TEST_DIR");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[grid]
name = "   "

[source]
path = "grid.txt"

[export]
path = "grid.bin"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_layout_is_parse_error() {
        let toml_content = r#"
[grid]
name = "bad"

[source]
path = "grid.txt"

[export]
path = "grid.bin"
layout = "sparse"
"#;

        let result = TomlConfig::from_toml_str(toml_content);
        assert!(matches!(result, Err(GridError::ConfigValidationError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[grid]
name = "file-test"

[source]
path = "matriz3.txt"

[export]
path = "antenas.bin"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.grid.name, "file-test");
    }
}
