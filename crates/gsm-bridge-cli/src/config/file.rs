use crate::error::{CliError, Result};
use gsm_bridge::engine::config::SourceFlavor;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    #[serde(rename = "rename-from")]
    pub rename_from: Option<String>,
    #[serde(rename = "rename-to")]
    pub rename_to: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub source: Option<SourceFlavor>,
    pub verify: Option<bool>,
    #[serde(rename = "rename-inputs")]
    pub rename_inputs: Option<bool>,
    pub output: Option<FileOutputConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn from_file_reads_all_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gsm-bridge.toml");
        fs::write(
            &path,
            r#"
            source = "turbomole"
            verify = true
            rename-inputs = false

            [output]
            rename-from = "structure"
            rename-to = "orcain"
            "#,
        )
        .unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        assert_eq!(config.source, Some(SourceFlavor::Turbomole));
        assert_eq!(config.verify, Some(true));
        assert_eq!(config.rename_inputs, Some(false));
        let output = config.output.unwrap();
        assert_eq!(output.rename_from.as_deref(), Some("structure"));
        assert_eq!(output.rename_to.as_deref(), Some("orcain"));
    }

    #[test]
    fn from_file_rejects_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "threads = 4\n").unwrap();

        let err = FileConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { .. }));
    }

    #[test]
    fn from_file_reports_missing_file_as_io_error() {
        let dir = tempdir().unwrap();
        let err = FileConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
