use crate::core::io::turbomole::EnergyLineSelector;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for {parameter}: {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

/// The program that produced the `energy` and `gradient` files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceFlavor {
    /// xtb run by the GSM template; leaves a `<basename>.xtbout` log behind.
    #[default]
    Xtb,
    /// Turbomole `ridft`/`rdgrad` run; the energy file accumulates one line per cycle.
    Turbomole,
}

impl SourceFlavor {
    pub fn energy_line(self) -> EnergyLineSelector {
        match self {
            SourceFlavor::Xtb => EnergyLineSelector::Second,
            SourceFlavor::Turbomole => EnergyLineSelector::SecondToLast,
        }
    }

    /// Extension of the log file that must exist before converting, if any.
    pub fn marker_extension(self) -> Option<&'static str> {
        match self {
            SourceFlavor::Xtb => Some("xtbout"),
            SourceFlavor::Turbomole => None,
        }
    }
}

impl fmt::Display for SourceFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFlavor::Xtb => write!(f, "xtb"),
            SourceFlavor::Turbomole => write!(f, "turbomole"),
        }
    }
}

impl FromStr for SourceFlavor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xtb" => Ok(SourceFlavor::Xtb),
            "turbomole" => Ok(SourceFlavor::Turbomole),
            other => Err(ConfigError::InvalidValue {
                parameter: "source",
                reason: format!("unknown source program '{}'", other),
            }),
        }
    }
}

/// Substring substitution applied to the basename when naming the outputs,
/// e.g. `structure0003` -> `orcain0003`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRename {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    pub basename: String,
    pub workdir: PathBuf,
    pub source: SourceFlavor,
    pub output_rename: Option<OutputRename>,
    pub rename_inputs: bool,
    pub verify: bool,
}

impl ConversionConfig {
    /// Stem shared by the `.engrad` and `.out` files.
    pub fn output_stem(&self) -> String {
        match &self.output_rename {
            Some(rename) => self.basename.replace(&rename.from, &rename.to),
            None => self.basename.clone(),
        }
    }

    pub fn energy_path(&self) -> PathBuf {
        self.workdir.join("energy")
    }

    pub fn gradient_path(&self) -> PathBuf {
        self.workdir.join("gradient")
    }

    pub fn marker_path(&self) -> Option<PathBuf> {
        self.source
            .marker_extension()
            .map(|ext| self.with_basename(&self.basename, ext))
    }

    pub fn engrad_path(&self) -> PathBuf {
        self.with_basename(&self.output_stem(), "engrad")
    }

    pub fn out_path(&self) -> PathBuf {
        self.with_basename(&self.output_stem(), "out")
    }

    pub fn renamed_energy_path(&self) -> PathBuf {
        self.with_basename(&self.basename, "energy")
    }

    pub fn renamed_gradient_path(&self) -> PathBuf {
        self.with_basename(&self.basename, "gradient")
    }

    // Appends rather than using `Path::with_extension`, which would clobber a
    // dotted basename such as `ts.0003`.
    fn with_basename(&self, stem: &str, ext: &str) -> PathBuf {
        self.workdir.join(format!("{}.{}", stem, ext))
    }
}

#[derive(Default)]
pub struct ConversionConfigBuilder {
    basename: Option<String>,
    workdir: Option<PathBuf>,
    source: Option<SourceFlavor>,
    output_rename: Option<OutputRename>,
    rename_inputs: Option<bool>,
    verify: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn basename(mut self, basename: impl Into<String>) -> Self {
        self.basename = Some(basename.into());
        self
    }
    pub fn workdir(mut self, path: impl AsRef<Path>) -> Self {
        self.workdir = Some(path.as_ref().to_path_buf());
        self
    }
    pub fn source(mut self, source: SourceFlavor) -> Self {
        self.source = Some(source);
        self
    }
    pub fn output_rename(mut self, rename: Option<OutputRename>) -> Self {
        self.output_rename = rename;
        self
    }
    pub fn rename_inputs(mut self, rename: bool) -> Self {
        self.rename_inputs = Some(rename);
        self
    }
    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = Some(verify);
        self
    }

    pub fn build(self) -> Result<ConversionConfig, ConfigError> {
        let basename = self
            .basename
            .ok_or(ConfigError::MissingParameter("basename"))?;
        if basename.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                parameter: "basename",
                reason: "must not be empty".to_string(),
            });
        }
        if let Some(rename) = &self.output_rename {
            if rename.from.is_empty() {
                return Err(ConfigError::InvalidValue {
                    parameter: "output rename",
                    reason: "the substring to replace must not be empty".to_string(),
                });
            }
        }

        Ok(ConversionConfig {
            basename,
            workdir: self.workdir.unwrap_or_else(|| PathBuf::from(".")),
            source: self.source.unwrap_or_default(),
            output_rename: self.output_rename,
            rename_inputs: self.rename_inputs.unwrap_or(true),
            verify: self.verify.unwrap_or(false),
        })
    }
}
